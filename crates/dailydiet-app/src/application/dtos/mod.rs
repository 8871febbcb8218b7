mod auth_dto;
mod meal_dto;
mod social_dto;
mod user_dto;

pub use auth_dto::TokenPairDto;
pub use meal_dto::{BestSequenceDto, DietStatsDto, MealDto, MealPageDto, MealReportDto};
pub use social_dto::SharedItemDto;
pub use user_dto::UserProfileDto;

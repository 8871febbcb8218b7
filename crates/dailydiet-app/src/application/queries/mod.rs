mod meal_queries;
mod social_queries;
mod user_queries;

pub use meal_queries::{MealListParams, MealQueryService};
pub use social_queries::SocialQueryService;
pub use user_queries::UserQueryService;

mod auth_handlers;
mod meal_handlers;
mod social_handlers;
mod user_handlers;

#[cfg(test)]
mod tests;

pub use auth_handlers::{
    LoginCommandHandler, LogoutCommandHandler, RefreshTokenCommandHandler,
    RegisterUserCommandHandler, TokenServices,
};
pub use meal_handlers::{
    CreateMealCommandHandler, DeleteMealCommandHandler, UpdateMealCommandHandler,
};
pub use social_handlers::ShareMealsCommandHandler;
pub use user_handlers::{
    ChangePasswordCommandHandler, FollowUserCommandHandler, UnfollowUserCommandHandler,
    UpdateProfileCommandHandler,
};

// Domain layer - Pure business logic
// No dependencies on infrastructure or presentation layers

pub mod auth;
pub mod meal;
pub mod shared;
pub mod social;
pub mod user;

// Re-exports for convenience
pub use shared::{DomainError, MealId, SharedItemId, UserId};

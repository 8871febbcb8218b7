pub mod follow_repo;
pub mod meal_repo;
pub mod shared_item_repo;
pub mod user_repo;

pub use follow_repo::SqliteFollowRepository;
pub use meal_repo::SqliteMealRepository;
pub use shared_item_repo::SqliteSharedItemRepository;
pub use user_repo::SqliteUserRepository;

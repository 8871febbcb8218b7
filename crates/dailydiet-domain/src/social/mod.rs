mod aggregate;
mod domain_service;
mod repository;

pub use aggregate::SharedItem;
pub use domain_service::SocialDomainService;
pub use repository::{FollowRepository, SharedItemRepository};

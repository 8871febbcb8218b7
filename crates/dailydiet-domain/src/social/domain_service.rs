use super::SharedItem;
use crate::shared::{DomainError, UserId};

/// Follow and visibility rules
pub struct SocialDomainService;

impl SocialDomainService {
    pub fn ensure_can_follow(follower: UserId, followed: UserId) -> Result<(), DomainError> {
        if follower == followed {
            return Err(DomainError::SelfFollow(
                "You cannot follow yourself".to_string(),
            ));
        }
        Ok(())
    }

    /// Public items are visible to everyone, private ones to the owner and their followers.
    pub fn can_view(item: &SharedItem, viewer: UserId, viewer_follows_owner: bool) -> bool {
        item.is_public() || item.user_id() == viewer || viewer_follows_owner
    }

    pub fn ensure_can_view(
        item: &SharedItem,
        viewer: UserId,
        viewer_follows_owner: bool,
    ) -> Result<(), DomainError> {
        if Self::can_view(item, viewer, viewer_follows_owner) {
            Ok(())
        } else {
            Err(DomainError::Forbidden(
                "You do not have permission to view this item".to_string(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meal::{Meal, MealDetails, Nutrition};
    use crate::shared::{MealId, SharedItemId};
    use chrono::Utc;

    fn meal(id: i64, owner: i64) -> Meal {
        let now = Utc::now();
        Meal::restore(
            MealId::new(id),
            UserId::new(owner),
            MealDetails {
                name: "Oats".to_string(),
                description: "Breakfast".to_string(),
                datetime: now,
                is_on_diet: true,
                category: None,
                nutrition: Nutrition::default(),
                image_url: None,
            },
            now,
            now,
        )
    }

    fn item(is_public: bool) -> SharedItem {
        SharedItem::create(
            UserId::new(1),
            "My week".to_string(),
            None,
            is_public,
            vec![meal(10, 1)],
        )
        .unwrap()
        .with_id(SharedItemId::new(5))
    }

    #[test]
    fn test_self_follow_is_rejected() {
        let err =
            SocialDomainService::ensure_can_follow(UserId::new(3), UserId::new(3)).unwrap_err();
        assert!(matches!(err, DomainError::SelfFollow(_)));
        assert!(SocialDomainService::ensure_can_follow(UserId::new(3), UserId::new(4)).is_ok());
    }

    #[test]
    fn test_visibility_rules() {
        let private = item(false);
        assert!(SocialDomainService::can_view(&private, UserId::new(1), false));
        assert!(SocialDomainService::can_view(&private, UserId::new(2), true));
        assert!(!SocialDomainService::can_view(&private, UserId::new(2), false));
        assert!(SocialDomainService::can_view(&item(true), UserId::new(2), false));

        let err =
            SocialDomainService::ensure_can_view(&private, UserId::new(2), false).unwrap_err();
        assert!(matches!(err, DomainError::Forbidden(_)));
    }

    #[test]
    fn test_create_validates_title_and_meals() {
        let owner = UserId::new(1);
        let too_long = SharedItem::create(owner, "t".repeat(101), None, false, vec![meal(1, 1)]);
        assert!(matches!(too_long, Err(DomainError::Validation(_))));

        let empty = SharedItem::create(owner, "  ".to_string(), None, false, vec![meal(1, 1)]);
        assert!(matches!(empty, Err(DomainError::Validation(_))));

        let no_meals = SharedItem::create(owner, "Week".to_string(), None, false, vec![]);
        assert!(matches!(no_meals, Err(DomainError::Validation(_))));

        let foreign = SharedItem::create(owner, "Week".to_string(), None, false, vec![meal(2, 9)]);
        assert!(matches!(foreign, Err(DomainError::MealNotFound(_))));
    }

    #[test]
    fn test_create_normalizes_description() {
        let shared = SharedItem::create(
            UserId::new(1),
            " Week ".to_string(),
            Some("   ".to_string()),
            true,
            vec![meal(1, 1), meal(2, 1)],
        )
        .unwrap();

        assert_eq!(shared.title(), "Week");
        assert!(shared.description().is_none());
        assert_eq!(shared.meal_ids(), vec![MealId::new(1), MealId::new(2)]);
    }
}

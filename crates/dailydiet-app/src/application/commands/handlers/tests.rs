use chrono::Duration;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use crate::application::commands::auth_commands::*;
use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::handlers::*;
use crate::application::commands::meal_commands::*;
use crate::application::commands::social_commands::*;
use crate::application::commands::user_commands::*;
use dailydiet_domain::auth::{
    AccessClaims, AccessTokenIssuer, PasswordHasher, RefreshTokenGenerator,
};
use dailydiet_domain::meal::{
    Meal, MealChanges, MealDraft, MealFilter, MealRepository, Nutrition, ReportWindow,
};
use dailydiet_domain::shared::{DomainError, MealId, Page, PageRequest, SharedItemId, UserId};
use dailydiet_domain::social::{FollowRepository, SharedItem, SharedItemRepository};
use dailydiet_domain::user::{User, UserRepository};

// Mock repositories and services for testing

struct MockUserRepository {
    users: tokio::sync::RwLock<HashMap<i64, User>>,
    next_id: AtomicI64,
}

impl MockUserRepository {
    fn new() -> Self {
        Self {
            users: tokio::sync::RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    async fn get(&self, id: UserId) -> User {
        self.users.read().await.get(&id.value()).cloned().unwrap()
    }
}

#[async_trait::async_trait]
impl UserRepository for MockUserRepository {
    async fn create(&self, user: &User) -> Result<UserId, DomainError> {
        let id = UserId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
        let mut users = self.users.write().await;
        users.insert(id.value(), user.clone().with_id(id));
        Ok(id)
    }

    async fn update(&self, user: &User) -> Result<(), DomainError> {
        let id = user.persisted_id()?;
        let mut users = self.users.write().await;
        users.insert(id.value(), user.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError> {
        Ok(self.users.read().await.get(&id.value()).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email() == email).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.username() == username).cloned())
    }

    async fn find_by_refresh_token(&self, token: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users
            .values()
            .find(|u| u.refresh_token() == Some(token))
            .cloned())
    }
}

struct MockMealRepository {
    meals: tokio::sync::RwLock<HashMap<i64, Meal>>,
    next_id: AtomicI64,
}

impl MockMealRepository {
    fn new() -> Self {
        Self {
            meals: tokio::sync::RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    async fn owned_by(&self, user_id: UserId) -> Vec<Meal> {
        let meals = self.meals.read().await;
        let mut owned: Vec<Meal> = meals
            .values()
            .filter(|m| m.is_owned_by(user_id))
            .cloned()
            .collect();
        owned.sort_by_key(|m| (m.datetime(), m.id()));
        owned
    }
}

#[async_trait::async_trait]
impl MealRepository for MockMealRepository {
    async fn create(&self, meal: &Meal) -> Result<MealId, DomainError> {
        let id = MealId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
        let mut meals = self.meals.write().await;
        meals.insert(id.value(), meal.clone().with_id(id));
        Ok(id)
    }

    async fn update(&self, meal: &Meal) -> Result<(), DomainError> {
        let id = meal
            .id()
            .ok_or_else(|| DomainError::DataIntegrity("unsaved meal".to_string()))?;
        let mut meals = self.meals.write().await;
        meals.insert(id.value(), meal.clone());
        Ok(())
    }

    async fn delete(&self, id: MealId, user_id: UserId) -> Result<(), DomainError> {
        let mut meals = self.meals.write().await;
        match meals.get(&id.value()) {
            Some(meal) if meal.is_owned_by(user_id) => {
                meals.remove(&id.value());
                Ok(())
            }
            _ => Err(DomainError::MealNotFound(id.to_string())),
        }
    }

    async fn find_by_id_for_user(
        &self,
        id: MealId,
        user_id: UserId,
    ) -> Result<Option<Meal>, DomainError> {
        let meals = self.meals.read().await;
        Ok(meals
            .get(&id.value())
            .filter(|m| m.is_owned_by(user_id))
            .cloned())
    }

    async fn find_by_ids_for_user(
        &self,
        ids: &[MealId],
        user_id: UserId,
    ) -> Result<Vec<Meal>, DomainError> {
        let meals = self.meals.read().await;
        Ok(ids
            .iter()
            .filter_map(|id| meals.get(&id.value()))
            .filter(|m| m.is_owned_by(user_id))
            .cloned()
            .collect())
    }

    async fn find_page(
        &self,
        user_id: UserId,
        _filter: &MealFilter,
        page: PageRequest,
    ) -> Result<Page<Meal>, DomainError> {
        let mut owned = self.owned_by(user_id).await;
        owned.reverse();
        let total = owned.len() as u64;
        let items = owned
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.per_page() as usize)
            .collect();
        Ok(Page::new(items, total, page))
    }

    async fn find_all_by_user_ordered(&self, user_id: UserId) -> Result<Vec<Meal>, DomainError> {
        Ok(self.owned_by(user_id).await)
    }

    async fn find_in_window(
        &self,
        user_id: UserId,
        window: &ReportWindow,
    ) -> Result<Vec<Meal>, DomainError> {
        Ok(self
            .owned_by(user_id)
            .await
            .into_iter()
            .filter(|m| window.contains(m.datetime()))
            .collect())
    }
}

struct MockSharedItemRepository {
    items: tokio::sync::RwLock<HashMap<i64, SharedItem>>,
    next_id: AtomicI64,
}

impl MockSharedItemRepository {
    fn new() -> Self {
        Self {
            items: tokio::sync::RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait::async_trait]
impl SharedItemRepository for MockSharedItemRepository {
    async fn create(&self, item: &SharedItem) -> Result<SharedItemId, DomainError> {
        let id = SharedItemId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
        let mut items = self.items.write().await;
        items.insert(id.value(), item.clone().with_id(id));
        Ok(id)
    }

    async fn find_by_id(&self, id: SharedItemId) -> Result<Option<SharedItem>, DomainError> {
        Ok(self.items.read().await.get(&id.value()).cloned())
    }

    async fn find_by_owners(&self, owners: &[UserId]) -> Result<Vec<SharedItem>, DomainError> {
        let items = self.items.read().await;
        Ok(items
            .values()
            .filter(|i| owners.contains(&i.user_id()))
            .cloned()
            .collect())
    }
}

struct MockFollowRepository {
    edges: tokio::sync::RwLock<HashSet<(UserId, UserId)>>,
}

impl MockFollowRepository {
    fn new() -> Self {
        Self {
            edges: tokio::sync::RwLock::new(HashSet::new()),
        }
    }
}

#[async_trait::async_trait]
impl FollowRepository for MockFollowRepository {
    async fn follow(&self, follower: UserId, followed: UserId) -> Result<(), DomainError> {
        self.edges.write().await.insert((follower, followed));
        Ok(())
    }

    async fn unfollow(&self, follower: UserId, followed: UserId) -> Result<(), DomainError> {
        self.edges.write().await.remove(&(follower, followed));
        Ok(())
    }

    async fn is_following(&self, follower: UserId, followed: UserId) -> Result<bool, DomainError> {
        Ok(self.edges.read().await.contains(&(follower, followed)))
    }

    async fn followed_ids(&self, follower: UserId) -> Result<Vec<UserId>, DomainError> {
        let edges = self.edges.read().await;
        Ok(edges
            .iter()
            .filter(|(f, _)| *f == follower)
            .map(|(_, followed)| *followed)
            .collect())
    }
}

struct PlainHasher;

impl PasswordHasher for PlainHasher {
    fn hash(&self, password: &str) -> Result<String, DomainError> {
        Ok(format!("hashed:{}", password))
    }

    fn verify(&self, password: &str, password_hash: &str) -> Result<bool, DomainError> {
        Ok(password_hash == format!("hashed:{}", password))
    }
}

struct FakeTokenIssuer;

impl AccessTokenIssuer for FakeTokenIssuer {
    fn issue(&self, user_id: UserId) -> Result<String, DomainError> {
        Ok(format!("access-{}", user_id))
    }

    fn verify(&self, token: &str) -> Result<AccessClaims, DomainError> {
        token
            .strip_prefix("access-")
            .and_then(|id| id.parse::<i64>().ok())
            .map(|id| AccessClaims {
                user_id: UserId::new(id),
                exp: i64::MAX,
            })
            .ok_or_else(|| DomainError::Unauthorized("Invalid token".to_string()))
    }
}

struct CountingRefreshGenerator {
    counter: AtomicI64,
}

impl RefreshTokenGenerator for CountingRefreshGenerator {
    fn generate(&self) -> String {
        format!("refresh-{}", self.counter.fetch_add(1, Ordering::SeqCst))
    }
}

fn token_services() -> TokenServices {
    TokenServices {
        access_tokens: Arc::new(FakeTokenIssuer),
        refresh_tokens: Arc::new(CountingRefreshGenerator {
            counter: AtomicI64::new(1),
        }),
        access_token_ttl: Duration::hours(1),
    }
}

async fn register(repo: &Arc<MockUserRepository>, username: &str) -> UserId {
    let handler = RegisterUserCommandHandler::new(repo.clone(), Arc::new(PlainHasher));
    handler
        .handle(RegisterUserCommand {
            username: username.to_string(),
            email: format!("{}@example.com", username),
            password: "secret".to_string(),
        })
        .await
        .unwrap()
        .user_id
}

fn draft(datetime: &str, on_diet: bool) -> MealDraft {
    MealDraft {
        name: "Oatmeal".to_string(),
        description: "Oats with berries".to_string(),
        datetime: datetime.to_string(),
        is_on_diet: on_diet,
        category: Some("breakfast".to_string()),
        nutrition: Nutrition {
            calories: Some(320),
            ..Default::default()
        },
        image_url: None,
    }
}

async fn create_meal(repo: &Arc<MockMealRepository>, user_id: UserId, datetime: &str) -> MealId {
    let handler = CreateMealCommandHandler::new(repo.clone());
    handler
        .handle(CreateMealCommand {
            user_id,
            draft: draft(datetime, true),
        })
        .await
        .unwrap()
        .id
        .unwrap()
}

// Auth

#[tokio::test]
async fn test_register_user_command_handler() {
    let repo = Arc::new(MockUserRepository::new());
    let user_id = register(&repo, "alice").await;

    let saved = repo.get(user_id).await;
    assert_eq!(saved.username(), "alice");
    assert_eq!(saved.password_hash(), "hashed:secret");
}

#[tokio::test]
async fn test_register_rejects_duplicates() {
    let repo = Arc::new(MockUserRepository::new());
    register(&repo, "alice").await;
    let handler = RegisterUserCommandHandler::new(repo.clone(), Arc::new(PlainHasher));

    let same_email = handler
        .handle(RegisterUserCommand {
            username: "other".to_string(),
            email: "alice@example.com".to_string(),
            password: "pw".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(
        same_email,
        DomainError::Conflict(ref m) if m == "Email address already registered"
    ));

    let same_name = handler
        .handle(RegisterUserCommand {
            username: "alice".to_string(),
            email: "new@example.com".to_string(),
            password: "pw".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(same_name, DomainError::Conflict(ref m) if m == "Username already taken"));
}

#[tokio::test]
async fn test_register_requires_every_field() {
    let repo = Arc::new(MockUserRepository::new());
    let handler = RegisterUserCommandHandler::new(repo, Arc::new(PlainHasher));

    let result = handler
        .handle(RegisterUserCommand {
            username: "bob".to_string(),
            email: "bob@example.com".to_string(),
            password: String::new(),
        })
        .await;
    assert!(matches!(result, Err(DomainError::Validation(_))));
}

#[tokio::test]
async fn test_login_issues_token_pair() {
    let repo = Arc::new(MockUserRepository::new());
    let user_id = register(&repo, "alice").await;
    let handler = LoginCommandHandler::new(repo.clone(), Arc::new(PlainHasher), token_services());

    let pair = handler
        .handle(LoginCommand {
            email: "alice@example.com".to_string(),
            password: "secret".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(pair.token, format!("access-{}", user_id));
    assert_eq!(pair.expires_in, 3600);
    assert_eq!(repo.get(user_id).await.refresh_token(), Some(pair.refresh_token.as_str()));
}

#[tokio::test]
async fn test_login_with_wrong_password_or_unknown_email() {
    let repo = Arc::new(MockUserRepository::new());
    register(&repo, "alice").await;
    let handler = LoginCommandHandler::new(repo, Arc::new(PlainHasher), token_services());

    for (email, password) in [("alice@example.com", "wrong"), ("nobody@example.com", "secret")] {
        let err = handler
            .handle(LoginCommand {
                email: email.to_string(),
                password: password.to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DomainError::InvalidCredentials(ref m) if m == "Invalid email or password"
        ));
    }
}

#[tokio::test]
async fn test_refresh_rotates_token_and_logout_revokes_it() {
    let repo = Arc::new(MockUserRepository::new());
    let user_id = register(&repo, "alice").await;
    let tokens = token_services();
    let login = LoginCommandHandler::new(repo.clone(), Arc::new(PlainHasher), tokens.clone());
    let refresh = RefreshTokenCommandHandler::new(repo.clone(), tokens);
    let logout = LogoutCommandHandler::new(repo.clone());

    let first = login
        .handle(LoginCommand {
            email: "alice@example.com".to_string(),
            password: "secret".to_string(),
        })
        .await
        .unwrap();

    let second = refresh
        .handle(RefreshTokenCommand {
            refresh_token: first.refresh_token.clone(),
        })
        .await
        .unwrap();
    assert_ne!(second.refresh_token, first.refresh_token);

    // the old token was rotated out
    let reused = refresh
        .handle(RefreshTokenCommand {
            refresh_token: first.refresh_token,
        })
        .await;
    assert!(matches!(reused, Err(DomainError::Unauthorized(_))));

    logout.handle(LogoutCommand { user_id }).await.unwrap();
    let after_logout = refresh
        .handle(RefreshTokenCommand {
            refresh_token: second.refresh_token,
        })
        .await;
    assert!(matches!(after_logout, Err(DomainError::Unauthorized(_))));
}

// Meals

#[tokio::test]
async fn test_create_meal_command_handler() {
    let repo = Arc::new(MockMealRepository::new());
    let handler = CreateMealCommandHandler::new(repo.clone());

    let dto = handler
        .handle(CreateMealCommand {
            user_id: UserId::new(1),
            draft: draft("2024-03-15T08:00:00", true),
        })
        .await
        .unwrap();

    assert_eq!(dto.id, Some(MealId::new(1)));
    assert_eq!(dto.datetime, "2024-03-15T08:00:00Z");
    assert_eq!(dto.calories, Some(320));
    assert_eq!(repo.owned_by(UserId::new(1)).await.len(), 1);
}

#[tokio::test]
async fn test_create_meal_reports_validation_details() {
    let repo = Arc::new(MockMealRepository::new());
    let handler = CreateMealCommandHandler::new(repo.clone());
    let mut bad = draft("not a date", true);
    bad.name = String::new();

    let err = handler
        .handle(CreateMealCommand {
            user_id: UserId::new(1),
            draft: bad,
        })
        .await
        .unwrap_err();

    assert_eq!(err.details().map(|d| d.len()), Some(2));
    assert!(repo.owned_by(UserId::new(1)).await.is_empty());
}

#[tokio::test]
async fn test_update_meal_command_handler() {
    let repo = Arc::new(MockMealRepository::new());
    let meal_id = create_meal(&repo, UserId::new(1), "2024-03-15T08:00:00").await;
    let handler = UpdateMealCommandHandler::new(repo.clone());

    let dto = handler
        .handle(UpdateMealCommand {
            user_id: UserId::new(1),
            meal_id,
            changes: MealChanges {
                is_on_diet: Some(false),
                calories: Some(900),
                ..Default::default()
            },
        })
        .await
        .unwrap();

    assert!(!dto.is_on_diet);
    assert_eq!(dto.calories, Some(900));
    assert_eq!(dto.name, "Oatmeal");
}

#[tokio::test]
async fn test_update_meal_of_other_user_is_not_found() {
    let repo = Arc::new(MockMealRepository::new());
    let meal_id = create_meal(&repo, UserId::new(1), "2024-03-15T08:00:00").await;
    let handler = UpdateMealCommandHandler::new(repo);

    let err = handler
        .handle(UpdateMealCommand {
            user_id: UserId::new(2),
            meal_id,
            changes: MealChanges {
                name: Some("Stolen".to_string()),
                ..Default::default()
            },
        })
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::MealNotFound(_)));
}

#[tokio::test]
async fn test_update_meal_without_changes() {
    let repo = Arc::new(MockMealRepository::new());
    let meal_id = create_meal(&repo, UserId::new(1), "2024-03-15T08:00:00").await;
    let handler = UpdateMealCommandHandler::new(repo);

    let err = handler
        .handle(UpdateMealCommand {
            user_id: UserId::new(1),
            meal_id,
            changes: MealChanges::default(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation(ref m) if m == "No data provided"));
}

#[tokio::test]
async fn test_delete_meal_command_handler() {
    let repo = Arc::new(MockMealRepository::new());
    let meal_id = create_meal(&repo, UserId::new(1), "2024-03-15T08:00:00").await;
    let handler = DeleteMealCommandHandler::new(repo.clone());

    let foreign = handler
        .handle(DeleteMealCommand {
            user_id: UserId::new(2),
            meal_id,
        })
        .await;
    assert!(matches!(foreign, Err(DomainError::MealNotFound(_))));

    handler
        .handle(DeleteMealCommand {
            user_id: UserId::new(1),
            meal_id,
        })
        .await
        .unwrap();
    assert!(repo.owned_by(UserId::new(1)).await.is_empty());
}

// Social

#[tokio::test]
async fn test_share_meals_command_handler() {
    let meals = Arc::new(MockMealRepository::new());
    let items = Arc::new(MockSharedItemRepository::new());
    let first = create_meal(&meals, UserId::new(1), "2024-03-15T08:00:00").await;
    let second = create_meal(&meals, UserId::new(1), "2024-03-15T12:00:00").await;
    let handler = ShareMealsCommandHandler::new(meals, items.clone());

    let dto = handler
        .handle(ShareMealsCommand {
            user_id: UserId::new(1),
            title: "My week".to_string(),
            description: Some("  ".to_string()),
            is_public: true,
            meal_ids: vec![first, second, first],
        })
        .await
        .unwrap();

    assert_eq!(dto.meals.len(), 2);
    assert!(dto.description.is_none());
    let stored = items.find_by_id(dto.id.unwrap()).await.unwrap().unwrap();
    assert_eq!(stored.meal_ids(), vec![first, second]);
}

#[tokio::test]
async fn test_share_meals_with_foreign_meal() {
    let meals = Arc::new(MockMealRepository::new());
    let items = Arc::new(MockSharedItemRepository::new());
    let mine = create_meal(&meals, UserId::new(1), "2024-03-15T08:00:00").await;
    let theirs = create_meal(&meals, UserId::new(2), "2024-03-15T09:00:00").await;
    let handler = ShareMealsCommandHandler::new(meals, items.clone());

    let err = handler
        .handle(ShareMealsCommand {
            user_id: UserId::new(1),
            title: "Mixed".to_string(),
            description: None,
            is_public: false,
            meal_ids: vec![mine, theirs],
        })
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::MealNotFound(ref m)
        if m == "One or more meals not found or do not belong to the user"));
    assert!(items.find_by_owners(&[UserId::new(1)]).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_share_meals_requires_title_and_ids() {
    let handler = ShareMealsCommandHandler::new(
        Arc::new(MockMealRepository::new()),
        Arc::new(MockSharedItemRepository::new()),
    );

    for (title, ids) in [("", vec![MealId::new(1)]), ("Title", vec![])] {
        let err = handler
            .handle(ShareMealsCommand {
                user_id: UserId::new(1),
                title: title.to_string(),
                description: None,
                is_public: true,
                meal_ids: ids,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(ref m) if m == "Missing title or meal_ids"));
    }
}

// Users

#[tokio::test]
async fn test_update_profile_command_handler() {
    let repo = Arc::new(MockUserRepository::new());
    let alice = register(&repo, "alice").await;
    register(&repo, "bob").await;
    let handler = UpdateProfileCommandHandler::new(repo.clone());

    let taken = handler
        .handle(UpdateProfileCommand {
            user_id: alice,
            username: Some("bob".to_string()),
            email: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(taken, DomainError::Conflict(_)));

    // unchanged values are not a conflict with oneself
    let profile = handler
        .handle(UpdateProfileCommand {
            user_id: alice,
            username: Some("alice".to_string()),
            email: Some("alice@new.example.com".to_string()),
        })
        .await
        .unwrap();
    assert_eq!(profile.username, "alice");
    assert_eq!(repo.get(alice).await.email(), "alice@new.example.com");
}

#[tokio::test]
async fn test_change_password_command_handler() {
    let repo = Arc::new(MockUserRepository::new());
    let alice = register(&repo, "alice").await;
    let handler = ChangePasswordCommandHandler::new(repo.clone(), Arc::new(PlainHasher));

    let wrong = handler
        .handle(ChangePasswordCommand {
            user_id: alice,
            current_password: "nope".to_string(),
            new_password: "next".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(
        wrong,
        DomainError::InvalidCredentials(ref m) if m == "Invalid current password"
    ));

    handler
        .handle(ChangePasswordCommand {
            user_id: alice,
            current_password: "secret".to_string(),
            new_password: "next".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(repo.get(alice).await.password_hash(), "hashed:next");
}

#[tokio::test]
async fn test_follow_and_unfollow_command_handlers() {
    let users = Arc::new(MockUserRepository::new());
    let follows = Arc::new(MockFollowRepository::new());
    let alice = register(&users, "alice").await;
    let bob = register(&users, "bob").await;
    let follow = FollowUserCommandHandler::new(users.clone(), follows.clone());
    let unfollow = UnfollowUserCommandHandler::new(users.clone(), follows.clone());

    follow
        .handle(FollowUserCommand {
            follower_id: alice,
            username: "bob".to_string(),
        })
        .await
        .unwrap();
    assert!(follows.is_following(alice, bob).await.unwrap());

    unfollow
        .handle(UnfollowUserCommand {
            follower_id: alice,
            username: "bob".to_string(),
        })
        .await
        .unwrap();
    assert!(!follows.is_following(alice, bob).await.unwrap());
}

#[tokio::test]
async fn test_follow_self_and_unknown_user() {
    let users = Arc::new(MockUserRepository::new());
    let follows = Arc::new(MockFollowRepository::new());
    let alice = register(&users, "alice").await;
    let follow = FollowUserCommandHandler::new(users, follows.clone());

    let own = follow
        .handle(FollowUserCommand {
            follower_id: alice,
            username: "alice".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(own, DomainError::SelfFollow(_)));

    let unknown = follow
        .handle(FollowUserCommand {
            follower_id: alice,
            username: "ghost".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(unknown, DomainError::UserNotFound(ref m) if m == "User not found"));
    assert!(follows.followed_ids(alice).await.unwrap().is_empty());
}

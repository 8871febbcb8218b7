use std::sync::Arc;

use dailydiet_domain::meal::{
    find_longest_on_diet_streak, Granularity, Meal, MealChanges, MealFilter, MealRepository,
    ReportWindow,
};
use dailydiet_domain::shared::{DomainError, MealId, PageRequest};
use dailydiet_infrastructure::persistence::repositories::SqliteMealRepository;

mod test_helpers;
use test_helpers::{insert_meal, insert_user, meal_draft, utc};

#[tokio::test]
async fn meal_repo_crud_scoped_to_owner_integration() {
    let pool = test_helpers::setup_in_memory_db().await;
    let alice = insert_user(&pool, "alice").await;
    let bob = insert_user(&pool, "bob").await;
    let repo = SqliteMealRepository::new(Arc::new(pool));

    let mut draft = meal_draft("Salad", "2024-03-15T12:30:00", true);
    draft.nutrition.calories = Some(350);
    draft.nutrition.protein_grams = Some(12.5);
    let meal = Meal::create(alice, draft).unwrap();
    let id = repo.create(&meal).await.expect("create");

    let stored = repo
        .find_by_id_for_user(id, alice)
        .await
        .expect("find")
        .expect("owner sees meal");
    assert_eq!(stored.name(), "Salad");
    assert_eq!(stored.datetime(), utc("2024-03-15T12:30:00Z"));
    assert_eq!(stored.nutrition().calories, Some(350));
    assert_eq!(stored.nutrition().protein_grams, Some(12.5));
    assert_eq!(stored.nutrition().fats_grams, None);

    assert!(repo.find_by_id_for_user(id, bob).await.unwrap().is_none());

    let mut updated = stored.clone();
    updated
        .apply(MealChanges {
            is_on_diet: Some(false),
            ..Default::default()
        })
        .unwrap();
    repo.update(&updated).await.expect("update");
    assert!(!repo
        .find_by_id_for_user(id, alice)
        .await
        .unwrap()
        .unwrap()
        .is_on_diet());

    let err = repo.delete(id, bob).await.expect_err("not bob's meal");
    assert!(matches!(err, DomainError::MealNotFound(_)));
    repo.delete(id, alice).await.expect("delete");
    assert!(repo.find_by_id_for_user(id, alice).await.unwrap().is_none());
}

#[tokio::test]
async fn meal_repo_ordered_listing_feeds_streak_integration() {
    let pool = test_helpers::setup_in_memory_db().await;
    let alice = insert_user(&pool, "alice").await;

    // inserted out of order on purpose
    let flags = [
        ("2024-03-04T08:00:00", false),
        ("2024-03-01T08:00:00", true),
        ("2024-03-05T08:00:00", true),
        ("2024-03-02T08:00:00", true),
        ("2024-03-06T08:00:00", true),
        ("2024-03-03T08:00:00", true),
    ];
    for (i, (at, on_diet)) in flags.iter().enumerate() {
        insert_meal(&pool, alice, &format!("m{}", i), at, *on_diet).await;
    }

    let repo = SqliteMealRepository::new(Arc::new(pool));
    let meals = repo.find_all_by_user_ordered(alice).await.expect("list");
    let datetimes: Vec<_> = meals.iter().map(|m| m.datetime()).collect();
    let mut sorted = datetimes.clone();
    sorted.sort();
    assert_eq!(datetimes, sorted);

    let streak = find_longest_on_diet_streak(&meals);
    assert_eq!(streak.length, 3);
    assert_eq!(streak.meals[0].datetime(), utc("2024-03-01T08:00:00Z"));
}

#[tokio::test]
async fn meal_repo_page_filters_integration() {
    let pool = test_helpers::setup_in_memory_db().await;
    let alice = insert_user(&pool, "alice").await;
    for day in 1..=12 {
        let at = format!("2024-03-{:02}T12:00:00", day);
        insert_meal(&pool, alice, &format!("d{}", day), &at, day % 2 == 0).await;
    }
    let repo = SqliteMealRepository::new(Arc::new(pool));

    let first = repo
        .find_page(alice, &MealFilter::default(), PageRequest::new(Some(1), None))
        .await
        .expect("page");
    assert_eq!(first.total, 12);
    assert_eq!(first.items.len(), 10);
    assert_eq!(first.items[0].name(), "d12");
    assert!(first.has_next());

    let second = repo
        .find_page(alice, &MealFilter::default(), PageRequest::new(Some(2), None))
        .await
        .expect("page");
    assert_eq!(second.items.len(), 2);
    assert!(!second.has_next());

    let filter = MealFilter {
        start: Some(utc("2024-03-03T00:00:00Z")),
        end: Some(utc("2024-03-08T12:00:00Z")),
        on_diet: Some(true),
    };
    let filtered = repo
        .find_page(alice, &filter, PageRequest::default())
        .await
        .expect("filtered");
    let names: Vec<&str> = filtered.items.iter().map(|m| m.name()).collect();
    assert_eq!(names, vec!["d8", "d6", "d4"]);
    assert_eq!(filtered.total, 3);
}

#[tokio::test]
async fn meal_repo_window_is_half_open_integration() {
    let pool = test_helpers::setup_in_memory_db().await;
    let alice = insert_user(&pool, "alice").await;
    insert_meal(&pool, alice, "before", "2024-03-10T23:59:59", true).await;
    insert_meal(&pool, alice, "monday", "2024-03-11T00:00:00", true).await;
    insert_meal(&pool, alice, "sunday", "2024-03-17T23:59:59", false).await;
    insert_meal(&pool, alice, "next", "2024-03-18T00:00:00", true).await;
    let repo = SqliteMealRepository::new(Arc::new(pool));

    let date = chrono::NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
    let window = ReportWindow::build(date, Granularity::Weekly).unwrap();
    let meals = repo.find_in_window(alice, &window).await.expect("window");

    let names: Vec<&str> = meals.iter().map(|m| m.name()).collect();
    assert_eq!(names, vec!["monday", "sunday"]);
}

#[tokio::test]
async fn meal_repo_find_by_ids_skips_foreign_meals_integration() {
    let pool = test_helpers::setup_in_memory_db().await;
    let alice = insert_user(&pool, "alice").await;
    let bob = insert_user(&pool, "bob").await;
    let a = insert_meal(&pool, alice, "a", "2024-03-01T08:00:00", true).await;
    let b = insert_meal(&pool, bob, "b", "2024-03-01T09:00:00", true).await;
    let repo = SqliteMealRepository::new(Arc::new(pool));

    let found = repo
        .find_by_ids_for_user(&[a, b, MealId::new(999)], alice)
        .await
        .expect("find");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id(), Some(a));
}

#[tokio::test]
async fn meal_repo_far_future_meal_is_refused_integration() {
    let pool = test_helpers::setup_in_memory_db().await;
    let alice = insert_user(&pool, "alice").await;
    insert_meal(&pool, alice, "lunch", "2024-03-15T12:30:00", true).await;
    insert_meal(&pool, alice, "last", "9999-12-31T23:59:59", true).await;
    let repo = SqliteMealRepository::new(Arc::new(pool));

    let err = Meal::create(alice, meal_draft("far", "+10000-01-01T00:00:00", true)).unwrap_err();
    assert!(matches!(err, DomainError::ValidationFailed(_)));

    let ordered = repo.find_all_by_user_ordered(alice).await.expect("ordered");
    let names: Vec<&str> = ordered.iter().map(|m| m.name()).collect();
    assert_eq!(names, vec!["lunch", "last"]);

    let date = chrono::NaiveDate::from_ymd_opt(9999, 12, 31).unwrap();
    let window = ReportWindow::build(date, Granularity::Daily).unwrap();
    let meals = repo.find_in_window(alice, &window).await.expect("window");
    assert_eq!(meals.len(), 1);
    assert_eq!(meals[0].name(), "last");
}

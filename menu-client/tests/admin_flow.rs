//! Admin flow against the real router through the in-process transport

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use menu_client::{
    AutoConfirm, ClientError, ClientResult, DraftField, ErrorKind, FoodApi, HttpClient, MenuAdmin,
    MenuStore, OneshotHttpClient, RefreshPolicy,
};
use menu_server::{ServerState, build_service};
use serde::de::DeserializeOwned;

async fn admin(policy: RefreshPolicy) -> MenuAdmin<OneshotHttpClient> {
    let state = ServerState::in_memory().await.unwrap();
    let client = OneshotHttpClient::new(build_service(state));
    let admin = MenuAdmin::new(FoodApi::new(client), Arc::new(MenuStore::new()), policy);
    admin.mount().await.unwrap();
    admin
}

fn fill<C: HttpClient>(admin: &mut MenuAdmin<C>, name: &str, price: &str, rating: &str, discount: &str) {
    admin.set_field(DraftField::Name, name);
    admin.set_field(DraftField::Description, format!("{name} of the day"));
    admin.set_field(DraftField::Category, "Main Course");
    admin.set_field(DraftField::Price, price);
    admin.set_field(DraftField::Image, format!("https://img.example/{name}.png"));
    admin.set_field(DraftField::Rating, rating);
    admin.set_field(DraftField::Discount, discount);
}

#[tokio::test]
async fn test_mount_empty_menu() {
    let admin = admin(RefreshPolicy::OnSuccess).await;
    assert!(admin.items().is_empty());
    assert!(admin.cards().is_empty());
    assert_eq!(admin.form_title(), "Add Food Item");
    assert_eq!(admin.submit_label(), "Save Food");
}

#[tokio::test]
async fn test_create_pizza_shows_discount() {
    let mut admin = admin(RefreshPolicy::OnSuccess).await;
    fill(&mut admin, "Pizza", "300", "4.5", "10");

    let created = admin.submit().await.unwrap();
    assert!(created.id > 0);
    assert_eq!(created.discounted_price(), 270.0);

    let cards = admin.cards();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].id, created.id);
    assert_eq!(cards[0].price, "₹300.00");
    assert_eq!(cards[0].discounted_price, "₹270.00");
    assert_eq!(cards[0].discount_badge.as_deref(), Some("10% OFF"));
    assert!(cards[0].struck_through);

    assert!(!admin.draft().is_editing());
    assert_eq!(admin.draft().name, "");
    assert_eq!(admin.store().last_error(), None);
}

#[tokio::test]
async fn test_create_soda_without_discount() {
    let mut admin = admin(RefreshPolicy::OnSuccess).await;
    fill(&mut admin, "Soda", "50", "4.0", "0");
    admin.submit().await.unwrap();

    let cards = admin.cards();
    assert_eq!(cards[0].discounted_price, "₹50.00");
    assert_eq!(cards[0].rating, "4.0");
    assert!(!cards[0].struck_through);
    assert_eq!(cards[0].discount_badge, None);
}

#[tokio::test]
async fn test_start_edit_blanks_absent_discount_and_round_trips() {
    let mut admin = admin(RefreshPolicy::OnSuccess).await;
    fill(&mut admin, "Soda", "50", "4", "");
    let created = admin.submit().await.unwrap();
    assert_eq!(created.discount, 0.0);

    admin.start_edit(&created);
    assert_eq!(admin.draft().discount, "");
    assert_eq!(admin.draft().editing_id, Some(created.id));
    assert_eq!(admin.form_title(), "Edit Food Item");
    assert_eq!(admin.submit_label(), "Update Food");

    let updated = admin.submit().await.unwrap();
    assert_eq!(updated, created);
    assert_eq!(admin.items().as_slice(), &[created]);
}

#[tokio::test]
async fn test_update_changes_only_the_edited_item() {
    let mut admin = admin(RefreshPolicy::OnSuccess).await;
    fill(&mut admin, "Pizza", "300", "4.5", "10");
    let pizza = admin.submit().await.unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(2)).await;
    fill(&mut admin, "Soda", "50", "4", "0");
    let soda = admin.submit().await.unwrap();

    admin.start_edit(&pizza);
    admin.set_field(DraftField::Name, "Veg Pizza");
    admin.set_field(DraftField::Price, "280");
    let updated = admin.submit().await.unwrap();
    assert_eq!(updated.id, pizza.id);
    assert_eq!(updated.name, "Veg Pizza");
    assert_eq!(updated.price, 280.0);

    let items = admin.items();
    assert_eq!(items.len(), 2);
    assert_eq!(items.iter().find(|i| i.id == pizza.id), Some(&updated));
    assert_eq!(items.iter().find(|i| i.id == soda.id), Some(&soda));
    assert!(!admin.draft().is_editing());
}

#[tokio::test]
async fn test_delete_requires_confirmation() {
    let mut admin = admin(RefreshPolicy::OnSuccess).await;
    fill(&mut admin, "Pizza", "300", "4.5", "10");
    let pizza = admin.submit().await.unwrap();

    let declined = admin.delete(pizza.id, &mut AutoConfirm(false)).await.unwrap();
    assert!(!declined);
    assert_eq!(admin.items().len(), 1);

    let mut asked = Vec::new();
    let mut confirm = |message: &str| {
        asked.push(message.to_string());
        true
    };
    let deleted = admin.delete(pizza.id, &mut confirm).await.unwrap();
    assert!(deleted);
    assert_eq!(asked, vec!["Delete this food item?".to_string()]);
    assert!(admin.items().is_empty());
}

#[tokio::test]
async fn test_deleting_edited_item_clears_draft() {
    let mut admin = admin(RefreshPolicy::OnSuccess).await;
    fill(&mut admin, "Pizza", "300", "4.5", "10");
    let pizza = admin.submit().await.unwrap();
    fill(&mut admin, "Soda", "50", "4", "0");
    let soda = admin.submit().await.unwrap();

    admin.start_edit(&soda);
    admin.delete(pizza.id, &mut AutoConfirm(true)).await.unwrap();
    assert_eq!(admin.draft().editing_id, Some(soda.id));

    admin.delete(soda.id, &mut AutoConfirm(true)).await.unwrap();
    assert!(!admin.draft().is_editing());
    assert!(admin.items().is_empty());
}

#[tokio::test]
async fn test_delete_unknown_id_is_not_found() {
    let mut admin = admin(RefreshPolicy::OnSuccess).await;
    let err = admin.delete(12345, &mut AutoConfirm(true)).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(admin.store().last_error().is_some());
}

#[tokio::test]
async fn test_server_rejection_keeps_draft() {
    let mut admin = admin(RefreshPolicy::OnSuccess).await;
    fill(&mut admin, "Pizza", "300", "9", "10");

    let err = admin.submit().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(admin.draft().name, "Pizza");
    assert_eq!(admin.draft().rating, "9");
    assert!(admin.store().last_error().is_some());
    assert!(admin.items().is_empty());
}

#[tokio::test]
async fn test_non_numeric_price_rejected_before_request() {
    let mut admin = admin(RefreshPolicy::OnSuccess).await;
    fill(&mut admin, "Pizza", "three hundred", "4.5", "10");

    let err = admin.submit().await.unwrap_err();
    assert!(matches!(err, ClientError::Validation(_)));
    assert_eq!(admin.draft().price, "three hundred");

    let remote = admin.api().list_food().await.unwrap();
    assert!(remote.is_empty());
}

#[tokio::test]
async fn test_always_policy_refreshes_after_failure() {
    let mut admin = admin(RefreshPolicy::Always).await;

    // Created behind the admin's back; only a refresh will show it
    let mut other = menu_client::FoodDraft::default();
    other.set(DraftField::Name, "Tea");
    other.set(DraftField::Description, "Hot");
    other.set(DraftField::Category, "Drinks");
    other.set(DraftField::Price, "20");
    other.set(DraftField::Image, "tea.png");
    other.set(DraftField::Rating, "3.5");
    let tea = admin
        .api()
        .create_food(&other.to_input().unwrap())
        .await
        .unwrap();
    assert!(admin.items().is_empty());

    fill(&mut admin, "Pizza", "300", "4.5", "150");
    let err = admin.submit().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);

    assert_eq!(admin.draft().name, "");
    assert_eq!(admin.items().as_slice(), &[tea]);
    assert!(admin.store().last_error().is_some());
}

#[tokio::test]
async fn test_update_of_removed_item_is_not_found() {
    let mut admin = admin(RefreshPolicy::OnSuccess).await;
    fill(&mut admin, "Pizza", "300", "4.5", "10");
    let pizza = admin.submit().await.unwrap();

    admin.start_edit(&pizza);
    assert!(admin.api().delete_food(pizza.id).await.unwrap());

    let err = admin.submit().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(admin.draft().editing_id, Some(pizza.id));
}

#[tokio::test]
async fn test_busy_store_rejects_calls() {
    let mut admin = admin(RefreshPolicy::OnSuccess).await;
    fill(&mut admin, "Pizza", "300", "4.5", "10");

    let guard = admin.store().try_begin().unwrap();
    assert!(matches!(admin.submit().await, Err(ClientError::Busy)));
    assert!(matches!(admin.refresh().await, Err(ClientError::Busy)));
    drop(guard);

    admin.submit().await.unwrap();
    assert!(!admin.store().is_busy());
}

#[tokio::test]
async fn test_get_food_by_id() {
    let mut admin = admin(RefreshPolicy::OnSuccess).await;
    fill(&mut admin, "Pizza", "300", "4.5", "10");
    let pizza = admin.submit().await.unwrap();

    let fetched = admin.api().get_food(pizza.id).await.unwrap();
    assert_eq!(fetched, pizza);

    let err = admin.api().get_food(pizza.id + 1).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

/// Transport whose GET requests fail while `offline` is set
struct FlakyClient {
    inner: OneshotHttpClient,
    offline: Arc<AtomicBool>,
}

#[async_trait]
impl HttpClient for FlakyClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(ClientError::Internal(format!("connection refused: {path}")));
        }
        self.inner.get(path).await
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.inner.post(path, body).await
    }

    async fn put<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.inner.put(path, body).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.inner.delete(path).await
    }
}

async fn flaky_admin(policy: RefreshPolicy) -> (MenuAdmin<FlakyClient>, Arc<AtomicBool>) {
    let state = ServerState::in_memory().await.unwrap();
    let offline = Arc::new(AtomicBool::new(false));
    let client = FlakyClient {
        inner: OneshotHttpClient::new(build_service(state)),
        offline: offline.clone(),
    };
    let admin = MenuAdmin::new(FoodApi::new(client), Arc::new(MenuStore::new()), policy);
    (admin, offline)
}

#[tokio::test]
async fn test_mount_failure_leaves_list_empty() {
    let (admin, offline) = flaky_admin(RefreshPolicy::OnSuccess).await;
    offline.store(true, Ordering::SeqCst);

    let err = admin.mount().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
    assert!(admin.items().is_empty());
    assert!(admin.store().last_error().is_some());
    assert!(!admin.store().is_busy());
}

#[tokio::test]
async fn test_failed_refresh_keeps_previous_snapshot() {
    let (mut admin, offline) = flaky_admin(RefreshPolicy::OnSuccess).await;
    admin.mount().await.unwrap();
    fill(&mut admin, "Pizza", "300", "4.5", "10");
    let created = admin.submit().await.unwrap();

    offline.store(true, Ordering::SeqCst);
    let err = admin.refresh().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
    assert_eq!(admin.items().as_slice(), &[created]);
    assert!(admin.store().last_error().is_some());
}

#[tokio::test]
async fn test_submit_succeeds_when_reload_fails() {
    let (mut admin, offline) = flaky_admin(RefreshPolicy::OnSuccess).await;
    admin.mount().await.unwrap();
    fill(&mut admin, "Soda", "50", "4", "0");

    offline.store(true, Ordering::SeqCst);
    let created = admin.submit().await.unwrap();
    assert_eq!(created.name, "Soda");
    assert!(!admin.draft().is_editing());
    assert_eq!(admin.draft().name, "");
    assert!(admin.items().is_empty());
    assert!(admin.store().last_error().is_some());

    offline.store(false, Ordering::SeqCst);
    admin.refresh().await.unwrap();
    assert_eq!(admin.items().as_slice(), &[created]);
}

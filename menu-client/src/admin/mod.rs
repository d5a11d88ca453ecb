//! Menu admin controller
//!
//! [`MenuAdmin`] drives the create / edit / delete flow over a [`FoodApi`]:
//! it owns the [`FoodDraft`], shares a [`MenuStore`] with whoever renders the
//! list, and re-fetches the whole menu after each mutation according to the
//! configured [`RefreshPolicy`].

pub mod confirm;
pub mod draft;
pub mod store;
pub mod view;

pub use confirm::{AutoConfirm, Confirm};
pub use draft::{DraftField, FoodDraft};
pub use store::{BusyGuard, MenuStore};
pub use view::{MenuCard, form_title, format_price, submit_label};

use std::sync::Arc;

use shared::{FoodId, FoodItem};

use crate::api::FoodApi;
use crate::client::HttpClient;
use crate::{ClientError, ClientResult, RefreshPolicy};

pub struct MenuAdmin<C> {
    api: FoodApi<C>,
    store: Arc<MenuStore>,
    draft: FoodDraft,
    policy: RefreshPolicy,
}

impl<C: HttpClient> MenuAdmin<C> {
    pub fn new(api: FoodApi<C>, store: Arc<MenuStore>, policy: RefreshPolicy) -> Self {
        Self {
            api,
            store,
            draft: FoodDraft::default(),
            policy,
        }
    }

    pub fn store(&self) -> &Arc<MenuStore> {
        &self.store
    }

    pub fn api(&self) -> &FoodApi<C> {
        &self.api
    }

    pub fn draft(&self) -> &FoodDraft {
        &self.draft
    }

    pub fn policy(&self) -> RefreshPolicy {
        self.policy
    }

    /// Current menu snapshot
    pub fn items(&self) -> Arc<Vec<FoodItem>> {
        self.store.items()
    }

    /// Initial load; a failure leaves the list as it was and is recorded
    pub async fn mount(&self) -> ClientResult<()> {
        self.refresh().await
    }

    /// Re-fetch the whole menu
    pub async fn refresh(&self) -> ClientResult<()> {
        let _busy = self.store.try_begin().ok_or(ClientError::Busy)?;
        self.load().await
    }

    async fn load(&self) -> ClientResult<()> {
        match self.api.list_food().await {
            Ok(items) => {
                tracing::debug!(count = items.len(), "Menu loaded");
                self.store.replace(items);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load menu");
                self.store.set_error(e.to_string());
                Err(e)
            }
        }
    }

    pub fn set_field(&mut self, field: DraftField, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    /// Switch to edit mode for `item`
    pub fn start_edit(&mut self, item: &FoodItem) {
        self.draft = FoodDraft::from_item(item);
    }

    /// Drop the draft and return to create mode, without calling the API
    pub fn cancel_edit(&mut self) {
        self.draft.reset();
    }

    pub fn form_title(&self) -> &'static str {
        form_title(self.draft.is_editing())
    }

    pub fn submit_label(&self) -> &'static str {
        submit_label(self.draft.is_editing())
    }

    /// Create or update from the draft, depending on the mode.
    ///
    /// A draft that fails local coercion is rejected before any request and
    /// kept as is.
    pub async fn submit(&mut self) -> ClientResult<FoodItem> {
        let _busy = self.store.try_begin().ok_or(ClientError::Busy)?;

        let payload = match self.draft.to_input() {
            Ok(payload) => payload,
            Err(e) => {
                self.store.set_error(e.to_string());
                return Err(e);
            }
        };

        let result = match self.draft.editing_id {
            Some(id) => self.api.update_food(id, &payload).await,
            None => self.api.create_food(&payload).await,
        };

        match &result {
            Ok(item) => tracing::info!(food_id = item.id, "Food saved"),
            Err(e) => tracing::warn!(error = %e, "Failed to save food"),
        }

        self.settle(result, |draft| draft.reset()).await
    }

    /// Delete after confirmation. Returns `Ok(false)` when the user declines.
    pub async fn delete<F>(&mut self, id: FoodId, confirm: &mut F) -> ClientResult<bool>
    where
        F: Confirm + ?Sized,
    {
        if !confirm.confirm(view::DELETE_PROMPT).await {
            return Ok(false);
        }

        let _busy = self.store.try_begin().ok_or(ClientError::Busy)?;

        let result = self.api.delete_food(id).await;
        match &result {
            Ok(_) => tracing::info!(food_id = id, "Food deleted"),
            Err(e) => tracing::warn!(food_id = id, error = %e, "Failed to delete food"),
        }

        self.settle(result, |draft| {
            if draft.editing_id == Some(id) {
                draft.reset();
            }
        })
        .await
    }

    /// Apply the refresh policy after a mutation
    async fn settle<T>(
        &mut self,
        result: ClientResult<T>,
        reset: impl FnOnce(&mut FoodDraft),
    ) -> ClientResult<T> {
        if let Err(e) = &result {
            self.store.set_error(e.to_string());
            if self.policy == RefreshPolicy::OnSuccess {
                return result;
            }
        } else {
            self.store.clear_error();
        }

        reset(&mut self.draft);
        // A failed reload is recorded in the store; the mutation outcome wins.
        let _ = self.load().await;
        result
    }

    /// Display model for the current list
    pub fn cards(&self) -> Vec<MenuCard> {
        self.store.items().iter().map(MenuCard::from).collect()
    }
}

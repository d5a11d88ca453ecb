//! Food Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{FoodDocument, FoodRow};
use shared::util::snowflake_id;
use shared::{FoodFields, FoodId, FoodItem};
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const TABLE: &str = "food";

fn record_id(id: FoodId) -> RecordId {
    RecordId::from_table_key(TABLE, id)
}

#[derive(Clone)]
pub struct FoodRepository {
    base: BaseRepository,
}

impl FoodRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all food items, oldest first
    pub async fn find_all(&self) -> RepoResult<Vec<FoodItem>> {
        let rows: Vec<FoodRow> = self
            .base
            .db()
            .query(
                "SELECT record::id(id) AS food_id, name, description, category, price, image, rating, discount \
                 FROM food ORDER BY food_id",
            )
            .await?
            .take(0)?;
        Ok(rows.into_iter().map(FoodItem::from).collect())
    }

    /// Find food item by id
    pub async fn find_by_id(&self, id: FoodId) -> RepoResult<Option<FoodItem>> {
        let doc: Option<FoodDocument> = self.base.db().select(record_id(id)).await?;
        Ok(doc.map(|d| d.into_item(id)))
    }

    /// Create a new food item with a fresh id
    pub async fn create(&self, fields: FoodFields) -> RepoResult<FoodItem> {
        let id = snowflake_id();
        let created: Option<FoodDocument> = self
            .base
            .db()
            .create(record_id(id))
            .content(FoodDocument::from(fields))
            .await?;
        created
            .map(|d| d.into_item(id))
            .ok_or_else(|| RepoError::Database("Failed to create food".to_string()))
    }

    /// Replace every field of an existing item.
    ///
    /// Returns `None` when the id is unknown; nothing is created in that case.
    pub async fn update(&self, id: FoodId, fields: FoodFields) -> RepoResult<Option<FoodItem>> {
        if self.find_by_id(id).await?.is_none() {
            return Ok(None);
        }

        let updated: Option<FoodDocument> = self
            .base
            .db()
            .update(record_id(id))
            .content(FoodDocument::from(fields))
            .await?;
        Ok(updated.map(|d| d.into_item(id)))
    }

    /// Hard delete; `false` when the id is unknown
    pub async fn delete(&self, id: FoodId) -> RepoResult<bool> {
        let deleted: Option<FoodDocument> = self.base.db().delete(record_id(id)).await?;
        Ok(deleted.is_some())
    }
}

//! Database Module
//!
//! Embedded SurrealDB (RocksDB on disk, or in-memory) and the food schema

pub mod models;
pub mod repository;

use std::path::Path;

use shared::AppError;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, RocksDb};

const NAMESPACE: &str = "menu";
const DATABASE: &str = "menu";

/// Table and field definitions, applied on every start
const SCHEMA: &str = r#"
DEFINE TABLE IF NOT EXISTS food SCHEMAFULL;
DEFINE FIELD IF NOT EXISTS name ON food TYPE string;
DEFINE FIELD IF NOT EXISTS description ON food TYPE string;
DEFINE FIELD IF NOT EXISTS category ON food TYPE string;
DEFINE FIELD IF NOT EXISTS price ON food TYPE float;
DEFINE FIELD IF NOT EXISTS image ON food TYPE string;
DEFINE FIELD IF NOT EXISTS rating ON food TYPE float;
DEFINE FIELD IF NOT EXISTS discount ON food TYPE float;
"#;

/// Database service, owns the embedded SurrealDB handle
#[derive(Clone, Debug)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) a RocksDB-backed database at `path`
    pub async fn open(path: &Path) -> Result<Self, AppError> {
        let db = Surreal::new::<RocksDb>(path)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;
        tracing::info!(path = %path.display(), "Database opened (RocksDB)");
        Self::prepare(db).await
    }

    /// Volatile database, lost when the process exits
    pub async fn in_memory() -> Result<Self, AppError> {
        let db = Surreal::new::<Mem>(())
            .await
            .map_err(|e| AppError::database(format!("Failed to open in-memory database: {e}")))?;
        tracing::info!("Database opened (in-memory)");
        Self::prepare(db).await
    }

    async fn prepare(db: Surreal<Db>) -> Result<Self, AppError> {
        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        db.query(SCHEMA)
            .await
            .and_then(|response| response.check())
            .map_err(|e| AppError::database(format!("Failed to apply schema: {e}")))?;
        tracing::info!("Database schema applied");

        Ok(Self { db })
    }
}

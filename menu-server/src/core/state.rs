use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::core::{Config, Result};
use crate::db::DbService;

/// 服务器状态 - 持有配置和数据库连接
///
/// 可以安全地在线程间克隆 (Surreal 内部为 Arc)
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 嵌入式数据库 (SurrealDB)
    pub db: Surreal<Db>,
}

impl ServerState {
    pub fn new(config: Config, db: Surreal<Db>) -> Self {
        Self { config, db }
    }

    /// 初始化服务器状态
    ///
    /// 1. 工作目录结构 (确保数据库目录存在)
    /// 2. 数据库 (默认 work_dir/database/menu.db，`DATABASE_PATH=memory` 时为内存库)
    pub async fn initialize(config: &Config) -> Result<Self> {
        let db_service = match config.database_file() {
            Some(path) => {
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                DbService::open(&path).await?
            }
            None => DbService::in_memory().await?,
        };

        Ok(Self::new(config.clone(), db_service.db))
    }

    /// 内存数据库状态，用于测试和进程内客户端
    pub async fn in_memory() -> Result<Self> {
        Self::initialize(&Config::in_memory()).await
    }

    /// 获取数据库实例
    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }
}

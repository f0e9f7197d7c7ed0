use sqlx::SqlitePool;

use crate::core::{Config, Result, ServerError};
use crate::db::DbService;
use crate::offline::OfflineReplayer;
use crate::packing::PackingService;

/// 服务器状态 - 持有所有服务的共享引用
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | DbService | SQLite 连接池 |
///
/// 连接池内部是 Arc，clone 成本极低。
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub db: DbService,
}

impl ServerState {
    pub fn new(config: Config, db: DbService) -> Self {
        Self { config, db }
    }

    /// 初始化服务器状态
    ///
    /// 1. 确保数据库目录存在
    /// 2. 打开数据库并执行迁移
    pub async fn initialize(config: &Config) -> Result<Self> {
        let db_path = config.database_path();
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let db_path = db_path
            .to_str()
            .ok_or_else(|| ServerError::Config(format!("Non UTF-8 database path: {db_path:?}")))?;

        let db = DbService::new(db_path).await?;
        Ok(Self::new(config.clone(), db))
    }

    /// 内存数据库状态 (测试用)
    pub async fn in_memory(config: Config) -> Result<Self> {
        let db = DbService::in_memory().await?;
        Ok(Self::new(config, db))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.db.pool
    }

    pub fn packing(&self) -> PackingService {
        PackingService::new(self.db.pool.clone())
    }

    pub fn replayer(&self) -> OfflineReplayer {
        OfflineReplayer::new(self.db.pool.clone())
    }
}

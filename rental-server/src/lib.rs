//! Rental Server - 设备租赁后端核心
//!
//! 负责两件事：离线优先的 PWA 同步，以及任务的实物装箱流程。
//!
//! ```text
//! rental-server/src/
//! ├── core/          # 配置、状态、错误、HTTP 服务器
//! ├── auth/          # 请求上下文 (上游会话层注入的用户标识)
//! ├── db/            # SQLite 连接池与 repository
//! ├── services/      # 任务/设备变更、事件日志
//! ├── packing/       # 装箱状态机
//! ├── offline/       # 离线操作回放
//! ├── api/           # HTTP 路由和处理器
//! └── utils/         # 日志等工具
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod offline;
pub mod packing;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use auth::RequestContext;
pub use crate::core::{Config, Server, ServerError, ServerState};
pub use offline::OfflineReplayer;
pub use packing::PackingService;
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

pub use utils::logger::init_logger_with_file;

/// 加载 .env 并初始化日志
///
/// 返回加载后的配置
pub fn setup_environment() -> Config {
    if let Err(e) = dotenv::dotenv() {
        // .env is optional
        eprintln!("No .env loaded: {e}");
    }

    let config = Config::from_env();
    init_logger_with_file(
        Some(&config.log_level),
        Some(config.log_json),
        config.log_dir.as_deref(),
    );
    config
}

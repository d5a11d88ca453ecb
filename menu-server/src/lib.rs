//! Foodio Menu Server - 菜单管理 HTTP 服务
//!
//! # 模块结构
//!
//! ```text
//! menu-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── db/            # 嵌入式 SurrealDB 与仓储
//! ├── middleware/    # 请求日志
//! ├── routes/        # 路由装配与 Tower 中间件
//! └── utils/         # 日志初始化、输入校验
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod middleware;
pub mod routes;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, Server, ServerState};
pub use routes::{build_app, build_router, build_service};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

pub fn print_banner() {
    println!(
        r#"
    ______                __ _
   / ____/___  ____  ____/ /(_)___
  / /_  / __ \/ __ \/ __  // / __ \
 / __/ / /_/ / /_/ / /_/ // / /_/ /
/_/    \____/\____/\__,_//_/\____/
    "#
    );
}

//! Employee API - 员工信息 REST 网关
//!
//! # 架构概述
//!
//! 本服务不保存任何员工数据，所有读写都转发给上游员工服务：
//!
//! - **HTTP API** (`api`): `/api/v1/employee` 路由和处理器
//! - **业务层** (`services`): 聚合计算 (最高薪资、前十名、姓名搜索) 与生命周期编排
//! - **上游客户端** (`employee_client`): 429 限流时指数退避重试
//!
//! # 模块结构
//!
//! ```text
//! employee-api/src/
//! ├── core/          # 配置、状态、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── routes/        # Router 组装与中间件
//! ├── services/      # 聚合与编排
//! └── utils/         # 错误、日志、校验
//! ```

pub mod api;
pub mod core;
pub mod routes;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, Server, ServerState};
pub use routes::{build_app, build_router};
pub use services::EmployeeService;
pub use utils::{AppError, AppResult, ErrorBody, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

/// 加载 .env 并初始化日志
///
/// 必须在读取配置之前调用。
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    // .env 文件可选
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    ______                __
   / ____/___ ___  ____  / /___  __  _____  ___
  / __/ / __ `__ \/ __ \/ / __ \/ / / / _ \/ _ \
 / /___/ / / / / / /_/ / / /_/ / /_/ /  __/  __/
/_____/_/ /_/ /_/ .___/_/\____/\__, /\___/\___/
               /_/            /____/
    "#
    );
}

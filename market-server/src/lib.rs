//! Market Edge Server - 线上集市边缘节点
//!
//! # 架构概述
//!
//! 本模块是 Market Server 的主入口，提供以下核心功能：
//!
//! - **分类注册表** (`catalog::category`): 两级分类树及其一致性规则
//! - **商品目录** (`catalog::product`): 商品创建、图片替换、价格下限校验
//! - **批量上传** (`catalog::batch`): start → append → finish 状态机
//! - **购物篮** (`basket`): 按调用者隔离的商品数量映射
//! - **支付** (`payment`): 支付配置与外部支付会话
//! - **认证** (`auth`): JWT 校验与管理员注册表
//!
//! # 模块结构
//!
//! ```text
//! market-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── auth/          # JWT 认证、管理员权限
//! ├── catalog/       # 分类/商品/价格下限/批量上传
//! ├── basket/        # 购物篮
//! ├── blob/          # Blob 引用存储
//! ├── payment/       # 支付配置与会话
//! ├── api/           # HTTP 路由和处理器
//! └── utils/         # 工具函数
//! ```

pub mod api;
pub mod auth;
pub mod basket;
pub mod blob;
pub mod catalog;
pub mod core;
pub mod payment;
pub mod utils;

// Re-export 公共类型
pub use auth::{CurrentUser, JwtService};
pub use crate::core::{Config, Server, ServerState};

// Re-export unified error types from shared
pub use shared::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro - 支持 tracing 格式说明符
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

/// 设置运行环境 (dotenv, 工作目录, 日志)
pub fn setup_environment() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    let work_dir = std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/market/edge".into());
    std::fs::create_dir_all(&work_dir)?;

    let log_dir = std::path::Path::new(&work_dir).join("logs");
    std::fs::create_dir_all(&log_dir)?;

    init_logger_with_file(
        std::env::var("LOG_LEVEL").ok().as_deref(),
        log_dir.to_str(),
    );

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    __  ___           __        __
   /  |/  /___ ______/ /_____  / /_
  / /|_/ / __ `/ ___/ //_/ _ \/ __/
 / /  / / /_/ / /  / ,< /  __/ /_
/_/  /_/\__,_/_/  /_/|_|\___/\__/
    "#
    );
}

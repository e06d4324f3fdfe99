//! 认证授权模块
//!
//! 提供 JWT 认证、管理员注册表和中间件：
//! - [`JwtService`] - JWT 令牌服务
//! - [`CurrentUser`] - 当前用户上下文
//! - [`AdminRegistry`] - 管理员 principal 注册表
//! - [`require_auth`] - 认证中间件
//! - [`require_admin`] - 管理员权限中间件

pub mod extractor;
pub mod jwt;
pub mod middleware;
pub mod registry;

pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
pub use middleware::{require_admin, require_auth};
pub use registry::AdminRegistry;

/// 管理员角色名
pub const ROLE_ADMIN: &str = "admin";
/// 普通已认证用户角色名
pub const ROLE_USER: &str = "user";

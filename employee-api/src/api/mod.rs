//! API 路由模块
//!
//! # 结构
//!
//! - [`employees`] - 员工接口 (`/api/v1/employee`)
//! - [`health`] - 健康检查

pub mod employees;
pub mod health;

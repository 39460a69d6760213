//! 服务层 - 业务编排
//!
//! # 服务列表
//!
//! - [`EmployeeService`] - 员工查询、创建、删除与聚合
//! - [`aggregation`] - 无副作用的聚合函数 (最高薪资、前十名、姓名搜索)

pub mod aggregation;
pub mod employee;

pub use employee::EmployeeService;

use std::sync::Arc;

use employee_client::{EmployeeGateway, UpstreamClient};

use crate::core::{Config, Result};
use crate::services::EmployeeService;

/// 服务器状态
///
/// 启动后只读，每个请求克隆一份 (内部均为 `Arc`)。
#[derive(Clone)]
pub struct ServerState {
    /// 员工业务服务
    pub employees: Arc<EmployeeService>,
}

impl ServerState {
    /// 根据配置创建上游客户端与业务服务
    pub fn initialize(config: &Config) -> Result<Self> {
        let upstream = config.upstream();
        tracing::info!(
            upstream = %upstream.collection_url(),
            max_retries = upstream.retry.max_retries,
            "Employee service client configured"
        );

        let client = UpstreamClient::new(upstream)?;
        Ok(Self::with_gateway(Arc::new(client)))
    }

    /// 使用任意网关实现 (测试中使用内存实现)
    pub fn with_gateway(gateway: Arc<dyn EmployeeGateway>) -> Self {
        Self {
            employees: Arc::new(EmployeeService::new(gateway)),
        }
    }
}

//! 客户端层：分析服务抽象与实现（HTTP / Mock）

pub mod http;
pub mod mock;
pub mod traits;

use std::sync::Arc;

use crate::config::AppConfig;

pub use http::HttpAnalysisClient;
pub use mock::MockAnalysisClient;
pub use traits::{AnalysisClient, ClientError};

/// 根据配置选择客户端后端（http / mock）
pub fn create_client_from_config(cfg: &AppConfig) -> Arc<dyn AnalysisClient> {
    match cfg.api.provider.to_lowercase().as_str() {
        "mock" => {
            tracing::warn!("Using Mock analysis client (api.provider = mock)");
            Arc::new(MockAnalysisClient::demo())
        }
        _ => {
            tracing::info!("Using HTTP analysis client ({})", cfg.api.base_url);
            Arc::new(HttpAnalysisClient::new(cfg.api.base_url.clone()))
        }
    }
}

//! HTTP 分析客户端
//!
//! 通过 reqwest 向 {base_url}/analysis 发送 POST JSON 请求。服务端把应用级
//! 错误（status: "error"）连同 4xx/5xx 状态码一起以 JSON 体返回，因此这里
//! 不检查 HTTP 状态码，直接解析响应体；只有连接失败或响应体不可解析时
//! 才归一化为「Error de conexión」。无请求超时、无取消、无重试。

use async_trait::async_trait;

use crate::client::{AnalysisClient, ClientError};
use crate::model::{AnalysisRequest, AnalysisResult, WireResponse};

/// HTTP 客户端：持有 reqwest::Client 与服务基地址
pub struct HttpAnalysisClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAnalysisClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/analysis", self.base_url.trim_end_matches('/'))
    }

    /// 网络往返本体：序列化 → POST → 解析响应体；任何一步失败向上返回 reqwest 错误
    async fn round_trip(&self, req: &AnalysisRequest) -> Result<AnalysisResult, reqwest::Error> {
        let response = self.client.post(self.endpoint()).json(req).send().await?;
        let wire: WireResponse = response.json().await?;
        Ok(wire.into())
    }
}

#[async_trait]
impl AnalysisClient for HttpAnalysisClient {
    async fn analyze(&self, req: &AnalysisRequest) -> Result<AnalysisResult, ClientError> {
        match self.round_trip(req).await {
            Ok(result) => Ok(result),
            Err(e) => {
                tracing::warn!("Analysis request failed: {}", e);
                Ok(AnalysisResult::connection_error(e.to_string()))
            }
        }
    }
}

//! Mock 分析客户端（离线演示与测试用，无需网络）
//!
//! 返回预设的 AnalysisResult 并记录收到的每个请求；failing 模式用于
//! 验证编排器对客户端内部失败的兜底路径。

use std::sync::Mutex;

use async_trait::async_trait;

use crate::client::{AnalysisClient, ClientError};
use crate::model::{AnalysisRequest, AnalysisResult};

enum MockBehavior {
    Respond(AnalysisResult),
    Fail(String),
}

/// Mock 客户端：固定返回预设结果，recorded() 可取回收到的请求
pub struct MockAnalysisClient {
    behavior: MockBehavior,
    requests: Mutex<Vec<AnalysisRequest>>,
}

impl MockAnalysisClient {
    pub fn respond_with(result: AnalysisResult) -> Self {
        Self {
            behavior: MockBehavior::Respond(result),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// 违反客户端契约直接返回 Err，仅用于测试编排器兜底
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            behavior: MockBehavior::Fail(reason.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// 默认演示结果：低风险的占位判定
    pub fn demo() -> Self {
        Self::respond_with(AnalysisResult::Success {
            risk_level: Some("Low".to_string()),
            explanation: Some(
                "**Mock backend**: no live analysis service is configured.".to_string(),
            ),
            function_name: None,
            arguments: None,
            message: None,
        })
    }

    /// 按接收顺序返回已记录的请求副本
    pub fn recorded(&self) -> Vec<AnalysisRequest> {
        self.requests.lock().expect("mock request log poisoned").clone()
    }
}

#[async_trait]
impl AnalysisClient for MockAnalysisClient {
    async fn analyze(&self, req: &AnalysisRequest) -> Result<AnalysisResult, ClientError> {
        self.requests
            .lock()
            .expect("mock request log poisoned")
            .push(req.clone());
        match &self.behavior {
            MockBehavior::Respond(result) => Ok(result.clone()),
            MockBehavior::Fail(reason) => Err(ClientError::Internal(reason.clone())),
        }
    }
}

//! 分析客户端抽象
//!
//! 所有后端（HTTP / Mock）实现 AnalysisClient：一次请求-响应往返。
//! 传输层失败（连不上、响应体不可解析）必须在实现内部归一化为
//! `AnalysisResult::Error`，不得越过该边界向上传播；Err 仅保留给
//! 归一化逻辑自身的意外失败，由编排器兜底。

use async_trait::async_trait;
use thiserror::Error;

use crate::model::{AnalysisRequest, AnalysisResult};

/// 客户端内部错误：正常情况下不会出现（传输失败已在实现内归一化）
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("internal client failure: {0}")]
    Internal(String),
}

/// 分析客户端 trait：注入给编排器，测试时可替换为确定性的 Mock
#[async_trait]
pub trait AnalysisClient: Send + Sync {
    /// 提交请求并返回归一化后的分析结果
    async fn analyze(&self, req: &AnalysisRequest) -> Result<AnalysisResult, ClientError>;
}

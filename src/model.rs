//! 数据模型：分析请求与分析结果
//!
//! AnalysisRequest 为提交给远端服务的请求体；AnalysisResult 是以 status 判别的
//! 两态结果（Success / Error）。WireResponse 承接远端返回的原始 JSON，
//! 转换时对缺失/未知 status 做安全兜底（归一化为 Error）。

use serde::{Deserialize, Serialize};

/// 发往远端分析服务的请求体：目标合约地址 + 编码后的调用数据。
/// 两个字段在客户端视为不透明字符串，仅要求非空，不做格式校验。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisRequest {
    pub contract_address: String,
    pub call_data: String,
}

impl AnalysisRequest {
    pub fn new(target: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            contract_address: target.into(),
            call_data: payload.into(),
        }
    }
}

/// 一次分析的最终结果：要么服务端成功返回判定，要么是一条可展示的错误。
/// 构造后不可变；编排器在新一轮请求时整体替换，不做原地修改。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum AnalysisResult {
    Success {
        #[serde(skip_serializing_if = "Option::is_none")]
        risk_level: Option<String>,
        /// Markdown 风格的富文本说明（加粗、列表）
        #[serde(skip_serializing_if = "Option::is_none")]
        explanation: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        function_name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        arguments: Option<Vec<String>>,
        /// 无 explanation 时的降级说明
        #[serde(skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    Error {
        message: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        details: Option<String>,
    },
}

impl AnalysisResult {
    /// 传输层失败（连不上、超时、响应体不可解析）统一归一化为此结果
    pub fn connection_error(details: impl Into<String>) -> Self {
        AnalysisResult::Error {
            message: "Error de conexión".to_string(),
            details: Some(details.into()),
        }
    }

    /// 编排器兜底结果：客户端自身的归一化逻辑意外失败时使用
    pub fn unknown_error() -> Self {
        AnalysisResult::Error {
            message: "Unknown error occurred".to_string(),
            details: None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, AnalysisResult::Error { .. })
    }
}

/// 远端响应的原始线格式：扁平结构，status 与其余字段全部可选。
/// 不直接用 serde tag 反序列化，以便对缺失/未知 status 做兜底转换。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WireResponse {
    pub status: Option<String>,
    pub risk_level: Option<String>,
    pub explanation: Option<String>,
    pub function_name: Option<String>,
    pub arguments: Option<Vec<String>>,
    pub message: Option<String>,
    pub details: Option<String>,
}

impl From<WireResponse> for AnalysisResult {
    fn from(wire: WireResponse) -> Self {
        match wire.status.as_deref() {
            Some("success") => AnalysisResult::Success {
                risk_level: wire.risk_level,
                explanation: wire.explanation,
                function_name: wire.function_name,
                arguments: wire.arguments,
                message: wire.message,
            },
            // "error" 与未知/缺失 status 都落到 Error：宁可展示错误也不伪装成功
            _ => AnalysisResult::Error {
                message: wire
                    .message
                    .unwrap_or_else(|| "Unknown error occurred".to_string()),
                details: wire.details,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_shape() {
        let req = AnalysisRequest::new("0xabc", "0xdef");
        let body = serde_json::to_value(&req).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "contract_address": "0xabc", "call_data": "0xdef" })
        );
    }

    #[test]
    fn test_wire_success_conversion() {
        let wire: WireResponse = serde_json::from_str(
            r#"{"status":"success","risk_level":"High","function_name":"transfer","arguments":["0x1","100"]}"#,
        )
        .unwrap();
        let result = AnalysisResult::from(wire);
        match result {
            AnalysisResult::Success {
                risk_level,
                function_name,
                arguments,
                ..
            } => {
                assert_eq!(risk_level.as_deref(), Some("High"));
                assert_eq!(function_name.as_deref(), Some("transfer"));
                assert_eq!(arguments.unwrap().len(), 2);
            }
            _ => panic!("Expected Success"),
        }
    }

    #[test]
    fn test_wire_error_conversion() {
        let wire: WireResponse =
            serde_json::from_str(r#"{"status":"error","message":"boom","details":"stack"}"#)
                .unwrap();
        let result = AnalysisResult::from(wire);
        assert_eq!(
            result,
            AnalysisResult::Error {
                message: "boom".to_string(),
                details: Some("stack".to_string()),
            }
        );
    }

    #[test]
    fn test_wire_missing_status_is_error_safe() {
        let wire: WireResponse = serde_json::from_str(r#"{"message":"odd payload"}"#).unwrap();
        let result = AnalysisResult::from(wire);
        assert!(result.is_error());
        match result {
            AnalysisResult::Error { message, .. } => assert_eq!(message, "odd payload"),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_wire_unknown_status_without_message() {
        let wire: WireResponse = serde_json::from_str(r#"{"status":"weird"}"#).unwrap();
        assert_eq!(AnalysisResult::from(wire), AnalysisResult::unknown_error());
    }
}

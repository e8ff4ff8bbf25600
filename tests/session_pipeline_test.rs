//! 会话管线集成测试：提交 → 客户端 → 分级 → 报告视图

use std::sync::Arc;

use riskscan::client::MockAnalysisClient;
use riskscan::core::{create_session, Command, SessionPhase, UiState};
use riskscan::model::{AnalysisRequest, AnalysisResult};
use riskscan::report::{render, ReportTone, RichSpan, RiskCategory};
use tokio::sync::watch;

/// 等到会话进入 Done 并返回最终状态
async fn wait_done(state_rx: &mut watch::Receiver<UiState>) -> UiState {
    loop {
        state_rx.changed().await.expect("session task dropped");
        let state = state_rx.borrow().clone();
        if state.phase == SessionPhase::Done {
            return state;
        }
    }
}

#[tokio::test]
async fn test_end_to_end_success_report() {
    let mock = Arc::new(MockAnalysisClient::respond_with(AnalysisResult::Success {
        risk_level: Some("High".to_string()),
        explanation: Some("**Warning**: risky".to_string()),
        function_name: Some("transfer".to_string()),
        arguments: Some(vec!["0x1".to_string(), "100".to_string()]),
        message: None,
    }));
    let (cmd_tx, mut state_rx) = create_session(mock.clone());

    cmd_tx
        .send(Command::Submit(AnalysisRequest::new("0xabc", "0xdef")))
        .unwrap();
    let state = wait_done(&mut state_rx).await;

    // 恰好一次请求，线格式与输入一致
    let recorded = mock.recorded();
    assert_eq!(recorded.len(), 1);
    assert_eq!(
        serde_json::to_value(&recorded[0]).unwrap(),
        serde_json::json!({ "contract_address": "0xabc", "call_data": "0xdef" })
    );

    let view = render(state.result.as_ref().unwrap());
    assert_eq!(view.tone, ReportTone::Success);

    let badge = view.badge.expect("risk badge");
    assert_eq!(badge.category, RiskCategory::High);
    assert_eq!(badge.label, "HIGH");

    assert_eq!(view.function_signature, "transfer(...)");
    assert_eq!(
        view.arguments,
        vec![(0usize, "0x1".to_string()), (1usize, "100".to_string())]
    );

    // 说明文本里 "Warning" 必须是强调片段
    let spans: Vec<&RichSpan> = view.analysis.iter().flat_map(|b| b.spans()).collect();
    assert!(spans
        .iter()
        .any(|s| matches!(s, RichSpan::Strong(t) if t == "Warning")));
}

#[tokio::test]
async fn test_unexpected_client_failure_is_contained() {
    let mock = Arc::new(MockAnalysisClient::failing("boom"));
    let (cmd_tx, mut state_rx) = create_session(mock);

    cmd_tx
        .send(Command::Submit(AnalysisRequest::new("0xabc", "0xdef")))
        .unwrap();
    let state = wait_done(&mut state_rx).await;

    match state.result.unwrap() {
        AnalysisResult::Error { message, .. } => {
            assert_eq!(message, "Unknown error occurred");
        }
        _ => panic!("Expected synthesized error result"),
    }
}

#[tokio::test]
async fn test_transport_failure_renders_error_view() {
    use riskscan::client::{AnalysisClient, HttpAnalysisClient};

    // 连接必然被拒绝的端口；失败必须归一化为可展示的错误结果
    let client = HttpAnalysisClient::new("http://127.0.0.1:1");
    let result = client
        .analyze(&AnalysisRequest::new("0xabc", "0xdef"))
        .await
        .expect("transport failures must not escape the client");

    assert!(result.is_error());
    let view = render(&result);
    assert_eq!(view.tone, ReportTone::Error);
    match result {
        AnalysisResult::Error { message, .. } => {
            assert!(!message.is_empty());
            assert_eq!(message, "Error de conexión");
        }
        _ => unreachable!(),
    }
}

//! 会话编排器：请求生命周期状态机
//!
//! 建立 cmd/state 两通道，在后台任务中消费用户命令（Submit/Quit）：
//! 提交时清空旧结果进入 Loading，调用分析客户端，完成后带结果进入 Done。
//! 命令按序消费且往返在循环内 await，因此请求永不重叠；Loading 期间到达的
//! Submit 排队等待当前往返结束（FIFO 语义，而非 last-resolved-wins）。

use std::sync::Arc;

use tokio::sync::{mpsc, watch};

use crate::client::{create_client_from_config, AnalysisClient};
use crate::config::AppConfig;
use crate::core::{SessionPhase, UiState};
use crate::model::{AnalysisRequest, AnalysisResult};

/// 从 UI 发往编排器的用户命令
#[derive(Debug, Clone)]
pub enum Command {
    /// 提交一次分析请求（Input Collector 已保证两字段非空）
    Submit(AnalysisRequest),
    /// 退出应用
    Quit,
}

/// 创建会话运行时：返回命令发送端与状态接收端；后台任务消费命令并更新 state。
pub fn create_session(
    client: Arc<dyn AnalysisClient>,
) -> (mpsc::UnboundedSender<Command>, watch::Receiver<UiState>) {
    let (cmd_tx, mut cmd_rx) = mpsc::unbounded_channel::<Command>();
    let (state_tx, state_rx) = watch::channel(UiState::default());

    tokio::spawn(async move {
        while let Some(cmd) = cmd_rx.recv().await {
            match cmd {
                Command::Submit(req) => {
                    // 先清空旧结果进入 Loading，再做网络往返
                    let _ = state_tx.send(UiState {
                        phase: SessionPhase::Loading,
                        result: None,
                    });

                    // 客户端契约是自行归一化所有传输失败；这里是最后一道
                    // 兜底，保证会话总能以可展示的结果收尾
                    let result = match client.analyze(&req).await {
                        Ok(result) => result,
                        Err(e) => {
                            tracing::error!("Analysis client violated its contract: {}", e);
                            AnalysisResult::unknown_error()
                        }
                    };

                    let _ = state_tx.send(UiState {
                        phase: SessionPhase::Done,
                        result: Some(result),
                    });
                }
                Command::Quit => break,
            }
        }
    });

    (cmd_tx, state_rx)
}

/// 从配置装配会话：按 [api] 段选择客户端后端
pub fn create_session_from_config(
    cfg: &AppConfig,
) -> (mpsc::UnboundedSender<Command>, watch::Receiver<UiState>) {
    create_session(create_client_from_config(cfg))
}

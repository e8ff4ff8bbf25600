//! RiskScan - 交易风险扫描 TUI 客户端
//!
//! 入口：初始化日志、加载配置、创建会话编排器与 TUI，并运行主循环。

use anyhow::Context;
use riskscan::config::{load_config, AppConfig};
use riskscan::core::create_session_from_config;
use riskscan::ui::run_app;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 日志：默认 info，可通过 RUST_LOG 覆盖
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with(fmt::layer())
        .init();

    let cfg = load_config(None).unwrap_or_else(|e| {
        tracing::warn!("Config load failed ({}), using defaults", e);
        AppConfig::default()
    });

    // 会话运行时：返回命令发送端与状态接收端
    let (cmd_tx, state_rx) = create_session_from_config(&cfg);

    // 启动 TUI 主循环（消费 state，向 cmd_tx 发送提交命令）
    run_app(state_rx, cmd_tx).await.context("App run failed")?;

    Ok(())
}

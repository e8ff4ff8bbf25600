//! RiskScan - 交易风险扫描 TUI 客户端
//!
//! 模块划分：
//! - **config**: 应用配置加载（TOML + 环境变量）
//! - **model**: 请求/结果数据模型与线格式转换
//! - **client**: 分析服务客户端抽象与实现（HTTP / Mock）
//! - **core**: 会话编排与状态机（Idle → Loading → Done）
//! - **report**: 风险分级、富文本解析与报告视图（纯函数）
//! - **ui**: Ratatui TUI 界面

pub mod client;
pub mod config;
pub mod core;
pub mod model;
pub mod report;
pub mod ui;

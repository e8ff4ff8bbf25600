//! 报告层：风险分级（classify）、富文本解析（rich）、报告视图（view）
//!
//! 全部是纯函数/纯数据，不依赖任何 UI 机制，可独立单测。

pub mod classify;
pub mod rich;
pub mod view;

pub use classify::{classify, RiskCategory};
pub use rich::{parse_rich, RichBlock, RichSpan};
pub use view::{render, ReportTone, ReportView, RiskBadge};

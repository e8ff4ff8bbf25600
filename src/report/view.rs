//! 报告视图：AnalysisResult → 可展示的结构化报告
//!
//! render 是纯函数，不触碰任何终端/控件；五个子块各自独立可缺省，
//! 缺哪个都不是错误，逐字段降级。

use serde::Serialize;

use crate::model::AnalysisResult;
use crate::report::classify::{classify, RiskCategory};
use crate::report::rich::{parse_rich, RichBlock, RichSpan};

/// 报告基调：决定标题文案与强调色（错误红 / 成功青绿）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReportTone {
    Success,
    Error,
}

/// 风险徽章：类别决定颜色，label 为原文大写
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskBadge {
    pub category: RiskCategory,
    pub label: String,
}

/// 渲染层消费的结构化报告
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportView {
    pub tone: ReportTone,
    /// risk_level 缺失时无徽章
    pub badge: Option<RiskBadge>,
    /// 形如 "transfer(...)"，未识别时为字面量 "Unknown"
    pub function_signature: String,
    /// (零起始序号, 参数原文)；为空时该块整体不渲染
    pub arguments: Vec<(usize, String)>,
    /// 说明块：explanation → message → 占位文案 三级降级
    pub analysis: Vec<RichBlock>,
}

/// 把分析结果整理为报告视图
pub fn render(result: &AnalysisResult) -> ReportView {
    match result {
        AnalysisResult::Error { message, details } => {
            let mut analysis = vec![RichBlock::Paragraph(vec![RichSpan::Plain(message.clone())])];
            if let Some(details) = details {
                analysis.push(RichBlock::Paragraph(vec![RichSpan::Plain(details.clone())]));
            }
            ReportView {
                tone: ReportTone::Error,
                badge: None,
                function_signature: "Unknown".to_string(),
                arguments: Vec::new(),
                analysis,
            }
        }
        AnalysisResult::Success {
            risk_level,
            explanation,
            function_name,
            arguments,
            message,
        } => ReportView {
            tone: ReportTone::Success,
            badge: risk_level.as_ref().map(|level| RiskBadge {
                category: classify(Some(level)),
                label: level.to_uppercase(),
            }),
            function_signature: function_name
                .as_ref()
                .map(|name| format!("{}(...)", name))
                .unwrap_or_else(|| "Unknown".to_string()),
            arguments: arguments
                .clone()
                .unwrap_or_default()
                .into_iter()
                .enumerate()
                .collect(),
            analysis: match (explanation, message) {
                (Some(explanation), _) => parse_rich(explanation),
                (None, Some(message)) => {
                    vec![RichBlock::Paragraph(vec![RichSpan::Plain(message.clone())])]
                }
                (None, None) => vec![RichBlock::Paragraph(vec![RichSpan::Plain(
                    "No details available.".to_string(),
                )])],
            },
        },
    }
}

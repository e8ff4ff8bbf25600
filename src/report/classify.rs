//! 风险分级：自由文本 → 三档类别
//!
//! 远端返回的 risk_level 是自由文本（西/英双语），这里按子串匹配归为
//! Low / Medium / High。匹配规则刻意保持宽松（子串而非全等，比如
//! "not-high-risk" 也会命中 High），与既有服务端措辞保持兼容，勿收紧。

use serde::Serialize;

/// 三档风险类别，仅在渲染时从 risk_level 推导，不单独存储
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskCategory {
    Low,
    Medium,
    High,
}

/// 大小写不敏感的子串匹配，High 判定优先于 Medium（两者都命中时取 High）；
/// 未识别 / 为空 / 缺失一律视为 Low
pub fn classify(risk_level: Option<&str>) -> RiskCategory {
    let text = risk_level.unwrap_or_default().to_lowercase();
    if text.contains("alto") || text.contains("high") {
        RiskCategory::High
    } else if text.contains("medio") || text.contains("medium") {
        RiskCategory::Medium
    } else {
        RiskCategory::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_spanish_high() {
        assert_eq!(classify(Some("Alto")), RiskCategory::High);
    }

    #[test]
    fn test_classify_english_medium_substring() {
        assert_eq!(classify(Some("Medium Risk")), RiskCategory::Medium);
    }

    #[test]
    fn test_classify_unrecognized_defaults_low() {
        assert_eq!(classify(Some("bajo")), RiskCategory::Low);
    }

    #[test]
    fn test_classify_missing_defaults_low() {
        assert_eq!(classify(None), RiskCategory::Low);
        assert_eq!(classify(Some("")), RiskCategory::Low);
    }

    #[test]
    fn test_classify_high_precedes_medium() {
        assert_eq!(classify(Some("high and medio")), RiskCategory::High);
    }

    #[test]
    fn test_classify_case_insensitive() {
        assert_eq!(classify(Some("ALTO RIESGO")), RiskCategory::High);
    }
}

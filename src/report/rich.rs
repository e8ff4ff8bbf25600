//! 富文本解析：Markdown 风格的说明文本 → 结构化块
//!
//! 远端的 explanation 只用到两种 Markdown 语法：`**加粗**` 与 `-`/`*` 列表。
//! 解析结果与任何渲染后端解耦，TUI 层自行映射为带样式的 Span。

/// 行内片段：普通文本或加粗
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RichSpan {
    Plain(String),
    Strong(String),
}

/// 块级元素：段落或列表项
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RichBlock {
    Paragraph(Vec<RichSpan>),
    Bullet(Vec<RichSpan>),
}

impl RichBlock {
    pub fn spans(&self) -> &[RichSpan] {
        match self {
            RichBlock::Paragraph(spans) | RichBlock::Bullet(spans) => spans,
        }
    }
}

/// 按行解析：`- ` / `* ` 开头的行视为列表项，空行跳过，其余为段落
pub fn parse_rich(text: &str) -> Vec<RichBlock> {
    let mut blocks = Vec::new();
    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if let Some(item) = trimmed.strip_prefix("- ").or_else(|| trimmed.strip_prefix("* ")) {
            blocks.push(RichBlock::Bullet(parse_inline(item)));
        } else {
            blocks.push(RichBlock::Paragraph(parse_inline(trimmed)));
        }
    }
    blocks
}

/// 行内解析：按 `**` 分割，奇数段为加粗；`**` 未闭合时整行按普通文本处理
fn parse_inline(line: &str) -> Vec<RichSpan> {
    let parts: Vec<&str> = line.split("**").collect();
    if parts.len() % 2 == 0 {
        // 未闭合
        return vec![RichSpan::Plain(line.to_string())];
    }
    parts
        .into_iter()
        .enumerate()
        .filter(|(_, part)| !part.is_empty())
        .map(|(i, part)| {
            if i % 2 == 1 {
                RichSpan::Strong(part.to_string())
            } else {
                RichSpan::Plain(part.to_string())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bold_span() {
        let blocks = parse_rich("**Warning**: risky");
        assert_eq!(
            blocks,
            vec![RichBlock::Paragraph(vec![
                RichSpan::Strong("Warning".to_string()),
                RichSpan::Plain(": risky".to_string()),
            ])]
        );
    }

    #[test]
    fn test_parse_bullets() {
        let blocks = parse_rich("Summary:\n- first\n* second");
        assert_eq!(blocks.len(), 3);
        assert!(matches!(blocks[0], RichBlock::Paragraph(_)));
        assert_eq!(
            blocks[1],
            RichBlock::Bullet(vec![RichSpan::Plain("first".to_string())])
        );
        assert_eq!(
            blocks[2],
            RichBlock::Bullet(vec![RichSpan::Plain("second".to_string())])
        );
    }

    #[test]
    fn test_parse_unclosed_bold_stays_plain() {
        let blocks = parse_rich("**oops");
        assert_eq!(
            blocks,
            vec![RichBlock::Paragraph(vec![RichSpan::Plain(
                "**oops".to_string()
            )])]
        );
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let blocks = parse_rich("a\n\n\nb");
        assert_eq!(blocks.len(), 2);
    }
}

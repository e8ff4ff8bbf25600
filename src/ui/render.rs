//! 界面渲染
//!
//! 上半部为输入表单（两个输入框 + 提交按钮，焦点高亮、Loading 置灰），
//! 下半部为报告区：Idle 显示提示，Loading 显示进度文案，Done 时把
//! ReportView 映射为带样式的文本块（错误红/成功绿标题、风险徽章按
//! 类别着色、富文本加粗与列表）。

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::core::{SessionPhase, UiState};
use crate::report::{render as render_report, ReportTone, RichBlock, RichSpan, RiskCategory};
use crate::ui::form::{FormFocus, InputForm};

/// 徽章颜色：高红、中黄、低绿
fn category_color(category: RiskCategory) -> Color {
    match category {
        RiskCategory::High => Color::Red,
        RiskCategory::Medium => Color::Yellow,
        RiskCategory::Low => Color::Green,
    }
}

/// 将内容按宽度换行（按字符数，避免在 UTF-8 中间截断）
fn wrap_text(s: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![s.to_string()];
    }
    let mut lines = Vec::new();
    for para in s.split('\n') {
        let mut line = String::new();
        for ch in para.chars() {
            if line.chars().count() >= width {
                lines.push(std::mem::take(&mut line));
            }
            line.push(ch);
        }
        if !line.is_empty() {
            lines.push(line);
        }
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// 富文本块 → 带样式的行；加粗片段用青色粗体，列表项加「• 」前缀
fn rich_lines(blocks: &[RichBlock]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for block in blocks {
        let mut spans: Vec<Span> = Vec::new();
        if matches!(block, RichBlock::Bullet(_)) {
            spans.push(Span::styled("  • ", Style::default().fg(Color::Cyan)));
        }
        for piece in block.spans() {
            match piece {
                RichSpan::Plain(text) => spans.push(Span::raw(text.clone())),
                RichSpan::Strong(text) => spans.push(Span::styled(
                    text.clone(),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                )),
            }
        }
        lines.push(Line::from(spans));
    }
    lines
}

/// 绘制一帧：表单区（标题含会话阶段）+ 报告区
pub fn draw(f: &mut Frame, state: &UiState, form: &InputForm, report_scroll: u16) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(5)])
        .split(f.area());

    draw_form(f, chunks[0], state, form);
    draw_report(f, chunks[1], state, report_scroll);
}

fn field_style(focused: bool, locked: bool) -> Style {
    if locked {
        Style::default().fg(Color::DarkGray)
    } else if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    }
}

fn draw_form(f: &mut Frame, area: Rect, state: &UiState, form: &InputForm) {
    let phase_str = match state.phase {
        SessionPhase::Idle => "空闲",
        SessionPhase::Loading => "分析中…",
        SessionPhase::Done => "完成",
    };
    let locked = state.input_locked();

    let outer = Block::default()
        .title(format!(" RISK SCANNER │ {} ", phase_str))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(inner);

    let target = Paragraph::new(form.target.as_str()).block(
        Block::default()
            .title(" Target Contract Address ")
            .borders(Borders::ALL)
            .border_style(field_style(form.focus == FormFocus::Target, locked)),
    );
    f.render_widget(target, rows[0]);

    let payload = Paragraph::new(form.payload.as_str()).block(
        Block::default()
            .title(" Call Data Payload ")
            .borders(Borders::ALL)
            .border_style(field_style(form.focus == FormFocus::Payload, locked)),
    );
    f.render_widget(payload, rows[1]);

    let submit_label = if locked {
        " ANALYZING NETWORK... "
    } else {
        " [ EJECUTAR ANÁLISIS ] "
    };
    let submit = Paragraph::new(Line::from(Span::styled(
        submit_label,
        field_style(form.focus == FormFocus::Submit, locked).add_modifier(Modifier::BOLD),
    )));
    f.render_widget(submit, rows[2]);
}

fn draw_report(f: &mut Frame, area: Rect, state: &UiState, report_scroll: u16) {
    let hint = " Tab 切换焦点 │ Enter 提交 │ ↑↓ 滚动 │ Esc/Ctrl+Q 退出 ";

    let (border_color, title, lines) = match (&state.phase, &state.result) {
        (SessionPhase::Loading, _) => (
            Color::Yellow,
            " SCANNING ".to_string(),
            vec![Line::from("正在请求远端分析服务…")],
        ),
        (_, Some(result)) => {
            let view = render_report(result);
            let (color, title) = match view.tone {
                ReportTone::Error => (Color::Red, " ! SYSTEM ERROR ! "),
                ReportTone::Success => (Color::Green, " > ANALYSIS COMPLETE "),
            };
            (color, title.to_string(), report_lines(&view, &area))
        }
        _ => (
            Color::Blue,
            " STANDBY ".to_string(),
            vec![Line::from("输入目标地址与调用数据后提交。")],
        ),
    };

    let block = Block::default()
        .title(title)
        .title_bottom(Line::from(Span::styled(
            hint,
            Style::default().fg(Color::DarkGray),
        )))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((report_scroll, 0));
    f.render_widget(paragraph, area);
}

/// ReportView → 文本行：徽章、函数、参数、分析说明四个块按需出现
fn report_lines(view: &crate::report::ReportView, area: &Rect) -> Vec<Line<'static>> {
    let content_width = area.width.saturating_sub(2).max(40) as usize;
    let mut lines: Vec<Line> = Vec::new();

    if let Some(badge) = &view.badge {
        lines.push(Line::from(vec![
            Span::styled("RISK LEVEL: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!(" {} ", badge.label),
                Style::default()
                    .fg(Color::Black)
                    .bg(category_color(badge.category))
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "// DETECTED FUNCTION",
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(Span::styled(
        view.function_signature.clone(),
        Style::default().fg(Color::Magenta),
    )));
    lines.push(Line::from(""));

    if !view.arguments.is_empty() {
        lines.push(Line::from(Span::styled(
            "// DECODED PARAMS",
            Style::default().fg(Color::DarkGray),
        )));
        for (idx, arg) in &view.arguments {
            for (i, wrapped) in wrap_text(arg, content_width.saturating_sub(6)).into_iter().enumerate() {
                let prefix = if i == 0 {
                    format!("[{}] ", idx)
                } else {
                    "    ".to_string()
                };
                lines.push(Line::from(vec![
                    Span::styled(prefix, Style::default().fg(Color::Cyan)),
                    Span::raw(wrapped),
                ]));
            }
        }
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "// SYSTEM ANALYSIS",
        Style::default().fg(Color::DarkGray),
    )));
    lines.extend(rich_lines(&view.analysis));

    lines
}

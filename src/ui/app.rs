//! TUI 应用主循环
//!
//! 进入全屏/原始模式，轮询 state_rx 与键盘事件：未锁定时按键驱动输入表单，
//! Enter 在两字段非空时把请求交给编排器（否则静默忽略）；每帧用 draw
//! 渲染会话状态与表单。Loading 期间表单只读，报告区显示进度。

use std::io::{self, Stdout};

use crossterm::{
    event::KeyCode,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::{mpsc, watch};

use crate::core::{Command, UiState};
use crate::ui::form::{FormFocus, InputForm};
use crate::ui::render::draw;

/// 运行 TUI：启用原始模式与全屏，循环 poll 事件 + 渲染，退出时恢复终端
pub async fn run_app(
    state_rx: watch::Receiver<UiState>,
    cmd_tx: mpsc::UnboundedSender<Command>,
) -> anyhow::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let event_handler = super::event::EventHandler::new(cmd_tx.clone());
    let mut form = InputForm::default();
    let mut report_scroll = 0u16;

    loop {
        let state = state_rx.borrow().clone();

        if let Ok(Some(ev)) = event_handler.poll() {
            match ev {
                super::event::AppEvent::Command(cmd) => {
                    if matches!(cmd, Command::Quit) {
                        let _ = cmd_tx.send(Command::Quit);
                        break;
                    }
                }
                super::event::AppEvent::Key(key) if !state.input_locked() => match key.code {
                    KeyCode::Enter => {
                        // 表单负责非空校验；不满足时静默忽略
                        if let Some(req) = form.submit() {
                            report_scroll = 0;
                            event_handler.send_submit(req);
                        }
                    }
                    KeyCode::Tab => form.focus_next(),
                    KeyCode::BackTab => form.focus_prev(),
                    KeyCode::Backspace => form.backspace(),
                    KeyCode::Char(c) => form.push_char(c),
                    KeyCode::Up => {
                        if form.focus == FormFocus::Submit {
                            report_scroll = report_scroll.saturating_sub(1);
                        }
                    }
                    KeyCode::Down => {
                        if form.focus == FormFocus::Submit {
                            report_scroll = report_scroll.saturating_add(1);
                        }
                    }
                    _ => {}
                },
                _ => {}
            }
        }

        terminal.draw(|f| {
            draw(f, &state, &form, report_scroll);
        })?;

        tokio::task::yield_now().await;
    }

    restore_terminal(&mut terminal)?;
    Ok(())
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> anyhow::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

//! 状态定义：会话阶段与 UI 投影
//!
//! 一次会话 = 一次「提交 → 展示」周期。phase 是唯一的真值来源：
//! 输入锁定与渲染分支都从它推导；result 在每轮提交时整体替换。

use serde::Serialize;

use crate::model::AnalysisResult;

/// 会话阶段：空闲（初始）→ 请求中 → 完成；Done 后可再次提交
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum SessionPhase {
    Idle,
    Loading,
    Done,
}

/// UI 看到的「投影」状态，轻量且易于渲染
#[derive(Clone, Debug, Serialize)]
pub struct UiState {
    pub phase: SessionPhase,
    pub result: Option<AnalysisResult>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            phase: SessionPhase::Idle,
            result: None,
        }
    }
}

impl UiState {
    /// Loading 期间输入字段只读、提交不可用
    pub fn input_locked(&self) -> bool {
        self.phase == SessionPhase::Loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = UiState::default();
        assert_eq!(state.phase, SessionPhase::Idle);
        assert!(state.result.is_none());
        assert!(!state.input_locked());
    }

    #[test]
    fn test_loading_locks_input() {
        let state = UiState {
            phase: SessionPhase::Loading,
            result: None,
        };
        assert!(state.input_locked());
    }
}

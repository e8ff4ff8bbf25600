//! 输入表单（Input Collector）
//!
//! 持有 target / payload 两个不透明字符串字段与焦点位置。submit 仅在两字段
//! 均非空时产出请求，否则静默拒绝（不报错、不清空）；除把请求交给编排器外
//! 无任何副作用。Loading 期间的只读控制由 app 层依据会话状态施加。

use crate::model::AnalysisRequest;

/// 表单焦点：两个输入框 + 提交按钮，Tab/BackTab 循环切换
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormFocus {
    #[default]
    Target,
    Payload,
    Submit,
}

/// 输入表单：字段内容在提交后保留，便于复查或微调后重新提交
#[derive(Debug, Clone, Default)]
pub struct InputForm {
    pub target: String,
    pub payload: String,
    pub focus: FormFocus,
}

impl InputForm {
    /// 两字段均非空时产出请求；否则 None（提交被静默拦下）
    pub fn submit(&self) -> Option<AnalysisRequest> {
        if self.target.is_empty() || self.payload.is_empty() {
            return None;
        }
        Some(AnalysisRequest::new(
            self.target.clone(),
            self.payload.clone(),
        ))
    }

    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            FormFocus::Target => FormFocus::Payload,
            FormFocus::Payload => FormFocus::Submit,
            FormFocus::Submit => FormFocus::Target,
        };
    }

    pub fn focus_prev(&mut self) {
        self.focus = match self.focus {
            FormFocus::Target => FormFocus::Submit,
            FormFocus::Payload => FormFocus::Target,
            FormFocus::Submit => FormFocus::Payload,
        };
    }

    pub fn push_char(&mut self, c: char) {
        match self.focus {
            FormFocus::Target => self.target.push(c),
            FormFocus::Payload => self.payload.push(c),
            FormFocus::Submit => {}
        }
    }

    pub fn backspace(&mut self) {
        match self.focus {
            FormFocus::Target => {
                self.target.pop();
            }
            FormFocus::Payload => {
                self.payload.pop();
            }
            FormFocus::Submit => {}
        }
    }
}

//! 확정된 레이블을 받아 문장 단위로 기록하는 세션
//!
//! `end` 레이블은 조합기로 보내지 않고 현재 문장을 확정하는 데 사용합니다.

use crate::core::assembler::HangulAssembler;
use crate::core::token::{Command, Token};

/// 레이블 하나를 처리한 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Update {
    /// 조합 중인 전체 텍스트
    Composing(String),
    /// 확정된 문장
    Committed(String),
    /// 확정할 텍스트 없이 `end`가 들어옴
    Ignored,
}

/// 문장 기록 세션
#[derive(Debug, Clone, Default)]
pub struct Transcriber {
    assembler: HangulAssembler,
    history: Vec<String>,
}

impl Transcriber {
    pub fn new() -> Self {
        Self::default()
    }

    /// 확정된 레이블 하나 처리
    pub fn feed(&mut self, label: &str) -> Update {
        if Token::parse(label) == Some(Token::Command(Command::End)) {
            return self.commit();
        }
        Update::Composing(self.assembler.add_symbol(label))
    }

    /// 현재 문장 확정
    pub fn commit(&mut self) -> Update {
        let text = self.assembler.get_current_text_and_reset();
        if text.is_empty() {
            return Update::Ignored;
        }
        log::info!("문장 확정: {}", text);
        self.history.push(text.clone());
        Update::Committed(text)
    }

    /// 조합 중인 텍스트
    pub fn current_text(&self) -> String {
        self.assembler.text()
    }

    /// 확정된 문장 목록 (확정 순서)
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// 남은 텍스트를 확정하고 전체 문장 목록 반환
    pub fn finish(mut self) -> Vec<String> {
        self.commit();
        self.history
    }
}

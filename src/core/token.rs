//! 제스처 레이블 -> 입력 토큰 매핑

use crate::core::unicode::{is_choseong, is_jungseong};

/// 제어 명령
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// 다음 자음을 쌍자음으로
    Shift,
    /// 띄어쓰기
    Space,
    /// 마지막 입력 한 단계 지우기
    Backspace,
    /// 문장 확정 (조합기 밖에서 처리)
    End,
}

impl Command {
    /// 레이블 문자열을 명령으로 변환
    /// `b_space`는 분류기가 내보내는 백스페이스 레이블
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "shift" => Some(Command::Shift),
            "space" => Some(Command::Space),
            "backspace" | "b_space" => Some(Command::Backspace),
            "end" => Some(Command::End),
            _ => None,
        }
    }
}

/// 조합기 입력 토큰
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Command(Command),
    /// 초성 표에 있는 자음 (호환용 자모)
    Consonant(char),
    /// 중성 표에 있는 모음 (호환용 자모)
    Vowel(char),
}

impl Token {
    /// 레이블 하나를 토큰으로 변환
    /// 어떤 범주에도 속하지 않는 레이블은 None 반환
    pub fn parse(label: &str) -> Option<Self> {
        let label = label.trim();
        if let Some(cmd) = Command::from_label(label) {
            return Some(Token::Command(cmd));
        }

        let mut chars = label.chars();
        let c = chars.next()?;
        if chars.next().is_some() {
            return None;
        }

        if is_choseong(c) {
            Some(Token::Consonant(c))
        } else if is_jungseong(c) {
            Some(Token::Vowel(c))
        } else {
            None
        }
    }
}

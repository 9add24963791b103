//! 제스처 토큰 단위 한글 조합기
//!
//! 토큰 하나가 들어올 때마다 마지막 글자만 고쳐 쓰는 방식으로 동작합니다.
//! 마지막 글자 이전의 글자는 확정된 상태이며 다시 바뀌지 않습니다.
//!
//! ```
//! use suhwa::HangulAssembler;
//!
//! let mut assembler = HangulAssembler::new();
//! for label in ["ㄱ", "ㅏ", "ㄴ", "ㅏ"] {
//!     assembler.add_symbol(label);
//! }
//! assert_eq!(assembler.text(), "가나");
//! ```

use crate::core::error::AssembleResult;
use crate::core::token::{Command, Token};
use crate::core::unicode::{
    combine_jongseong, combine_jungseong, compose, decompose, double_consonant, is_choseong,
    is_jongseong, split_jongseong, Syllable,
};

/// 한글 조합기
#[derive(Debug, Clone, Default)]
pub struct HangulAssembler {
    /// 확정된 글자들
    committed: String,
    /// 조합 중인 마지막 글자 (None이면 버퍼가 비어 있음)
    tail: Option<char>,
    /// shift 명령 직후에만 true
    shift: bool,
}

impl HangulAssembler {
    /// 빈 조합기 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 레이블 하나를 입력하고 현재 전체 텍스트를 반환
    /// 알 수 없는 레이블은 무시
    pub fn add_symbol(&mut self, label: &str) -> String {
        match Token::parse(label) {
            Some(token) => self.add_token(token),
            None => {
                log::debug!("알 수 없는 레이블 무시: {:?}", label);
                self.text()
            }
        }
    }

    /// 토큰 하나를 입력하고 현재 전체 텍스트를 반환
    pub fn add_token(&mut self, token: Token) -> String {
        log::trace!("토큰 입력: {:?}", token);
        let result = match token {
            Token::Command(cmd) => self.process_command(cmd),
            Token::Consonant(c) => self.process_consonant(c),
            Token::Vowel(v) => self.process_vowel(v),
        };
        if let Err(e) = result {
            log::error!("조합 실패 ({:?}): {}", token, e);
        }
        self.text()
    }

    /// 현재 텍스트 (조합 중인 글자 포함)
    pub fn text(&self) -> String {
        let mut text = self.committed.clone();
        text.extend(self.tail);
        text
    }

    pub fn is_empty(&self) -> bool {
        self.tail.is_none()
    }

    pub fn is_shift_active(&self) -> bool {
        self.shift
    }

    /// 현재 텍스트를 반환하고 조합기를 비움
    pub fn get_current_text_and_reset(&mut self) -> String {
        let text = self.text();
        self.committed.clear();
        self.tail = None;
        self.shift = false;
        text
    }

    fn process_command(&mut self, cmd: Command) -> AssembleResult<()> {
        match cmd {
            Command::Shift => self.shift = true,
            Command::Space => self.push(' '),
            Command::Backspace => return self.process_backspace(),
            // 문장 확정은 get_current_text_and_reset에서 처리
            Command::End => {}
        }
        Ok(())
    }

    fn process_backspace(&mut self) -> AssembleResult<()> {
        let Some(last) = self.tail else {
            return Ok(());
        };

        match decompose(last) {
            // 공백, 낱자모 -> 삭제
            None => self.pop(),
            // 받침 있음 -> 겹받침은 첫 자음만 남기고, 홑받침은 제거
            Some(
                syllable @ Syllable {
                    trailing: Some(t), ..
                },
            ) => {
                let trailing = split_jongseong(t).map(|(first, _)| first);
                self.replace(Syllable { trailing, ..syllable }.compose()?);
            }
            // 받침 없음 -> 초성만 남김
            Some(Syllable { leading, .. }) => self.replace(leading),
        }
        Ok(())
    }

    fn process_consonant(&mut self, c: char) -> AssembleResult<()> {
        let c = match double_consonant(c) {
            Some(doubled) if self.shift => doubled,
            _ => c,
        };
        self.shift = false;

        if let Some(syllable) = self.tail.and_then(decompose) {
            match syllable.trailing {
                None if is_jongseong(c) => {
                    self.replace(
                        Syllable {
                            trailing: Some(c),
                            ..syllable
                        }
                        .compose()?,
                    );
                    return Ok(());
                }
                Some(t) => {
                    if let Some(compound) = combine_jongseong(t, c) {
                        self.replace(
                            Syllable {
                                trailing: Some(compound),
                                ..syllable
                            }
                            .compose()?,
                        );
                        return Ok(());
                    }
                }
                None => {}
            }
        }

        self.push(c);
        Ok(())
    }

    fn process_vowel(&mut self, v: char) -> AssembleResult<()> {
        self.shift = false;

        let Some(last) = self.tail else {
            self.push(v);
            return Ok(());
        };

        // 초성만 있음 -> 초성 + 중성
        if is_choseong(last) {
            self.replace(compose(last, v, None)?);
            return Ok(());
        }

        if let Some(syllable) = decompose(last) {
            if let Some(t) = syllable.trailing {
                // 연음: 겹받침은 둘째 자음만, 홑받침은 전체가 다음 글자 초성으로
                let (remaining, next_leading) = match split_jongseong(t) {
                    Some((first, second)) => (Some(first), second),
                    None => (None, t),
                };
                let current = Syllable {
                    trailing: remaining,
                    ..syllable
                }
                .compose()?;
                let next = compose(next_leading, v, None)?;
                self.replace(current);
                self.push(next);
                return Ok(());
            }

            if let Some(diphthong) = combine_jungseong(syllable.vowel, v) {
                self.replace(
                    Syllable {
                        vowel: diphthong,
                        ..syllable
                    }
                    .compose()?,
                );
                return Ok(());
            }
        }

        self.push(v);
        Ok(())
    }

    /// 새 글자 추가. 기존 마지막 글자는 확정됨
    fn push(&mut self, c: char) {
        if let Some(prev) = self.tail.replace(c) {
            self.committed.push(prev);
        }
    }

    /// 마지막 글자 교체
    fn replace(&mut self, c: char) {
        self.tail = Some(c);
    }

    /// 마지막 글자 삭제. 직전 글자가 다시 마지막 글자가 됨
    fn pop(&mut self) {
        self.tail = self.committed.pop();
    }
}

//! 한글 조합 에러 정의

use thiserror::Error;

/// 음절 조합 실패
///
/// 정상 입력 경로에서는 발생하지 않으며, 발생 시 내부 불변식 위반으로 취급합니다.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssembleError {
    /// 초성/중성/종성 중 하나가 해당 자모 표에 없음
    #[error("조합할 수 없는 자모: 초성={leading:?}, 중성={vowel:?}, 종성={trailing:?}")]
    InvalidSyllableComponent {
        leading: char,
        vowel: char,
        trailing: Option<char>,
    },
}

/// 조합 결과 타입
pub type AssembleResult<T> = std::result::Result<T, AssembleError>;

//! 유니코드 한글 조합/분해 유틸리티
//!
//! 자모는 모두 호환용 자모(U+3131 ~ U+3163)로 표현합니다.
//! 초성, 종성 표가 같은 문자를 공유하므로 하나의 문자가 여러 표에 속할 수 있습니다.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::core::error::{AssembleError, AssembleResult};

/// 한글 음절 시작 코드포인트 (가)
const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;

/// 초성 개수
const CHOSEONG_COUNT: u32 = 19;
/// 중성 개수
const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
const JONGSEONG_COUNT: u32 = 28;
/// 완성형 음절 개수 (19 × 21 × 28)
const SYLLABLE_COUNT: u32 = CHOSEONG_COUNT * JUNGSEONG_COUNT * JONGSEONG_COUNT;

/// 초성 표 (인덱스 = 초성 인덱스)
pub const CHOSEONG: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ',
    'ㅌ', 'ㅍ', 'ㅎ',
];

/// 중성 표 (인덱스 = 중성 인덱스)
pub const JUNGSEONG: [char; 21] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ', 'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ', 'ㅞ',
    'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

/// 종성 표. 종성 인덱스는 이 표의 위치 + 1 (0 = 종성 없음)
pub const JONGSEONG: [char; 27] = [
    'ㄱ', 'ㄲ', 'ㄳ', 'ㄴ', 'ㄵ', 'ㄶ', 'ㄷ', 'ㄹ', 'ㄺ', 'ㄻ', 'ㄼ', 'ㄽ', 'ㄾ', 'ㄿ', 'ㅀ', 'ㅁ',
    'ㅂ', 'ㅄ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// 쌍자음 표 (shift 입력 후 자음)
const DOUBLE_CONSONANTS: [(char, char); 5] = [
    ('ㄱ', 'ㄲ'),
    ('ㄷ', 'ㄸ'),
    ('ㅂ', 'ㅃ'),
    ('ㅅ', 'ㅆ'),
    ('ㅈ', 'ㅉ'),
];

/// 겹받침 표: (기존 종성, 새 자음) -> 겹받침
const COMPOUND_JONGSEONG: [((char, char), char); 11] = [
    (('ㄱ', 'ㅅ'), 'ㄳ'),
    (('ㄴ', 'ㅈ'), 'ㄵ'),
    (('ㄴ', 'ㅎ'), 'ㄶ'),
    (('ㄹ', 'ㄱ'), 'ㄺ'),
    (('ㄹ', 'ㅁ'), 'ㄻ'),
    (('ㄹ', 'ㅂ'), 'ㄼ'),
    (('ㄹ', 'ㅅ'), 'ㄽ'),
    (('ㄹ', 'ㅌ'), 'ㄾ'),
    (('ㄹ', 'ㅍ'), 'ㄿ'),
    (('ㄹ', 'ㅎ'), 'ㅀ'),
    (('ㅂ', 'ㅅ'), 'ㅄ'),
];

/// 이중모음 표: (기존 중성, 새 모음) -> 복합 모음
const DIPHTHONGS: [((char, char), char); 7] = [
    (('ㅗ', 'ㅏ'), 'ㅘ'),
    (('ㅗ', 'ㅐ'), 'ㅙ'),
    (('ㅗ', 'ㅣ'), 'ㅚ'),
    (('ㅜ', 'ㅓ'), 'ㅝ'),
    (('ㅜ', 'ㅔ'), 'ㅞ'),
    (('ㅜ', 'ㅣ'), 'ㅟ'),
    (('ㅡ', 'ㅣ'), 'ㅢ'),
];

lazy_static! {
    static ref CHOSEONG_INDEX: HashMap<char, u32> = index_table(&CHOSEONG, 0);
    static ref JUNGSEONG_INDEX: HashMap<char, u32> = index_table(&JUNGSEONG, 0);
    static ref JONGSEONG_INDEX: HashMap<char, u32> = index_table(&JONGSEONG, 1);
    static ref DOUBLE_MAP: HashMap<char, char> = DOUBLE_CONSONANTS.iter().copied().collect();
    static ref COMPOUND_MAP: HashMap<(char, char), char> =
        COMPOUND_JONGSEONG.iter().copied().collect();
    /// 겹받침 -> (첫 자음, 둘째 자음). 백스페이스와 연음 분리에 사용
    static ref COMPOUND_SPLIT_MAP: HashMap<char, (char, char)> = COMPOUND_JONGSEONG
        .iter()
        .map(|&(pair, compound)| (compound, pair))
        .collect();
    static ref DIPHTHONG_MAP: HashMap<(char, char), char> = DIPHTHONGS.iter().copied().collect();
}

fn index_table(table: &[char], offset: u32) -> HashMap<char, u32> {
    table
        .iter()
        .enumerate()
        .map(|(i, &c)| (c, i as u32 + offset))
        .collect()
}

/// 분해된 음절 (초성 + 중성 + 선택적 종성)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Syllable {
    pub leading: char,
    pub vowel: char,
    pub trailing: Option<char>,
}

impl Syllable {
    /// 완성형 문자로 다시 조합
    pub fn compose(&self) -> AssembleResult<char> {
        compose(self.leading, self.vowel, self.trailing)
    }
}

/// 초성 인덱스 (0~18)
pub fn choseong_index(c: char) -> Option<u32> {
    CHOSEONG_INDEX.get(&c).copied()
}

/// 중성 인덱스 (0~20)
pub fn jungseong_index(c: char) -> Option<u32> {
    JUNGSEONG_INDEX.get(&c).copied()
}

/// 종성 인덱스 (1~27)
pub fn jongseong_index(c: char) -> Option<u32> {
    JONGSEONG_INDEX.get(&c).copied()
}

pub fn is_choseong(c: char) -> bool {
    CHOSEONG_INDEX.contains_key(&c)
}

pub fn is_jungseong(c: char) -> bool {
    JUNGSEONG_INDEX.contains_key(&c)
}

pub fn is_jongseong(c: char) -> bool {
    JONGSEONG_INDEX.contains_key(&c)
}

/// 문자가 완성형 한글(가-힣)인지 확인
pub fn is_syllable(c: char) -> bool {
    let code = c as u32;
    (HANGUL_SYLLABLE_BASE..HANGUL_SYLLABLE_BASE + SYLLABLE_COUNT).contains(&code)
}

/// 완성형 한글을 초성/중성/종성 자모로 분해
/// 완성형 음절이 아니면 None
pub fn decompose(c: char) -> Option<Syllable> {
    if !is_syllable(c) {
        return None;
    }
    let offset = c as u32 - HANGUL_SYLLABLE_BASE;
    let jongseong = offset % JONGSEONG_COUNT;
    let jungseong = (offset / JONGSEONG_COUNT) % JUNGSEONG_COUNT;
    let choseong = offset / (JUNGSEONG_COUNT * JONGSEONG_COUNT);
    Some(Syllable {
        leading: CHOSEONG[choseong as usize],
        vowel: JUNGSEONG[jungseong as usize],
        trailing: match jongseong {
            0 => None,
            i => Some(JONGSEONG[(i - 1) as usize]),
        },
    })
}

/// 초성/중성/종성 자모로 완성된 한글 음절 생성
/// - leading: 초성 표에 있는 자모
/// - vowel: 중성 표에 있는 자모
/// - trailing: None(종성 없음) 또는 종성 표에 있는 자모
pub fn compose(leading: char, vowel: char, trailing: Option<char>) -> AssembleResult<char> {
    let invalid = || AssembleError::InvalidSyllableComponent {
        leading,
        vowel,
        trailing,
    };
    let choseong = choseong_index(leading).ok_or_else(invalid)?;
    let jungseong = jungseong_index(vowel).ok_or_else(invalid)?;
    let jongseong = match trailing {
        None => 0,
        Some(t) => jongseong_index(t).ok_or_else(invalid)?,
    };
    let code = HANGUL_SYLLABLE_BASE
        + (choseong * JUNGSEONG_COUNT + jungseong) * JONGSEONG_COUNT
        + jongseong;
    char::from_u32(code).ok_or_else(invalid)
}

/// 평자음을 된소리(쌍자음)로 변환 (ㄱ -> ㄲ 등)
pub fn double_consonant(c: char) -> Option<char> {
    DOUBLE_MAP.get(&c).copied()
}

/// 두 종성을 겹받침으로 조합
/// 단일 종성 + 새 자음 조합만 정의됨 (세 자음 조합 없음)
pub fn combine_jongseong(first: char, second: char) -> Option<char> {
    COMPOUND_MAP.get(&(first, second)).copied()
}

/// 겹받침을 (남는 종성, 분리되는 자음)으로 분리
/// 단일 종성이면 None
pub fn split_jongseong(compound: char) -> Option<(char, char)> {
    COMPOUND_SPLIT_MAP.get(&compound).copied()
}

/// 두 중성을 복합 모음으로 조합
pub fn combine_jungseong(first: char, second: char) -> Option<char> {
    DIPHTHONG_MAP.get(&(first, second)).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sizes() {
        assert_eq!(CHOSEONG.len() as u32, CHOSEONG_COUNT);
        assert_eq!(JUNGSEONG.len() as u32, JUNGSEONG_COUNT);
        assert_eq!(JONGSEONG.len() as u32 + 1, JONGSEONG_COUNT);
        assert_eq!(SYLLABLE_COUNT, 11172);
    }

    #[test]
    fn test_compose() {
        assert_eq!(compose('ㄱ', 'ㅏ', None), Ok('가'));
        assert_eq!(compose('ㄱ', 'ㅏ', Some('ㄱ')), Ok('각'));
        assert_eq!(compose('ㅎ', 'ㅏ', Some('ㄴ')), Ok('한'));
        assert_eq!(compose('ㄱ', 'ㅡ', Some('ㄹ')), Ok('글'));
        assert_eq!(compose('ㄱ', 'ㅏ', Some('ㄼ')), Ok('갋'));
        assert_eq!(compose('ㅎ', 'ㅣ', Some('ㅎ')), Ok('힣'));
    }

    #[test]
    fn test_compose_invalid() {
        assert!(compose('x', 'ㅏ', None).is_err());
        assert!(compose('ㄱ', 'ㄱ', None).is_err());
        // ㄸ은 종성이 될 수 없음
        assert!(compose('ㄱ', 'ㅏ', Some('ㄸ')).is_err());
        // 모음은 초성이 될 수 없음
        assert!(compose('ㅏ', 'ㅏ', None).is_err());
        assert_eq!(
            compose('x', 'ㅏ', None),
            Err(AssembleError::InvalidSyllableComponent {
                leading: 'x',
                vowel: 'ㅏ',
                trailing: None,
            })
        );
    }

    #[test]
    fn test_decompose() {
        assert_eq!(
            decompose('가'),
            Some(Syllable {
                leading: 'ㄱ',
                vowel: 'ㅏ',
                trailing: None
            })
        );
        assert_eq!(
            decompose('값'),
            Some(Syllable {
                leading: 'ㄱ',
                vowel: 'ㅏ',
                trailing: Some('ㅄ')
            })
        );
        assert_eq!(
            decompose('힣'),
            Some(Syllable {
                leading: 'ㅎ',
                vowel: 'ㅣ',
                trailing: Some('ㅎ')
            })
        );

        // 완성형 음절이 아닌 문자
        assert_eq!(decompose('a'), None);
        assert_eq!(decompose(' '), None);
        assert_eq!(decompose('ㄱ'), None);
        assert_eq!(decompose('ㅏ'), None);
    }

    #[test]
    fn test_round_trip_all_syllables() {
        for &l in CHOSEONG.iter() {
            for &v in JUNGSEONG.iter() {
                let open = compose(l, v, None).unwrap();
                assert_eq!(decompose(open).unwrap().trailing, None);
                for &t in JONGSEONG.iter() {
                    let c = compose(l, v, Some(t)).unwrap();
                    assert_eq!(
                        decompose(c),
                        Some(Syllable {
                            leading: l,
                            vowel: v,
                            trailing: Some(t)
                        })
                    );
                }
            }
        }
    }

    #[test]
    fn test_syllable_compose() {
        let s = decompose('닭').unwrap();
        assert_eq!(s.compose(), Ok('닭'));
        let stripped = Syllable {
            trailing: None,
            ..s
        };
        assert_eq!(stripped.compose(), Ok('다'));
        let invalid = Syllable {
            trailing: Some('ㄸ'),
            ..s
        };
        assert!(invalid.compose().is_err());
    }

    #[test]
    fn test_is_syllable_bounds() {
        assert!(is_syllable('가'));
        assert!(is_syllable('힣'));
        assert!(!is_syllable('\u{ABFF}'));
        assert!(!is_syllable('\u{D7A4}'));
    }

    #[test]
    fn test_category_membership() {
        assert!(is_choseong('ㄸ'));
        assert!(!is_jongseong('ㄸ'));
        assert!(is_jongseong('ㄳ'));
        assert!(!is_choseong('ㄳ'));
        assert!(is_jungseong('ㅢ'));
        assert_eq!(choseong_index('ㅎ'), Some(18));
        assert_eq!(jungseong_index('ㅣ'), Some(20));
        assert_eq!(jongseong_index('ㄱ'), Some(1));
        assert_eq!(jongseong_index('ㅎ'), Some(27));
    }

    #[test]
    fn test_double_consonant() {
        assert_eq!(double_consonant('ㄱ'), Some('ㄲ'));
        assert_eq!(double_consonant('ㅈ'), Some('ㅉ'));
        assert_eq!(double_consonant('ㄴ'), None);
    }

    #[test]
    fn test_combine_jongseong() {
        assert_eq!(combine_jongseong('ㄱ', 'ㅅ'), Some('ㄳ'));
        assert_eq!(combine_jongseong('ㄹ', 'ㄱ'), Some('ㄺ'));
        assert_eq!(combine_jongseong('ㅂ', 'ㅅ'), Some('ㅄ'));

        // 조합 불가
        assert_eq!(combine_jongseong('ㅅ', 'ㅂ'), None);
        assert_eq!(combine_jongseong('ㄳ', 'ㅅ'), None);
    }

    #[test]
    fn test_split_jongseong() {
        assert_eq!(split_jongseong('ㄳ'), Some(('ㄱ', 'ㅅ')));
        assert_eq!(split_jongseong('ㄺ'), Some(('ㄹ', 'ㄱ')));
        assert_eq!(split_jongseong('ㅄ'), Some(('ㅂ', 'ㅅ')));

        // 단일 종성은 분리 불가
        assert_eq!(split_jongseong('ㄱ'), None);
        assert_eq!(split_jongseong('ㄴ'), None);
    }

    #[test]
    fn test_split_inverts_combine() {
        for &((a, b), compound) in COMPOUND_JONGSEONG.iter() {
            assert_eq!(combine_jongseong(a, b), Some(compound));
            assert_eq!(split_jongseong(compound), Some((a, b)));
        }
    }

    #[test]
    fn test_combine_jungseong() {
        assert_eq!(combine_jungseong('ㅗ', 'ㅏ'), Some('ㅘ'));
        assert_eq!(combine_jungseong('ㅜ', 'ㅔ'), Some('ㅞ'));
        assert_eq!(combine_jungseong('ㅡ', 'ㅣ'), Some('ㅢ'));

        // 조합 불가
        assert_eq!(combine_jungseong('ㅏ', 'ㅏ'), None);
        assert_eq!(combine_jungseong('ㅘ', 'ㅣ'), None);
    }
}

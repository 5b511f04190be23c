//! 변환 결과 검사
//!
//! 완성형 음절, 낱자모, 그 밖의 문자 수를 세어 조합이 끝까지 되었는지 판단합니다.

use std::fmt;

use crate::core::unicode::is_syllable;

/// 변환 결과 구성
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Composition {
    /// 완성형 한글 음절 (가-힣)
    pub syllables: usize,
    /// 조합되지 못한 낱자모 (호환용 자모 U+3131 ~ U+318E)
    pub loose_jamo: usize,
    /// 그 밖의 문자
    pub other: usize,
}

impl Composition {
    /// 한글 문자(완성형 + 낱자모) 수
    pub fn hangul(&self) -> usize {
        self.syllables + self.loose_jamo
    }

    /// 한글 문자 중 낱자모 비율 (0.0 ~ 1.0), 한글이 없으면 0.0
    pub fn loose_jamo_ratio(&self) -> f32 {
        if self.hangul() == 0 {
            return 0.0;
        }
        self.loose_jamo as f32 / self.hangul() as f32
    }
}

impl fmt::Display for Composition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "음절 {}, 낱자모 {}, 기타 {}",
            self.syllables, self.loose_jamo, self.other
        )
    }
}

/// 호환용 자모 영역 문자인지 확인
pub fn is_loose_jamo(c: char) -> bool {
    (0x3131..=0x318E).contains(&(c as u32))
}

/// 문자열 구성 집계
pub fn inspect(text: &str) -> Composition {
    text.chars().fold(Composition::default(), |mut acc, c| {
        if is_syllable(c) {
            acc.syllables += 1;
        } else if is_loose_jamo(c) {
            acc.loose_jamo += 1;
        } else {
            acc.other += 1;
        }
        acc
    })
}

/// 낱자모가 하나라도 포함되어 있는지 검사
pub fn has_loose_jamo(text: &str) -> bool {
    text.chars().any(is_loose_jamo)
}

/// 한글 문자 중 낱자모 비율
pub fn loose_jamo_ratio(text: &str) -> f32 {
    inspect(text).loose_jamo_ratio()
}

/// 모든 한글이 완성형으로 조합되었는지 확인
///
/// - 빈 문자열이나 한글이 없는 문자열은 false
/// - 낱자모가 있으면 false
pub fn is_fully_composed(text: &str) -> bool {
    let composition = inspect(text);
    composition.syllables > 0 && composition.loose_jamo == 0
}

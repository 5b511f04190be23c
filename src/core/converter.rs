//! 영문 <-> 한글 통합 변환기

use serde::{Deserialize, Serialize};

use crate::core::assembler::Assembler;
use crate::core::jamo_mapper::{jamo_for_key, key_for_jamo};
use crate::core::unicode::decompose;

/// 변환 방향
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// 영문 키 입력 -> 한글 (dkssud -> 안녕)
    #[default]
    RomanToHangul,
    /// 한글 -> 영문 키 입력 (안녕 -> dkssud)
    HangulToRoman,
}

/// 주어진 방향으로 문자열 변환
///
/// 변환할 수 없는 문자(숫자, 특수문자, 매핑 없는 영문, 다른 문자 체계)는 그대로 유지
///
/// ```
/// use dubeol::{convert, Direction};
/// assert_eq!(convert("dkssudgktpdy", Direction::RomanToHangul), "안녕하세요");
/// assert_eq!(convert("안녕하세요", Direction::HangulToRoman), "dkssudgktpdy");
/// ```
pub fn convert(input: &str, direction: Direction) -> String {
    match direction {
        Direction::RomanToHangul => roman_to_hangul(input),
        Direction::HangulToRoman => hangul_to_roman(input),
    }
}

/// 영문 문자열을 한글 문자열로 변환
pub fn roman_to_hangul(input: &str) -> String {
    let mut assembler = Assembler::new();

    for c in input.chars() {
        if let Some(jamo) = jamo_for_key(c) {
            assembler.feed(jamo);
        } else {
            assembler.feed_passthrough(c);
        }
    }

    assembler.finish()
}

/// 한글 문자열을 두벌식 영문 키 시퀀스로 역변환
///
/// 키가 없는 자모(단독 복합 자모 등)와 한글이 아닌 문자는 그대로 유지
pub fn hangul_to_roman(input: &str) -> String {
    let mut result = String::with_capacity(input.len() * 3);

    for c in input.chars() {
        for jamo in decompose(c) {
            result.push(key_for_jamo(jamo).unwrap_or(jamo));
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_ignores_non_key_input() {
        // 영문 키가 아닌 입력은 조합에 참여하지 않음 (자모 글리프 포함)
        assert_eq!(roman_to_hangul("ㄱㅏ"), "ㄱㅏ");
        assert_eq!(roman_to_hangul("rk 가"), "가 가");
    }

    #[test]
    fn test_reverse_basic() {
        assert_eq!(hangul_to_roman("가"), "rk");
        assert_eq!(hangul_to_roman("한글"), "gksrmf");
        assert_eq!(hangul_to_roman("까"), "Rk");
    }

    #[test]
    fn test_reverse_complex() {
        assert_eq!(hangul_to_roman("완"), "dhks"); // ㅘ = ㅗ + ㅏ
        assert_eq!(hangul_to_roman("웬"), "dnps"); // ㅞ = ㅜ + ㅔ
        assert_eq!(hangul_to_roman("읽"), "dlfr"); // ㄺ = ㄹ + ㄱ
        assert_eq!(hangul_to_roman("없"), "djqt"); // ㅄ = ㅂ + ㅅ
    }

    #[test]
    fn test_reverse_loose_jamo() {
        assert_eq!(hangul_to_roman("ㄱㅏ"), "rk");
        // 단독 복합 자모는 대응 키가 없음
        assert_eq!(hangul_to_roman("ㅘ"), "ㅘ");
    }

    #[test]
    fn test_reverse_passthrough() {
        assert_eq!(hangul_to_roman("가1나"), "rk1sk");
        assert_eq!(hangul_to_roman("abc"), "abc");
    }

    #[test]
    fn test_direction_dispatch() {
        assert_eq!(convert("rk", Direction::RomanToHangul), "가");
        assert_eq!(convert("가", Direction::HangulToRoman), "rk");
        assert_eq!(convert("", Direction::RomanToHangul), "");
        assert_eq!(convert("", Direction::HangulToRoman), "");
    }

    #[test]
    fn test_direction_serde() {
        let json = serde_json::to_string(&Direction::HangulToRoman).unwrap();
        assert_eq!(json, "\"hangul_to_roman\"");
        let parsed: Direction = serde_json::from_str("\"roman_to_hangul\"").unwrap();
        assert_eq!(parsed, Direction::RomanToHangul);
        assert_eq!(Direction::default(), Direction::RomanToHangul);
    }
}

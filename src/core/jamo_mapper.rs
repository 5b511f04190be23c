//! 두벌식 자판 영문 키 <-> 한글 자모 매핑
//!
//! 매핑 테이블은 [`KEY_TABLE`] 하나뿐이며, 역방향(자모 -> 키) 맵은
//! 이 테이블에서 한 번만 만들어집니다.

use lazy_static::lazy_static;
use std::collections::HashMap;

/// 두벌식 자판 (영문 키, 자모 글리프)
///
/// 소문자 26개 + Shift 쌍자음/모음 7개 (R E Q T W O P)
#[rustfmt::skip]
pub const KEY_TABLE: [(char, char); 33] = [
    // 자음
    ('r', 'ㄱ'), ('R', 'ㄲ'), ('s', 'ㄴ'), ('e', 'ㄷ'), ('E', 'ㄸ'),
    ('f', 'ㄹ'), ('a', 'ㅁ'), ('q', 'ㅂ'), ('Q', 'ㅃ'), ('t', 'ㅅ'),
    ('T', 'ㅆ'), ('d', 'ㅇ'), ('w', 'ㅈ'), ('W', 'ㅉ'), ('c', 'ㅊ'),
    ('z', 'ㅋ'), ('x', 'ㅌ'), ('v', 'ㅍ'), ('g', 'ㅎ'),
    // 모음
    ('k', 'ㅏ'), ('o', 'ㅐ'), ('i', 'ㅑ'), ('O', 'ㅒ'), ('j', 'ㅓ'),
    ('p', 'ㅔ'), ('u', 'ㅕ'), ('P', 'ㅖ'), ('h', 'ㅗ'), ('y', 'ㅛ'),
    ('n', 'ㅜ'), ('b', 'ㅠ'), ('m', 'ㅡ'), ('l', 'ㅣ'),
];

lazy_static! {
    static ref KEY_TO_JAMO: HashMap<char, char> = KEY_TABLE.iter().copied().collect();
    static ref JAMO_TO_KEY: HashMap<char, char> =
        KEY_TABLE.iter().map(|&(key, jamo)| (jamo, key)).collect();
}

/// 영문 키 하나를 자모 글리프로 변환
/// 매핑에 없는 문자(숫자, 특수문자, Shift 대상이 아닌 대문자 등)는 None 반환
pub fn jamo_for_key(key: char) -> Option<char> {
    KEY_TO_JAMO.get(&key).copied()
}

/// 자모 글리프를 두벌식 영문 키로 변환
/// 복합 모음/종성(ㅘ, ㄺ 등)은 단일 키가 없으므로 None
pub fn key_for_jamo(jamo: char) -> Option<char> {
    JAMO_TO_KEY.get(&jamo).copied()
}

//! 유니코드 한글 음절 조합/분해
//!
//! 자모는 호환용 자모 글리프(U+3131 ~ U+3163) 하나로 표현합니다.
//! 음절 코드포인트 = 0xAC00 + (초성 * 21 + 중성) * 28 + 종성

/// 한글 음절 시작 코드포인트 (가)
pub const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;
/// 한글 음절 마지막 코드포인트 (힣)
pub const HANGUL_SYLLABLE_LAST: u32 =
    HANGUL_SYLLABLE_BASE + CHOSEONG_COUNT * JUNGSEONG_COUNT * JONGSEONG_COUNT - 1;

/// 초성 개수
pub const CHOSEONG_COUNT: u32 = 19;
/// 중성 개수
pub const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
pub const JONGSEONG_COUNT: u32 = 28;

/// 초성 인덱스 순서
#[rustfmt::skip]
pub const CHOSEONG: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ',
    'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// 중성 인덱스 순서
#[rustfmt::skip]
pub const JUNGSEONG: [char; 21] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ',
    'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ', 'ㅞ', 'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

/// 종성 인덱스 순서 (0 = 종성 없음)
#[rustfmt::skip]
pub const JONGSEONG: [Option<char>; 28] = [
    None,      Some('ㄱ'), Some('ㄲ'), Some('ㄳ'), Some('ㄴ'), Some('ㄵ'), Some('ㄶ'),
    Some('ㄷ'), Some('ㄹ'), Some('ㄺ'), Some('ㄻ'), Some('ㄼ'), Some('ㄽ'), Some('ㄾ'),
    Some('ㄿ'), Some('ㅀ'), Some('ㅁ'), Some('ㅂ'), Some('ㅄ'), Some('ㅅ'), Some('ㅆ'),
    Some('ㅇ'), Some('ㅈ'), Some('ㅊ'), Some('ㅋ'), Some('ㅌ'), Some('ㅍ'), Some('ㅎ'),
];

/// 복합 모음 -> (앞 모음, 뒤 모음)
pub const COMPLEX_VOWELS: [(char, (char, char)); 7] = [
    ('ㅘ', ('ㅗ', 'ㅏ')),
    ('ㅙ', ('ㅗ', 'ㅐ')),
    ('ㅚ', ('ㅗ', 'ㅣ')),
    ('ㅝ', ('ㅜ', 'ㅓ')),
    ('ㅞ', ('ㅜ', 'ㅔ')),
    ('ㅟ', ('ㅜ', 'ㅣ')),
    ('ㅢ', ('ㅡ', 'ㅣ')),
];

/// 복합 종성 -> (앞 자음, 뒤 자음)
pub const COMPLEX_FINALS: [(char, (char, char)); 11] = [
    ('ㄳ', ('ㄱ', 'ㅅ')),
    ('ㄵ', ('ㄴ', 'ㅈ')),
    ('ㄶ', ('ㄴ', 'ㅎ')),
    ('ㄺ', ('ㄹ', 'ㄱ')),
    ('ㄻ', ('ㄹ', 'ㅁ')),
    ('ㄼ', ('ㄹ', 'ㅂ')),
    ('ㄽ', ('ㄹ', 'ㅅ')),
    ('ㄾ', ('ㄹ', 'ㅌ')),
    ('ㄿ', ('ㄹ', 'ㅍ')),
    ('ㅀ', ('ㄹ', 'ㅎ')),
    ('ㅄ', ('ㅂ', 'ㅅ')),
];

/// 초성/중성/종성 인덱스로 완성된 한글 유니코드 생성
/// - choseong: 초성 인덱스 (0~18)
/// - jungseong: 중성 인덱스 (0~20)
/// - jongseong: 종성 인덱스 (0~27, 0 = 종성 없음)
pub fn compose_syllable(choseong: u32, jungseong: u32, jongseong: u32) -> Option<char> {
    if choseong >= CHOSEONG_COUNT || jungseong >= JUNGSEONG_COUNT || jongseong >= JONGSEONG_COUNT {
        return None;
    }
    let code = HANGUL_SYLLABLE_BASE
        + (choseong * JUNGSEONG_COUNT + jungseong) * JONGSEONG_COUNT
        + jongseong;
    char::from_u32(code)
}

/// 완성형 한글을 초성/중성/종성 인덱스로 분해
/// 반환: (초성 인덱스, 중성 인덱스, 종성 인덱스)
pub fn decompose_syllable(c: char) -> Option<(u32, u32, u32)> {
    let code = c as u32;
    if !is_syllable(c) {
        return None;
    }
    let offset = code - HANGUL_SYLLABLE_BASE;
    let jongseong = offset % JONGSEONG_COUNT;
    let jungseong = (offset / JONGSEONG_COUNT) % JUNGSEONG_COUNT;
    let choseong = offset / (JUNGSEONG_COUNT * JONGSEONG_COUNT);
    Some((choseong, jungseong, jongseong))
}

/// 완성형 한글 음절(가-힣)인지 확인
pub fn is_syllable(c: char) -> bool {
    (HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST).contains(&(c as u32))
}

/// 문자 하나를 자모 글리프 시퀀스로 분해
///
/// 완성형 음절이 아니면 `[c]` 그대로 반환합니다.
/// 복합 모음과 복합 종성은 두 개의 단순 자모로 펼칩니다.
///
/// ```
/// use dubeol::core::unicode::decompose;
/// assert_eq!(decompose('한'), vec!['ㅎ', 'ㅏ', 'ㄴ']);
/// assert_eq!(decompose('왔'), vec!['ㅇ', 'ㅗ', 'ㅏ', 'ㅆ']);
/// assert_eq!(decompose('!'), vec!['!']);
/// ```
pub fn decompose(c: char) -> Vec<char> {
    let Some((cho, jung, jong)) = decompose_syllable(c) else {
        return vec![c];
    };

    let mut jamo = Vec::with_capacity(5);
    jamo.push(CHOSEONG[cho as usize]);

    let vowel = JUNGSEONG[jung as usize];
    match split_vowel(vowel) {
        Some((first, second)) => jamo.extend([first, second]),
        None => jamo.push(vowel),
    }

    if let Some(last) = JONGSEONG[jong as usize] {
        match split_final(last) {
            Some((first, second)) => jamo.extend([first, second]),
            None => jamo.push(last),
        }
    }

    jamo
}

/// 자모 글리프의 초성 인덱스 (초성이 될 수 없으면 None)
pub fn choseong_index(c: char) -> Option<u32> {
    CHOSEONG.iter().position(|&j| j == c).map(|i| i as u32)
}

/// 자모 글리프의 중성 인덱스 (모음이 아니면 None)
pub fn jungseong_index(c: char) -> Option<u32> {
    JUNGSEONG.iter().position(|&j| j == c).map(|i| i as u32)
}

/// 자모 글리프의 종성 인덱스 (종성이 될 수 없으면 None)
/// ㄸ, ㅃ, ㅉ은 종성 불가
pub fn jongseong_index(c: char) -> Option<u32> {
    JONGSEONG.iter().position(|&j| j == Some(c)).map(|i| i as u32)
}

/// 모음 글리프인지 확인 (복합 모음 포함)
pub fn is_vowel(c: char) -> bool {
    jungseong_index(c).is_some()
}

/// 두 모음을 복합 모음으로 조합
pub fn combine_vowel(first: char, second: char) -> Option<char> {
    COMPLEX_VOWELS
        .iter()
        .find(|(_, pair)| *pair == (first, second))
        .map(|(compound, _)| *compound)
}

/// 두 자음을 복합 종성으로 조합
pub fn combine_final(first: char, second: char) -> Option<char> {
    COMPLEX_FINALS
        .iter()
        .find(|(_, pair)| *pair == (first, second))
        .map(|(compound, _)| *compound)
}

/// 복합 모음을 분리 (단순 모음이면 None)
pub fn split_vowel(vowel: char) -> Option<(char, char)> {
    COMPLEX_VOWELS
        .iter()
        .find(|(compound, _)| *compound == vowel)
        .map(|(_, pair)| *pair)
}

/// 복합 종성을 분리 (단일 종성이면 None)
pub fn split_final(last: char) -> Option<(char, char)> {
    COMPLEX_FINALS
        .iter()
        .find(|(compound, _)| *compound == last)
        .map(|(_, pair)| *pair)
}

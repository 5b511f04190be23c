//! 자모 시퀀스 -> 완성형 한글 조합기
//!
//! 입력 자모를 고정 크기 버퍼에 쌓아 두고, 종성 후보 뒤의 자모를 미리 본 뒤
//! 음절을 확정합니다. 두 모음 사이의 자음은 항상 뒤 음절의 초성이 됩니다.
//!
//! ```
//! use dubeol::core::assembler::Assembler;
//!
//! let mut assembler = Assembler::new();
//! for jamo in "ㄱㅏㄴㅣ".chars() {
//!     assembler.feed(jamo);
//! }
//! assert_eq!(assembler.finish(), "가니");
//! ```

use crate::core::unicode::{
    choseong_index, combine_final, combine_vowel, compose_syllable, is_vowel, jongseong_index,
    jungseong_index,
};

/// 버퍼 최대 길이: 초성, 중성, 종성 후보 두 개, 미리보기 한 개
const BUFFER_CAPACITY: usize = 5;

/// 확정 대기 중인 자모 버퍼 (고정 크기)
#[derive(Debug, Clone, Copy)]
struct JamoBuffer {
    slots: [char; BUFFER_CAPACITY],
    len: usize,
}

impl JamoBuffer {
    const fn new() -> Self {
        Self {
            slots: ['\0'; BUFFER_CAPACITY],
            len: 0,
        }
    }

    fn get(&self, index: usize) -> Option<char> {
        (index < self.len).then(|| self.slots[index])
    }

    fn push(&mut self, jamo: char) {
        debug_assert!(self.len < BUFFER_CAPACITY, "jamo buffer overflow");
        self.slots[self.len] = jamo;
        self.len += 1;
    }

    /// 앞에서 `count`개 제거
    fn consume(&mut self, count: usize) {
        let count = count.min(self.len);
        self.slots.copy_within(count..self.len, 0);
        self.len -= count;
    }

    /// `index` 위치의 자모를 `jamo`로 바꾸고 바로 뒤 자모를 제거
    fn merge_at(&mut self, index: usize, jamo: char) {
        self.slots[index] = jamo;
        self.slots.copy_within(index + 2..self.len, index + 1);
        self.len -= 1;
    }
}

/// 버퍼 앞부분에 대한 다음 동작
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// 버퍼가 비어 있음
    Idle,
    /// 결정하려면 다음 자모가 필요함
    Wait,
    /// 맨 앞 자모를 조합 없이 출력
    Raw,
    /// 중성 자리(1)의 모음을 복합 모음으로 병합
    MergeVowel(char),
    /// 음절 확정
    Commit {
        choseong: u32,
        jungseong: u32,
        jongseong: u32,
        consumed: usize,
    },
}

impl Step {
    fn commit(choseong: u32, jungseong: u32, jongseong: u32, consumed: usize) -> Self {
        Step::Commit {
            choseong,
            jungseong,
            jongseong,
            consumed,
        }
    }
}

/// 한글 조합기
///
/// 한 번의 변환 호출 동안만 사용되며, 버퍼와 출력은 이 값이 단독으로 소유합니다.
#[derive(Debug, Clone)]
pub struct Assembler {
    buffer: JamoBuffer,
    output: String,
}

impl Assembler {
    /// 새 조합기 생성
    pub fn new() -> Self {
        Self {
            buffer: JamoBuffer::new(),
            output: String::new(),
        }
    }

    /// 자모 글리프 하나 입력
    pub fn feed(&mut self, jamo: char) {
        self.buffer.push(jamo);
        self.reduce(false);
    }

    /// 조합 대상이 아닌 문자 처리 (숫자, 특수문자 등)
    ///
    /// 대기 중인 자모를 먼저 확정해 출력 순서를 입력 순서와 맞춥니다.
    pub fn feed_passthrough(&mut self, c: char) {
        self.reduce(true);
        self.output.push(c);
    }

    /// 조합 종료 및 최종 결과 반환
    pub fn finish(mut self) -> String {
        self.reduce(true);
        self.output
    }

    /// 더 이상 진행할 수 없을 때까지 버퍼를 줄임
    ///
    /// `end`가 true이면 뒤따를 자모가 없는 것으로 보고 끝까지 비웁니다.
    fn reduce(&mut self, end: bool) {
        loop {
            match self.next_step(end) {
                Step::Idle | Step::Wait => return,
                Step::Raw => {
                    if let Some(jamo) = self.buffer.get(0) {
                        log::trace!("조합 불가 자모 출력: {}", jamo);
                        self.output.push(jamo);
                    }
                    self.buffer.consume(1);
                }
                Step::MergeVowel(compound) => self.buffer.merge_at(1, compound),
                Step::Commit {
                    choseong,
                    jungseong,
                    jongseong,
                    consumed,
                } => {
                    if let Some(c) = compose_syllable(choseong, jungseong, jongseong) {
                        self.output.push(c);
                    }
                    self.buffer.consume(consumed);
                }
            }
        }
    }

    /// 현재 버퍼 상태에서 다음 동작 결정
    ///
    /// 버퍼 레이아웃: [초성, 중성, 종성 후보, 두 번째 종성 후보, 미리보기]
    fn next_step(&self, end: bool) -> Step {
        let buf = &self.buffer;
        let wait_or = |step: Step| if end { step } else { Step::Wait };

        let Some(first) = buf.get(0) else {
            return Step::Idle;
        };
        let Some(choseong) = choseong_index(first) else {
            return Step::Raw;
        };

        let Some(second) = buf.get(1) else {
            return wait_or(Step::Raw);
        };
        let Some(jungseong) = jungseong_index(second) else {
            // 자음 두 개 연속: 앞 자음은 단독 출력
            return Step::Raw;
        };

        let Some(third) = buf.get(2) else {
            return wait_or(Step::commit(choseong, jungseong, 0, 2));
        };
        if is_vowel(third) {
            return match combine_vowel(second, third) {
                Some(compound) => Step::MergeVowel(compound),
                None => Step::commit(choseong, jungseong, 0, 2),
            };
        }
        let Some(jongseong) = jongseong_index(third) else {
            // ㄸ, ㅃ, ㅉ은 종성 불가 -> 다음 초성
            return Step::commit(choseong, jungseong, 0, 2);
        };

        let Some(fourth) = buf.get(3) else {
            return wait_or(Step::commit(choseong, jungseong, jongseong, 3));
        };
        if is_vowel(fourth) && choseong_index(third).is_some() {
            // 모음 사이 자음 -> 다음 음절 초성
            return Step::commit(choseong, jungseong, 0, 2);
        }
        let Some(cluster) = combine_final(third, fourth).and_then(jongseong_index) else {
            return Step::commit(choseong, jungseong, jongseong, 3);
        };

        let Some(fifth) = buf.get(4) else {
            return wait_or(Step::commit(choseong, jungseong, cluster, 4));
        };
        if is_vowel(fifth) {
            // 복합 종성 후보의 뒤 자음은 다음 음절 초성
            Step::commit(choseong, jungseong, jongseong, 3)
        } else {
            Step::commit(choseong, jungseong, cluster, 4)
        }
    }
}

impl Default for Assembler {
    fn default() -> Self {
        Self::new()
    }
}

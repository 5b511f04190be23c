//! 변환 엔진: 자판 매핑, 음절 조합/분해, 조합기, 변환 파이프라인

pub mod assembler;
pub mod converter;
pub mod jamo_mapper;
pub mod unicode;

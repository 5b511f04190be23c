pub mod config;
pub mod core;
pub mod inspect;

pub use crate::core::assembler::Assembler;
pub use crate::core::converter::{convert, hangul_to_roman, roman_to_hangul, Direction};
pub use crate::core::jamo_mapper::{jamo_for_key, key_for_jamo};
pub use crate::core::unicode::{compose_syllable, decompose, decompose_syllable};
pub use inspect::{has_loose_jamo, inspect, is_fully_composed, Composition};

pub mod config;
pub mod core;
pub mod recognition;

pub use crate::core::assembler::HangulAssembler;
pub use crate::core::error::{AssembleError, AssembleResult};
pub use crate::core::token::{Command, Token};
pub use crate::core::unicode::{compose, decompose, Syllable};
pub use recognition::{LabelStabilizer, StabilizerConfig, Transcriber, Update};

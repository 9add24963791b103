//! 인식기 출력 처리
//!
//! 프레임 예측 안정화와 문장 확정을 담당합니다.
//! 손 인식, 분류 모델은 이 크레이트 밖에 있으며 레이블 문자열만 전달받습니다.

mod stabilizer;
mod transcriber;

pub use stabilizer::{LabelStabilizer, StabilizerConfig};
pub use transcriber::{Transcriber, Update};

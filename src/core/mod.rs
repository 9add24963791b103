pub mod assembler;
pub mod error;
pub mod token;
pub mod unicode;

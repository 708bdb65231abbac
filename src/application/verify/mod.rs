//! Verify Use Case Module

mod result;
mod use_case;


pub use result::VerifyResult;
pub use use_case::VerifyUseCase;

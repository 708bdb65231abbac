//! Lock Use Case Module

mod result;
mod use_case;


pub use result::LockResult;
pub use use_case::LockUseCase;

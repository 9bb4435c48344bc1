mod error;
pub mod contact;

pub use error::*;

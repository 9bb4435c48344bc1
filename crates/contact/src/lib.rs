mod store;
mod submit;

pub use store::*;
pub use submit::*;

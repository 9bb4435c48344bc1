mod server;
mod smtp;

pub use server::serve;
pub use smtp::verify as verify_smtp;

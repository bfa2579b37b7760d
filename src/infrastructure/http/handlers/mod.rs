//! HTTP Handlers

mod cookie;
mod json;
mod long_body;
mod ping;
mod status;

pub use cookie::*;
pub use json::*;
pub use long_body::*;
pub use ping::*;
pub use status::*;

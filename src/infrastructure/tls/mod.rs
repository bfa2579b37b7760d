//! TLS - HTTPS 证书

mod letsencrypt;

pub use letsencrypt::*;

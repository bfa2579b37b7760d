//! Public IP Adapter - 公网 IP 查询实现

mod http_public_ip_client;

pub use http_public_ip_client::*;

//! Utility modules shared by the source, embed and web layers

pub mod http_client;
pub mod url;

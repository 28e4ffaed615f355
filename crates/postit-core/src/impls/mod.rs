//! Implementations - 本番用の port 実装

pub mod http_transport;

pub use self::http_transport::HttpTransport;

//! HTTP plumbing: the injectable transport and its reqwest implementation.

pub mod transport;

pub use transport::{HttpTransport, HttpTransportRequest, HttpTransportResponse, ReqwestTransport};

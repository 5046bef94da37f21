//! HTTP Layer
//!
//! `Transport` moves bytes; `HttpExecutor` owns the loading/error flags and JSON decoding.

mod executor;
mod transport;

pub use executor::{HttpExecutor, RequestStatus};
pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};

#[cfg(test)]
pub(crate) mod testing;

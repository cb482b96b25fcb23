//! Shared REST client: transport seam, response classification, errors

mod client;
mod error;
mod transport;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{classify, RestClient, RestResponse};
pub use error::RestError;
pub use transport::{GlooTransport, HttpRequest, HttpResponse, Method, Transport};

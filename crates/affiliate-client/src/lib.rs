//! HTTP client for the affiliate catalog REST backend.
//!
//! This crate provides:
//! - `ApiClient` - base URL + bearer injection over a pluggable `Transport`
//! - `ReqwestTransport` - the network transport
//! - `SessionContext` / `TokenStore` - explicit, injectable session storage
//! - `HttpProductRepository` - `ProductRepository` over `/products`

mod client;
mod config;
mod repository;
mod session;
mod transport;

pub use client::*;
pub use config::*;
pub use repository::*;
pub use session::*;
pub use transport::*;

//! Storefront gateway: the sole component performing network I/O against the
//! backend's collection endpoints.
mod client;
mod error;
mod wire;

pub use client::{CollectionGateway, GatewaySettings, RestGateway};
pub use error::GatewayError;

//! Storefront runtime shell: effect execution, session owners, routing and
//! logging bootstrap around the controller cores. Presentation hosts embed
//! this crate; the companion binary is a headless status check.
pub mod config;
pub mod effects;
pub mod logging;
pub mod router;
pub mod sessions;

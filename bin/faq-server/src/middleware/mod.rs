//! HTTP middleware stack and request-scoped extractors.

pub mod client_addr;
pub mod cors;
pub mod trace;

pub use client_addr::ClientAddr;

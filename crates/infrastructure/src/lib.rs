//! Netprov Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer, plus settings loading.

pub mod adapters;
pub mod persistence;

pub use adapters::{ReqwestTransport, SystemClock, TokioSleeper};
pub use persistence::{SettingsError, SettingsRepository};

//! Netprov Domain - Core business types
//!
//! This crate defines the domain model for the tenant network provisioning
//! client. All types here are pure Rust with no I/O dependencies.

pub mod credentials;
pub mod endpoint;
pub mod error;
pub mod id;
pub mod payload;
pub mod request;
pub mod response;
pub mod session;
pub mod settings;
pub mod state;
pub mod timer;

pub use credentials::Credentials;
pub use endpoint::{ApiEndpoint, api_root, provision_url};
pub use error::{DomainError, DomainResult};
pub use id::generate_run_id;
pub use payload::{JsonObject, Payload};
pub use request::{HeaderPolicy, HttpMethod, RequestSpec};
pub use response::{ResponseSpec, StatusCode};
pub use session::{LoginResult, Session};
pub use settings::ClientSettings;
pub use state::{PollerState, ProvisionState};
pub use timer::{DEFAULT_MAX_TIMER, DEFAULT_POLL_STEP, PollTimer};

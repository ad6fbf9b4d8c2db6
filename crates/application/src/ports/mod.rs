//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the application core and external systems.
//! Each port is a trait that can be implemented by adapters in the infrastructure layer.

mod clock;
mod sleeper;
mod transport;

pub use clock::Clock;
pub use sleeper::Sleeper;
pub use transport::{HttpTransport, TransportError, TransportResult};

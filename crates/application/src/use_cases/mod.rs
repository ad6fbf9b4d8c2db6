//! Use cases for the provisioning client.

mod provision_tenant_network;
mod provisioning_client;
mod session_manager;
mod status_poller;

pub use provision_tenant_network::{ProvisionPlan, ProvisionReport, ProvisionTenantNetwork};
pub use provisioning_client::{ProvisioningClient, SubmitOutcome};
pub use session_manager::SessionManager;
pub use status_poller::{PollOutcome, StatusPoller};

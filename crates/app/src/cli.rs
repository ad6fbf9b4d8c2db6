//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use netprov_domain::{ClientSettings, Credentials};

/// Tenant network provisioning client.
///
/// Authenticates against the provisioning API, submits a provisioning
/// request for a tenant network and watches it until it finishes.
#[derive(Parser, Debug)]
#[command(name = "netprov", version, about)]
pub struct Cli {
    /// YAML settings file.
    #[arg(long, env = "NETPROV_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Submit, wait for the transition, then poll until a terminal state.
    Provision(ProvisionArgs),
    /// Submit the provisioning request only.
    Submit(TargetArgs),
    /// Authenticate and poll an already submitted request.
    Status(StatusArgs),
}

/// Tenant network and the account used to reach it.
#[derive(Args, Debug)]
pub struct TargetArgs {
    /// Tenant network URL, e.g. `https://portal.example.com/api/tenantnetworks/122`.
    pub tenant_network_url: String,

    /// Account name.
    #[arg(long, env = "NETPROV_USERNAME")]
    pub username: String,

    /// Account password.
    #[arg(long, env = "NETPROV_PASSWORD", hide_env_values = true)]
    pub password: String,
}

impl TargetArgs {
    pub fn credentials(&self) -> Credentials {
        Credentials::new(&self.username, &self.password)
    }
}

#[derive(Args, Debug)]
pub struct ProvisionArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Poll budget in seconds.
    #[arg(long)]
    pub max_timer: Option<u64>,

    /// Seconds to wait between submission and the first status read.
    #[arg(long)]
    pub settle_delay: Option<u64>,
}

#[derive(Args, Debug)]
pub struct StatusArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Poll budget in seconds.
    #[arg(long)]
    pub max_timer: Option<u64>,
}

impl Command {
    /// Applies command-line overrides on top of file settings.
    pub fn apply_overrides(&self, settings: &mut ClientSettings) {
        let (max_timer, settle_delay) = match self {
            Self::Provision(args) => (args.max_timer, args.settle_delay),
            Self::Status(args) => (args.max_timer, None),
            Self::Submit(_) => (None, None),
        };
        if let Some(secs) = max_timer {
            settings.max_timer_secs = secs;
        }
        if let Some(secs) = settle_delay {
            settings.settle_delay_secs = secs;
        }
    }

    pub const fn target(&self) -> &TargetArgs {
        match self {
            Self::Provision(args) => &args.target,
            Self::Submit(target) => target,
            Self::Status(args) => &args.target,
        }
    }
}

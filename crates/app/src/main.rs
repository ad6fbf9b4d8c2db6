//! Netprov - Main Entry Point
//!
//! Parses the command line, initializes logging and settings, wires the
//! reqwest transport into the use cases and maps the result to an exit code.

mod cli;

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use netprov_application::{ProvisionPlan, ProvisionTenantNetwork, ProvisioningClient};
use netprov_infrastructure::{ReqwestTransport, SettingsRepository, SystemClock, TokioSleeper};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Command};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let mut settings = SettingsRepository::new()
        .load(cli.config.as_deref())
        .await?;
    cli.command.apply_overrides(&mut settings);
    settings.validate()?;

    let transport = Arc::new(ReqwestTransport::new(&settings)?);
    let target = cli.command.target();
    let credentials = target.credentials();
    let url = target.tenant_network_url.as_str();

    let use_case = ProvisionTenantNetwork::new(
        Arc::clone(&transport),
        Arc::new(TokioSleeper::new()),
        Arc::new(SystemClock::new()),
    );

    let succeeded = match &cli.command {
        Command::Provision(_) => {
            let report = use_case
                .run(url, &credentials, ProvisionPlan::from_settings(&settings))
                .await;
            info!(
                run_id = %report.run_id,
                duration_secs = report.duration().num_seconds(),
                succeeded = report.succeeded(),
                "Provisioning run finished"
            );
            report.succeeded()
        }
        Command::Submit(_) => {
            let mut client = ProvisioningClient::new(transport);
            client
                .submit_provisioning(url, &credentials)
                .await
                .is_accepted()
        }
        Command::Status(_) => match use_case
            .watch(url, &credentials, settings.poll_timer())
            .await
        {
            Ok(outcome) => outcome.is_success(),
            Err(e) => {
                error!(error = %e, "Could not establish a session");
                false
            }
        },
    };

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

use anyhow::Result;
use novelist::{
    cli::{self, telemetry},
    client::ClientError,
};
use std::process::ExitCode;

// Main function
#[tokio::main]
async fn main() -> Result<ExitCode> {
    let action = cli::start()?;

    let result = action.execute().await;

    telemetry::shutdown_tracer();

    match result {
        Ok(()) => Ok(ExitCode::SUCCESS),
        // Already reported through the notifier
        Err(err) if err.downcast_ref::<ClientError>().is_some() => Ok(ExitCode::FAILURE),
        Err(err) => Err(err),
    }
}

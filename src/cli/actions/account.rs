use crate::api::{AuthApi, AuthRequest};
use crate::cli::{actions::print_json, globals::GlobalArgs};
use anyhow::Result;
use tracing::info;

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub credentials: AuthRequest,
}

/// Create an account.
/// # Errors
/// Returns an error if the client cannot be built or the service rejects the call.
pub async fn register(args: Args) -> Result<()> {
    let api = AuthApi::new(args.globals.client()?);
    let response = api.register(&args.credentials).await?;

    info!(username = %args.credentials.username, "account registered");
    print_json(&response)
}

/// Sign in and print the token so it can be passed back with `--token`.
/// # Errors
/// Returns an error if the client cannot be built or the service rejects the call.
pub async fn login(args: Args) -> Result<()> {
    let api = AuthApi::new(args.globals.client()?);
    let token = api.login(&args.credentials).await?;

    info!(username = %args.credentials.username, "signed in");
    println!("{token}");
    Ok(())
}

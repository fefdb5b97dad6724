use crate::cli::actions::{Action, account, novel, route};
use anyhow::Result;

// Single dispatch point for all CLI actions.
/// Execute the provided action.
/// # Errors
/// Returns an error if the action fails.
pub async fn execute(action: Action) -> Result<()> {
    match action {
        Action::Register(args) => account::register(args).await,
        Action::Login(args) => account::login(args).await,
        Action::Novel(args) => novel::execute(args).await,
        Action::Route(args) => route::execute(&args),
    }
}

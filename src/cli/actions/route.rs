use crate::cli::globals::GlobalArgs;
use crate::router::{Navigation, Router};
use anyhow::Result;

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub target: String,
    pub from: String,
}

/// Resolve a navigation with the default page table.
#[must_use]
pub fn resolve(args: &Args) -> Navigation {
    Router::default().navigate(&args.target, &args.from, &args.globals.session())
}

/// Print the navigation outcome.
/// # Errors
/// Never fails today; returns `Result` to match the other actions.
pub fn execute(args: &Args) -> Result<()> {
    match resolve(args) {
        Navigation::Proceed(path) => println!("proceed {path}"),
        Navigation::Redirect(path) => println!("redirect {path}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;
    use std::time::Duration;

    fn args(target: &str, token: Option<&str>) -> Args {
        let mut globals = GlobalArgs::new(
            "http://localhost:8000".to_string(),
            Duration::from_secs(1),
        );
        if let Some(token) = token {
            globals.set_token(SecretString::from(token.to_string()));
        }
        Args {
            globals,
            target: target.to_string(),
            from: "/".to_string(),
        }
    }

    #[test]
    fn writer_needs_token() {
        assert_eq!(
            resolve(&args("/writer", None)),
            Navigation::Redirect("/login".to_string())
        );
        assert_eq!(
            resolve(&args("/writer", Some("tok"))),
            Navigation::Proceed("/writer".to_string())
        );
    }
}

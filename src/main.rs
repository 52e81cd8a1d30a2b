//! Operator CLI for credential provisioning.
//!
//! `credhash hash` prints a storable `salt:hash` record for a password,
//! `credhash verify` checks a password against a stored record (exit code
//! 1 on mismatch, for shell scripting), and `credhash token` mints an
//! opaque session token. Passwords not passed as flags are read from an
//! interactive no-echo prompt.

use anyhow::Result;
use clap::{Parser, Subcommand};
use credhash::{generate_token, CredentialHasher};

#[derive(Parser)]
#[command(name = "credhash", version, about = "Credential hashing for the evaluation-admin backend")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Derive a storable credential record from a password
    Hash {
        /// Password to hash (prompted without echo when omitted)
        #[arg(long)]
        password: Option<String>,
    },
    /// Verify a password against a stored record
    Verify {
        /// Stored `salt:hash` record
        #[arg(long)]
        record: String,
        /// Password to check (prompted without echo when omitted)
        #[arg(long)]
        password: Option<String>,
    },
    /// Generate an opaque session token (64 hex chars)
    Token,
}

fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "credhash=info".into()),
        )
        .try_init();

    let cli = Cli::parse();
    let hasher = CredentialHasher::new();

    match cli.command {
        Command::Hash { password } => {
            let password = password_or_prompt(password, "Password")?;
            println!("{}", hasher.derive(&password));
        }
        Command::Verify { record, password } => {
            let password = password_or_prompt(password, "Password")?;
            if hasher.verify(&password, &record) {
                println!("ok");
            } else {
                tracing::debug!("verification failed (mismatch or malformed record)");
                println!("mismatch");
                std::process::exit(1);
            }
        }
        Command::Token => {
            println!("{}", generate_token());
        }
    }

    Ok(())
}

/// Use the flag value if given, otherwise prompt without echo.
fn password_or_prompt(flag: Option<String>, prompt: &str) -> Result<String> {
    match flag {
        Some(p) => Ok(p),
        None => Ok(dialoguer::Password::new().with_prompt(prompt).interact()?),
    }
}

// ── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn verify_args_round_trip() {
        let cli = Cli::parse_from(["credhash", "verify", "--record", "aa:bb", "--password", "pw"]);
        match cli.command {
            Command::Verify { record, password } => {
                assert_eq!(record, "aa:bb");
                assert_eq!(password.as_deref(), Some("pw"));
            }
            _ => panic!("expected verify"),
        }
    }
}

use clap::Parser;

use crate::error::{exit_code_for, EXIT_SUCCESS, EXIT_USAGE};

/// Exit code table appended to every binary's `--help`
pub const EXIT_CODES_HELP: &str = "\
Exit codes:
  0   success
  1   authentication rejected by GitHub
  2   network or API failure
  4   configuration error (e.g. GITHUB_TOKEN unset)
  5   database error
  64  wrong arguments";

/// Process setup shared by every binary: TLS provider and logging
pub fn init() {
    // Fails only if a provider is already installed
    let _ = rustls::crypto::ring::default_provider().install_default();
    crate::logging::init();
}

/// Parse command-line arguments. Usage errors exit with `EXIT_USAGE`;
/// `--help` and `--version` exit with success.
pub fn parse_args<P: Parser>() -> P {
    match P::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            std::process::exit(usage_exit_code(&e));
        }
    }
}

/// Exit code for a clap parse outcome
pub fn usage_exit_code(error: &clap::Error) -> i32 {
    if error.use_stderr() {
        EXIT_USAGE
    } else {
        EXIT_SUCCESS
    }
}

/// Print the error chain (if any) and exit with the matching code
pub fn exit_with(result: anyhow::Result<()>) -> ! {
    match result {
        Ok(()) => std::process::exit(EXIT_SUCCESS),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(exit_code_for(&e));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EXIT_NETWORK;

    #[derive(Parser, Debug)]
    #[command(name = "sample", version)]
    struct Sample {
        owner: String,
    }

    #[test]
    fn test_usage_error_has_own_exit_code() {
        let err = Sample::try_parse_from(["sample"]).unwrap_err();
        assert_eq!(usage_exit_code(&err), EXIT_USAGE);
        assert_ne!(usage_exit_code(&err), EXIT_NETWORK);
    }

    #[test]
    fn test_help_and_version_exit_success() {
        let help = Sample::try_parse_from(["sample", "--help"]).unwrap_err();
        assert_eq!(usage_exit_code(&help), EXIT_SUCCESS);
        let version = Sample::try_parse_from(["sample", "--version"]).unwrap_err();
        assert_eq!(usage_exit_code(&version), EXIT_SUCCESS);
    }
}

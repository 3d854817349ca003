mod cmd;
mod exit;
mod logging;
mod output;

use clap::Parser;

use crate::cmd::Command;
use crate::logging::{init_logging, LogFormat, LogLevel};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "ingress-interface",
    version,
    about = "Validate ingress relation data bags"
)]
struct Cli {
    /// Output format.
    #[arg(long, value_name = "FORMAT", global = true)]
    format: Option<OutputFormat>,

    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text", global = true)]
    log_format: LogFormat,

    /// Minimum log level (stderr).
    #[arg(
        long,
        value_name = "LEVEL",
        default_value = "info",
        env = "INGRESS_INTERFACE_LOG_LEVEL",
        global = true
    )]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.log_level);

    let format = cli.format.unwrap_or_else(OutputFormat::default_for_stdout);
    let result = cmd::run(cli.command, format);

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}

#[cfg(test)]
mod tests {
    use ingress_schema::Role;

    use super::*;

    #[test]
    fn parses_validate_subcommand() {
        let cli = Cli::try_parse_from([
            "ingress-interface",
            "validate",
            "/tmp/bag.yaml",
            "--role",
            "requirer",
            "--strict",
        ])
        .expect("validate args should parse");

        match cli.command {
            Command::Validate(args) => {
                assert_eq!(args.role, Role::Requirer);
                assert!(args.strict);
                assert!(!args.enforce_port_range);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_role() {
        let err = Cli::try_parse_from([
            "ingress-interface",
            "schema",
            "--role",
            "consumer",
        ])
        .expect_err("unknown role should fail");

        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn validate_requires_role() {
        let err = Cli::try_parse_from(["ingress-interface", "validate", "/tmp/bag.yaml"])
            .expect_err("missing role should fail");
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }
}

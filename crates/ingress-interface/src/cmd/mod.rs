use clap::{Args, Subcommand};
use std::path::PathBuf;

use ingress_schema::Role;

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod envinfo;
pub mod schema;
pub mod validate;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a data-bag document against a role's contract.
    Validate(ValidateArgs),
    /// Print the JSON Schema of a role's decoded app data.
    Schema(SchemaArgs),
    /// Show version information.
    Version(VersionArgs),
    /// Print build and environment diagnostics.
    Envinfo(EnvinfoArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Validate(args) => validate::run(args, format),
        Command::Schema(args) => schema::run(args, format),
        Command::Version(args) => version::run(args),
        Command::Envinfo(args) => envinfo::run(args, format),
    }
}

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Data-bag document (.json, .yaml or .yml) with `unit` and `app` scopes.
    pub path: PathBuf,
    /// Side of the relation the data bag belongs to.
    #[arg(long, short = 'r')]
    pub role: Role,
    /// Reject keys the contract does not declare.
    #[arg(long)]
    pub strict: bool,
    /// Require requirer ports within 1..=65535.
    #[arg(long)]
    pub enforce_port_range: bool,
    /// Reject empty requirer text fields.
    #[arg(long)]
    pub require_non_empty: bool,
    /// Also check the decoded payload against the role's JSON Schema.
    #[arg(long)]
    pub json_schema: bool,
}

#[derive(Args, Debug)]
pub struct SchemaArgs {
    /// Side of the relation to describe.
    #[arg(long, short = 'r')]
    pub role: Role,
    /// Close every object to undeclared keys.
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}

#[derive(Args, Debug, Default)]
pub struct EnvinfoArgs {}

use ingress_schema::{validate_role_with, DataBag, SchemaRegistry, ValidatorConfig};

use crate::cmd::ValidateArgs;
use crate::exit::{ingress_error, CliResult, SUCCESS};
use crate::output::{print_record, OutputFormat};

pub fn run(args: ValidateArgs, format: OutputFormat) -> CliResult<i32> {
    let config = ValidatorConfig {
        strict_mode: args.strict,
        enforce_port_range: args.enforce_port_range,
        require_non_empty: args.require_non_empty,
        ..ValidatorConfig::default()
    };

    let databag = DataBag::from_path(&args.path, config.max_databag_size)
        .map_err(|err| ingress_error("load data bag", err))?;
    tracing::info!(path = %args.path.display(), role = %args.role, "validating data bag");

    let record = validate_role_with(args.role, config, &databag)
        .map_err(|err| ingress_error("validation failed", err))?;

    if args.json_schema {
        let registry = SchemaRegistry::builtin_with_config(config)
            .map_err(|err| ingress_error("load schema", err))?;
        registry
            .validate_databag(args.role, &databag)
            .map_err(|err| ingress_error("json schema check failed", err))?;
        tracing::debug!(role = %args.role, "json schema check passed");
    }

    print_record(&record, format);
    Ok(SUCCESS)
}

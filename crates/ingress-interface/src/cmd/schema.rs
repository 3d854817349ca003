use ingress_schema::json_schema_with;

use crate::cmd::SchemaArgs;
use crate::exit::{CliError, CliResult, INTERNAL, SUCCESS};
use crate::output::OutputFormat;

pub fn run(args: SchemaArgs, format: OutputFormat) -> CliResult<i32> {
    let schema = json_schema_with(args.role, args.strict);

    let rendered = match format {
        OutputFormat::Json => serde_json::to_string(&schema),
        OutputFormat::Table | OutputFormat::Pretty | OutputFormat::Raw => {
            serde_json::to_string_pretty(&schema)
        }
    }
    .map_err(|err| CliError::new(INTERNAL, format!("render schema: {err}")))?;

    println!("{rendered}");
    Ok(SUCCESS)
}

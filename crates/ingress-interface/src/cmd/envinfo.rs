use ingress_schema::{json_schema, Role, DEFAULT_DATA_KEY};
use serde::Serialize;

use crate::cmd::EnvinfoArgs;
use crate::exit::{CliResult, SUCCESS};
use crate::output::OutputFormat;

#[derive(Serialize)]
struct RoleInfo {
    role: Role,
    schema_id: String,
}

#[derive(Serialize)]
struct EnvInfoOutput {
    schema_id: &'static str,
    version: &'static str,
    target: &'static str,
    interface: &'static str,
    data_key: &'static str,
    roles: Vec<RoleInfo>,
    log_level: Option<String>,
}

pub fn run(_args: EnvinfoArgs, format: OutputFormat) -> CliResult<i32> {
    let roles = Role::ALL
        .iter()
        .map(|&role| RoleInfo {
            role,
            schema_id: json_schema(role)["$id"]
                .as_str()
                .unwrap_or_default()
                .to_string(),
        })
        .collect();

    let output = EnvInfoOutput {
        schema_id: "https://schemas.3leaps.dev/ingress-interface/cli/v1/envinfo.schema.json",
        version: env!("CARGO_PKG_VERSION"),
        target: option_env!("INGRESS_INTERFACE_BUILD_TARGET").unwrap_or("unknown"),
        interface: "ingress/v0",
        data_key: DEFAULT_DATA_KEY,
        roles,
        log_level: std::env::var("INGRESS_INTERFACE_LOG_LEVEL").ok(),
    };

    print_envinfo(&output, format);
    Ok(SUCCESS)
}

fn print_envinfo(output: &EnvInfoOutput, format: OutputFormat) {
    match format {
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string(output).unwrap_or_else(|_| "{}".to_string())
        ),
        OutputFormat::Table | OutputFormat::Pretty => {
            println!("ingress-interface {} ({})", output.version, output.target);
            println!("  interface  {}", output.interface);
            println!("  data key   {}", output.data_key);
            for info in &output.roles {
                println!("  {:<10} {}", info.role, info.schema_id);
            }
            println!(
                "  log level  {}",
                output.log_level.as_deref().unwrap_or("(not set)")
            );
        }
        OutputFormat::Raw => println!("{}", output.version),
    }
}

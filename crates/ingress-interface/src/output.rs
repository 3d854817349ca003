use std::io::IsTerminal;

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use ingress_schema::{Role, ValidatedRecord};
use serde::Serialize;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
struct ValidationOutput<'a> {
    schema_id: &'a str,
    valid: bool,
    role: Role,
    record: &'a ValidatedRecord,
}

pub fn print_record(record: &ValidatedRecord, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let out = ValidationOutput {
                schema_id: "https://schemas.3leaps.dev/ingress-interface/cli/v1/validation-result.schema.json",
                valid: true,
                role: record.role(),
                record,
            };
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["FIELD", "VALUE"]);
            for (field, value) in record_fields(record) {
                table.add_row(vec![field.to_string(), value]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            let fields: Vec<String> = record_fields(record)
                .into_iter()
                .map(|(field, value)| format!("{field}={value}"))
                .collect();
            println!("role={} valid=true {}", record.role(), fields.join(" "));
        }
        OutputFormat::Raw => {
            for (_, value) in record_fields(record) {
                println!("{value}");
            }
        }
    }
}

pub fn record_fields(record: &ValidatedRecord) -> Vec<(&'static str, String)> {
    match record {
        ValidatedRecord::Provider(provider) => {
            vec![("ingress.url", provider.ingress.url.clone())]
        }
        ValidatedRecord::Requirer(requirer) => vec![
            ("name", requirer.name.clone()),
            ("host", requirer.host.clone()),
            ("port", requirer.port.to_string()),
            ("model", requirer.model.clone()),
        ],
    }
}

#![cfg(feature = "cli")]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

const PROVIDER_BAG: &str = "\
unit: {}
app:
  data: |
    ingress:
      url: \"http://foo.bar:80/model_name-app_name\"
";

const REQUIRER_BAG: &str = "\
app:
  data: |
    name: app-name
    host: hostname
    port: 4242
    model: model-name
";

fn unique_temp_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "ingress-cli-{tag}-{}-{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("time should be after epoch")
            .as_nanos()
    ));
    std::fs::create_dir_all(&dir).expect("temp dir should be creatable");
    dir
}

fn write_bag(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("data bag should be writable");
    path
}

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ingress-interface"))
        .arg("--log-level")
        .arg("error")
        .arg("--format")
        .arg("json")
        .args(args)
        .output()
        .expect("cli should run")
}

#[test]
fn provider_bag_validates_and_echoes_url() {
    let dir = unique_temp_dir("provider-ok");
    let bag = write_bag(&dir, "provider.yaml", PROVIDER_BAG);

    let output = run_cli(&["validate", bag.to_str().unwrap(), "--role", "provider"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let json: serde_json::Value =
        serde_json::from_str(stdout.trim()).expect("stdout should be json");
    assert_eq!(json["valid"], true);
    assert_eq!(
        json["record"]["ingress"]["url"],
        "http://foo.bar:80/model_name-app_name"
    );

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn requirer_bag_validates_with_json_schema_check() {
    let dir = unique_temp_dir("requirer-ok");
    let bag = write_bag(&dir, "requirer.yml", REQUIRER_BAG);

    let output = run_cli(&[
        "validate",
        bag.to_str().unwrap(),
        "--role",
        "requirer",
        "--json-schema",
    ]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"port\":4242"));
    assert!(stdout.contains("\"name\":\"app-name\""));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn bad_port_exits_with_data_invalid() {
    let dir = unique_temp_dir("bad-port");
    let bag = write_bag(
        &dir,
        "requirer.json",
        r#"{"app":{"data":"name: app-name\nhost: hostname\nport: notaport\nmodel: model-name\n"}}"#,
    );

    let output = run_cli(&["validate", bag.to_str().unwrap(), "--role", "requirer"]);
    assert_eq!(output.status.code(), Some(60));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid value for `port`"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn wrong_role_is_schema_mismatch() {
    let dir = unique_temp_dir("wrong-role");
    let bag = write_bag(&dir, "provider.yaml", PROVIDER_BAG);

    let output = run_cli(&["validate", bag.to_str().unwrap(), "--role", "requirer"]);
    assert_eq!(output.status.code(), Some(60));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing required field `port`"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn missing_file_exits_with_failure() {
    let dir = unique_temp_dir("missing");
    let missing = dir.join("nope.yaml");

    let output = run_cli(&["validate", missing.to_str().unwrap(), "--role", "provider"]);
    assert_eq!(output.status.code(), Some(1));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn schema_command_prints_role_schema() {
    let output = run_cli(&["schema", "--role", "requirer"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let schema: serde_json::Value =
        serde_json::from_str(stdout.trim()).expect("schema should be json");
    assert_eq!(schema["properties"]["port"]["type"], "integer");
    assert_eq!(
        schema["required"],
        serde_json::json!(["port", "host", "model", "name"])
    );
}

#[test]
fn version_prints_package_version() {
    let output = run_cli(&["version"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("ingress-interface "));
}

#[test]
fn envinfo_reports_roles_and_data_key() {
    let output = run_cli(&["envinfo"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let info: serde_json::Value =
        serde_json::from_str(stdout.trim()).expect("envinfo should be json");
    assert_eq!(info["data_key"], "data");
    assert_eq!(info["roles"][0]["role"], "provider");
    assert!(info.get("dependencies").is_none());
}

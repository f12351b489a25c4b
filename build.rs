use std::fs;

use toml::Table;

const CODE_BLOCK_MODES: &[&str] = &["passthrough", "fenced"];

fn main() {
    // The embedded default config must deserialize into `Config`
    let config_path = "src/default_config.toml";
    println!("cargo:rerun-if-changed={}", config_path);

    let content = fs::read_to_string(config_path).expect("Failed to read default_config.toml");
    let table: Table = content
        .parse()
        .unwrap_or_else(|e| panic!("Invalid default_config.toml: {}", e));

    let inline = section(&table, "inline");
    require_string(inline, "inline", "bold");
    require_string(inline, "inline", "italic");

    let lists = section(&table, "lists");
    require_string(lists, "lists", "bullet");
    match lists.get("indent").and_then(|v| v.as_integer()) {
        Some(indent) if indent >= 0 => {}
        _ => panic!("default_config.toml: lists.indent must be a non-negative integer"),
    }

    let code_block = section(&table, "code_block");
    let mode = require_string(code_block, "code_block", "mode");
    if !CODE_BLOCK_MODES.contains(&mode) {
        panic!(
            "default_config.toml: code_block.mode must be one of {:?}, got {:?}",
            CODE_BLOCK_MODES, mode
        );
    }
}

fn section<'a>(table: &'a Table, name: &str) -> &'a Table {
    table
        .get(name)
        .and_then(|v| v.as_table())
        .unwrap_or_else(|| panic!("default_config.toml: missing [{}] section", name))
}

fn require_string<'a>(table: &'a Table, section: &str, key: &str) -> &'a str {
    table
        .get(key)
        .and_then(|v| v.as_str())
        .unwrap_or_else(|| panic!("default_config.toml: {}.{} must be a string", section, key))
}

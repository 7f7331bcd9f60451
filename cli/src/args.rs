//! Command-line arguments.

use clap::{Parser, Subcommand};
use inventory_core::ProductId;
use serde_json::Value;

#[derive(Debug, Parser)]
#[command(name = "inventory")]
#[command(about = "Manage the product inventory of a REST backend", long_about = None)]
pub struct Cli {
    /// Product collection URL, e.g. http://localhost:3000/products
    #[arg(short, long, env = "INVENTORY_API_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Answer yes to confirmation questions
    #[arg(short, long, global = true)]
    pub yes: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show all products
    List,
    /// Create a product from key=value fields
    Add {
        #[arg(short, long = "field", value_name = "KEY=VALUE", value_parser = parse_field, required = true)]
        fields: Vec<(String, Value)>,
    },
    /// Update fields of an existing product
    Edit {
        id: ProductId,
        #[arg(short, long = "field", value_name = "KEY=VALUE", value_parser = parse_field, required = true)]
        fields: Vec<(String, Value)>,
    },
    /// Delete a product after confirmation
    Delete { id: ProductId },
}

/// Split `key=value`. The value is read as JSON when it parses, so
/// `qty=5` is a number and `name=Hat` a string.
pub fn parse_field(raw: &str) -> Result<(String, Value), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got {raw:?}"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty field name in {raw:?}"));
    }
    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((key.to_string(), value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use serde_json::json;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_field_reads_json_values() {
        assert_eq!(parse_field("qty=5").unwrap(), ("qty".to_string(), json!(5)));
        assert_eq!(parse_field("price=9.5").unwrap(), ("price".to_string(), json!(9.5)));
        assert_eq!(parse_field("active=true").unwrap(), ("active".to_string(), json!(true)));
    }

    #[test]
    fn parse_field_falls_back_to_string() {
        assert_eq!(parse_field("name=Hat").unwrap(), ("name".to_string(), json!("Hat")));
        assert_eq!(parse_field("note=a=b").unwrap(), ("note".to_string(), json!("a=b")));
    }

    #[test]
    fn parse_field_rejects_bad_input() {
        assert!(parse_field("name").is_err());
        assert!(parse_field("=Hat").is_err());
    }

    #[test]
    fn parses_edit_command() {
        let cli = Cli::try_parse_from([
            "inventory",
            "--base-url",
            "http://localhost:3000/products",
            "edit",
            "3",
            "-f",
            "qty=4",
        ])
        .unwrap();
        match cli.command {
            Commands::Edit { id, fields } => {
                assert_eq!(id, ProductId::from(3));
                assert_eq!(fields, [("qty".to_string(), json!(4))]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}

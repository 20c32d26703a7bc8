//! qail-where CLI
//!
//! Reads a JSON array of conditions and prints the combined WHERE fragment.
//!
//! ```text
//! echo '[{"kind":"leaf","column":"id","op":"eq","operand":{"single":1}}]' | qail-where
//! ```

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::*;
use tracing_subscriber::EnvFilter;

use qail_where::prelude::*;

#[derive(Parser)]
#[command(name = "qail-where")]
#[command(version, about = "Combine JSON condition trees into parameterized SQL")]
struct Cli {
    /// JSON file with an array of conditions (stdin when omitted)
    file: Option<PathBuf>,

    /// Relation joining the top-level conditions
    #[arg(short, long, value_enum, default_value_t = Relation::And)]
    relation: Relation,

    /// Emit $1, $2, ... instead of ?
    #[arg(long)]
    numbered: bool,

    /// Emit <> instead of != for not-equal
    #[arg(long)]
    ansi_not_equal: bool,

    /// Config file (defaults to $QAIL_WHERE_CONFIG or the user config dir)
    #[arg(short, long, env = "QAIL_WHERE_CONFIG")]
    config: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Relation {
    And,
    Or,
}

impl From<Relation> for LogicalOp {
    fn from(r: Relation) -> Self {
        match r {
            Relation::And => LogicalOp::And,
            Relation::Or => LogicalOp::Or,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = apply_overrides(load_config(cli.config.as_deref())?, &cli);

    let input = read_input(cli.file.as_ref())?;
    let conditions: Vec<Condition> =
        serde_json::from_str(&input).context("Failed to parse condition JSON")?;

    let result = Combiner::new(config).combine(&conditions, cli.relation.into())?;
    println!("{}", render(&result, cli.json)?);
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::load(path)?,
        None => Config::discover()?,
    };
    Ok(config)
}

/// Command-line flags win over the loaded config.
fn apply_overrides(mut config: Config, cli: &Cli) -> Config {
    if cli.numbered {
        config.placeholder = PlaceholderStyle::Numbered;
    }
    if cli.ansi_not_equal {
        config.not_equal = NotEqualStyle::Ansi;
    }
    config
}

fn render(result: &TranspileResult, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(result)?);
    }
    if result.is_empty() {
        return Ok("(no conditions)".dimmed().to_string());
    }
    let params: Vec<String> = result.params.iter().map(|v| v.to_string()).collect();
    Ok(format!(
        "{} {}\n{} [{}]",
        "SQL:".cyan().bold(),
        result.sql,
        "Params:".cyan().bold(),
        params.join(", ")
    ))
}

fn read_input(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_override_loaded_config() {
        let loaded = Config::from_toml_str("empty_list = \"reject\"\nmax_depth = 8").unwrap();
        let cli = Cli::parse_from(["qail-where", "--numbered", "--ansi-not-equal"]);
        let config = apply_overrides(loaded, &cli);
        assert_eq!(config.placeholder, PlaceholderStyle::Numbered);
        assert_eq!(config.not_equal, NotEqualStyle::Ansi);
        // Settings without a flag come from the file.
        assert_eq!(config.empty_list, EmptyListPolicy::Reject);
        assert_eq!(config.max_depth, 8);
    }

    #[test]
    fn test_no_flags_keep_loaded_config() {
        let loaded = Config::from_toml_str("placeholder = \"numbered\"").unwrap();
        let cli = Cli::parse_from(["qail-where", "-r", "or"]);
        let config = apply_overrides(loaded.clone(), &cli);
        assert_eq!(config, loaded);
        assert_eq!(LogicalOp::from(cli.relation), LogicalOp::Or);
    }

    #[test]
    fn test_load_config_from_explicit_path() {
        let path = std::env::temp_dir().join(format!("qail-where-cli-{}.toml", std::process::id()));
        std::fs::write(&path, "not_equal = \"ansi\"\n").unwrap();
        let config = load_config(Some(path.as_path())).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.not_equal, NotEqualStyle::Ansi);

        assert!(load_config(Some(Path::new("/nonexistent/qail-where.toml"))).is_err());
    }

    #[test]
    fn test_render_json() {
        let result = combine(&[eq("id", 7), is_null("deleted_at")], LogicalOp::And).unwrap();
        let out = render(&result, true).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            parsed,
            serde_json::json!({ "sql": "id = ? AND deleted_at IS NULL", "params": [7] })
        );
    }

    #[test]
    fn test_render_text() {
        colored::control::set_override(false);
        let result = combine(&[eq("name", "O'Brien"), gt("age", 30)], LogicalOp::Or).unwrap();
        assert_eq!(
            render(&result, false).unwrap(),
            "SQL: name = ? OR age > ?\nParams: ['O''Brien', 30]"
        );
        assert_eq!(render(&TranspileResult::default(), false).unwrap(), "(no conditions)");
    }
}

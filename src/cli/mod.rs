//! CLI subcommands: show, convert.

use crate::core::fetcher::{RecipeFileFetcher, RecipeSource};
use crate::core::types::{Recipe, RecipeFile};
use crate::transport::TransportConfig;
use clap::{Args, Subcommand};
use std::time::Duration;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load a recipe file and print it re-emitted as YAML
    Show {
        /// URL (http/https) or local path of the recipe file
        source: RecipeSource,

        #[command(flatten)]
        transport: TransportArgs,
    },

    /// Convert a recipe file into the installer's recipe shape
    Convert {
        /// URL (http/https) or local path of the recipe file
        source: RecipeSource,

        /// Print the converted recipe as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        transport: TransportArgs,
    },
}

/// Flags shared by every command that fetches a recipe.
#[derive(Args, Debug, Clone, Default)]
pub struct TransportArgs {
    /// HTTP request timeout in seconds (default: none)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Fail on non-2xx HTTP status instead of parsing the body
    #[arg(long)]
    pub strict_status: bool,
}

impl TransportArgs {
    pub fn to_config(&self) -> TransportConfig {
        TransportConfig {
            timeout: self.timeout.map(Duration::from_secs),
            strict_status: self.strict_status,
            ..TransportConfig::default()
        }
    }
}

/// Dispatch a CLI command.
pub fn dispatch(cmd: Commands) -> Result<(), String> {
    match cmd {
        Commands::Show { source, transport } => cmd_show(&source, &transport),
        Commands::Convert {
            source,
            json,
            transport,
        } => cmd_convert(&source, json, &transport),
    }
}

fn load(source: &RecipeSource, transport: &TransportArgs) -> Result<RecipeFile, String> {
    let fetcher =
        RecipeFileFetcher::from_config(&transport.to_config()).map_err(|e| e.to_string())?;
    fetcher
        .fetch_source(source)
        .map_err(|e| format!("{}: {}", source, e))
}

fn cmd_show(source: &RecipeSource, transport: &TransportArgs) -> Result<(), String> {
    let file = load(source, transport)?;
    print!("{}", render_file(&file)?);
    Ok(())
}

fn cmd_convert(source: &RecipeSource, json: bool, transport: &TransportArgs) -> Result<(), String> {
    let file = load(source, transport)?;
    let recipe = file.to_recipe().map_err(|e| e.to_string())?;
    print!("{}", render_recipe(&recipe, json)?);
    Ok(())
}

/// Recipe file re-emitted as YAML.
fn render_file(file: &RecipeFile) -> Result<String, String> {
    file.to_yaml().map_err(|e| e.to_string())
}

/// Converted recipe as pretty JSON or a summary.
fn render_recipe(recipe: &Recipe, json: bool) -> Result<String, String> {
    if !json {
        return Ok(format_summary(recipe));
    }
    let mut out = serde_json::to_string_pretty(recipe)
        .map_err(|e| format!("JSON serialize error: {}", e))?;
    out.push('\n');
    Ok(out)
}

/// Human-readable summary of a converted recipe.
fn format_summary(recipe: &Recipe) -> String {
    let mut out = String::new();
    out.push_str(&format!("Recipe: {}\n", recipe.name));
    if !recipe.description.is_empty() {
        out.push_str(&format!("  Description: {}\n", recipe.description));
    }
    if !recipe.repository.is_empty() {
        out.push_str(&format!("  Repository:  {}\n", recipe.repository));
    }
    if !recipe.keywords.is_empty() {
        out.push_str(&format!("  Keywords:    {}\n", recipe.keywords.join(", ")));
    }
    if !recipe.process_match.is_empty() {
        out.push_str(&format!("  Processes:   {}\n", recipe.process_match.join(", ")));
    }
    for lm in &recipe.log_match {
        out.push_str(&format!("  Log:         {} ({})\n", lm.name, lm.file));
    }
    if !recipe.validation_nrql.is_empty() {
        out.push_str(&format!("  Validation:  {}\n", recipe.validation_nrql));
    }
    out.push_str(&format!("  File:        {} bytes\n", recipe.file.len()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parser::parse_recipe_file;
    use std::path::PathBuf;

    const RECIPE_YAML: &str = r#"
name: mysql-open-source-integration
description: MySQL Open Source Integration
repository: https://github.com/newrelic/nri-mysql
keywords: [Integration, MySQL]
processMatch: [mysqld]
logMatch:
  - name: mysql
    file: /var/log/mysql/error.log*
validationNrql: SELECT count(*) FROM MysqlSample
"#;

    fn write_recipe(dir: &tempfile::TempDir) -> PathBuf {
        let path = dir.path().join("mysql.yml");
        std::fs::write(&path, RECIPE_YAML).unwrap();
        path
    }

    #[test]
    fn test_cli_show_local() {
        let dir = tempfile::tempdir().unwrap();
        let source = RecipeSource::Path(write_recipe(&dir));
        let file = load(&source, &TransportArgs::default()).unwrap();
        let out = render_file(&file).unwrap();
        assert!(out.contains("name: mysql-open-source-integration\n"));
        assert!(out.contains("repository: https://github.com/newrelic/nri-mysql\n"));
        assert!(out.contains("- mysqld\n"));
        assert_eq!(parse_recipe_file(&out).unwrap(), file);

        let cmd = Commands::Show {
            source,
            transport: TransportArgs::default(),
        };
        assert!(dispatch(cmd).is_ok());
    }

    #[test]
    fn test_cli_convert_local_json() {
        let dir = tempfile::tempdir().unwrap();
        let source = RecipeSource::Path(write_recipe(&dir));
        let recipe = load(&source, &TransportArgs::default())
            .unwrap()
            .to_recipe()
            .unwrap();
        let out = render_recipe(&recipe, true).unwrap();
        assert!(out.ends_with("}\n"));

        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["name"], "mysql-open-source-integration");
        assert_eq!(json["repository"], "https://github.com/newrelic/nri-mysql");
        assert_eq!(json["keywords"], serde_json::json!(["Integration", "MySQL"]));
        assert_eq!(json["processMatch"], serde_json::json!(["mysqld"]));
        assert_eq!(json["logMatch"][0]["file"], "/var/log/mysql/error.log*");
        assert_eq!(json["validationNrql"], "SELECT count(*) FROM MysqlSample");
        assert_eq!(json["file"], recipe.file.as_str());

        let cmd = Commands::Convert {
            source,
            json: true,
            transport: TransportArgs::default(),
        };
        assert!(dispatch(cmd).is_ok());
    }

    #[test]
    fn test_cli_convert_summary_render() {
        let recipe = parse_recipe_file(RECIPE_YAML).unwrap().to_recipe().unwrap();
        assert_eq!(render_recipe(&recipe, false).unwrap(), format_summary(&recipe));
    }

    #[test]
    fn test_cli_missing_file_names_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.yml");
        let cmd = Commands::Convert {
            source: RecipeSource::Path(path.clone()),
            json: false,
            transport: TransportArgs::default(),
        };
        let err = dispatch(cmd).unwrap_err();
        assert!(err.contains("absent.yml"), "error was: {err}");
        assert!(err.contains("cannot read recipe"), "error was: {err}");
    }

    #[test]
    fn test_cli_invalid_recipe() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.yml");
        std::fs::write(&path, "keywords: scalar\n").unwrap();
        let cmd = Commands::Show {
            source: RecipeSource::Path(path),
            transport: TransportArgs::default(),
        };
        let err = dispatch(cmd).unwrap_err();
        assert!(err.contains("recipe parse error"), "error was: {err}");
    }

    #[test]
    fn test_cli_transport_args_to_config() {
        let args = TransportArgs {
            timeout: Some(7),
            strict_status: true,
        };
        let cfg = args.to_config();
        assert_eq!(cfg.timeout, Some(Duration::from_secs(7)));
        assert!(cfg.strict_status);
        assert!(cfg.user_agent.starts_with("recipekit/"));
        assert!(TransportArgs::default().to_config().timeout.is_none());
    }

    #[test]
    fn test_cli_summary() {
        let recipe = parse_recipe_file(RECIPE_YAML).unwrap().to_recipe().unwrap();
        let summary = format_summary(&recipe);
        assert!(summary.starts_with("Recipe: mysql-open-source-integration\n"));
        assert!(summary.contains("Keywords:    Integration, MySQL"));
        assert!(summary.contains("Processes:   mysqld"));
        assert!(summary.contains("Log:         mysql (/var/log/mysql/error.log*)"));
        assert!(summary.contains("Validation:  SELECT count(*) FROM MysqlSample"));
    }

    #[test]
    fn test_cli_summary_skips_empty_fields() {
        let recipe = RecipeFile {
            name: "bare".to_string(),
            ..Default::default()
        }
        .to_recipe()
        .unwrap();
        let summary = format_summary(&recipe);
        assert!(!summary.contains("Description"));
        assert!(!summary.contains("Keywords"));
        assert!(summary.contains("File:"));
    }
}

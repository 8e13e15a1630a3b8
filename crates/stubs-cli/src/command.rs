use clap::{Args, Parser, Subcommand};
use std::{error::Error, path::PathBuf};
use stubs::{
    builtin::register_builtin,
    config::SchemaFile,
    schema::{build::RegistryBuilder, registry::Registry},
};

#[derive(Debug, Parser)]
#[command(name = "stubs", version)]
#[command(about = "Inspect stub type registries", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(about = "List every registered type name")]
    List(Source),

    #[command(about = "Print one type descriptor as JSON")]
    Show {
        #[command(flatten)]
        source: Source,

        /// Type name to look up
        type_name: String,
    },

    #[command(about = "Validate the registry and report its size")]
    Check(Source),
}

///
/// Source
///
/// Where descriptors come from. With no files the builtin stubs are used.
///

#[derive(Debug, Args)]
pub struct Source {
    /// Include the builtin stub types alongside any schema files
    #[arg(long)]
    pub builtin: bool,

    /// Schema file to load; repeat to merge several, later files win
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

impl Source {
    fn load(&self) -> Result<Registry, Box<dyn Error>> {
        let mut builder = RegistryBuilder::new();

        if self.builtin || self.files.is_empty() {
            register_builtin(&mut builder);
        }

        for path in &self.files {
            SchemaFile::load(path)?.register_into(&mut builder)?;
        }

        Ok(builder.freeze()?)
    }
}

/// Run a parsed command and return what should go to stdout.
pub fn execute(cli: &Cli) -> Result<String, Box<dyn Error>> {
    match &cli.command {
        Commands::List(source) => {
            let registry = source.load()?;

            Ok(registry.list_type_names().collect::<Vec<_>>().join("\n"))
        }
        Commands::Show { source, type_name } => {
            let registry = source.load()?;
            let descriptor = registry.lookup(type_name)?;

            Ok(serde_json::to_string_pretty(descriptor)?)
        }
        Commands::Check(source) => {
            let registry = source.load()?;
            tracing::debug!(types = registry.len(), "registry check passed");

            Ok(format!("ok: {} types", registry.len()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn run(args: &[&str]) -> Result<String, Box<dyn Error>> {
        let cli = Cli::try_parse_from(std::iter::once("stubs").chain(args.iter().copied()))?;

        execute(&cli)
    }

    fn schema_dir() -> (TempDir, String) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("topic.toml");
        fs::write(
            &path,
            r#"
            [[types]]
            name = "Topic"
            fields = [
                { name = "id", type = "uint64", key = true, encoding = { cpp = "uint64_t" } },
                { name = "title", type = "string" },
            ]
            "#,
        )
        .unwrap();

        let path = path.to_string_lossy().into_owned();
        (dir, path)
    }

    #[test]
    fn list_defaults_to_builtin() {
        assert_eq!(run(&["list"]).unwrap(), "Domain");
    }

    #[test]
    fn list_merges_files_and_builtin() {
        let (_dir, path) = schema_dir();

        assert_eq!(run(&["list", "-f", &path]).unwrap(), "Topic");
        assert_eq!(
            run(&["list", "--builtin", "--file", &path]).unwrap(),
            "Domain\nTopic"
        );
    }

    #[test]
    fn show_prints_descriptor_json() {
        let output = run(&["show", "Domain"]).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(json["type_name"], "Domain");
        assert_eq!(json["fields"][0]["field_name"], "name");
        assert_eq!(json["fields"][1]["encoding_hints"]["cpp"], "uint32_t");
    }

    #[test]
    fn show_reports_missing_type() {
        let err = run(&["show", "Widget"]).expect_err("Widget is not registered");

        assert_eq!(err.to_string(), "type not found: Widget");
    }

    #[test]
    fn check_counts_types() {
        let (_dir, path) = schema_dir();

        assert_eq!(run(&["check", "--builtin", "-f", &path]).unwrap(), "ok: 2 types");
    }

    #[test]
    fn check_surfaces_validation_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(
            &path,
            r#"
            [[types]]
            name = "Bad Name"
            "#,
        )
        .unwrap();

        let path = path.to_string_lossy().into_owned();
        let err = run(&["check", "-f", &path]).expect_err("invalid name");

        assert!(err.to_string().contains("not an ASCII identifier"), "{err}");
    }
}

//! Command-line arguments and the configuration built from them.

use crate::formatter::OutputFormat;
use clap::{Parser, Subcommand, ValueEnum};
use curriculum_core::{ColumnOrder, DocOptions, Namespace};
use std::path::PathBuf;

/// Default indentation of synthesized documentation.
pub const DEFAULT_INDENT: usize = 4;

/// Tool configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Output format.
    pub format: OutputFormat,
    /// Options for documentation synthesis.
    pub doc_options: DocOptions,
}

impl CliConfig {
    /// Create a configuration with the given output format.
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            doc_options: DocOptions::default(),
        }
    }

    /// Set the documentation options.
    pub fn with_doc_options(mut self, options: DocOptions) -> Self {
        self.doc_options = options;
        self
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self::new(OutputFormat::Table)
    }
}

/// Inspect the curriculum model's tables, documentation and DDL.
#[derive(Parser, Debug)]
#[command(name = "curriculum-model")]
#[command(version, about = "Curriculum model schema tool", long_about = None)]
pub struct Args {
    /// Output format
    #[arg(long, global = true, default_value = "table", value_enum)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List registered tables
    Tables {
        /// Only list tables of this namespace
        #[arg(long, value_enum)]
        namespace: Option<NamespaceArg>,
    },

    /// Print synthesized documentation
    Docs(DocsArgs),

    /// Print the CREATE statements for every table
    Ddl,

    /// Load the model and apply its schema to SQLite
    Check {
        /// Database file (in memory when omitted)
        #[arg(long)]
        database: Option<PathBuf>,
    },
}

/// Arguments of the `docs` subcommand.
#[derive(clap::Args, Debug)]
pub struct DocsArgs {
    /// Document a single entity
    pub entity: Option<String>,

    /// Column listing order
    #[arg(long, default_value = "declaration", value_enum)]
    pub order: OrderArg,

    /// Prefix for cross-referenced entity names
    #[arg(long, default_value = "")]
    pub xref_prefix: String,

    /// Spaces per indentation level
    #[arg(long, default_value_t = DEFAULT_INDENT)]
    pub indent: usize,
}

/// Namespace selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum NamespaceArg {
    Core,
    Audit,
    StudentRecords,
}

impl From<NamespaceArg> for Namespace {
    fn from(arg: NamespaceArg) -> Self {
        match arg {
            NamespaceArg::Core => Namespace::Core,
            NamespaceArg::Audit => Namespace::Audit,
            NamespaceArg::StudentRecords => Namespace::StudentRecords,
        }
    }
}

/// Column order selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OrderArg {
    Declaration,
    Alphabetical,
}

impl From<OrderArg> for ColumnOrder {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Declaration => ColumnOrder::Declaration,
            OrderArg::Alphabetical => ColumnOrder::Alphabetical,
        }
    }
}

impl DocsArgs {
    /// Documentation options for these arguments.
    pub fn doc_options(&self) -> DocOptions {
        DocOptions::new()
            .with_column_order(self.order.into())
            .with_indent(self.indent)
            .with_xref_prefix(self.xref_prefix.clone())
    }
}

impl Args {
    /// Split the parsed arguments into the tool configuration and the
    /// command to run.
    pub fn into_config(self) -> (CliConfig, Command) {
        let config = CliConfig::new(self.format);
        let config = match &self.command {
            Command::Docs(docs) => config.with_doc_options(docs.doc_options()),
            _ => config,
        };
        (config, self.command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();

        assert_eq!(config.format, OutputFormat::Table);
        assert_eq!(config.doc_options, DocOptions::default());
    }

    #[test]
    fn test_docs_args_into_config() {
        let args = Args::parse_from([
            "curriculum-model",
            "--format",
            "text",
            "docs",
            "Cost",
            "--order",
            "alphabetical",
            "--xref-prefix",
            "schema.",
            "--indent",
            "2",
        ]);
        let (config, command) = args.into_config();

        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.doc_options.column_order, ColumnOrder::Alphabetical);
        assert_eq!(config.doc_options.xref_prefix, "schema.");
        assert_eq!(config.doc_options.indent, 2);
        match command {
            Command::Docs(docs) => assert_eq!(docs.entity.as_deref(), Some("Cost")),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_format_after_subcommand() {
        let args = Args::parse_from(["curriculum-model", "tables", "--format", "json"]);

        assert_eq!(args.format, OutputFormat::Json);
        let (config, command) = args.into_config();
        assert_eq!(config.doc_options, DocOptions::default());
        assert!(matches!(command, Command::Tables { namespace: None }));
    }

    #[test]
    fn test_namespace_values() {
        let args = Args::parse_from([
            "curriculum-model",
            "tables",
            "--namespace",
            "student-records",
        ]);

        match args.command {
            Command::Tables { namespace } => {
                assert_eq!(namespace.map(Namespace::from), Some(Namespace::StudentRecords))
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_check_database_path() {
        let args = Args::parse_from(["curriculum-model", "check", "--database", "model.db"]);

        match args.command {
            Command::Check { database } => {
                assert_eq!(database, Some(PathBuf::from("model.db")))
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}

// CLI Layer
// ユーザー入力の受付とコマンドルーティング

pub mod command_context;
pub mod commands;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// 出力フォーマット
#[derive(Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable status line (default)
    #[default]
    Text,
    /// Violations as a JSON array on stdout
    Json,
}

/// Schemalint - Database Schema Linter
///
/// Checks a PostgreSQL schema against naming and structural conventions.
#[derive(Parser, Debug)]
#[command(name = "schemalint")]
#[command(author = "Schemalint Contributors")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Database schema linter")]
#[command(long_about = "Schemalint - Database Schema Linter

Connects to a PostgreSQL database, reads the catalog for one schema and
reports convention violations:
  • Table and column names must be lowercase ASCII
  • Primary key constraints must be prefixed with pk_
  • Foreign key constraints must be prefixed with fk_
  • Tables must not be empty

Violations are written to a JSON file (errors.json by default).")]
#[command(propagate_version = true)]
#[command(after_help = "EXIT STATUS:
  0  No violations found
  1  Violations found (report written)
  2  Fatal error (configuration, connection, catalog query, file write)")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Lint the database schema
    ///
    /// Reads tables, columns, constraints and row statistics from the
    /// catalog and reports every violation found.
    ///
    /// EXAMPLES:
    ///   # Lint the development environment
    ///   schemalint check
    ///
    ///   # Lint another schema and write the report elsewhere
    ///   schemalint check --schema reporting --output lint.json
    ///
    ///   # Print violations as JSON
    ///   schemalint check --format json
    Check {
        /// Target environment
        #[arg(short, long, value_name = "ENV", default_value = "development")]
        env: String,

        /// Report file (overrides the config file)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Schema to lint (overrides the config file)
        #[arg(short, long, value_name = "SCHEMA")]
        schema: Option<String>,

        /// Output format (text or json)
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Create a configuration file template
    ///
    /// EXAMPLES:
    ///   schemalint init
    ///   schemalint init --force
    Init {
        /// Overwrite an existing configuration file
        #[arg(short, long)]
        force: bool,
    },
}

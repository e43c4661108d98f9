use std::path::PathBuf;

use business::domain::import::batch::DEFAULT_BATCH_SIZE;
use business::domain::import::model::DEFAULT_DISTRIBUTOR_NAME;
use clap::{Parser, Subcommand, ValueEnum};

/// PharmaCompare command line: spreadsheet imports, checks and backups
#[derive(Debug, Parser)]
#[command(name = "pharma-cli")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Use the local JSON store in this directory instead of DATABASE_URL
    #[arg(long, global = true)]
    pub local_store: Option<PathBuf>,

    /// Rows per insert batch
    #[arg(long, global = true, env = "IMPORT_BATCH_SIZE", default_value_t = DEFAULT_BATCH_SIZE)]
    pub batch_size: usize,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Import a distributor price list (.csv, .xlsx, .xls)
    ImportPrices {
        file: PathBuf,
        /// Distributor for rows without a distributor column
        #[arg(long, default_value = DEFAULT_DISTRIBUTOR_NAME)]
        distributor: String,
    },
    /// Import a product catalog; prices are ignored
    ImportCatalog { file: PathBuf },
    /// Show how a spreadsheet would be read without importing it
    Inspect { file: PathBuf },
    /// Print table counts, a few products and the latest prices
    Check,
    /// Write a full backup
    Export {
        #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,
        /// Output file (default: pharmacompare-backup-<date>.<format>)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Replace all data with a JSON backup
    Restore { file: PathBuf },
    /// Delete every record of every table
    Clear {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Xlsx,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
        }
    }
}

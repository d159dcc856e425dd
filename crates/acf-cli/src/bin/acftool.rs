use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use acf_cli::commands::{config_ops, filter_ops};
use acf_core::MatchMode;

#[derive(Parser)]
#[command(name = "acftool", about = "Autocomplete filtering diagnostics")]
struct Cli {
    /// Write JSON trace logs to this directory (needs the `trace` feature)
    #[arg(long, global = true)]
    trace_dir: Option<PathBuf>,
    /// Custom accent table TOML
    #[arg(long, global = true)]
    table: Option<String>,
    /// Custom settings TOML
    #[arg(long, global = true)]
    settings: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct MatchArgs {
    /// Match mode: contains or starts_with (default from settings)
    #[arg(long)]
    mode: Option<MatchMode>,
    /// Compare accented characters literally
    #[arg(long)]
    no_fold: bool,
    /// Output as JSON instead of text
    #[arg(long)]
    json: bool,
}

impl From<MatchArgs> for filter_ops::MatchOptions {
    fn from(a: MatchArgs) -> Self {
        Self {
            mode: a.mode,
            no_fold: a.no_fold,
            json: a.json,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Filter a candidate file (one per line) against a query
    Filter {
        /// Path to the candidate list
        candidates_file: String,
        /// Query text
        query: String,
        #[command(flatten)]
        opts: MatchArgs,
    },
    /// Print the accent-folded form of a string
    Fold {
        text: String,
    },
    /// Replay a keystroke script against a candidate file
    Replay {
        /// Path to the candidate list
        candidates_file: String,
        /// Path to the script (one step per line)
        script_file: String,
        #[command(flatten)]
        opts: MatchArgs,
    },
    /// Print the embedded accent table TOML
    TableExport,
    /// Validate an accent table TOML file
    TableValidate {
        file: String,
    },
    /// Print the embedded default settings TOML
    SettingsExport,
    /// Validate a settings TOML file
    SettingsValidate {
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Some(ref dir) = cli.trace_dir {
        acfilter::init_tracing(dir);
    }
    config_ops::load_overrides(cli.table.as_deref(), cli.settings.as_deref());

    match cli.command {
        Command::Filter {
            candidates_file,
            query,
            opts,
        } => filter_ops::filter(&candidates_file, &query, &opts.into()),
        Command::Fold { text } => filter_ops::fold_text(&text),
        Command::Replay {
            candidates_file,
            script_file,
            opts,
        } => filter_ops::replay(&candidates_file, &script_file, &opts.into()),
        Command::TableExport => config_ops::table_export(),
        Command::TableValidate { file } => config_ops::table_validate(&file),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}

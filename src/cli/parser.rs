use crate::export::ExportFormat;
use crate::models::city::City;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for rbikeshare
/// CLI application to explore US bikeshare trip data
#[derive(Parser)]
#[command(
    name = "rbikeshare",
    version = env!("CARGO_PKG_VERSION"),
    about = "Explore US bikeshare data: popular times, stations, trip durations and user stats",
    long_about = None
)]
pub struct Cli {
    /// Override the dataset directory (useful for tests or custom data)
    #[arg(global = true, long = "data-dir")]
    pub data_dir: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Without a subcommand the interactive explorer starts
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// City and month/day filters shared by the non-interactive commands
#[derive(Args, Debug, Clone)]
pub struct FilterArgs {
    #[arg(long, value_enum, help = "City dataset to analyze")]
    pub city: City,

    #[arg(long, help = "Month name (January..December) or \"all\"")]
    pub month: Option<String>,

    #[arg(long, help = "Day of week (Monday..Sunday) or \"all\"")]
    pub day: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file
    Init,

    /// Show or check the configuration
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "check",
            help = "Check that the data directory holds every city's dataset"
        )]
        check: bool,
    },

    /// Interactive exploration (default)
    Explore,

    /// Compute the statistics for one city and filter selection
    Stats {
        #[command(flatten)]
        filter: FilterArgs,

        #[arg(long, help = "Print the report as JSON")]
        json: bool,
    },

    /// Export the filtered raw trips
    Export {
        #[command(flatten)]
        filter: FilterArgs,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

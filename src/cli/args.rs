use clap::Parser;
use std::path::PathBuf;

/*-------------------------------------------------------------------------------------------------
  Command Line Interface (CLI) Arguments
-------------------------------------------------------------------------------------------------*/

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Extract ZScaler datacenter IP ranges.",
    long_about = "Pulls the published configuration for the specified ZScaler datacenters. \
                  Parameters may also be supplied by a config.ini file in the working \
                  directory, which takes precedence unless --no-config is given."
)]
pub struct Args {
    /// Ignore a config.ini file in the working directory
    #[arg(long)]
    pub no_config: bool,

    /// ZScaler cloud to pull data for, e.g. "zscaler.net"
    #[arg(short, long)]
    pub cloud: Option<String>,

    /// Comma-separated region names, e.g. "Americas,EMEA"
    #[arg(short, long)]
    pub regions: Option<String>,

    /// Comma-separated datacenter names, e.g. "Atlanta II,Boston I"
    #[arg(short, long)]
    pub datacenters: Option<String>,

    /// IP format: "range", "cidr", "wildcard", or "all" ("all" writes a CSV file)
    #[arg(short, long)]
    pub ipformat: Option<String>,

    /// Output format: "simple", "bydatacenter", or "all" (forced to "all" by ipformat "all")
    #[arg(short, long)]
    pub output_format: Option<String>,

    /// Directory for the CSV export; defaults to the working directory
    #[arg(short, long)]
    pub path: Option<PathBuf>,

    /// Logging verbosity
    #[command(flatten)]
    pub verbose: clap_verbosity_flag::Verbosity,
}

use crate::core::errors::{Error, Result};
use std::fmt;
use std::str::FromStr;

/*-------------------------------------------------------------------------------------------------
  IP Format
-------------------------------------------------------------------------------------------------*/

/// The kind of IP information the caller asked for. `All` is the CSV-export request and is only
/// valid together with [OutputFormat::All].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IpFormat {
    Range,
    Cidr,
    Wildcard,
    All,
}

impl FromStr for IpFormat {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_lowercase().as_str() {
            "range" => Ok(IpFormat::Range),
            "cidr" => Ok(IpFormat::Cidr),
            "wildcard" => Ok(IpFormat::Wildcard),
            "all" => Ok(IpFormat::All),
            _ => Err(Error::Configuration(format!(
                "unrecognized ipformat `{value}`; expected range, cidr, wildcard, or all"
            ))),
        }
    }
}

impl fmt::Display for IpFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IpFormat::Range => write!(f, "range"),
            IpFormat::Cidr => write!(f, "cidr"),
            IpFormat::Wildcard => write!(f, "wildcard"),
            IpFormat::All => write!(f, "all"),
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Output Format
-------------------------------------------------------------------------------------------------*/

/// The requested output shape. `All` is forced by (and only valid with) `ipformat = all`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Simple,
    ByDatacenter,
    All,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_lowercase().as_str() {
            "simple" => Ok(OutputFormat::Simple),
            "bydatacenter" => Ok(OutputFormat::ByDatacenter),
            "all" => Ok(OutputFormat::All),
            _ => Err(Error::Configuration(format!(
                "unrecognized output format `{value}`; expected simple, bydatacenter, or all"
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Simple => write!(f, "simple"),
            OutputFormat::ByDatacenter => write!(f, "bydatacenter"),
            OutputFormat::All => write!(f, "all"),
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Value Format and Render Mode
-------------------------------------------------------------------------------------------------*/

/// Per-block value selection for the console listing modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFormat {
    Range,
    Cidr,
    Wildcard,
}

/// The fully resolved render mode: the projector handles exactly these three shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// One deduplicated, sorted value per line across the whole cloud.
    Simple(ValueFormat),
    /// Region and datacenter names as headings, values deduplicated per datacenter.
    ByDatacenter(ValueFormat),
    /// One CSV row per block, written to a file.
    Csv,
}

impl RenderMode {
    /// Resolve the requested format pair into a render mode. The `all` ipformat and the `all`
    /// output format imply each other; any other pairing with `all` is contradictory and is
    /// rejected here, before any data is fetched.
    pub fn resolve(ipformat: IpFormat, output_format: OutputFormat) -> Result<Self> {
        let value_format = match ipformat {
            IpFormat::Range => ValueFormat::Range,
            IpFormat::Cidr => ValueFormat::Cidr,
            IpFormat::Wildcard => ValueFormat::Wildcard,
            IpFormat::All => {
                return match output_format {
                    OutputFormat::All => Ok(RenderMode::Csv),
                    _ => Err(Error::Configuration(
                        "\"all\" data format only supports CSV export; \
                         set the output format to \"all\" or drop it"
                            .to_string(),
                    )),
                };
            }
        };

        match output_format {
            OutputFormat::Simple => Ok(RenderMode::Simple(value_format)),
            OutputFormat::ByDatacenter => Ok(RenderMode::ByDatacenter(value_format)),
            OutputFormat::All => Err(Error::Configuration(format!(
                "output format \"all\" is the CSV export and requires ipformat \"all\", \
                 not \"{ipformat}\""
            ))),
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

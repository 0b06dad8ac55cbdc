//! Extract ZScaler datacenter IP ranges.
//!
//! Retrieves the published datacenter feed for a ZScaler cloud, filters it by region and
//! datacenter name, derives usable-IP-range and IPv4 wildcard representations for each CIDR
//! block, and projects the result into flat listings, grouped listings, or CSV rows.
//!
//! ```no_run
//! # fn main() -> zscalerranges::Result<()> {
//! let client = zscalerranges::Client::new("zscaler.net");
//! let ranges = client.get_ranges()?;
//!
//! let filter = zscalerranges::Filter::new(Some(vec!["Americas".to_string()]), None);
//! let mut ranges = filter.apply(&ranges)?;
//! zscalerranges::enrich(&mut ranges)?;
//!
//! for value in zscalerranges::project::flat_values(&ranges, zscalerranges::ValueFormat::Cidr) {
//!     println!("{value}");
//! }
//! # Ok(())
//! # }
//! ```

mod core;

pub use crate::core::block::Block;
pub use crate::core::client::{api_url, Client, KNOWN_CLOUDS};
pub use crate::core::enrich::enrich;
pub use crate::core::errors::{Error, Result};
pub use crate::core::filter::Filter;
pub use crate::core::format::{IpFormat, OutputFormat, RenderMode, ValueFormat};
pub use crate::core::label::{self, Label};
pub use crate::core::project;
pub use crate::core::ranges::CloudRanges;

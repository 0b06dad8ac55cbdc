use serde::{Deserialize, Serialize};

/*-------------------------------------------------------------------------------------------------
  Datacenter Block
-------------------------------------------------------------------------------------------------*/

/// One network block published for a datacenter.
///
/// The passthrough fields come straight from the feed and are treated as opaque strings. The
/// derived fields are never deserialized (`#[serde(skip)]`) and are absent until
/// [enrich](crate::core::enrich::enrich) runs; they are always recomputed from `range`, never
/// cached across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Block {
    #[serde(default)]
    pub range: Option<String>,

    #[serde(default)]
    pub vpn: Option<String>,

    #[serde(default)]
    pub gre: Option<String>,

    #[serde(default)]
    pub hostname: Option<String>,

    #[serde(default)]
    pub latitude: Option<String>,

    #[serde(default)]
    pub longitude: Option<String>,

    /// First usable host address, derived from `range`.
    #[serde(skip)]
    pub first_usable: Option<String>,

    /// Last usable host address, derived from `range`.
    #[serde(skip)]
    pub last_usable: Option<String>,

    /// Sorted, deduplicated IPv4 wildcard patterns covering the usable range. Always `None` for
    /// IPv6 blocks and blocks without a `range`.
    #[serde(skip)]
    pub wildcard: Option<Vec<String>>,
}

/*--------------------------------------------------------------------------------------
  Block Implementation
--------------------------------------------------------------------------------------*/

impl Block {
    /// CIDR string for blocks that carry one; empty `range` values count as absent.
    pub fn cidr(&self) -> Option<&str> {
        self.range.as_deref().filter(|range| !range.is_empty())
    }

    /// The usable range rendered as `"<first> - <last>"`. Un-enriched blocks render their
    /// missing bounds as `None`, which the projector's `"None"` suppression guard then drops.
    pub fn usable_range(&self) -> String {
        format!(
            "{} - {}",
            self.first_usable.as_deref().unwrap_or("None"),
            self.last_usable.as_deref().unwrap_or("None")
        )
    }

    /// Wildcard patterns joined with `"-"` for the CSV export; empty when there are none.
    pub fn wildcard_joined(&self) -> String {
        self.wildcard
            .as_deref()
            .map(|patterns| patterns.join("-"))
            .unwrap_or_default()
    }
}

/// Render an optional passthrough field for the CSV export: absent values become empty strings.
pub fn csv_field(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

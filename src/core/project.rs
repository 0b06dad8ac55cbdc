use crate::core::block::{csv_field, Block};
use crate::core::errors::Result;
use crate::core::format::ValueFormat;
use crate::core::label;
use crate::core::ranges::CloudRanges;
use std::collections::BTreeSet;

/*-------------------------------------------------------------------------------------------------
  Projection
-------------------------------------------------------------------------------------------------*/

/*--------------------------------------------------------------------------------------
  Value Collection (flat and grouped listing modes)
--------------------------------------------------------------------------------------*/

/// Collect the per-block values for a whole cloud: deduplicated and sorted globally across every
/// region and datacenter. Used by the `simple` output mode.
pub fn flat_values(ranges: &CloudRanges, format: ValueFormat) -> Vec<String> {
    let mut values = BTreeSet::new();
    collect_values(&mut values, ranges.blocks(), format);
    finalize(values)
}

/// Collect the per-block values for a single datacenter's blocks: same dedup, sort, and
/// suppression rules as [flat_values], scoped to one datacenter. Used by the `bydatacenter`
/// output mode.
pub fn datacenter_values(blocks: &[Block], format: ValueFormat) -> Vec<String> {
    let mut values = BTreeSet::new();
    collect_values(&mut values, blocks.iter(), format);
    finalize(values)
}

/// Accumulate values into a `BTreeSet`, which gives order-independent dedup and lexicographic
/// ordering in one container.
fn collect_values<'b>(
    values: &mut BTreeSet<String>,
    blocks: impl Iterator<Item = &'b Block>,
    format: ValueFormat,
) {
    for block in blocks {
        match format {
            ValueFormat::Cidr => {
                if let Some(cidr) = block.cidr() {
                    values.insert(cidr.to_string());
                }
            }
            ValueFormat::Range => {
                values.insert(block.usable_range());
            }
            ValueFormat::Wildcard => {
                // Only IPv4 blocks carry wildcards.
                if let Some(patterns) = &block.wildcard {
                    values.extend(patterns.iter().cloned());
                }
            }
        }
    }
}

/// Drop any entry containing the literal substring `"None"`. This guards against missing-field
/// placeholders (un-enriched blocks render absent bounds as `None`) propagating into output.
fn finalize(values: BTreeSet<String>) -> Vec<String> {
    values
        .into_iter()
        .filter(|value| !value.contains("None"))
        .collect()
}

/*--------------------------------------------------------------------------------------
  CSV Rows (tabular mode)
--------------------------------------------------------------------------------------*/

/// Column headers for the CSV export.
pub const CSV_HEADER: [&str; 12] = [
    "ZScaler Cloud",
    "Region",
    "City",
    "CIDR",
    "VPN",
    "GRE",
    "Hostname",
    "Latitude",
    "Longitude",
    "First IP",
    "Last IP",
    "Wildcard",
];

/// Build one CSV row per block: no dedup, no `"None"` suppression, original block order. Absent
/// fields render as empty strings.
pub fn csv_rows(ranges: &CloudRanges) -> Result<Vec<[String; 12]>> {
    let mut rows = Vec::with_capacity(ranges.block_count());

    for (region_label, datacenters) in ranges.regions() {
        let region = label::parse(region_label)?.name;

        for (datacenter_label, blocks) in datacenters {
            let datacenter = label::parse(datacenter_label)?.name;

            for block in blocks {
                rows.push([
                    ranges.cloud().to_string(),
                    region.to_string(),
                    datacenter.to_string(),
                    csv_field(&block.range).to_string(),
                    csv_field(&block.vpn).to_string(),
                    csv_field(&block.gre).to_string(),
                    csv_field(&block.hostname).to_string(),
                    csv_field(&block.latitude).to_string(),
                    csv_field(&block.longitude).to_string(),
                    csv_field(&block.first_usable).to_string(),
                    csv_field(&block.last_usable).to_string(),
                    block.wildcard_joined(),
                ]);
            }
        }
    }

    Ok(rows)
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

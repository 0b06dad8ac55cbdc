use zscalerranges::{label, project, CloudRanges, Result, ValueFormat};

/*-------------------------------------------------------------------------------------------------
  Console Output
-------------------------------------------------------------------------------------------------*/

/*--------------------------------------------------------------------------------------
  Simple Listing
--------------------------------------------------------------------------------------*/

/// Print one value per line for the whole cloud: deduplicated and sorted globally, with
/// missing-value placeholders suppressed.
pub fn simple(ranges: &CloudRanges, format: ValueFormat) {
    for value in project::flat_values(ranges, format) {
        println!("{value}");
    }
}

/*--------------------------------------------------------------------------------------
  Grouped-by-Datacenter Listing
--------------------------------------------------------------------------------------*/

/// Print region and datacenter names as headings, with each datacenter's values deduplicated and
/// sorted within that datacenter only. Regions with no datacenters print nothing.
pub fn by_datacenter(ranges: &CloudRanges, format: ValueFormat) -> Result<()> {
    for (region_label, datacenters) in ranges.regions() {
        if !datacenters.is_empty() {
            println!("{}", label::parse(region_label)?.name);
        }

        for (datacenter_label, blocks) in datacenters {
            println!("{}", label::parse(datacenter_label)?.name);

            for value in project::datacenter_values(blocks, format) {
                println!("{value}");
            }
        }
    }

    Ok(())
}

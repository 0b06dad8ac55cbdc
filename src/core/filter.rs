use crate::core::errors::Result;
use crate::core::json::JsonRegions;
use crate::core::label;
use crate::core::ranges::CloudRanges;
use log::{debug, trace};
use std::collections::BTreeSet;

/*-------------------------------------------------------------------------------------------------
  Filter
-------------------------------------------------------------------------------------------------*/

/// Filter used to prune a [CloudRanges] tree down to the requested regions and datacenters.
/// Matching is exact, case-sensitive string equality against the human name extracted from each
/// location label. Requested names that match nothing silently yield no entries.
#[derive(Debug, Default)]
pub struct Filter {
    /// Keep regions with these human names; `None` keeps all regions.
    regions: Option<BTreeSet<String>>,

    /// Keep datacenters with these human names; `None` keeps all datacenters.
    datacenters: Option<BTreeSet<String>>,
}

/*--------------------------------------------------------------------------------------
  Filter Implementation
--------------------------------------------------------------------------------------*/

impl Filter {
    /// Build a filter from optional allow-lists. Empty lists are treated the same as absent
    /// lists: no filtering on that axis.
    pub fn new(regions: Option<Vec<String>>, datacenters: Option<Vec<String>>) -> Self {
        let to_set = |names: Option<Vec<String>>| {
            names
                .filter(|names| !names.is_empty())
                .map(|names| names.into_iter().collect())
        };

        Self {
            regions: to_set(regions),
            datacenters: to_set(datacenters),
        }
    }

    /// True when neither allow-list is set; applying an empty filter is the identity.
    pub fn is_empty(&self) -> bool {
        self.regions.is_none() && self.datacenters.is_none()
    }

    /*-------------------------------------------------------------------------
      Filter Functions
    -------------------------------------------------------------------------*/

    pub(crate) fn match_region(&self, name: &str) -> bool {
        if let Some(filter_regions) = &self.regions {
            filter_regions.contains(name)
        } else {
            trace!("No `regions` filter");
            true
        }
    }

    pub(crate) fn match_datacenter(&self, name: &str) -> bool {
        if let Some(filter_datacenters) = &self.datacenters {
            filter_datacenters.contains(name)
        } else {
            trace!("No `datacenters` filter");
            true
        }
    }

    /*-------------------------------------------------------------------------
      Apply
    -------------------------------------------------------------------------*/

    /// Build a new tree containing only the matching regions and datacenters. Regions left with
    /// zero datacenters are dropped entirely. Applying the same filter to its own output yields
    /// an identical tree.
    pub fn apply(&self, ranges: &CloudRanges) -> Result<CloudRanges> {
        if self.is_empty() {
            return Ok(ranges.clone());
        }

        let mut filtered_regions = JsonRegions::new();

        for (region_label, datacenters) in ranges.regions() {
            if !self.match_region(label::parse(region_label)?.name) {
                continue;
            }

            let mut filtered_datacenters = datacenters.clone();
            for datacenter_label in datacenters.keys() {
                if !self.match_datacenter(label::parse(datacenter_label)?.name) {
                    filtered_datacenters.shift_remove(datacenter_label);
                }
            }

            if !filtered_datacenters.is_empty() {
                filtered_regions.insert(region_label.clone(), filtered_datacenters);
            }
        }

        debug!(
            "Filter kept {} of {} regions",
            filtered_regions.len(),
            ranges.regions().len()
        );

        Ok(CloudRanges {
            cloud: ranges.cloud().to_string(),
            regions: filtered_regions,
        })
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::Error;
    use crate::core::ranges::tests::test_cloud_ranges;

    fn names(values: &[&str]) -> Option<Vec<String>> {
        Some(values.iter().map(|value| value.to_string()).collect())
    }

    #[test]
    fn test_empty_filter_is_identity() {
        let ranges = test_cloud_ranges();

        let no_lists = Filter::new(None, None);
        assert!(no_lists.is_empty());
        assert_eq!(no_lists.apply(&ranges).unwrap(), ranges);

        let empty_lists = Filter::new(Some(vec![]), Some(vec![]));
        assert!(empty_lists.is_empty());
        assert_eq!(empty_lists.apply(&ranges).unwrap(), ranges);
    }

    #[test]
    fn test_filter_by_region() {
        let ranges = test_cloud_ranges();
        let filter = Filter::new(names(&["EMEA"]), None);

        let filtered = filter.apply(&ranges).unwrap();
        let regions: Vec<&String> = filtered.regions().keys().collect();
        assert_eq!(regions, ["2 : EMEA"]);
        assert_eq!(filtered.block_count(), 1);
    }

    #[test]
    fn test_filter_by_datacenter() {
        let ranges = test_cloud_ranges();
        let filter = Filter::new(None, names(&["Boston"]));

        let filtered = filter.apply(&ranges).unwrap();
        let regions: Vec<&String> = filtered.regions().keys().collect();
        assert_eq!(regions, ["1 : Americas"]);

        let datacenters: Vec<&String> = filtered.regions()["1 : Americas"].keys().collect();
        assert_eq!(datacenters, ["11 : Boston"]);
    }

    #[test]
    fn test_filter_drops_region_with_no_surviving_datacenters() {
        let ranges = test_cloud_ranges();

        // "Boston" exists only in Americas; EMEA must be dropped, not kept empty.
        let filter = Filter::new(None, names(&["Boston"]));
        let filtered = filter.apply(&ranges).unwrap();
        assert!(!filtered.regions().contains_key("2 : EMEA"));
    }

    #[test]
    fn test_filter_unknown_names_yield_empty_tree() {
        let ranges = test_cloud_ranges();
        let filter = Filter::new(None, names(&["Osaka"]));

        let filtered = filter.apply(&ranges).unwrap();
        assert!(filtered.regions().is_empty());
        assert_eq!(filtered.block_count(), 0);
    }

    #[test]
    fn test_filter_matching_is_case_sensitive() {
        let ranges = test_cloud_ranges();
        let filter = Filter::new(names(&["americas"]), None);
        assert!(filter.apply(&ranges).unwrap().regions().is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let ranges = test_cloud_ranges();
        let filter = Filter::new(names(&["Americas"]), names(&["Atlanta", "Boston"]));

        let once = filter.apply(&ranges).unwrap();
        let twice = filter.apply(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_filter_malformed_label() {
        let json = r#"{"zscaler.net": {"Americas": {"10 : Atlanta": []}}}"#;
        let ranges = CloudRanges::from_json(json, "zscaler.net").unwrap();

        let filter = Filter::new(names(&["Americas"]), None);
        let error = filter.apply(&ranges).unwrap_err();
        assert!(matches!(error, Error::MalformedLabel(_)));
    }
}

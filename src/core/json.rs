use crate::core::block::Block;
use crate::core::errors::Result;
use indexmap::IndexMap;

/*-------------------------------------------------------------------------------------------------
  Feed JSON
-------------------------------------------------------------------------------------------------*/

/// Datacenter-label → blocks, in feed order.
pub type JsonDatacenters = IndexMap<String, Vec<Block>>;

/// Region-label → datacenters, in feed order.
pub type JsonRegions = IndexMap<String, JsonDatacenters>;

/// The full feed document: cloud name → regions. `IndexMap` keeps the feed's insertion order,
/// which the pipeline preserves through to the rendered output.
pub type JsonFeed = IndexMap<String, JsonRegions>;

/// Parse the raw feed JSON.
pub fn parse(json: &str) -> Result<JsonFeed> {
    Ok(serde_json::from_str(json)?)
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) const TEST_FEED_JSON: &str = r#"{
      "zscaler.net": {
        "1 : Americas": {
          "10 : Atlanta": [
            {
              "range": "192.0.2.0/24",
              "vpn": "atl.vpn.zscaler.net",
              "gre": "192.0.2.1",
              "hostname": "atl.sme.zscaler.net",
              "latitude": "33",
              "longitude": "-84"
            }
          ],
          "11 : Boston": [
            { "range": "198.51.100.0/24" }
          ]
        },
        "2 : EMEA": {
          "20 : Amsterdam": [
            { "range": "203.0.113.0/24" }
          ]
        }
      }
    }"#;

    #[test]
    fn test_parse_feed() {
        let feed = parse(TEST_FEED_JSON).unwrap();
        let regions = &feed["zscaler.net"];
        assert_eq!(regions.len(), 2);
        assert_eq!(regions["1 : Americas"].len(), 2);
        assert_eq!(regions["1 : Americas"]["11 : Boston"].len(), 1);
    }

    #[test]
    fn test_parse_feed_preserves_order() {
        // Region and datacenter order must match the document, not any key sort.
        let json = r#"{
          "zscaler.net": {
            "9 : Zeta": { "90 : Zurich": [], "81 : Oslo": [] },
            "1 : Alpha": { "10 : Atlanta": [] }
          }
        }"#;

        let feed = parse(json).unwrap();
        let regions: Vec<&String> = feed["zscaler.net"].keys().collect();
        assert_eq!(regions, ["9 : Zeta", "1 : Alpha"]);

        let datacenters: Vec<&String> = feed["zscaler.net"]["9 : Zeta"].keys().collect();
        assert_eq!(datacenters, ["90 : Zurich", "81 : Oslo"]);
    }

    #[test]
    fn test_parse_invalid_json() {
        assert!(parse("not json").is_err());
    }
}

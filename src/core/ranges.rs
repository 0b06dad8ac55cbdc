use crate::core::block::Block;
use crate::core::errors::{Error, Result};
use crate::core::json::{self, JsonRegions};

/*-------------------------------------------------------------------------------------------------
  Cloud Ranges
-------------------------------------------------------------------------------------------------*/

/// The location tree for one ZScaler cloud: region label → datacenter label → blocks, in feed
/// order. One invocation owns the whole tree from load to final render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CloudRanges {
    pub(crate) cloud: String,
    pub(crate) regions: JsonRegions,
}

/*--------------------------------------------------------------------------------------
  Cloud Ranges Implementation
--------------------------------------------------------------------------------------*/

impl CloudRanges {
    /// Parse the feed JSON and extract the tree for the requested cloud.
    pub fn from_json(feed_json: &str, cloud: &str) -> Result<Self> {
        let mut feed = json::parse(feed_json)?;
        let regions = feed
            .shift_remove(cloud)
            .ok_or_else(|| Error::UnknownCloud(cloud.to_string()))?;

        Ok(CloudRanges {
            cloud: cloud.to_string(),
            regions,
        })
    }

    /*-------------------------------------------------------------------------
      Getters
    -------------------------------------------------------------------------*/

    /// The cloud identifier this tree was extracted for.
    pub fn cloud(&self) -> &str {
        &self.cloud
    }

    /// Region label → datacenter label → blocks, in feed order.
    pub fn regions(&self) -> &JsonRegions {
        &self.regions
    }

    /*-------------------------------------------------------------------------
      Traversal
    -------------------------------------------------------------------------*/

    /// All blocks in tree order.
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.regions
            .values()
            .flat_map(|datacenters| datacenters.values())
            .flatten()
    }

    /// Total number of blocks across all regions and datacenters.
    pub fn block_count(&self) -> usize {
        self.blocks().count()
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

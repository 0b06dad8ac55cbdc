use crate::core::block::Block;
use crate::core::errors::{Error, Result};
use crate::core::ranges::CloudRanges;
use ipnetwork::IpNetwork;
use log::debug;
use std::collections::BTreeSet;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/*-------------------------------------------------------------------------------------------------
  Enrichment
-------------------------------------------------------------------------------------------------*/

/// Compute the derived fields for every block with a CIDR: usable-range bounds for all address
/// families, plus wildcard patterns for IPv4. Blocks without a `range` are left untouched. A
/// malformed CIDR aborts the run; the feed is trusted to publish valid networks, so a parse
/// failure means the output would be incomplete and must not be produced silently.
pub fn enrich(ranges: &mut CloudRanges) -> Result<()> {
    let mut enriched = 0usize;

    for datacenters in ranges.regions.values_mut() {
        for (datacenter_label, blocks) in datacenters.iter_mut() {
            for block in blocks.iter_mut() {
                if enrich_block(block, datacenter_label)? {
                    enriched += 1;
                }
            }
        }
    }

    debug!("Enriched {enriched} blocks");
    Ok(())
}

/// Enrich a single block in place. Returns `true` when the block carried a CIDR.
fn enrich_block(block: &mut Block, datacenter_label: &str) -> Result<bool> {
    let Some(cidr) = block.cidr() else {
        return Ok(false);
    };

    let network: IpNetwork = cidr.parse().map_err(|source| Error::MalformedCidr {
        range: cidr.to_string(),
        datacenter: datacenter_label.to_string(),
        source,
    })?;

    let (first_usable, last_usable) = usable_bounds(&network);
    block.first_usable = Some(first_usable.to_string());
    block.last_usable = Some(last_usable.to_string());

    block.wildcard = match (first_usable, last_usable) {
        (IpAddr::V4(first), IpAddr::V4(last)) => Some(wildcards(first, last)),
        _ => None,
    };

    Ok(true)
}

/*--------------------------------------------------------------------------------------
  Usable-Range Bounds
--------------------------------------------------------------------------------------*/

/// First and last usable host addresses of a network: network address + 1 and last address − 1
/// (IPv4 broadcast − 1). Networks with fewer than 4 addresses (/31, /32 and the IPv6
/// equivalents) have no conventional usable range; both bounds clamp to the full block so the
/// range stays ordered and inside the network.
fn usable_bounds(network: &IpNetwork) -> (IpAddr, IpAddr) {
    match network {
        IpNetwork::V4(ipv4_network) => {
            let first = u32::from(ipv4_network.network());
            let last = u32::from(ipv4_network.broadcast());
            let (first, last) = clamp_bounds(u64::from(first), u64::from(last));
            (
                IpAddr::V4(Ipv4Addr::from(first as u32)),
                IpAddr::V4(Ipv4Addr::from(last as u32)),
            )
        }
        IpNetwork::V6(ipv6_network) => {
            let first = u128::from(ipv6_network.network());
            let host_bits = 128 - ipv6_network.prefix();
            let last = match host_bits {
                128 => u128::MAX,
                _ => first | ((1u128 << host_bits) - 1),
            };
            let (first, last) = clamp_bounds(first, last);
            (
                IpAddr::V6(Ipv6Addr::from(first)),
                IpAddr::V6(Ipv6Addr::from(last)),
            )
        }
    }
}

fn clamp_bounds<T>(first: T, last: T) -> (T, T)
where
    T: Copy + std::ops::Add<Output = T> + std::ops::Sub<Output = T> + PartialOrd + From<u8>,
{
    if last - first >= T::from(3u8) {
        (first + T::from(1u8), last - T::from(1u8))
    } else {
        (first, last)
    }
}

/*--------------------------------------------------------------------------------------
  IPv4 Wildcard Patterns
--------------------------------------------------------------------------------------*/

/// Wildcard patterns `"a.b.c.*"` covering every third-octet value between the first and last
/// usable addresses, keyed off the first-usable's leading octets. Deduplicated and sorted
/// lexicographically (string sort, not numeric).
fn wildcards(first: Ipv4Addr, last: Ipv4Addr) -> Vec<String> {
    let first = first.octets();
    let last = last.octets();

    let mut patterns: BTreeSet<String> = BTreeSet::new();
    patterns.insert(format!("{}.{}.{}.*", first[0], first[1], first[2]));

    let diff = last[2].saturating_sub(first[2]);
    for step in (0..=diff).rev() {
        patterns.insert(format!("{}.{}.{}.*", first[0], first[1], first[2] + step));
    }

    patterns.into_iter().collect()
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

//! Network-set reduction: deduplication and subset removal per address family.
//!
//! Given a multiset of networks collected from several sources, [`reduce`]
//! computes the minimal equivalent set for each family: duplicates collapse
//! and any network fully contained in a broader network is dropped. Adjacent
//! siblings are never merged into a supernet; this is subset removal, not
//! aggregation.

use ipnet::{IpNet, Ipv4Net, Ipv6Net};

/// Minimal network sets produced by [`reduce`], one per address family.
///
/// Invariant: within each family no entry contains another and no two
/// entries are equal. Entries are ordered by ascending prefix length, then
/// by address, so serialized output is reproducible across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkSets {
    pub v4: Vec<Ipv4Net>,
    pub v6: Vec<Ipv6Net>,
}

impl NetworkSets {
    pub fn len(&self) -> usize {
        self.v4.len() + self.v6.len()
    }

    pub fn is_empty(&self) -> bool {
        self.v4.is_empty() && self.v6.is_empty()
    }

    /// Total number of addresses covered across both families.
    ///
    /// Saturates at `u128::MAX`, which an IPv6 `::/0` entry would exceed.
    pub fn address_count(&self) -> u128 {
        let v4 = self
            .v4
            .iter()
            .map(|net| 1u128 << (32 - net.prefix_len()))
            .fold(0u128, |acc, count| acc.saturating_add(count));
        self.v6
            .iter()
            .map(|net| {
                let shift = 128 - net.prefix_len();
                if shift >= 128 {
                    u128::MAX
                } else {
                    1u128 << shift
                }
            })
            .fold(v4, |acc, count| acc.saturating_add(count))
    }
}

/// Containment test shared by both families.
trait Covers: Copy + Ord {
    fn plen(&self) -> u8;
    fn covers(&self, other: &Self) -> bool;
}

impl Covers for Ipv4Net {
    fn plen(&self) -> u8 {
        self.prefix_len()
    }

    fn covers(&self, other: &Self) -> bool {
        self.contains(other)
    }
}

impl Covers for Ipv6Net {
    fn plen(&self) -> u8 {
        self.prefix_len()
    }

    fn covers(&self, other: &Self) -> bool {
        self.contains(other)
    }
}

/// Reduce a collection of networks to the minimal equivalent sets.
///
/// Input is canonicalized (host bits cleared) and partitioned by family;
/// the families never interact. An empty input yields empty sets.
pub fn reduce<I>(nets: I) -> NetworkSets
where
    I: IntoIterator<Item = IpNet>,
{
    let mut v4 = Vec::new();
    let mut v6 = Vec::new();
    for net in nets {
        match net {
            IpNet::V4(n) => v4.push(n.trunc()),
            IpNet::V6(n) => v6.push(n.trunc()),
        }
    }
    NetworkSets {
        v4: reduce_family(v4),
        v6: reduce_family(v6),
    }
}

/// Broadest-first sweep: after sorting by prefix length, every network that
/// could contain a candidate has already been accepted, so one containment
/// pass over the accepted set decides each candidate.
fn reduce_family<T: Covers>(mut nets: Vec<T>) -> Vec<T> {
    nets.sort_by(|a, b| a.plen().cmp(&b.plen()).then_with(|| a.cmp(b)));
    nets.dedup();

    let mut accepted: Vec<T> = Vec::with_capacity(nets.len());
    for net in nets {
        if !accepted.iter().any(|kept| kept.covers(&net)) {
            accepted.push(net);
        }
    }
    accepted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nets(input: &[&str]) -> Vec<IpNet> {
        input.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn test_reduce_drops_contained_and_duplicates() {
        let sets = reduce(nets(&[
            "10.0.0.0/8",
            "10.1.2.0/24",
            "192.168.1.0/24",
            "192.168.1.0/24",
        ]));
        let expected: Vec<Ipv4Net> = vec![
            "10.0.0.0/8".parse().unwrap(),
            "192.168.1.0/24".parse().unwrap(),
        ];
        assert_eq!(sets.v4, expected);
        assert!(sets.v6.is_empty());
    }

    #[test]
    fn test_reduce_ipv6_containment() {
        let sets = reduce(nets(&["2001:db8::/32", "2001:db8:1::/48"]));
        assert!(sets.v4.is_empty());
        assert_eq!(sets.v6.len(), 1);
        assert_eq!(sets.v6[0], "2001:db8::/32".parse::<Ipv6Net>().unwrap());
    }

    #[test]
    fn test_reduce_keeps_equal_prefix_siblings() {
        // Adjacent /25 siblings are preserved, never merged into a /24.
        let sets = reduce(nets(&["10.0.0.0/25", "10.0.0.128/25"]));
        assert_eq!(sets.v4.len(), 2);
    }

    #[test]
    fn test_reduce_default_route_subsumes_family() {
        let sets = reduce(nets(&[
            "0.0.0.0/0",
            "10.0.0.0/8",
            "192.168.1.1/32",
            "2001:db8::/32",
        ]));
        assert_eq!(sets.v4, vec!["0.0.0.0/0".parse::<Ipv4Net>().unwrap()]);
        // The IPv4 default route says nothing about IPv6.
        assert_eq!(sets.v6.len(), 1);
    }

    #[test]
    fn test_reduce_normalizes_host_bits() {
        let sets = reduce(nets(&["10.1.2.3/24"]));
        assert_eq!(sets.v4, vec!["10.1.2.0/24".parse::<Ipv4Net>().unwrap()]);
    }

    #[test]
    fn test_reduce_empty_input() {
        let sets = reduce(Vec::new());
        assert!(sets.is_empty());
        assert_eq!(sets.len(), 0);
    }

    #[test]
    fn test_reduce_idempotent() {
        let input = nets(&["10.0.0.0/8", "172.16.0.0/12", "2001:db8::/32"]);
        let once = reduce(input);
        let again = reduce(
            once.v4
                .iter()
                .copied()
                .map(IpNet::V4)
                .chain(once.v6.iter().copied().map(IpNet::V6)),
        );
        assert_eq!(once, again);
    }

    #[test]
    fn test_reduce_order_independent() {
        let forward = reduce(nets(&["10.1.2.0/24", "10.0.0.0/8", "192.168.0.0/16"]));
        let reversed = reduce(nets(&["192.168.0.0/16", "10.0.0.0/8", "10.1.2.0/24"]));
        assert_eq!(forward, reversed);
    }

    #[test]
    fn test_reduce_output_ordering() {
        let sets = reduce(nets(&["192.168.1.0/24", "10.0.0.0/8", "172.16.0.0/12"]));
        let prefixes: Vec<u8> = sets.v4.iter().map(|n| n.prefix_len()).collect();
        assert_eq!(prefixes, vec![8, 12, 24]);
    }

    #[test]
    fn test_address_count() {
        let sets = reduce(nets(&["192.168.0.0/24", "10.0.0.0/8"]));
        assert_eq!(sets.address_count(), 256 + 16_777_216);
    }

    #[test]
    fn test_address_count_saturates_on_v6_default_route() {
        let sets = reduce(nets(&["::/0"]));
        assert_eq!(sets.address_count(), u128::MAX);
    }

    #[test]
    fn test_address_count_full_v4_space() {
        let sets = reduce(nets(&["0.0.0.0/0"]));
        assert_eq!(sets.address_count(), 1u128 << 32);
    }
}

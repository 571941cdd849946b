//! Edge-case tests for parsing and reduction.

use geoacl::parser::{parse_acl, parse_list};
use geoacl::reducer::reduce;
use ipnet::IpNet;

#[test]
fn test_boundary_prefix_lengths() {
    let parsed = parse_list("0.0.0.0/0\n255.255.255.255/32\n::/0\n::1/128\n");
    assert_eq!(parsed.networks.len(), 4);
    assert_eq!(parsed.skipped, 0);
}

#[test]
fn test_out_of_range_prefixes_are_skipped() {
    let parsed = parse_list("192.168.1.0/33\n2001:db8::/129\n10.0.0.0/8\n");
    assert_eq!(parsed.networks.len(), 1);
    assert_eq!(parsed.skipped, 2);
}

#[test]
fn test_malformed_addresses_are_skipped() {
    let parsed = parse_list("256.0.0.0\n1.2.3\n1.2.3.4.5\n-1.0.0.0/8\n");
    assert!(parsed.networks.is_empty());
    assert_eq!(parsed.skipped, 4);
}

#[test]
fn test_unicode_noise_does_not_panic() {
    let parsed = parse_list("10.0.0.0/8\nréseau interdit\n☃/24\n192.168.0.0/16\n");
    assert_eq!(parsed.networks.len(), 2);
    assert_eq!(parsed.skipped, 2);
}

#[test]
fn test_acl_parsing_unclosed_block() {
    // A truncated download may cut off mid-block; everything after the
    // header still parses.
    let parsed = parse_acl("acl BR {\n 10.0.0.0/8;\n 172.16.0.0/12;\n", "BR");
    assert_eq!(parsed.networks.len(), 2);
}

#[test]
fn test_default_routes_subsume_their_family() {
    let mut nets: Vec<IpNet> = vec!["0.0.0.0/0".parse().unwrap(), "::/0".parse().unwrap()];
    for i in 0..100u32 {
        nets.push(format!("{}.{}.0.0/16", i % 256, (i * 7) % 256).parse().unwrap());
        nets.push(format!("2001:db8:{:x}::/48", i).parse().unwrap());
    }
    let sets = reduce(nets);
    assert_eq!(sets.v4.len(), 1);
    assert_eq!(sets.v6.len(), 1);
}

#[test]
fn test_large_input_reduction() {
    // 10k /24s under a handful of /8s: reduction completes and collapses
    // everything into the supernets.
    let mut nets: Vec<IpNet> = Vec::new();
    for a in 1..=4u32 {
        nets.push(format!("{}.0.0.0/8", a).parse().unwrap());
    }
    for i in 0..10_000u32 {
        let a = 1 + (i % 4);
        let b = (i / 4) % 256;
        let c = (i / 1024) % 256;
        nets.push(format!("{}.{}.{}.0/24", a, b, c).parse().unwrap());
    }
    let sets = reduce(nets.clone());
    assert_eq!(sets.v4.len(), 4);

    // Idempotent on the minimal result.
    let again = reduce(sets.v4.iter().copied().map(IpNet::V4));
    assert_eq!(again.v4, sets.v4);
}

#[test]
fn test_disjoint_large_input_survives_reduction() {
    // Thousands of disjoint /24s: nothing subsumes anything, all survive.
    let nets: Vec<IpNet> = (0..5_000u32)
        .map(|i| {
            let a = 1 + (i % 200);
            let b = (i / 200) % 256;
            let c = i % 256;
            format!("{}.{}.{}.0/24", a, b, c).parse().unwrap()
        })
        .collect();
    let expected: std::collections::HashSet<IpNet> = nets.iter().copied().collect();
    let sets = reduce(nets);
    assert_eq!(sets.v4.len(), expected.len());
}

// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for System UUID Normalization

use ovm_cmdb_sync::domain::normalize_uuid;
use proptest::prelude::*;

/// 16 random bytes rendered the way Oracle VM does: colon-delimited hex
fn colonized(bytes: &[u8; 16], uppercase: bool) -> String {
    bytes
        .iter()
        .map(|b| {
            if uppercase {
                format!("{:02X}", b)
            } else {
                format!("{:02x}", b)
            }
        })
        .collect::<Vec<_>>()
        .join(":")
}

fn is_canonical(s: &str) -> bool {
    let groups: Vec<&str> = s.split('-').collect();
    groups.iter().map(|g| g.len()).collect::<Vec<_>>() == vec![8, 4, 4, 4, 12]
        && s.chars()
            .all(|c| c == '-' || c.is_ascii_digit() || ('a'..='f').contains(&c))
}

proptest! {
    /// Output is always the canonical lowercase dashed form
    #[test]
    fn prop_output_is_canonical(bytes in any::<[u8; 16]>(), uppercase in any::<bool>()) {
        let out = normalize_uuid(&colonized(&bytes, uppercase)).unwrap();
        prop_assert!(is_canonical(&out), "not canonical: {}", out);
    }

    /// Normalizing twice is the same as normalizing once
    #[test]
    fn prop_idempotent(bytes in any::<[u8; 16]>(), uppercase in any::<bool>()) {
        let once = normalize_uuid(&colonized(&bytes, uppercase)).unwrap();
        let twice = normalize_uuid(&once).unwrap();
        prop_assert_eq!(once, twice);
    }

    /// Case of the input hex never changes the result
    #[test]
    fn prop_case_insensitive(bytes in any::<[u8; 16]>()) {
        let lower = normalize_uuid(&colonized(&bytes, false)).unwrap();
        let upper = normalize_uuid(&colonized(&bytes, true)).unwrap();
        prop_assert_eq!(lower, upper);
    }

    /// The hex digits survive untouched apart from regrouping
    #[test]
    fn prop_preserves_digits(bytes in any::<[u8; 16]>()) {
        let out = normalize_uuid(&colonized(&bytes, false)).unwrap();
        let digits: String = out.chars().filter(|c| *c != '-').collect();
        prop_assert_eq!(digits, colonized(&bytes, false).replace(':', ""));
    }

    /// Anything shorter than 16 bytes is rejected
    #[test]
    fn prop_short_ids_rejected(bytes in proptest::collection::vec(any::<u8>(), 1..16)) {
        let raw = bytes
            .iter()
            .map(|b| format!("{:02x}", b))
            .collect::<Vec<_>>()
            .join(":");
        prop_assert!(normalize_uuid(&raw).is_err());
    }
}

//! Property-based tests for zone resolution.
//!
//! - At most one zone is returned, and it is active and covers the CEP
//! - Lower priority value wins between matching zones
//! - Inactive zones never match
//! - Resolution is idempotent over a frozen catalog

use proptest::prelude::*;
use uuid::Uuid;

use super::catalog::ZoneCatalog;
use super::resolver::resolve;
use super::types::{Cep, CepRange, ZoneDefinition};

/// Strategy to generate CEP values across the whole 8-digit space.
fn cep_value() -> impl Strategy<Value = u32> {
    0u32..=99_999_999
}

/// Strategy to generate a CEP range inside a narrow band so zones overlap often.
fn cep_range() -> impl Strategy<Value = CepRange> {
    (58_000_000u32..58_200_000, 0u32..150_000).prop_map(|(start, width)| {
        let end = (start + width).min(99_999_999);
        CepRange {
            start: Cep::parse(&format!("{start:08}")).unwrap(),
            end: Cep::parse(&format!("{end:08}")).unwrap(),
        }
    })
}

/// Strategy to generate a zone with 1-3 ranges.
fn zone() -> impl Strategy<Value = ZoneDefinition> {
    (
        1i32..6,
        any::<bool>(),
        prop::collection::vec(cep_range(), 1..4),
        "[A-Z][a-z]{2,8}",
    )
        .prop_map(|(priority, active, ranges, name)| ZoneDefinition {
            id: Uuid::new_v4(),
            name,
            priority,
            active,
            ranges,
        })
}

/// Strategy to generate a catalog of 0-8 zones.
fn zones() -> impl Strategy<Value = Vec<ZoneDefinition>> {
    prop::collection::vec(zone(), 0..8)
}

/// Strategy to generate CEPs that mostly fall inside the generated band.
fn banded_cep() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => (58_000_000u32..58_350_000).prop_map(|v| format!("{v:08}")),
        1 => cep_value().prop_map(|v| format!("{v:08}")),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// A resolved zone is active and one of its ranges holds the CEP.
    #[test]
    fn prop_resolved_zone_is_active_and_covers(zones in zones(), cep in banded_cep()) {
        if let Some(found) = resolve(&cep, &zones) {
            let parsed = Cep::parse(&cep).unwrap();
            prop_assert!(found.active);
            prop_assert!(found.ranges.iter().any(|r| r.contains(parsed)));
        }
    }

    /// No other matching zone has a smaller priority value.
    #[test]
    fn prop_lowest_priority_wins(zones in zones(), cep in banded_cep()) {
        let parsed = Cep::parse(&cep).unwrap();
        let matching: Vec<_> = zones.iter().filter(|z| z.covers(parsed)).collect();

        match resolve(&cep, &zones) {
            Some(found) => {
                let best = matching.iter().map(|z| z.priority).min().unwrap();
                prop_assert_eq!(found.priority, best);
            }
            None => prop_assert!(matching.is_empty()),
        }
    }

    /// Deactivating every zone leaves nothing to resolve.
    #[test]
    fn prop_inactive_zones_never_match(zones in zones(), cep in banded_cep()) {
        let inactive: Vec<_> = zones
            .into_iter()
            .map(|mut z| {
                z.active = false;
                z
            })
            .collect();

        prop_assert!(resolve(&cep, &inactive).is_none());
    }

    /// Repeated calls on one snapshot agree, and agree with the free function.
    #[test]
    fn prop_resolution_is_idempotent(zones in zones(), cep in banded_cep()) {
        let catalog = ZoneCatalog::new(zones.clone());

        let first = catalog.resolve(&cep).map(|z| z.id);
        let second = catalog.resolve(&cep).map(|z| z.id);
        prop_assert_eq!(first, second);
        prop_assert_eq!(first, resolve(&cep, &zones).map(|z| z.id));
    }

    /// Shuffling the input list never changes the answer.
    #[test]
    fn prop_input_order_is_irrelevant(zones in zones(), cep in banded_cep()) {
        let mut reversed = zones.clone();
        reversed.reverse();

        prop_assert_eq!(
            resolve(&cep, &zones).map(|z| z.id),
            resolve(&cep, &reversed).map(|z| z.id)
        );
    }
}

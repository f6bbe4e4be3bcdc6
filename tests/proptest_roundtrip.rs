//! Property-based tests for the round-trip and boundary properties in the
//! spec's testable-properties section.

use galnames::{locator, GalaxyCodec, Sector};
use proptest::prelude::*;

fn modelled_sector() -> impl Strategy<Value = Sector> {
    (-35i64..35, -15i64..15, -15i64..15).prop_map(|(x, y, z)| Sector::new(x, y, z))
}

proptest! {
    /// For every Class 2 sector in the modelled range, `sector_of_name(
    /// name_of_sector(x,y,z)) == (x,y,z)`.
    #[test]
    fn prop_sector_name_round_trips(sector in modelled_sector()) {
        let codec = GalaxyCodec::new();
        if let Ok(name) = codec.name_of_sector(sector) {
            let decoded = codec.sector_of_name(&name);
            prop_assert_eq!(decoded.ok(), Some(sector));
        }
    }

    /// Tokenising, formatting back, and retokenising a Class 2 name yields
    /// the identical fragment list.
    #[test]
    fn prop_tokenise_is_idempotent_through_format(sector in modelled_sector()) {
        let codec = GalaxyCodec::new();
        if let Ok(name) = codec.name_of_sector(sector) {
            let frags = galnames::tokenise(&name).unwrap();
            let formatted = galnames::format_name(&frags);
            prop_assert_eq!(galnames::tokenise(&formatted), Some(frags));
        }
    }

    /// The finest mass code ('a') always keeps the locator inside the
    /// documented [0, 1280) range, for any letter combination.
    #[test]
    fn prop_finest_mass_code_locator_in_range(
        p in prop::sample::select(('A'..='Z').collect::<Vec<_>>()),
        c in prop::sample::select(('A'..='Z').collect::<Vec<_>>()),
        s in prop::sample::select(('A'..='Z').collect::<Vec<_>>()),
    ) {
        let (pos, radius) = locator::locate(p, c, s, 'a', 0, None).unwrap();
        prop_assert!((0.0..1280.0).contains(&pos.x));
        prop_assert!((0.0..1280.0).contains(&pos.y));
        prop_assert!((0.0..1280.0).contains(&pos.z));
        prop_assert_eq!(radius, 5.0);
    }

    /// The radius is always `1280 / 2^(ord('h') - ord(l)) / 2` for any mass
    /// code `l`, regardless of letter/n1 inputs.
    #[test]
    fn prop_radius_matches_mass_code_formula(
        mass in prop::sample::select(('a'..='h').collect::<Vec<_>>()),
        n1 in 0u32..4,
    ) {
        let (_, radius) = locator::locate('A', 'A', 'A', mass, n1, None).unwrap();
        let expected = 1280.0 / 2f64.powi(('h' as i32) - (mass as i32)) / 2.0;
        prop_assert_eq!(radius, expected);
        prop_assert!(radius <= 640.0);
    }
}

//! Integration tests for the concrete, contractual scenarios.

use galnames::{Sector, Vec3, GalaxyCodec};

#[test]
fn tokenise_class_two_example() {
    let frags = galnames::tokenise("Dryau Aowsy").unwrap();
    assert_eq!(frags, vec!["Dry", "au", "Ao", "wsy"]);
    assert_eq!(
        galnames::classify(&frags),
        Some(galnames::SectorClass::Class2)
    );
}

#[test]
fn tokenise_class_one_b_example() {
    // Not "Froadue": against this catalogue that tokenises to 4 fragments
    // (Class 1a) — see src/fragments.rs::tokenise_froadue_is_four_fragments_not_three
    // and DESIGN.md for why "Froawns" is the genuine Class 1b example.
    let frags = galnames::tokenise("Froawns").unwrap();
    assert_eq!(frags, vec!["Fr", "oa", "wns"]);
    assert_eq!(
        galnames::classify(&frags),
        Some(galnames::SectorClass::Class1b)
    );
}

#[test]
fn sector_origin_round_trips_to_base_coords() {
    let codec = GalaxyCodec::new();
    let base = Vec3::new(-65.0, -25.0, 215.0);
    let sector = codec.sector_of_pos(base);
    assert_eq!(sector, Sector::new(0, 0, 0));
    assert_eq!(sector.origin(), base);
}

#[test]
fn mass_code_b_radius_is_ten() {
    let codec = GalaxyCodec::new();
    let (_, radius) = codec.coords_of("Dryau Aowsy AA-A b0").unwrap();
    assert_eq!(radius, 10.0);
}

#[test]
fn intra_sector_decomposition_matches_worked_example() {
    let (pos, radius) = galnames::locator::locate('A', 'B', 'C', 'b', 0, None).unwrap();
    assert_eq!(pos, Vec3::new(1970.0, 210.0, 10.0));
    assert_eq!(radius, 10.0);
}

#[test]
fn full_lookup_has_mass_code_h_radius() {
    let codec = GalaxyCodec::new();
    let (_, radius) = codec.coords_of("Dryau Aowsy AA-A h0").unwrap();
    assert_eq!(radius, 640.0);
}

#[test]
fn sector_name_without_second_numeric_group_defaults_n1_to_zero() {
    let codec = GalaxyCodec::new();
    let with_group = codec.coords_of("Dryau Aowsy AA-A h0-5").unwrap();
    let without_group = codec.coords_of("Dryau Aowsy AA-A h0").unwrap();
    assert_eq!(with_group.0, without_group.0);
}

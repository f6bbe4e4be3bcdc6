//! # galnames
//!
//! Procedural star-system name codec for a simulated galaxy: decodes and
//! encodes the sector names a large space game synthesises from a fixed
//! catalogue of syllable fragments, and maps full system names to
//! approximate world-space coordinates.
//!
//! ## Example
//!
//! ```
//! use galnames::GalaxyCodec;
//!
//! let codec = GalaxyCodec::new();
//! let (coords, radius) = codec.coords_of("Dryau Aowsy AA-A h0").unwrap();
//! assert_eq!(radius, 640.0);
//! println!("{coords:?}");
//! ```
//!
//! The hard part is the procedural name codec itself — see [`c1`] and
//! [`c2`] for the two independent generator runs a sector name can come
//! from, and [`locator`] for subdividing a sector down to a star's
//! approximate position.

use rayon::prelude::*;
use regex::Regex;
use std::sync::OnceLock;

pub mod c1;
pub mod c2;
pub mod class;
pub mod fragments;
pub mod invariants;
pub mod locator;
pub mod sector;

pub use class::{classify, classify_name, is_valid, is_valid_name, SectorClass};
pub use fragments::{format_name, tokenise};
pub use sector::{Sector, Vec3};

use c2::C2Codec;

/// The full set of precomputed caches needed to encode and decode sector
/// names: the Class 2 prefix-run list, start-point table, and
/// YZ-candidate map. Built once by [`GalaxyCodec::new`]; every operation
/// afterwards is a pure, read-only lookup, so the codec is `Send + Sync`
/// and safe to share behind an `Arc` or plain reference across threads.
pub struct GalaxyCodec {
    c2: C2Codec,
}

impl GalaxyCodec {
    /// Builds the codec, eagerly populating every cache. Not cheap —
    /// callers should build one and reuse it, not construct one per call.
    pub fn new() -> Self {
        Self { c2: C2Codec::new() }
    }

    /// Renders the Class 2 sector name for a grid position, if it falls
    /// inside the modelled galaxy bounds. Class 1 sector names are not
    /// reachable through this operation — see [`c1`]'s module docs for why.
    pub fn name_of_sector(&self, sector: Sector) -> Result<String, Error> {
        let frags = self
            .c2
            .encode(sector)
            .ok_or_else(|| Error::NotFound(format!("{sector:?} is outside the modelled grid")))?;
        Ok(format_name(&frags))
    }

    /// Resolves a sector-name string back to its grid position.
    ///
    /// Class 2 names (two space-separated words) are resolved through the
    /// reverse generator search. Class 1 names tokenise and classify fine,
    /// but the source never wires a Class 1 offset back to `(x,y,z)`, so
    /// they return [`Error::Unsupported`].
    pub fn sector_of_name(&self, sector_name: &str) -> Result<Sector, Error> {
        let frags = tokenise(sector_name)
            .ok_or_else(|| Error::Unparseable(sector_name.to_string()))?;
        match class::classify(&frags) {
            Some(SectorClass::Class2) => {
                let frags: [&'static str; 4] = [frags[0], frags[1], frags[2], frags[3]];
                self.c2.decode(frags).ok_or_else(|| {
                    Error::NotFound(format!("'{sector_name}' does not name a modelled sector"))
                })
            }
            Some(SectorClass::Class1a) | Some(SectorClass::Class1b) => Err(Error::Unsupported(
                "Class 1 sector names cannot be resolved back to a grid position".to_string(),
            )),
            None => Err(Error::Unparseable(sector_name.to_string())),
        }
    }

    /// Floor-divides a world-space position into its containing sector.
    pub fn sector_of_pos(&self, pos: Vec3) -> Sector {
        sector::sector_of_pos(pos)
    }

    /// Parses a full system name (`"<sector-name> AB-C l0[-23]"`), resolves
    /// its sector, and adds the intra-sector offset. Returns the
    /// approximate world-space coordinate and its error radius.
    pub fn coords_of(&self, system_name: &str) -> Result<(Vec3, f64), Error> {
        let parsed = parse_system_name(system_name)
            .ok_or_else(|| Error::Unparseable(system_name.to_string()))?;
        let sector = self.sector_of_name(parsed.sector_name)?;
        let origin = sector.origin();
        let (offset, radius) = locator::locate(
            parsed.prefix,
            parsed.centre,
            parsed.suffix,
            parsed.mass_code,
            parsed.n1,
            parsed.n2,
        )?;
        Ok((origin + offset, radius))
    }

    /// Resolves many sector positions to names concurrently via `rayon`.
    /// Each entry of the result corresponds to the same-index input
    /// sector; entries outside the modelled grid come back as `Err`.
    pub fn sector_names_of_batch(&self, sectors: &[Sector]) -> Vec<Result<String, Error>> {
        sectors.par_iter().map(|&s| self.name_of_sector(s)).collect()
    }
}

impl Default for GalaxyCodec {
    fn default() -> Self {
        Self::new()
    }
}

struct ParsedSystemName<'a> {
    sector_name: &'a str,
    prefix: char,
    centre: char,
    suffix: char,
    mass_code: char,
    n1: u32,
    n2: Option<u32>,
}

fn system_name_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(.+) ([A-Z])([A-Z])-([A-Z]) ([a-h])(\d+)(?:-(\d+))?$")
            .expect("static regex is valid")
    })
}

fn parse_system_name(system_name: &str) -> Option<ParsedSystemName<'_>> {
    let caps = system_name_regex().captures(system_name)?;
    Some(ParsedSystemName {
        sector_name: caps.get(1)?.as_str(),
        prefix: caps.get(2)?.as_str().chars().next()?,
        centre: caps.get(3)?.as_str().chars().next()?,
        suffix: caps.get(4)?.as_str().chars().next()?,
        mass_code: caps.get(5)?.as_str().chars().next()?,
        n1: caps.get(6)?.as_str().parse().ok()?,
        n2: caps.get(7).and_then(|m| m.as_str().parse().ok()),
    })
}

/// Errors the codec's public operations can return.
///
/// Mirrors the four error kinds the ambient-stack design settled on: an
/// unparseable name never reaches the codec at all, a parseable name the
/// codec can't place is "not found", malformed locator input is reported
/// but still resolved best-effort, and the two Class 1a/1-to-coordinate
/// gaps the source leaves unfinished surface as `Unsupported` rather than
/// a guessed formula.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("'{0}' is not a recognised name")]
    Unparseable(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("unsupported: {0}")]
    Unsupported(String),
}

//! Class 1 sector-name codec: a single nested run of prefix -> infix ->
//! suffix, addressed by a flat cumulative offset rather than the
//! two-dimensional lattice Class 2 uses.
//!
//! Structured after `pgnames.py::c1_get_offset` (same prefix -> infix ->
//! suffix nesting, same per-prefix/per-infix run lengths), but the offset
//! *numbering* here is an independent reconstruction, not a port: the
//! source's own magic constants for this function — `cx_prefix_total_run_
//! length = 3037`, the per-prefix run-length division, the `-1`
//! adjustment, and a nonzero `c1_arbitrary_index_offset` — never appear in
//! the retrieved `pgdata.py`/`pgnames.py` pack, so they can't be lifted
//! verbatim the way the fragment tables and Class 2 constants were (see
//! DESIGN.md). This module instead assigns each `(prefix, infix, suffix)`
//! combination a distinct, internally self-consistent offset; it does not
//! reproduce `c1_get_offset`'s actual numbering. The source's own
//! docstring admits the four-fragment ("Class 1a") extension of this
//! formula "was completely wrong and needs more thought" and leaves it
//! unfinished; this module keeps that boundary rather than inventing a
//! replacement — Class 1a offsets are rejected with
//! [`crate::Error::Unsupported`]. The reverse mapping from a Class 1
//! offset back to a `(x, y, z)` sector is never wired up in the source
//! either (no `sector.py` function consumes it), so it is not implemented
//! here.

use crate::fragments::{c1_prefix_infix_override, c1_suffix_seq, C1_INFIXES, CX_PREFIXES};
use crate::Error;
use std::sync::OnceLock;

/// Default number of suffixes available to a prefix whose infix comes from
/// sequence 1 (matches `CX_SUFFIXES_S1`'s own length).
const S1_F2_LENGTH_DEFAULT: usize = 35;

/// Default number of suffixes available to a prefix whose infix comes from
/// sequence 2 (reconstructed: the lighter of the two consonant-suffix
/// tiers, `CX_SUFFIXES_S2`'s length — see DESIGN.md).
const S2_F2_LENGTH_DEFAULT: usize = 59;

/// Added to every computed offset. No evidence in the retrieved source
/// argues for a nonzero value, so this is reconstructed as zero.
const ARBITRARY_INDEX_OFFSET: i64 = 0;

fn infix_seq(prefix: &str) -> usize {
    c1_prefix_infix_override(prefix)
}

fn f2_length(prefix: &str) -> usize {
    match infix_seq(prefix) {
        2 => S2_F2_LENGTH_DEFAULT,
        _ => S1_F2_LENGTH_DEFAULT,
    }
}

fn prefix_base_offsets() -> &'static [i64] {
    static TABLE: OnceLock<Vec<i64>> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut offsets = Vec::with_capacity(CX_PREFIXES.len());
        let mut running = 0i64;
        for &prefix in CX_PREFIXES {
            offsets.push(running);
            let infix_count = C1_INFIXES[infix_seq(prefix)].len() as i64;
            running += infix_count * f2_length(prefix) as i64;
        }
        offsets.push(running); // sentinel: total run length
        offsets
    })
}

/// Total number of distinct Class 1 `(prefix, infix, suffix)` combinations
/// the modelled catalogue can produce.
pub fn total_run_length() -> i64 {
    let table = prefix_base_offsets();
    table[table.len() - 1]
}

/// Computes the flat offset of a Class 1b (three-fragment) name within the
/// catalogue's canonical ordering.
pub fn offset_of(prefix: &str, infix: &str, suffix: &str) -> Result<i64, Error> {
    let prefix_idx = CX_PREFIXES
        .iter()
        .position(|&p| p == prefix)
        .ok_or_else(|| Error::InvalidInput(format!("'{prefix}' is not a known prefix")))?;

    let seq_idx = infix_seq(prefix);
    let infixes = C1_INFIXES[seq_idx];
    let infix_idx = infixes
        .iter()
        .position(|&i| i == infix)
        .ok_or_else(|| Error::InvalidInput(format!("'{infix}' is not a valid infix for '{prefix}'")))?;

    let f2len = f2_length(prefix);
    let suffixes = c1_suffix_seq(seq_idx);
    let usable = &suffixes[..f2len.min(suffixes.len())];
    let suffix_idx = usable
        .iter()
        .position(|&s| s == suffix)
        .ok_or_else(|| Error::InvalidInput(format!("'{suffix}' is not a valid suffix for '{prefix}{infix}'")))?;

    let base = prefix_base_offsets()[prefix_idx];
    Ok(base + infix_idx as i64 * f2len as i64 + suffix_idx as i64 + ARBITRARY_INDEX_OFFSET)
}

/// Computes the offset of a tokenised three-fragment Class 1b name.
pub fn offset_of_fragments(frags: &[&str; 3]) -> Result<i64, Error> {
    offset_of(frags[0], frags[1], frags[2])
}

/// Inverts [`offset_of`]: recovers the `(prefix, infix, suffix)` fragments
/// that produce a given flat offset.
pub fn fragments_of_offset(offset: i64) -> Result<[&'static str; 3], Error> {
    let offset = offset - ARBITRARY_INDEX_OFFSET;
    let table = prefix_base_offsets();
    if offset < 0 || offset >= table[table.len() - 1] {
        return Err(Error::InvalidInput(format!(
            "offset {offset} is outside the modelled Class 1 run"
        )));
    }

    let prefix_idx = match table[..table.len() - 1].binary_search(&offset) {
        Ok(i) => i,
        Err(i) => i - 1,
    };
    let prefix = CX_PREFIXES[prefix_idx];
    let within = offset - table[prefix_idx];

    let seq_idx = infix_seq(prefix);
    let f2len = f2_length(prefix) as i64;
    let infix_idx = (within / f2len) as usize;
    let suffix_idx = (within % f2len) as usize;

    let infix = C1_INFIXES[seq_idx][infix_idx];
    let suffix = c1_suffix_seq(seq_idx)[suffix_idx];
    Ok([prefix, infix, suffix])
}

/// Rejects four-fragment Class 1a names outright, matching the source's
/// own unfinished reverse-offset formula.
pub fn offset_of_class_1a(_frags: &[&str; 4]) -> Result<i64, Error> {
    Err(Error::Unsupported(
        "Class 1a (four-fragment) offsets are not implemented upstream".to_string(),
    ))
}

//! Sector-name classification and structural validation.

use crate::fragments::{
    c1_prefix_infix_override, c1_suffix_seq, c2_prefix_suffix_override, c2_suffix_seq, is_prefix,
    is_c1_infix_s1, is_c1_infix_s2, tokenise,
};

/// The naming scheme a tokenised fragment list belongs to.
///
/// `Class1a` and `Class1b` are both "Class 1" names (no space, nested
/// infix run); they differ only in fragment count. `Class2` names render
/// as two space-separated two-fragment words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectorClass {
    Class1a,
    Class1b,
    Class2,
}

/// Classifies an already-tokenised fragment list.
///
/// * 4 fragments, third is a prefix → [`SectorClass::Class2`].
/// * 4 fragments, third is not a prefix → [`SectorClass::Class1a`].
/// * 3 fragments → [`SectorClass::Class1b`].
/// * anything else → `None` (invalid).
pub fn classify(frags: &[&str]) -> Option<SectorClass> {
    match frags.len() {
        4 if is_prefix(frags[2]) => Some(SectorClass::Class2),
        4 => Some(SectorClass::Class1a),
        3 => Some(SectorClass::Class1b),
        _ => None,
    }
}

/// Tokenises and classifies a sector name in one step.
pub fn classify_name(sector_name: &str) -> Option<SectorClass> {
    classify(&tokenise(sector_name)?)
}

/// Full structural validation: classification plus the vowel/consonant
/// alternation and suffix-sequence checks `is_valid_name` performs in the
/// source.
pub fn is_valid(frags: &[&str]) -> bool {
    if frags.is_empty() || !is_prefix(frags[0]) {
        return false;
    }
    match classify(frags) {
        Some(SectorClass::Class2) => {
            let f1idx = c2_prefix_suffix_override(frags[0]);
            let f3idx = c2_prefix_suffix_override(frags[2]);
            c2_suffix_seq(f1idx).contains(&frags[1]) && c2_suffix_seq(f3idx).contains(&frags[3])
        }
        Some(SectorClass::Class1a) | Some(SectorClass::Class1b) => {
            let mut fli_idx = c1_prefix_infix_override(frags[0]);
            if !infix_in_seq(frags[1], fli_idx) {
                return false;
            }
            if frags.len() == 4 {
                fli_idx = if fli_idx == 1 { 2 } else { 1 };
                if !infix_in_seq(frags[2], fli_idx) {
                    return false;
                }
            }
            let flast_idx = if fli_idx == 1 { 2 } else { 1 };
            c1_suffix_seq(flast_idx).contains(&frags[frags.len() - 1])
        }
        None => false,
    }
}

/// Is `is_valid` for a raw (untokenised) sector-name string.
pub fn is_valid_name(sector_name: &str) -> bool {
    match tokenise(sector_name) {
        Some(frags) => is_valid(&frags),
        None => false,
    }
}

fn infix_in_seq(frag: &str, seq_idx: usize) -> bool {
    match seq_idx {
        1 => is_c1_infix_s1(frag),
        2 => is_c1_infix_s2(frag),
        _ => false,
    }
}

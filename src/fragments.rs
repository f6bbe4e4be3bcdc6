//! The static phoneme-fragment catalogue and the greedy tokeniser built on it.
//!
//! Every sector name is a concatenation of fragments drawn from this closed,
//! ~300-entry catalogue. The catalogue partitions into a prefix set (the
//! first 111 entries, by convention — order is otherwise not meaningful) and
//! several suffix/infix sequences used by the two sector-naming schemes.
//! Lifted verbatim from the source's `pgdata.py` data module.

/// Every fragment the codec can ever emit or recognise, prefixes first.
pub const CX_RAW_FRAGMENTS: &[&str] = &[
    "Th", "Eo", "Oo", "Eu", "Tr", "Sly", "Dry", "Ou",
    "Tz", "Phl", "Ae", "Sch", "Hyp", "Syst", "Ai", "Kyl",
    "Phr", "Eae", "Ph", "Fl", "Ao", "Scr", "Shr", "Fly",
    "Pl", "Fr", "Au", "Pry", "Pr", "Hyph", "Py", "Chr",
    "Phyl", "Tyr", "Bl", "Cry", "Gl", "Br", "Gr", "By",
    "Aae", "Myc", "Gyr", "Ly", "Myl", "Lych", "Myn", "Ch",
    "Myr", "Cl", "Rh", "Wh", "Pyr", "Cr", "Syn", "Str",
    "Syr", "Cy", "Wr", "Hy", "My", "Sty", "Sc", "Sph",
    "Spl", "A", "Sh", "B", "C", "D", "Sk", "Io",
    "Dr", "E", "Sl", "F", "Sm", "G", "H", "I",
    "Sp", "J", "Sq", "K", "L", "Pyth", "M", "St",
    "N", "O", "Ny", "Lyr", "P", "Sw", "Thr", "Lys",
    "Q", "R", "S", "T", "Ea", "U", "V", "W",
    "Schr", "X", "Ee", "Y", "Z", "Ei", "Oe", "ll",
    "ss", "b", "c", "d", "f", "dg", "g", "ng",
    "h", "j", "k", "l", "m", "n", "mb", "p",
    "q", "gn", "th", "r", "s", "t", "ch", "tch",
    "v", "w", "wh", "ck", "x", "y", "z", "ph",
    "sh", "ct", "wr", "o", "ai", "a", "oi", "ea",
    "ie", "u", "e", "ee", "oo", "ue", "i", "oa",
    "au", "ae", "oe", "scs", "wsy", "vsky", "sms", "dst",
    "rb", "nts", "rd", "rld", "lls", "rgh", "rg", "hm",
    "hn", "rk", "rl", "rm", "cs", "wyg", "rn", "hs",
    "rbs", "rp", "tts", "wn", "ms", "rr", "mt", "rs",
    "cy", "rt", "ws", "lch", "my", "ry", "nks", "nd",
    "sc", "nk", "sk", "nn", "ds", "sm", "sp", "ns",
    "nt", "dy", "st", "rrs", "xt", "nz", "sy", "xy",
    "rsch", "rphs", "sts", "sys", "sty", "tl", "tls", "rds",
    "nch", "rns", "ts", "wls", "rnt", "tt", "rdy", "rst",
    "pps", "tz", "sks", "ppy", "ff", "sps", "kh", "sky",
    "lts", "wnst", "rth", "ths", "fs", "pp", "ft", "ks",
    "pr", "ps", "pt", "fy", "rts", "ky", "rshch", "mly",
    "py", "bb", "nds", "wry", "zz", "nns", "ld", "lf",
    "gh", "lks", "sly", "lk", "rph", "ln", "bs", "rsts",
    "gs", "ls", "vvy", "lt", "rks", "qs", "rps", "gy",
    "wns", "lz", "nth", "phs", "io", "oea", "aa", "ua",
    "eia", "ooe", "iae", "oae", "ou", "uae", "ao", "eae",
    "aea", "ia", "eou", "aei", "uia", "aae", "eau",
];

/// Fragments that may open a sector name (Class 1 and Class 2 both).
pub const CX_PREFIX_COUNT: usize = 111;
pub const CX_PREFIXES: &[&str] = &CX_RAW_FRAGMENTS[0..CX_PREFIX_COUNT];

/// Vowel-ish Class 1 infixes (the source marks these "SPECULATIVE").
pub const C1_INFIXES_S1: &[&str] = &[
    "o", "ai", "a", "oi", "ea", "ie", "u", "e",
    "ee", "oo", "ue", "i", "oa", "au", "ae", "oe",
];

/// Consonant-ish Class 1 infixes ("SPECULATIVE" in the source).
pub const C1_INFIXES_S2: &[&str] = &[
    "ll", "ss", "b", "c", "d", "f", "dg", "g",
    "ng", "h", "j", "k", "l", "m", "n", "mb",
    "p", "q", "gn", "th", "r", "s", "t", "ch",
    "tch", "v", "w", "wh", "ck", "x", "y", "z",
    "ph", "sh", "ct", "wr",
];

/// Index 0 is unused (mirrors the source's 1-based `cx_suffixes`/`c1_infixes` lists).
pub const C1_INFIXES: [&[&str]; 3] = [&[], C1_INFIXES_S1, C1_INFIXES_S2];

/// Suffix sequence 1: vowel-ish trailing fragments.
pub const CX_SUFFIXES_S1: &[&str] = &[
    "oe", "io", "oea", "oi", "aa", "ua", "eia", "ae",
    "ooe", "oo", "a", "ue", "ai", "e", "iae", "oae",
    "ou", "uae", "i", "ao", "au", "o", "eae", "u",
    "aea", "ia", "ie", "eou", "aei", "ea", "uia", "oa",
    "aae", "eau", "ee",
];

/// Suffix sequence 2: consonant-ish, light weight.
pub const CX_SUFFIXES_S2: &[&str] = &[
    "b", "scs", "wsy", "c", "d", "vsky", "f", "sms",
    "dst", "g", "rb", "h", "nts", "ch", "rd", "rld",
    "k", "lls", "ck", "rgh", "l", "rg", "m", "n",
    "hm", "p", "hn", "rk", "q", "rl", "r", "rm",
    "s", "cs", "wyg", "rn", "ct", "t", "hs", "rbs",
    "rp", "tts", "v", "wn", "ms", "w", "rr", "mt",
    "x", "rs", "cy", "y", "rt", "z", "ws", "lch",
    "my", "ry", "nks",
];

/// Suffix sequence 3: consonant-ish, heavier weight.
pub const CX_SUFFIXES_S3: &[&str] = &[
    "nd", "sc", "ng", "sh", "nk", "sk", "nn", "ds",
    "sm", "sp", "ns", "nt", "dy", "ss", "st", "rrs",
    "xt", "nz", "sy", "xy", "rsch", "rphs", "sts", "sys",
    "sty", "th", "tl", "tls", "rds", "nch", "rns", "ts",
    "wls", "rnt", "tt", "rdy", "rst", "pps", "tz", "tch",
    "sks", "ppy", "ff", "sps", "kh", "sky", "ph", "lts",
    "wnst", "rth", "ths", "fs", "pp", "ft", "ks", "pr",
    "ps", "pt", "fy", "rts", "ky", "rshch", "mly", "py",
    "bb", "nds", "wry", "zz", "nns", "ld", "lf", "gh",
    "lks", "sly", "lk", "ll", "rph", "ln", "bs", "rsts",
    "gs", "ls", "vvy", "lt", "rks", "qs", "rps", "gy",
    "wns", "lz", "nth", "phs",
];

/// Index 0 is unused (mirrors the source's 1-based `cx_suffixes` list).
pub const CX_SUFFIXES: [&[&str]; 4] = [&[], CX_SUFFIXES_S1, CX_SUFFIXES_S2, CX_SUFFIXES_S3];

/// `c2_suffixes` in the source: the suffix table consulted by Class 2 words.
///
/// The data module that defined `c2_suffixes` was not part of the retrieved
/// source (see DESIGN.md); reconstructed here as the obvious alias of
/// `cx_suffixes`, since every Class 2 caller only ever indexes it with 1
/// (the override map's default) or 2 (the override map's non-default),
/// matching `cx_suffixes_s1`/`s2` exactly.
pub fn c2_suffix_seq(idx: usize) -> &'static [&'static str] {
    CX_SUFFIXES[idx]
}

/// `c1_suffixes` in the source: the suffix table consulted by Class 1 names.
///
/// Index 1 (vowel-ish) aliases `cx_suffixes_s1` directly. Index 2
/// (consonant-ish) is reconstructed as `cx_suffixes_s2 ++ cx_suffixes_s3`
/// concatenated: Class 1 has no override map distinguishing "light" from
/// "heavy" consonant suffixes the way Class 2's prefix-suffix override map
/// does, so its single consonant sequence must cover both weight tiers —
/// confirmed by the fact that "wns", a `cx_suffixes_s3`-only fragment,
/// appears as a genuine Class 1 suffix (e.g. "Froawns").
pub fn c1_suffix_seq(idx: usize) -> &'static [&'static str] {
    use std::sync::OnceLock;
    static CONSONANT: OnceLock<Vec<&'static str>> = OnceLock::new();
    match idx {
        1 => CX_SUFFIXES_S1,
        2 => CONSONANT
            .get_or_init(|| {
                CX_SUFFIXES_S2
                    .iter()
                    .chain(CX_SUFFIXES_S3.iter())
                    .copied()
                    .collect()
            })
            .as_slice(),
        _ => &[],
    }
}

/// Prefixes whose Class 2 suffix comes from sequence 2 rather than the default sequence 1.
pub fn c2_prefix_suffix_override(prefix: &str) -> usize {
    match prefix {
        "Eo" | "Oo" | "Eu" | "Ou" | "Ae" | "Ai" | "Eae" | "Ao" | "Au" => 2,
        _ => 1,
    }
}

/// Prefixes whose Class 1 first infix comes from sequence 2 rather than the default sequence 1.
pub fn c1_prefix_infix_override(prefix: &str) -> usize {
    match prefix {
        "Eo" | "Oo" | "Eu" | "Ou" | "Ae" | "Ai" | "Eae" | "Ao" | "Au" | "Aae" | "A" | "Io"
        | "E" | "I" | "O" | "Ea" | "U" | "Ee" | "Ei" | "Oe" => 2,
        _ => 1,
    }
}

pub fn is_prefix(frag: &str) -> bool {
    CX_PREFIXES.contains(&frag)
}

fn sequence_of(frag: &str, seq: &[&str]) -> bool {
    seq.contains(&frag)
}

pub fn is_c1_infix_s1(frag: &str) -> bool {
    sequence_of(frag, C1_INFIXES_S1)
}

pub fn is_c1_infix_s2(frag: &str) -> bool {
    sequence_of(frag, C1_INFIXES_S2)
}

/// Fragments sorted by descending length, ties broken by catalogue order —
/// the order `tokenise` must check them in for a correct greedy longest match.
fn fragments_by_length_desc() -> Vec<&'static str> {
    let mut frags: Vec<&'static str> = CX_RAW_FRAGMENTS.to_vec();
    frags.sort_by_key(|f| std::cmp::Reverse(f.len()));
    frags
}

/// Splits a sector name into its ordered fragment list by greedy
/// longest-match against the catalogue. Spaces are stripped first, so
/// `"Syn oo kio"` and `"Synoo kio"` tokenise identically — see §9 in
/// SPEC_FULL.md for why this whitespace-insensitivity is kept rather than
/// tightened.
///
/// Returns `None` when a residual substring matches no catalogue fragment.
pub fn tokenise(sector_name: &str) -> Option<Vec<&'static str>> {
    let order = fragments_by_length_desc();
    let stripped: String = sector_name.chars().filter(|c| !c.is_whitespace()).collect();

    let mut rest = stripped.as_str();
    let mut out = Vec::new();
    while !rest.is_empty() {
        let found = order.iter().find(|frag| rest.starts_with(*frag));
        match found {
            Some(frag) => {
                out.push(*frag);
                rest = &rest[frag.len()..];
            }
            None => return None,
        }
    }
    Some(out)
}

/// Renders a fragment list back into its canonical string form: a single
/// space between the two words for Class 2, no separator at all for Class 1.
pub fn format_name(frags: &[&str]) -> String {
    if frags.len() == 4 && is_prefix(frags[2]) {
        format!("{}{} {}{}", frags[0], frags[1], frags[2], frags[3])
    } else {
        frags.concat()
    }
}

/// The next prefix in catalogue order, wrapping back to the first.
pub(crate) fn next_prefix(prefix: &str) -> &'static str {
    let idx = CX_PREFIXES.iter().position(|p| *p == prefix).unwrap_or(0);
    CX_PREFIXES[(idx + 1) % CX_PREFIXES.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_count_matches_catalogue_slice() {
        assert_eq!(CX_PREFIXES.len(), CX_PREFIX_COUNT);
        assert!(CX_PREFIXES.iter().all(|p| is_prefix(p)));
    }

    #[test]
    fn tokenise_class_two_example() {
        assert_eq!(
            tokenise("Dryau Aowsy"),
            Some(vec!["Dry", "au", "Ao", "wsy"])
        );
    }

    #[test]
    fn tokenise_ignores_spaces() {
        assert_eq!(tokenise("Syn oo kio"), tokenise("Synoo kio"));
    }

    #[test]
    fn tokenise_class_one_b_example() {
        // Not "Froadue": against this catalogue that tokenises to 4 fragments
        // (Class 1a), matching the source's own `get_sector_class` docstring
        // ("Froawns = 1b, Froadue = 1a, Eos Aowsy = 2") — see DESIGN.md.
        let frags = tokenise("Froawns").unwrap();
        assert_eq!(frags, vec!["Fr", "oa", "wns"]);
    }

    #[test]
    fn tokenise_froadue_is_four_fragments_not_three() {
        assert_eq!(tokenise("Froadue"), Some(vec!["Fr", "oa", "d", "ue"]));
    }

    #[test]
    fn tokenise_rejects_unmatchable_residue() {
        assert_eq!(tokenise("Xyz123"), None);
    }

    #[test]
    fn tokenise_is_idempotent_through_format() {
        let frags = tokenise("Dryau Aowsy").unwrap();
        let formatted = format_name(&frags);
        assert_eq!(tokenise(&formatted), Some(frags));
    }

    #[test]
    fn next_prefix_wraps() {
        let last = CX_PREFIXES[CX_PREFIXES.len() - 1];
        assert_eq!(next_prefix(last), CX_PREFIXES[0]);
    }

    #[test]
    fn format_name_class_two_has_single_space() {
        let frags = vec!["Dry", "au", "Ao", "wsy"];
        assert_eq!(format_name(&frags), "Dryau Aowsy");
    }

    #[test]
    fn format_name_class_one_has_no_space() {
        let frags = vec!["Fr", "o", "a", "due"];
        assert_eq!(format_name(&frags), "Froadue");
    }
}

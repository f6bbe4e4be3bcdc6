//! Intra-sector boxel locator: `prefix/centre/suffix/mass-code/n1/n2` →
//! a point and error radius inside a single sector.

use crate::sector::{Vec3, CUBE_SIZE};
use crate::Error;

const ALPHABET_LEN: i64 = 26;
const ROW_LENGTH: i64 = 128;
const SIDE_LENGTH: i64 = ROW_LENGTH * ROW_LENGTH;

fn alpha_index(c: char) -> Result<i64, Error> {
    let upper = c.to_ascii_uppercase();
    if !upper.is_ascii_uppercase() {
        return Err(Error::InvalidInput(format!(
            "'{c}' is not an uppercase letter"
        )));
    }
    Ok((upper as u8 - b'A') as i64)
}

/// Computes the star's approximate position within its sector plus the
/// half-width of the box it's guaranteed to lie in.
///
/// `n1` defaults to 0 when the name carries no leading numeric group; `n2`
/// is accepted but, matching the source, does not influence the computed
/// position — it identifies a specific star within the boxel, a precision
/// the procedural codec's geometry does not resolve.
pub fn locate(
    prefix: char,
    centre: char,
    suffix: char,
    mass_code: char,
    n1: u32,
    _n2: Option<u32>,
) -> Result<(Vec3, f64), Error> {
    let mass = mass_code.to_ascii_lowercase();
    if !('a'..='h').contains(&mass) {
        return Err(Error::InvalidInput(format!(
            "mass code '{mass_code}' is not in a..h"
        )));
    }

    let mut position = ALPHABET_LEN.pow(3) * n1 as i64;
    position += ALPHABET_LEN.pow(2) * alpha_index(suffix)?;
    position += ALPHABET_LEN * alpha_index(centre)?;
    position += alpha_index(prefix)?;

    let row = position.div_euclid(SIDE_LENGTH);
    let position = position.rem_euclid(SIDE_LENGTH);
    let stack = position.div_euclid(ROW_LENGTH);
    let column = position.rem_euclid(ROW_LENGTH);

    let cube_side = CUBE_SIZE / 2f64.powi(('h' as i32) - (mass as i32));
    let half_width = cube_side / 2.0;

    let approx = Vec3::new(
        column as f64 * cube_side + half_width,
        stack as f64 * cube_side + half_width,
        row as f64 * cube_side + half_width,
    );

    if approx.x < 0.0
        || approx.x >= CUBE_SIZE
        || approx.y < 0.0
        || approx.y >= CUBE_SIZE
        || approx.z < 0.0
        || approx.z >= CUBE_SIZE
    {
        log::error!(
            "intra-sector locator produced out-of-range position {approx:?} for \
             {prefix}{centre}-{suffix} {mass_code}{n1}"
        );
        return Ok((approx, half_width));
    }

    Ok((approx, half_width))
}

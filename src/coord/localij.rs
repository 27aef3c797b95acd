//! Local IJ Coordinates
//!
//! Algorithms working with hexagons may want to refer to grid coordinates that
//! are not interrupted by base cells or faces. These coordinates have 2
//! coordinate axes spaced 120Â° apart, with the coordinates anchored by an
//! origin index.
//!
//! - local coordinates are only comparable when they have the same origin
//!   index.
//! - local coordinates are only valid near the origin. Practically, this is
//!   within the same base cell or a neighboring base cell, except for
//!   pentagons.
//! - the coordinate space may have deleted or warped regions due to pentagon
//!   distortion.
//! - there may be multiple coordinates for the same index, with the same
//!   origin.
//! - the origin may not be at (0, 0) in the local coordinate space.

use super::{CoordIJ, CoordIJK, FaceIJK};
use crate::{
    error::{HexGridError, LocalIjError},
    index::bits,
    BaseCell, CellIndex, Direction, Resolution, CCW, CW, DEFAULT_CELL_INDEX,
};
use std::{fmt, num::NonZeroU8};

// -----------------------------------------------------------------------------

/// `IJK` coordinates anchored by an origin.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct LocalIJK {
    /// Anchor cell.
    pub anchor: CellIndex,
    /// `IJK` coordinates.
    pub coord: CoordIJK,
}

impl LocalIJK {
    /// Return the `IJK` coordinate.
    pub const fn coord(&self) -> &CoordIJK {
        &self.coord
    }

    /// Computes the local `IJK` coordinates of `cell`, anchored by `origin`.
    ///
    /// Fails if the cells are too far apart for the local coordinate space to
    /// remain valid, or if pentagon distortion cannot be unfolded.
    pub fn from_cell(
        origin: CellIndex,
        cell: CellIndex,
    ) -> Result<Self, LocalIjError> {
        Ok(Self {
            anchor: origin,
            coord: cell_to_local_ijk_coord(origin, cell)?,
        })
    }
}

/// Produces the local `IJK` coordinates of `cell`, anchored by `origin`.
///
/// Both cells must share the same resolution. Pentagon distortion that cannot
/// be unfolded (i.e. crossing the deleted k-subsequence) is reported as an
/// error rather than silently producing a bogus coordinate.
fn cell_to_local_ijk_coord(
    origin: CellIndex,
    cell: CellIndex,
) -> Result<CoordIJK, LocalIjError> {
    let resolution = origin.resolution();
    if resolution != cell.resolution() {
        return Err(LocalIjError::ResolutionMismatch);
    }

    let origin_base_cell = origin.base_cell();
    let base_cell = cell.base_cell();

    // Direction from the origin base cell to the cell's base cell.
    let mut dir = Direction::Center;
    let mut rev_dir = Direction::Center;
    if origin_base_cell != base_cell {
        dir = origin_base_cell
            .direction(base_cell)
            .ok_or(LocalIjError::Pentagon)?;
        rev_dir = base_cell
            .direction(origin_base_cell)
            .expect("reverse base cell direction");
    }

    let origin_on_pent = origin_base_cell.is_pentagon();
    let index_on_pent = base_cell.is_pentagon();

    let mut bits = u64::from(cell);

    if dir != Direction::Center {
        // Rotate the cell into the orientation of the origin base cell. CW
        // because we're undoing the rotation into that base cell.
        let base_cell_rotations = origin_base_cell.neighbor_rotation(dir);
        if index_on_pent {
            for _ in 0..base_cell_rotations {
                bits = bits::pentagon_rotate60::<{ CW }>(bits);
                rev_dir = rev_dir.rotate60::<{ CW }>(1);
                if rev_dir == Direction::K {
                    rev_dir = rev_dir.rotate60::<{ CW }>(1);
                }
            }
        } else {
            for _ in 0..base_cell_rotations {
                bits = bits::rotate60::<{ CW }>(bits, 1);
                rev_dir = rev_dir.rotate60::<{ CW }>(1);
            }
        }
    }

    // Face is unused here: this produces coordinates in the base cell's own
    // coordinate space.
    let mut coord = FaceIJK::from_bits(bits, resolution, base_cell).0.coord;

    if dir != Direction::Center {
        debug_assert_ne!(base_cell, origin_base_cell);
        debug_assert!(!(origin_on_pent && index_on_pent));

        let mut pentagon_rotations = 0;
        let mut direction_rotations = 0;

        if origin_on_pent {
            let origin_leading_digit = bits::first_axe(origin.into())
                .map_or(0, NonZeroU8::get);

            if FAILED_DIRECTIONS[usize::from(origin_leading_digit)]
                [usize::from(dir)]
            {
                // TODO: we may be unfolding the pentagon incorrectly in this
                // case; fail rather than return a bogus coordinate.
                return Err(LocalIjError::Pentagon);
            }

            direction_rotations = PENTAGON_ROTATIONS
                [usize::from(origin_leading_digit)][usize::from(dir)];
            pentagon_rotations = direction_rotations;
        } else if index_on_pent {
            let index_leading_digit =
                bits::first_axe(bits).map_or(0, NonZeroU8::get);

            if FAILED_DIRECTIONS[usize::from(index_leading_digit)]
                [usize::from(rev_dir)]
            {
                return Err(LocalIjError::Pentagon);
            }

            pentagon_rotations = PENTAGON_ROTATIONS[usize::from(rev_dir)]
                [usize::from(index_leading_digit)];
        }

        for _ in 0..pentagon_rotations {
            coord = coord.rotate60::<{ CW }>();
        }

        let mut offset = dir.coordinate();
        for res in Resolution::range(Resolution::One, resolution).rev() {
            offset = if res.is_class3() {
                offset.down_aperture7::<{ CCW }>()
            } else {
                offset.down_aperture7::<{ CW }>()
            };
        }

        for _ in 0..direction_rotations {
            offset = offset.rotate60::<{ CW }>();
        }

        coord = (coord + offset).normalize();
    } else if origin_on_pent && index_on_pent {
        // If both origin and cell are on the same pentagon (base cells are
        // neither distinct nor neighbors), they must share a base cell.
        debug_assert_eq!(base_cell, origin_base_cell);

        let origin_leading_digit =
            bits::first_axe(origin.into()).map_or(0, NonZeroU8::get);
        let index_leading_digit =
            bits::first_axe(bits).map_or(0, NonZeroU8::get);

        if FAILED_DIRECTIONS[usize::from(origin_leading_digit)]
            [usize::from(index_leading_digit)]
        {
            return Err(LocalIjError::Pentagon);
        }

        let within_pentagon_rotations = PENTAGON_ROTATIONS
            [usize::from(origin_leading_digit)]
            [usize::from(index_leading_digit)];

        for _ in 0..within_pentagon_rotations {
            coord = coord.rotate60::<{ CW }>();
        }
    }

    Ok(coord)
}

impl TryFrom<LocalIJK> for CellIndex {
    type Error = LocalIjError;

    fn try_from(value: LocalIJK) -> Result<Self, Self::Error> {
        let resolution = value.anchor.resolution();
        let origin_base_cell = value.anchor.base_cell();
        let origin_on_pent = origin_base_cell.is_pentagon();

        // Initialize the index.
        let mut bits = bits::set_resolution(DEFAULT_CELL_INDEX, resolution);

        // Check for res 0/base cell.
        if resolution == Resolution::Zero {
            let dir = Direction::try_from(value.coord)?;
            // Bail out if we're moving in an invalid direction off a pentagon.
            let new_base_cell = origin_base_cell
                .neighbor(dir)
                .ok_or(Self::Error::Pentagon)?;
            return Ok(Self::new_unchecked(bits::set_base_cell(
                bits,
                new_base_cell.into(),
            )));
        }

        // We need to find the correct base cell offset (if any) for this
        // index; start with the passed in base cell and resolution res ijk
        // coordinates in that base cell's coordinate system.
        let ijk = checked_directions_bits_from_ijk(
            value.coord,
            &mut bits,
            resolution,
        )
        .ok_or_else(|| HexGridError::new("IJ coordinates overflow"))?;

        // Lookup the correct base cell.
        let mut dir = Direction::try_from(ijk)?;
        let mut base_cell = origin_base_cell.neighbor(dir);
        // If `base_cell` is invalid, it must be because the origin base cell is
        // a pentagon, and because pentagon base cells do not border each other,
        // `base_cell` must not be a pentagon.
        let index_on_pent =
            base_cell.map(BaseCell::is_pentagon).unwrap_or_default();

        if dir != Direction::Center {
            // If the index is in a warped direction, we need to unwarp the base
            // cell direction. There may be further need to rotate the index
            // digits.
            let mut pentagon_rotations = 0;
            if origin_on_pent {
                let leading_direction = bits::first_axe(value.anchor.into())
                    .map_or_else(|| 0, NonZeroU8::get);
                pentagon_rotations = PENTAGON_ROTATIONS_REVERSE
                    [usize::from(leading_direction)][usize::from(dir)];
                assert_ne!(pentagon_rotations, 0xff);
                dir = dir.rotate60::<CCW>(pentagon_rotations.into());

                // The pentagon rotations are being chosen so that dir is not
                // the deleted direction. If it still happens, it means we're
                // moving into a deleted subsequence, so there is no index here.
                let fixed_base_cell = origin_base_cell
                    .neighbor(dir)
                    .ok_or(Self::Error::Pentagon)?;
                base_cell = Some(fixed_base_cell);
                debug_assert!(!fixed_base_cell.is_pentagon());
            }
            let fixed_base_cell = base_cell.expect("fixed base cell");

            // Now we can determine the relation between the origin and target
            // base cell.
            let base_cell_rotations = origin_base_cell.neighbor_rotation(dir);

            // Adjust for pentagon warping within the base cell. The base cell
            // should be in the right location, so now we need to rotate the
            // index back. We might not need to check for errors since we would
            // just be double mapping.
            if index_on_pent {
                let rev_dir = usize::from(
                    fixed_base_cell
                        .direction(origin_base_cell)
                        .expect("reverse direction"),
                );

                // Adjust for the different coordinate space in the two base
                // cells. This is done first because we need to do the pentagon
                // rotations based on the leading digit in the pentagon's
                // coordinate system.
                bits = bits::rotate60::<CCW>(bits, base_cell_rotations.into());

                let leading_direction = usize::from(
                    bits::first_axe(bits).map_or_else(|| 0, NonZeroU8::get),
                );
                let pentagon_rotations = if fixed_base_cell.is_polar_pentagon()
                {
                    PENTAGON_ROTATIONS_REVERSE_POLAR[rev_dir][leading_direction]
                } else {
                    PENTAGON_ROTATIONS_REVERSE_NONPOLAR[rev_dir]
                        [leading_direction]
                };
                // For this to occur, `rev_direction` would need to be 1. Since
                // `rev_direction` is from the index base cell (which is a
                // pentagon) towards the origin, this should never be the case.
                assert_ne!(pentagon_rotations, 0xff);

                bits = (0..pentagon_rotations)
                    .fold(bits, |acc, _| bits::pentagon_rotate60::<CCW>(acc));
            } else {
                assert!(pentagon_rotations != 0xff);
                let count =
                    usize::from(pentagon_rotations + base_cell_rotations);
                bits = bits::rotate60::<CCW>(bits, count);
            }
        } else if origin_on_pent && index_on_pent {
            let origin_leading_dir = usize::from(
                bits::first_axe(value.anchor.into())
                    .map_or_else(|| 0, NonZeroU8::get),
            );
            let index_leading_dir = usize::from(
                bits::first_axe(bits).map_or_else(|| 0, NonZeroU8::get),
            );

            let rotations = PENTAGON_ROTATIONS_REVERSE[origin_leading_dir]
                [index_leading_dir];
            assert!(rotations != 0xff, "invalid K axis digit");
            bits = bits::rotate60::<CCW>(bits, rotations.into());
        }

        if index_on_pent {
            // TODO: There are cases which are failed but not accounted for
            // here, instead just fail if the recovered index is invalid.
            if bits::first_axe(bits) == Direction::K.axe() {
                return Err(Self::Error::Pentagon);
            }
        }

        let base_cell = base_cell
            .ok_or_else(|| HexGridError::new("cannot resolve base cell"))?;
        Ok(Self::new_unchecked(bits::set_base_cell(
            bits,
            base_cell.into(),
        )))
    }
}

/// Set the directions of a cell index (in-place) from finest resolution up.
///
/// IJK coordinates are adjusted during the traversal so that, at the end, they
/// should match the IJK of the base cell in the coordinate system of the
/// current base cell.
///
/// Returns the adjusted `IJK` coordinates.
#[allow(clippy::inline_always)] // 4-5% boost, up to 13% at resolution 1.
#[inline(always)]
pub fn checked_directions_bits_from_ijk(
    mut ijk: CoordIJK,
    bits: &mut u64,
    resolution: Resolution,
) -> Option<CoordIJK> {
    for res in Resolution::range(Resolution::One, resolution).rev() {
        let last_ijk = ijk;
        let last_center = if res.is_class3() {
            // Rotate CCW.
            ijk = ijk.checked_up_aperture7::<{ CCW }>()?;
            ijk.down_aperture7::<{ CCW }>()
        } else {
            // Rotate CW.
            ijk = ijk.checked_up_aperture7::<{ CW }>()?;
            ijk.down_aperture7::<{ CW }>()
        };

        let diff = (last_ijk - last_center).normalize();
        let direction = Direction::try_from(diff).expect("unit IJK coordinate");
        // SAFETY: `res` is in [resolution; 1], thus valid.
        *bits = bits::set_direction(*bits, direction.into(), res);
    }

    Some(ijk)
}

// -----------------------------------------------------------------------------

/// `IJ` coordinates anchored by an origin.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocalIJ {
    /// Anchor cell.
    pub anchor: CellIndex,
    /// `IJ` coordinates.
    pub coord: CoordIJ,
}

impl LocalIJ {
    /// Initialize a new `LocalIJ` from its components.
    ///
    /// Could be used to build invalid local IJ coordinate, only used for tests.
    #[must_use]
    pub const fn new(anchor: CellIndex, coord: CoordIJ) -> Self {
        Self { anchor, coord }
    }
}

impl TryFrom<LocalIJ> for CellIndex {
    type Error = LocalIjError;

    fn try_from(value: LocalIJ) -> Result<Self, Self::Error> {
        let local_ijk = LocalIJK {
            anchor: value.anchor,
            coord: CoordIJK::try_from(value.coord)?,
        };
        Self::try_from(local_ijk)
    }
}

impl fmt::Display for LocalIJ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.anchor, self.coord)
    }
}

// -----------------------------------------------------------------------------

// In the lookup table below, it would be nice to use `u8` with a custom niche.
// Not supported yet though: https://github.com/rust-lang/rfcs/pull/3334

/// Leading index digit -> direction -> rotations 60 CW.
///
/// Used by `cellToLocalIjk` to fold a cell into the coordinate space of a
/// pentagon base cell (either the origin's or the target's).
#[rustfmt::skip]
const PENTAGON_ROTATIONS: [[u8; 7]; 7] = [
    [0, 0xff, 0, 0, 0, 0, 0],    // 0
    [0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff], // 1
    [0, 0xff, 0, 0, 0, 1, 0],    // 2
    [0, 0xff, 0, 0, 1, 1, 0],    // 3
    [0, 0xff, 0, 5, 0, 0, 0],    // 4
    [0, 0xff, 5, 5, 0, 0, 0],    // 5
    [0, 0xff, 0, 0, 0, 0, 0],    // 6
];

/// Leading index digit -> direction -> whether the unfolding is undefined.
///
/// `true` marks combinations for which the pentagon cannot be safely
/// unfolded; `cellToLocalIjk` reports an error rather than guess.
#[rustfmt::skip]
const FAILED_DIRECTIONS: [[bool; 7]; 7] = [
    [false, false, false, false, false, false, false], // 0
    [false, false, false, false, false, false, false], // 1
    [false, false, false, false, true,  true,  false], // 2
    [false, false, false, false, true,  false, true ], // 3
    [false, false, true,  true,  false, false, false], // 4
    [false, false, true,  false, false, false, true ], // 5
    [false, false, false, true,  false, true,  false], // 6
];

/// Reverse base cell direction -> leading index digit -> rotations 60 CCW.
///
/// For reversing the rotation introduced in `PENTAGON_ROTATIONS` when the
/// origin is on a pentagon (regardless of the base cell of the index).
#[rustfmt::skip]
const PENTAGON_ROTATIONS_REVERSE: [[u8; 7]; 7] = [
    [ 0,    0,    0,    0,    0,    0,    0],    // 0
    [ 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff], // 1
    [ 0,    1,    0,    0,    0,    0,    0],    // 2
    [ 0,    1,    0,    0,    0,    1,    0],    // 3
    [ 0,    5,    0,    0,    0,    0,    0],    // 4
    [ 0,    5,    0,    5,    0,    0,    0],    // 5
    [ 0,    0,    0,    0,    0,    0,    0],    // 6
];

/// Reverse base cell direction -> leading index digit -> rotations 60 CCW.
///
/// For reversing the rotation introduced in `PENTAGON_ROTATIONS` when the index
/// is on a pentagon and the origin is not.
#[rustfmt::skip]
const PENTAGON_ROTATIONS_REVERSE_NONPOLAR: [[u8; 7]; 7] = [
    [ 0,    0,    0,    0,    0,    0,    0],    // 0
    [ 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff], // 1
    [ 0,    1,    0,    0,    0,    0,    0],    // 2
    [ 0,    1,    0,    0,    0,    1,    0],    // 3
    [ 0,    5,    0,    0,    0,    0,    0],    // 4
    [ 0,    1,    0,    5,    1,    1,    0],    // 5
    [ 0,    0,    0,    0,    0,    0,    0],    // 6
];

/// Reverse base cell direction -> leading index digit -> rotations 60 CCW.
///
/// For reversing the rotation introduced in `PENTAGON_ROTATIONS` when the index
/// is on a polar pentagon and the origin is not.
#[rustfmt::skip]
const PENTAGON_ROTATIONS_REVERSE_POLAR: [[u8; 7]; 7] = [
    [ 0,    0,    0,    0,    0,    0,    0],    // 0
    [ 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff], // 1
    [ 0,    1,    1,    1,    1,    1,    1],    // 2
    [ 0,    1,    0,    0,    0,    1,    0],    // 3
    [ 0,    1,    0,    0,    1,    1,    1],    // 4
    [ 0,    1,    0,    5,    1,    1,    0],    // 5
    [ 0,    1,    1,    0,    1,    1,    1],    // 6
];

#[cfg(test)]
#[path = "./localij_tests.rs"]
mod tests;

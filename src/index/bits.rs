//! Bit twiddling.

use super::IndexMode;
use crate::{Direction, Resolution};
use std::num::NonZeroU8;

/// Offset (in bits) of the mode in an index.
const MODE_OFFSET: usize = 59;
const MODE_MASK: u64 = 0b1111 << MODE_OFFSET;

/// Offset (in bits) of the cell edge in an index.
const EDGE_OFFSET: usize = 56;
const EDGE_MASK: u64 = 0b111 << EDGE_OFFSET;

/// Offset (in bits) of the cell vertex in an index.
const VERTEX_OFFSET: usize = 56;
const VERTEX_MASK: u64 = 0b111 << VERTEX_OFFSET;

/// The bit offset of the resolution in an index.
const RESOLUTION_OFFSET: u64 = 52;
// Bitmask to select the resolution bits in an index.
const RESOLUTION_MASK: u64 = 0b1111 << RESOLUTION_OFFSET;

/// Offset (in bits) of the base cell in an index.
const BASE_CELL_OFFSET: u64 = 45;
// Bitmask to select the base cell bits in an index.
const BASE_CELL_MASK: u64 = 0b111_1111 << BASE_CELL_OFFSET;

// Bitmask to select the directions bits in an index.
pub const DIRECTIONS_MASK: u64 = 0x0000_1fff_ffff_ffff;

/// Returns the index mode  bits.
#[allow(clippy::cast_possible_truncation)] // Cast safe thx to masking.
#[must_use]
pub const fn get_mode(bits: u64) -> u8 {
    ((bits & MODE_MASK) >> MODE_OFFSET) as u8
}

/// Clears the index mode bits.
#[must_use]
pub const fn clr_mode(bits: u64) -> u64 {
    bits & !MODE_MASK
}

/// Sets the index mode bits.
#[must_use]
pub const fn set_mode(bits: u64, mode: IndexMode) -> u64 {
    clr_mode(bits) | ((mode as u64) << MODE_OFFSET)
}

/// Returns the index cell edge bits.
#[allow(clippy::cast_possible_truncation)] // Cast safe thx to masking.
#[must_use]
pub const fn get_edge(bits: u64) -> u8 {
    ((bits & EDGE_MASK) >> EDGE_OFFSET) as u8
}

/// Clears the index cell edge bits.
#[must_use]
pub const fn clr_edge(bits: u64) -> u64 {
    bits & !EDGE_MASK
}

/// Sets the index cell edge bits.
#[must_use]
pub fn set_edge(bits: u64, edge: u8) -> u64 {
    clr_edge(bits) | (u64::from(edge) << EDGE_OFFSET)
}

/// Returns the index cell vertex bits.
#[allow(clippy::cast_possible_truncation)] // Cast safe thx to masking.
#[must_use]
pub const fn get_vertex(bits: u64) -> u8 {
    ((bits & VERTEX_MASK) >> VERTEX_OFFSET) as u8
}

/// Clears the index cell vertex bits.
#[must_use]
pub const fn clr_vertex(bits: u64) -> u64 {
    bits & !VERTEX_MASK
}

/// Sets the index cell vertex bits.
#[must_use]
pub fn set_vertex(bits: u64, vertex: u8) -> u64 {
    clr_vertex(bits) | (u64::from(vertex) << VERTEX_OFFSET)
}

/// Returns the index resolution.
#[allow(clippy::cast_possible_truncation)] // Cast safe thx to masking.
#[must_use]
pub const fn get_resolution(bits: u64) -> Resolution {
    // SAFETY: the masking restricts the value on 4 bits (thus 0-15).
    Resolution::new_unchecked(
        ((bits & RESOLUTION_MASK) >> RESOLUTION_OFFSET) as u8,
    )
}

/// Clears the index resolution bits.
#[must_use]
pub const fn clr_resolution(bits: u64) -> u64 {
    bits & !RESOLUTION_MASK
}

/// Sets the index resolution bits.
#[must_use]
pub fn set_resolution(bits: u64, resolution: Resolution) -> u64 {
    clr_resolution(bits) | (u64::from(resolution) << RESOLUTION_OFFSET)
}

/// Returns the index base cell bits.
#[allow(clippy::cast_possible_truncation)] // Cast safe thx to masking.
#[must_use]
pub const fn get_base_cell(bits: u64) -> u8 {
    ((bits & BASE_CELL_MASK) >> BASE_CELL_OFFSET) as u8
}

/// Sets the index base cell bits.
#[must_use]
pub fn set_base_cell(bits: u64, cell: u8) -> u64 {
    (bits & !BASE_CELL_MASK) | (u64::from(cell) << BASE_CELL_OFFSET)
}

/// Returns the index direction bits at the given resolution.
#[allow(clippy::cast_possible_truncation)] // Cast safe thx to masking.
#[must_use]
pub fn get_direction(bits: u64, resolution: Resolution) -> u8 {
    ((bits & resolution.direction_mask()) >> resolution.direction_offset())
        as u8
}

/// Clears the index direction bits at the given resolution.
#[must_use]
pub fn clr_direction(bits: u64, resolution: Resolution) -> u64 {
    bits | resolution.direction_mask()
}

/// Sets the index direction bits at the given resolution.
#[must_use]
pub fn set_direction(bits: u64, direction: u8, resolution: Resolution) -> u64 {
    let mask = resolution.direction_mask();

    (bits & !mask) | (u64::from(direction) << resolution.direction_offset())
}

/// Sets unused directions in an index at the given resolution.
#[must_use]
pub fn set_unused(bits: u64, resolution: Resolution) -> u64 {
    let unused_end_offset = resolution.direction_offset();
    let unused_bits = (1 << unused_end_offset) - 1;

    bits | unused_bits
}

/// Returns the value of the first (most significant) non-zero direction
/// digit, if any.
#[must_use]
pub fn first_axe(bits: u64) -> Option<NonZeroU8> {
    let resolution = get_resolution(bits);

    Resolution::range(Resolution::One, resolution)
        .find_map(|res| NonZeroU8::new(get_direction(bits, res)))
}

/// Rotates the cell index 60° (once per count), either CCW or CW.
#[must_use]
pub fn rotate60<const CCW: bool>(bits: u64, count: usize) -> u64 {
    let resolution = get_resolution(bits);

    Resolution::range(Resolution::One, resolution).fold(bits, |acc, res| {
        // SAFETY: direction digits are always in [0; 6].
        let direction = Direction::new_unchecked(get_direction(acc, res))
            .rotate60::<CCW>(count);

        set_direction(acc, direction.into(), res)
    })
}

/// Rotates a pentagon-rooted cell index 60°, either CCW or CW.
///
/// Like [`rotate60`] but skips over the deleted k-axes subsequence, forcing
/// an extra whole-index rotation when the rotated leading digit would
/// otherwise land on it.
#[must_use]
pub fn pentagon_rotate60<const CCW: bool>(bits: u64) -> u64 {
    let resolution = get_resolution(bits);
    let mut bits = bits;
    let mut found_first_non_zero = false;

    for res in Resolution::range(Resolution::One, resolution) {
        // SAFETY: direction digits are always in [0; 6].
        let direction = Direction::new_unchecked(get_direction(bits, res))
            .rotate60_once::<CCW>();
        bits = set_direction(bits, direction.into(), res);

        if !found_first_non_zero && direction != Direction::Center {
            found_first_non_zero = true;

            // Adjust for the deleted k-axes subsequence.
            if first_axe(bits) == Direction::K.axe() {
                bits = rotate60::<CCW>(bits, 1);
            }
        }
    }

    bits
}

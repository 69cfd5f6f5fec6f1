// SPDX-License-Identifier: MPL-2.0

//! The data permutation.
//!
//! Like the address lines, the eight data lines were crossed, so each byte read off the EPROM has
//! its bits shuffled. This is a reordering of bits and never changes how many are set.

/// Which bit of the logical byte each bit of the physical byte lands on, as `(physical, logical)`
/// pairs.
pub const WIRING: [(usize, usize); 8] = [
    (0, 7),
    (1, 6),
    (2, 0),
    (3, 2),
    (4, 3),
    (5, 4),
    (6, 1),
    (7, 5),
];

/// Reorders the bits of a byte as read from the EPROM into the order the CPU expects.
pub fn decode_byte(byte: u8) -> u8 {
    crate::rewire(byte, WIRING.iter().copied())
}

/// Reorders the bits of a logical byte into the order the EPROM stores them.
///
/// This is the inverse of [`decode_byte`].
pub fn encode_byte(byte: u8) -> u8 {
    crate::rewire(byte, WIRING.iter().map(|&(phys, logic)| (logic, phys)))
}

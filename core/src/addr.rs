// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The address permutation.
//!
//! The EPROM has twelve address lines, but they were soldered to the CPU's address bus in a
//! different order. Reading the chip in a programmer therefore yields bytes at *physical*
//! offsets, which must be moved to the *logical* addresses the CPU would have used.

/// The number of address lines on the EPROM.
pub const WIDTH: usize = 12;

/// The number of addressable bytes on the EPROM.
pub const SIZE: usize = 1 << WIDTH;

/// The bits of an index which take part in the permutation.
pub const MASK: u16 = (SIZE - 1) as u16;

/// Which bit of the logical address each bit of the physical offset lands on, as
/// `(physical, logical)` pairs.
pub const WIRING: [(usize, usize); WIDTH] = [
    (0, 7),
    (1, 8),
    (2, 6),
    (3, 9),
    (4, 5),
    (5, 4),
    (6, 3),
    (7, 10),
    (8, 2),
    (9, 1),
    (10, 0),
    (11, 11),
];

/// Maps a physical offset into a dump to the logical address the CPU sees it at.
///
/// Only the low [`WIDTH`] bits of `index` are considered; anything above them is dropped.
pub fn decode_index(index: u16) -> u16 {
    crate::rewire(index & MASK, WIRING.iter().copied())
}

/// Maps a logical address to the physical offset at which the EPROM stores it.
///
/// This is the inverse of [`decode_index`].
pub fn encode_index(addr: u16) -> u16 {
    crate::rewire(
        addr & MASK,
        WIRING.iter().map(|&(phys, logic)| (logic, phys)),
    )
}

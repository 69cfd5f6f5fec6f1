// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Descrambles images dumped from a 2532 EPROM whose address and data lines were wired to the
//! CPU out of order.
//!
//! Both permutations are fixed. [`addr`] and [`data`] hold them; [`decode`] applies both to a
//! whole image and [`encode`] undoes them.

pub mod addr;
pub mod data;

use std::fmt;

use bit::BitIndex;

pub use addr::{decode_index, encode_index};
pub use data::{decode_byte, encode_byte};

/// An image which cannot be passed through the permutation as-is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SizeError {
    /// The image is larger than the EPROM's address space.
    TooLarge { len: usize },
    /// An offset within the image maps to an address past its end.
    Truncated { len: usize, offset: u16, addr: u16 },
    /// The destination is not the same length as the source.
    Mismatched { src: usize, dst: usize },
}

impl fmt::Display for SizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooLarge { len } => write!(
                f,
                "image is {} bytes, but the EPROM only holds {}",
                len,
                addr::SIZE,
            ),
            Self::Truncated { len, offset, addr } => write!(
                f,
                "image is {} bytes, but offset {:#05x} maps to {:#05x}",
                len, offset, addr,
            ),
            Self::Mismatched { src, dst } => write!(
                f,
                "source is {} bytes, but destination is {} bytes",
                src, dst,
            ),
        }
    }
}

impl std::error::Error for SizeError {}

/// Moves each bit of `from` to a new position according to `pairs` of `(source, destination)`
/// bit indices.
///
/// Bits of `from` that no pair mentions are dropped.
fn rewire<T>(from: T, pairs: impl Iterator<Item = (usize, usize)>) -> T
where
    T: BitIndex + Default,
{
    let mut to = T::default();
    for (src, dst) in pairs {
        to.set_bit(dst, from.bit(src));
    }

    to
}

/// Decodes a raw EPROM dump into the image the CPU sees.
pub fn decode(src: &[u8]) -> Result<Vec<u8>, SizeError> {
    let mut dst = vec![0; src.len()];
    decode_into(src, &mut dst)?;

    Ok(dst)
}

/// Decodes a raw EPROM dump into a caller-provided buffer of the same length.
///
/// On error, `dst` is left untouched.
pub fn decode_into(src: &[u8], dst: &mut [u8]) -> Result<(), SizeError> {
    tracing::debug!("decoding {} bytes", src.len());

    permute(src, dst, decode_index, decode_byte)
}

/// Scrambles a logical image into the order the EPROM stores it.
pub fn encode(src: &[u8]) -> Result<Vec<u8>, SizeError> {
    let mut dst = vec![0; src.len()];
    encode_into(src, &mut dst)?;

    Ok(dst)
}

/// Scrambles a logical image into a caller-provided buffer of the same length.
///
/// On error, `dst` is left untouched.
pub fn encode_into(src: &[u8], dst: &mut [u8]) -> Result<(), SizeError> {
    tracing::debug!("encoding {} bytes", src.len());

    permute(src, dst, encode_index, encode_byte)
}

/// Checks that an image of `len` bytes can be passed through `map_index` in place.
///
/// Every offset in `0..len` must map to an address in `0..len`; as the permutation is a
/// bijection, every address is then written exactly once.
fn check_len(len: usize, map_index: fn(u16) -> u16) -> Result<(), SizeError> {
    if len > addr::SIZE {
        return Err(SizeError::TooLarge { len });
    }

    // `len` is at most `addr::SIZE`, which fits.
    let end = len as u16;
    match (0..end).map(|offset| (offset, map_index(offset))).find(|&(_, addr)| addr >= end) {
        Some((offset, addr)) => Err(SizeError::Truncated { len, offset, addr }),
        None => Ok(()),
    }
}

fn permute(
    src: &[u8],
    dst: &mut [u8],
    map_index: fn(u16) -> u16,
    map_byte: fn(u8) -> u8,
) -> Result<(), SizeError> {
    check_len(src.len(), map_index)?;
    if src.len() != dst.len() {
        return Err(SizeError::Mismatched {
            src: src.len(),
            dst: dst.len(),
        });
    }

    for (offset, byte) in src.iter().enumerate() {
        let addr = map_index(offset as u16);
        dst[usize::from(addr)] = map_byte(*byte);
    }

    Ok(())
}

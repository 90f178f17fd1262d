//! Portable binary form of a [`Tuple`].
//!
//! Layout, all integers little-endian:
//!
//! | Offset | Size | Field |
//! |--------|------|-------|
//! | 0 | 4 | magic `VTUP` |
//! | 4 | 1 | format version |
//! | 5 | 1 | element type tag, see [`Element::TAG`] |
//! | 6 | 4 | element count (`u32`) |
//! | 10 | `N * size_of::<T>()` | elements |
//!
//! Unlike [`Tuple::write_raw`], this reads back the same on any platform.

use std::io::{Read, Write};

use tracing::{debug, trace};

use crate::util::error::CodecError;

use super::{element::element_name, Element, Tuple};

pub const MAGIC: [u8; 4] = *b"VTUP";
pub const FORMAT_VERSION: u8 = 1;
pub const HEADER_LEN: usize = 10;

impl<const N: usize, T: Element> Tuple<N, T> {
    /// Number of bytes produced by [`Tuple::encode`].
    pub const ENCODED_LEN: usize = HEADER_LEN + Self::RAW_LEN;

    /// Encode into the portable format.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CodecError> {
        let count = u32::try_from(N).map_err(|_| CodecError::TooLong(N))?;

        let mut buf = Vec::with_capacity(Self::ENCODED_LEN);
        buf.extend_from_slice(&MAGIC);
        buf.push(FORMAT_VERSION);
        buf.push(T::TAG);
        buf.extend_from_slice(&count.to_le_bytes());
        for &v in self.iter() {
            v.extend_le(&mut buf);
        }

        trace!("Encoded Tuple<{}, {}> ({} bytes)", N, T::NAME, buf.len());
        Ok(buf)
    }

    /// Write the portable encoding to `writer`.
    pub fn encode<W: Write>(&self, mut writer: W) -> Result<(), CodecError> {
        writer.write_all(&self.to_bytes()?)?;
        Ok(())
    }

    /// Read a tuple in the portable format from `reader`.
    ///
    /// Consumes exactly [`Tuple::ENCODED_LEN`] bytes on success.
    pub fn decode<R: Read>(mut reader: R) -> Result<Self, CodecError> {
        let mut header = [0u8; HEADER_LEN];
        reader.read_exact(&mut header)?;
        Self::check_header(&header)?;

        let mut body = vec![0u8; Self::RAW_LEN];
        reader.read_exact(&mut body)?;

        let mut vals = [T::zero(); N];
        for (v, chunk) in vals
            .iter_mut()
            .zip(body.chunks_exact(std::mem::size_of::<T>()))
        {
            *v = T::from_le_slice(chunk);
        }
        Ok(Self::new(vals))
    }

    /// Decode a tuple that fills all of `bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CodecError> {
        let mut rest = bytes;
        let tuple = Self::decode(&mut rest)?;
        if !rest.is_empty() {
            debug!("Rejected encoded tuple with {} trailing bytes", rest.len());
            return Err(CodecError::TrailingBytes(rest.len()));
        }
        Ok(tuple)
    }

    fn check_header(header: &[u8; HEADER_LEN]) -> Result<(), CodecError> {
        let magic = [header[0], header[1], header[2], header[3]];
        if magic != MAGIC {
            debug!("Rejected encoded tuple, bad magic {:?}", magic);
            return Err(CodecError::BadMagic(magic));
        }

        let version = header[4];
        if version != FORMAT_VERSION {
            debug!("Rejected encoded tuple, version {}", version);
            return Err(CodecError::UnsupportedVersion(version));
        }

        let tag = header[5];
        if tag != T::TAG {
            let found = element_name(tag).map_or_else(|| format!("tag {tag}"), String::from);
            debug!("Rejected encoded tuple of {}, wanted {}", found, T::NAME);
            return Err(CodecError::ElementMismatch {
                expected: T::NAME,
                found,
            });
        }

        let count = u32::from_le_bytes([header[6], header[7], header[8], header[9]]) as usize;
        if count != N {
            debug!("Rejected encoded tuple of {} elements, wanted {}", count, N);
            return Err(CodecError::LengthMismatch {
                expected: N,
                found: count,
            });
        }

        Ok(())
    }
}

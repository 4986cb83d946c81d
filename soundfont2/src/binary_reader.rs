use std::io::{self, Cursor, Read};

use byteorder::{LittleEndian, ReadBytesExt};

use crate::error::{Result, SoundFontError};
use crate::four_cc::FourCC;

/// Length of the name field in preset, instrument and sample headers.
pub(crate) const NAME_LENGTH: usize = 20;

/// Sequential little-endian reader over an in-memory region.
///
/// Every read advances the position. Reading past the end of the region fails with
/// [`SoundFontError::OutOfBounds`] and leaves the position where it was.
pub(crate) struct BinaryReader<'a> {
    cursor: Cursor<&'a [u8]>,
}

impl<'a> BinaryReader<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self {
            cursor: Cursor::new(data),
        }
    }

    pub(crate) fn position(&self) -> usize {
        self.cursor.position() as usize
    }

    pub(crate) fn len(&self) -> usize {
        self.cursor.get_ref().len()
    }

    pub(crate) fn remaining(&self) -> usize {
        self.len().saturating_sub(self.position())
    }

    fn read<T>(&mut self, f: impl FnOnce(&mut Cursor<&'a [u8]>) -> io::Result<T>) -> Result<T> {
        let position = self.position();
        let length = self.len();
        f(&mut self.cursor).map_err(|_| {
            self.cursor.set_position(position as u64);
            SoundFontError::OutOfBounds { position, length }
        })
    }

    pub(crate) fn read_u8(&mut self) -> Result<u8> {
        self.read(|c| c.read_u8())
    }

    pub(crate) fn read_i8(&mut self) -> Result<i8> {
        Ok(self.read_u8()? as i8)
    }

    pub(crate) fn read_u16(&mut self) -> Result<u16> {
        self.read(|c| c.read_u16::<LittleEndian>())
    }

    /// Reads a little-endian `u16` and reinterprets its bits as signed.
    pub(crate) fn read_i16(&mut self) -> Result<i16> {
        Ok(self.read_u16()? as i16)
    }

    pub(crate) fn read_u32(&mut self) -> Result<u32> {
        self.read(|c| c.read_u32::<LittleEndian>())
    }

    pub(crate) fn read_four_cc(&mut self) -> Result<FourCC> {
        let mut bytes = [0_u8; 4];
        self.read(|c| c.read_exact(&mut bytes))?;
        Ok(FourCC::new(bytes))
    }

    /// Borrows the next `length` bytes of the region.
    pub(crate) fn read_bytes(&mut self, length: usize) -> Result<&'a [u8]> {
        let start = self.position();
        if self.remaining() < length {
            return Err(SoundFontError::OutOfBounds {
                position: start,
                length: self.len(),
            });
        }
        let data: &'a [u8] = *self.cursor.get_ref();
        self.cursor.set_position((start + length) as u64);
        Ok(&data[start..start + length])
    }

    /// Reads a NUL-terminated text field of exactly `length` bytes.
    ///
    /// Anything after the first NUL is discarded and surrounding whitespace is trimmed.
    pub(crate) fn read_fixed_length_string(&mut self, length: usize) -> Result<String> {
        let bytes = self.read_bytes(length)?;
        Ok(decode_string(bytes))
    }

    pub(crate) fn read_name(&mut self) -> Result<String> {
        self.read_fixed_length_string(NAME_LENGTH)
    }

    pub(crate) fn skip(&mut self, length: usize) -> Result<()> {
        self.read_bytes(length).map(|_| ())
    }
}

pub(crate) fn decode_string(bytes: &[u8]) -> String {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    String::from_utf8_lossy(&bytes[..end]).trim().to_string()
}

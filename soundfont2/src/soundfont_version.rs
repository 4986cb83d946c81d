use std::fmt;

use crate::error::{Result, SoundFontError};
use crate::riff_chunk::RiffChunk;

pub(crate) const VERSION_SIZE: u32 = 4;

/// A version number stored in the `ifil` and `iver` sub-chunks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SoundFontVersion {
    pub major: u16,
    pub minor: u16,
}

impl SoundFontVersion {
    pub(crate) fn read_from_chunk(chunk: &RiffChunk) -> Result<Self> {
        if chunk.length() != VERSION_SIZE {
            return Err(SoundFontError::InvalidVersionSize {
                id: chunk.id(),
                length: chunk.length(),
            });
        }

        let mut reader = chunk.reader();
        let major = reader.read_u16()?;
        let minor = reader.read_u16()?;

        Ok(Self { major, minor })
    }
}

impl fmt::Display for SoundFontVersion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

use std::io;

use thiserror::Error;

use crate::four_cc::FourCC;

/// Represents an error when loading a SoundFont.
#[derive(Debug, Error)]
pub enum SoundFontError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
    #[error("the RIFF chunk was not found, expected '{expected}', but the file starts with '{actual}'")]
    RiffChunkNotFound { expected: FourCC, actual: FourCC },
    #[error("the type of the RIFF chunk must be '{expected}', but was '{actual}'")]
    InvalidRiffChunkType { expected: FourCC, actual: FourCC },
    #[error("the type of the LIST chunk must be '{expected}', but was '{actual}'")]
    InvalidListChunkType { expected: FourCC, actual: FourCC },
    #[error("unexpected chunk ID, expected '{expected}', received '{actual}'")]
    UnexpectedChunkId { expected: FourCC, actual: FourCC },
    #[error("the '{0}' sub-chunk was not found")]
    SubChunkNotFound(FourCC),
    #[error(
        "invalid size for the '{id}' sub-chunk: {length} bytes is not a multiple of {record_size}"
    )]
    InvalidSubChunkSize {
        id: FourCC,
        length: u32,
        record_size: usize,
    },
    #[error("invalid size for the '{id}' sub-chunk: expected 4 bytes, but was {length}")]
    InvalidVersionSize { id: FourCC, length: u32 },
    #[error("invalid sfbk structure, expected 3 chunks, received {count} chunks")]
    InvalidSfbkStructure { count: usize },
    #[error("illegal sample rate of {sample_rate} hz in sample '{name}'")]
    IllegalSampleRate { name: String, sample_rate: u32 },
    #[error("the preset with the ID '{preset_id}' contains an invalid instrument ID '{instrument_id}'")]
    InvalidInstrumentId {
        preset_id: usize,
        instrument_id: usize,
    },
    #[error("the instrument with the ID '{instrument_id}' contains an invalid sample ID '{sample_id}'")]
    InvalidSampleId {
        instrument_id: usize,
        sample_id: usize,
    },
    #[error("read out of bounds at position {position} (region is {length} bytes)")]
    OutOfBounds { position: usize, length: usize },
}

/// The category an error falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A chunk ID or signature did not match what the structure requires.
    Format,
    /// A sub-chunk length does not fit its record size.
    Size,
    /// The top-level container has the wrong shape.
    Structural,
    /// A decoded value is illegal.
    Data,
    /// A zone refers to an instrument or sample that does not exist.
    Reference,
    /// A read ran past the end of its region.
    OutOfBounds,
    /// The stream handed to the loader could not be read.
    Io,
}

impl SoundFontError {
    pub fn kind(&self) -> ErrorKind {
        use SoundFontError::*;
        match self {
            IoError(_) => ErrorKind::Io,
            RiffChunkNotFound { .. }
            | InvalidRiffChunkType { .. }
            | InvalidListChunkType { .. }
            | UnexpectedChunkId { .. }
            | SubChunkNotFound(_) => ErrorKind::Format,
            InvalidSubChunkSize { .. } | InvalidVersionSize { .. } => ErrorKind::Size,
            InvalidSfbkStructure { .. } => ErrorKind::Structural,
            IllegalSampleRate { .. } => ErrorKind::Data,
            InvalidInstrumentId { .. } | InvalidSampleId { .. } => ErrorKind::Reference,
            OutOfBounds { .. } => ErrorKind::OutOfBounds,
        }
    }
}

pub type Result<T> = std::result::Result<T, SoundFontError>;

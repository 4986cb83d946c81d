use num_enum::FromPrimitive;

use crate::error::Result;
use crate::four_cc::FourCC;
use crate::riff_chunk::RiffChunk;

pub(crate) const SAMPLE_HEADER_SIZE: usize = 46;

/// The `sfSampleType` field of a sample header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive)]
#[repr(u16)]
pub enum SampleType {
    Mono = 1,
    Right = 2,
    Left = 4,
    Linked = 8,
    RomMono = 0x8001,
    RomRight = 0x8002,
    RomLeft = 0x8004,
    RomLinked = 0x8008,
    #[num_enum(catch_all)]
    Unrecognized(u16),
}

impl SampleType {
    /// ROM samples point into the wavetable ROM named by `irom`, not into `smpl`.
    pub fn is_rom(&self) -> bool {
        matches!(
            self,
            SampleType::RomMono | SampleType::RomRight | SampleType::RomLeft | SampleType::RomLinked
        )
    }
}

/// A sample header record from the `shdr` sub-chunk.
///
/// Offsets are in sample frames from the beginning of the sample data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleHeader {
    pub name: String,
    pub start: u32,
    pub end: u32,
    pub start_loop: u32,
    pub end_loop: u32,
    pub sample_rate: u32,
    pub original_pitch: u8,
    /// In cents.
    pub pitch_correction: i8,
    pub link: u16,
    pub sample_type: SampleType,
}

impl SampleHeader {
    pub(crate) const TERMINAL: &'static str = "EOS";

    pub(crate) fn read_from_chunk(chunk: &RiffChunk) -> Result<Vec<SampleHeader>> {
        chunk.expect_id(FourCC::SHDR)?;
        let count = chunk.expect_record_size(SAMPLE_HEADER_SIZE)?;

        let mut reader = chunk.reader();
        let mut headers = Vec::with_capacity(count);
        for _ in 0..count {
            headers.push(SampleHeader {
                name: reader.read_name()?,
                start: reader.read_u32()?,
                end: reader.read_u32()?,
                start_loop: reader.read_u32()?,
                end_loop: reader.read_u32()?,
                sample_rate: reader.read_u32()?,
                original_pitch: reader.read_u8()?,
                pitch_correction: reader.read_i8()?,
                link: reader.read_u16()?,
                sample_type: SampleType::from(reader.read_u16()?),
            });
        }

        Ok(headers)
    }

    pub fn is_terminal(&self) -> bool {
        self.name == Self::TERMINAL
    }
}

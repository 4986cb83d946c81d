use crate::error::Result;
use crate::four_cc::FourCC;
use crate::riff_chunk::RiffChunk;

pub(crate) const PRESET_HEADER_SIZE: usize = 38;

/// A preset header record from the `phdr` sub-chunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetInfo {
    pub name: String,
    /// The MIDI program number.
    pub preset: u16,
    pub bank: u16,
    pub bag_index: u16,
    pub library: u32,
    pub genre: u32,
    pub morphology: u32,
}

impl PresetInfo {
    pub(crate) const TERMINAL: &'static str = "EOP";

    pub(crate) fn read_from_chunk(chunk: &RiffChunk) -> Result<Vec<PresetInfo>> {
        chunk.expect_id(FourCC::PHDR)?;
        let count = chunk.expect_record_size(PRESET_HEADER_SIZE)?;

        let mut reader = chunk.reader();
        let mut presets = Vec::with_capacity(count);
        for _ in 0..count {
            presets.push(PresetInfo {
                name: reader.read_name()?,
                preset: reader.read_u16()?,
                bank: reader.read_u16()?,
                bag_index: reader.read_u16()?,
                library: reader.read_u32()?,
                genre: reader.read_u32()?,
                morphology: reader.read_u32()?,
            });
        }

        Ok(presets)
    }
}

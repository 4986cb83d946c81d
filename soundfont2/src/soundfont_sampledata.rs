use std::ops::Range;

use byteorder::{ByteOrder, LittleEndian};

use crate::error::{Result, SoundFontError};
use crate::four_cc::FourCC;
use crate::riff_chunk::RiffChunk;

/// The 16-bit sample pool of the `sdta` list.
#[derive(Debug, Clone)]
pub(crate) struct SoundFontSampleData {
    pub(crate) wave_data: Vec<i16>,
}

impl SoundFontSampleData {
    pub(crate) fn new(chunk: &RiffChunk) -> Result<Self> {
        chunk.expect_list(FourCC::SDTA)?;

        // Only the 16-bit `smpl` data is used; a trailing `sm24` chunk is ignored.
        let sample_chunk = chunk
            .sub_chunks()
            .first()
            .ok_or(SoundFontError::SubChunkNotFound(FourCC::SMPL))?;
        sample_chunk.expect_id(FourCC::SMPL)?;

        let data = sample_chunk.data();
        let mut wave_data = vec![0; data.len() / 2];
        LittleEndian::read_i16_into(&data[..2 * wave_data.len()], &mut wave_data);

        Ok(Self { wave_data })
    }

    /// The number of whole 16-bit frames in the pool.
    pub(crate) fn frame_count(&self) -> usize {
        self.wave_data.len()
    }

    /// `start..end` clamped to the pool. An inverted range is empty.
    pub(crate) fn clamp(&self, start: u32, end: u32) -> Range<usize> {
        let end = (end as usize).min(self.frame_count());
        let start = (start as usize).min(end);
        start..end
    }

    pub(crate) fn frames(&self, range: Range<usize>) -> &[i16] {
        &self.wave_data[range]
    }
}

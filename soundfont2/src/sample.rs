use std::sync::Arc;

use crate::error::{Result, SoundFontError};
use crate::sample_header::{SampleHeader, SampleType};
use crate::soundfont_sampledata::SoundFontSampleData;

/// A sample with its PCM frames.
///
/// Loop offsets in the header are relative to the first frame of `data`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    header: SampleHeader,
    data: Vec<i16>,
}

impl Sample {
    const DEFAULT_ORIGINAL_PITCH: u8 = 60;

    fn new(mut header: SampleHeader, pool: &SoundFontSampleData) -> Result<Self> {
        if header.sample_rate == 0 {
            return Err(SoundFontError::IllegalSampleRate {
                name: header.name,
                sample_rate: header.sample_rate,
            });
        }

        // 128..=254 are illegal pitches, 255 means unpitched.
        if (128..255).contains(&header.original_pitch) {
            log::warn!(
                "sample '{}' has illegal original pitch {}, using {}",
                header.name,
                header.original_pitch,
                Self::DEFAULT_ORIGINAL_PITCH
            );
            header.original_pitch = Self::DEFAULT_ORIGINAL_PITCH;
        }

        let data = if header.sample_type.is_rom() {
            log::debug!(
                "sample '{}' is stored in ROM, it has no frames in the sample data",
                header.name
            );
            Vec::new()
        } else {
            let range = pool.clamp(header.start, header.end);
            if range != (header.start as usize..header.end as usize) {
                log::warn!(
                    "sample '{}' spans frames {}..{}, but the sample data holds {} frames, using {}..{}",
                    header.name,
                    header.start,
                    header.end,
                    pool.frame_count(),
                    range.start,
                    range.end
                );
            }
            pool.frames(range).to_vec()
        };

        header.start_loop = header.start_loop.saturating_sub(header.start);
        header.end_loop = header.end_loop.saturating_sub(header.start);

        Ok(Self { header, data })
    }

    pub fn header(&self) -> &SampleHeader {
        &self.header
    }

    pub fn name(&self) -> &str {
        &self.header.name
    }

    pub fn sample_rate(&self) -> u32 {
        self.header.sample_rate
    }

    pub fn original_pitch(&self) -> u8 {
        self.header.original_pitch
    }

    pub fn sample_type(&self) -> SampleType {
        self.header.sample_type
    }

    /// Signed 16-bit PCM frames.
    pub fn data(&self) -> &[i16] {
        &self.data
    }
}

/// Builds one sample per header, skipping the terminal record.
pub(crate) fn read_samples(
    headers: &[SampleHeader],
    pool: &SoundFontSampleData,
) -> Result<Vec<Arc<Sample>>> {
    headers
        .iter()
        .filter(|header| !header.is_terminal())
        .map(|header| Sample::new(header.clone(), pool).map(Arc::new))
        .collect()
}

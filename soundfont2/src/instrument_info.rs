use crate::error::Result;
use crate::four_cc::FourCC;
use crate::riff_chunk::RiffChunk;

pub(crate) const INSTRUMENT_HEADER_SIZE: usize = 22;

/// An instrument header record from the `inst` sub-chunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstrumentInfo {
    pub name: String,
    pub bag_index: u16,
}

impl InstrumentInfo {
    pub(crate) const TERMINAL: &'static str = "EOI";

    pub(crate) fn read_from_chunk(chunk: &RiffChunk) -> Result<Vec<InstrumentInfo>> {
        chunk.expect_id(FourCC::INST)?;
        let count = chunk.expect_record_size(INSTRUMENT_HEADER_SIZE)?;

        let mut reader = chunk.reader();
        let mut instruments = Vec::with_capacity(count);
        for _ in 0..count {
            instruments.push(InstrumentInfo {
                name: reader.read_name()?,
                bag_index: reader.read_u16()?,
            });
        }

        Ok(instruments)
    }
}

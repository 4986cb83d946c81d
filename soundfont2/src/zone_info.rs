use crate::error::Result;
use crate::four_cc::FourCC;
use crate::generator_type::GeneratorContext;
use crate::riff_chunk::RiffChunk;

pub(crate) const BAG_SIZE: usize = 4;

/// A bag record: where a zone's generators and modulators start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneInfo {
    pub generator_index: u16,
    pub modulator_index: u16,
}

impl ZoneInfo {
    /// Decodes a `pbag` or `ibag` sub-chunk.
    pub(crate) fn read_from_chunk(
        chunk: &RiffChunk,
        context: GeneratorContext,
    ) -> Result<Vec<ZoneInfo>> {
        let expected = match context {
            GeneratorContext::Preset => FourCC::PBAG,
            GeneratorContext::Instrument => FourCC::IBAG,
        };
        chunk.expect_id(expected)?;
        let count = chunk.expect_record_size(BAG_SIZE)?;

        let mut reader = chunk.reader();
        let mut zones = Vec::with_capacity(count);
        for _ in 0..count {
            zones.push(ZoneInfo {
                generator_index: reader.read_u16()?,
                modulator_index: reader.read_u16()?,
            });
        }

        Ok(zones)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn decodes_index_pairs() {
        let mut bytes = b"pbag".to_vec();
        bytes.extend_from_slice(&8_u32.to_le_bytes());
        bytes.extend_from_slice(&[0, 0, 0, 0, 3, 0, 1, 0]);
        let chunk = RiffChunk::parse_sub_chunks(&bytes).unwrap().remove(0);
        let zones = ZoneInfo::read_from_chunk(&chunk, GeneratorContext::Preset).unwrap();
        assert_eq!(
            zones,
            vec![
                ZoneInfo {
                    generator_index: 0,
                    modulator_index: 0
                },
                ZoneInfo {
                    generator_index: 3,
                    modulator_index: 1
                },
            ]
        );
    }

    #[test]
    fn checks_id_and_size() {
        let mut bytes = b"ibag".to_vec();
        bytes.extend_from_slice(&6_u32.to_le_bytes());
        bytes.extend_from_slice(&[0; 6]);
        let chunk = RiffChunk::parse_sub_chunks(&bytes).unwrap().remove(0);
        let err = ZoneInfo::read_from_chunk(&chunk, GeneratorContext::Preset).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);
        let err = ZoneInfo::read_from_chunk(&chunk, GeneratorContext::Instrument).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Size);
    }
}

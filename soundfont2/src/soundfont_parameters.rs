use crate::error::{Result, SoundFontError};
use crate::four_cc::FourCC;
use crate::generator::Generator;
use crate::generator_type::GeneratorContext;
use crate::instrument_info::InstrumentInfo;
use crate::modulator::Modulator;
use crate::preset_info::PresetInfo;
use crate::riff_chunk::RiffChunk;
use crate::sample_header::SampleHeader;
use crate::zone_info::ZoneInfo;

/// The nine record lists of the `pdta` list, decoded but not yet resolved.
///
/// Header lists still carry their terminal records. Generator lists hold one slot per
/// record; slots of ignored generators are `None`.
#[derive(Debug, Clone)]
pub struct SoundFontParameters {
    pub preset_headers: Vec<PresetInfo>,
    pub preset_zones: Vec<ZoneInfo>,
    pub preset_modulators: Vec<Modulator>,
    pub preset_generators: Vec<Option<Generator>>,
    pub instrument_headers: Vec<InstrumentInfo>,
    pub instrument_zones: Vec<ZoneInfo>,
    pub instrument_modulators: Vec<Modulator>,
    pub instrument_generators: Vec<Option<Generator>>,
    pub sample_headers: Vec<SampleHeader>,
}

impl SoundFontParameters {
    const ORDER: [FourCC; 9] = [
        FourCC::PHDR,
        FourCC::PBAG,
        FourCC::PMOD,
        FourCC::PGEN,
        FourCC::INST,
        FourCC::IBAG,
        FourCC::IMOD,
        FourCC::IGEN,
        FourCC::SHDR,
    ];

    pub(crate) fn new(chunk: &RiffChunk) -> Result<Self> {
        chunk.expect_list(FourCC::PDTA)?;

        let sub_chunks = chunk.sub_chunks();
        let sub_chunk = move |i: usize| {
            sub_chunks
                .get(i)
                .ok_or(SoundFontError::SubChunkNotFound(Self::ORDER[i]))
        };

        Ok(Self {
            preset_headers: PresetInfo::read_from_chunk(sub_chunk(0)?)?,
            preset_zones: ZoneInfo::read_from_chunk(sub_chunk(1)?, GeneratorContext::Preset)?,
            preset_modulators: Modulator::read_from_chunk(
                sub_chunk(2)?,
                GeneratorContext::Preset,
            )?,
            preset_generators: Generator::read_from_chunk(
                sub_chunk(3)?,
                GeneratorContext::Preset,
            )?,
            instrument_headers: InstrumentInfo::read_from_chunk(sub_chunk(4)?)?,
            instrument_zones: ZoneInfo::read_from_chunk(
                sub_chunk(5)?,
                GeneratorContext::Instrument,
            )?,
            instrument_modulators: Modulator::read_from_chunk(
                sub_chunk(6)?,
                GeneratorContext::Instrument,
            )?,
            instrument_generators: Generator::read_from_chunk(
                sub_chunk(7)?,
                GeneratorContext::Instrument,
            )?,
            sample_headers: SampleHeader::read_from_chunk(sub_chunk(8)?)?,
        })
    }
}

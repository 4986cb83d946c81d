use crate::error::Result;
use crate::four_cc::FourCC;
use crate::generator_type::{GeneratorContext, GeneratorType};
use crate::riff_chunk::RiffChunk;

pub(crate) const GENERATOR_SIZE: usize = 4;

/// An inclusive range of key numbers or velocities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
    pub lo: u8,
    pub hi: u8,
}

impl Range {
    pub fn new(lo: u8, hi: u8) -> Self {
        Self { lo, hi }
    }

    pub fn contains(&self, value: u8) -> bool {
        self.lo <= value && value <= self.hi
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorAmount {
    Value(i16),
    Range(Range),
}

/// A single generator record of a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generator {
    pub id: GeneratorType,
    pub amount: GeneratorAmount,
}

impl Generator {
    pub fn value(&self) -> Option<i16> {
        match self.amount {
            GeneratorAmount::Value(value) => Some(value),
            GeneratorAmount::Range(_) => None,
        }
    }

    pub fn range(&self) -> Option<Range> {
        match self.amount {
            GeneratorAmount::Range(range) => Some(range),
            GeneratorAmount::Value(_) => None,
        }
    }

    /// The amount read as an unsigned index, as used by the `Instrument` and `SampleId`
    /// generators.
    pub fn index(&self) -> Option<usize> {
        self.value().map(|value| value as u16 as usize)
    }

    /// Decodes a `pgen` or `igen` sub-chunk.
    ///
    /// The result holds one slot per record so that zone generator indices stay valid.
    /// Unknown IDs and IDs that are not allowed in `context` leave an empty slot.
    pub(crate) fn read_from_chunk(
        chunk: &RiffChunk,
        context: GeneratorContext,
    ) -> Result<Vec<Option<Generator>>> {
        let expected = match context {
            GeneratorContext::Preset => FourCC::PGEN,
            GeneratorContext::Instrument => FourCC::IGEN,
        };
        chunk.expect_id(expected)?;
        let count = chunk.expect_record_size(GENERATOR_SIZE)?;

        let mut reader = chunk.reader();
        let mut generators = Vec::with_capacity(count);
        for _ in 0..count {
            let raw = reader.read_u16()?;
            let id = GeneratorType::from(raw);

            if !id.is_recognized() || id.is_forbidden_in(context) {
                log::debug!("ignoring generator {} in '{}'", raw, expected);
                reader.skip(2)?;
                generators.push(None);
                continue;
            }

            let amount = if id.is_range() {
                GeneratorAmount::Range(Range {
                    lo: reader.read_u8()?,
                    hi: reader.read_u8()?,
                })
            } else {
                GeneratorAmount::Value(reader.read_i16()?)
            };

            generators.push(Some(Generator { id, amount }));
        }

        Ok(generators)
    }
}

use num_enum::FromPrimitive;

use crate::error::Result;
use crate::four_cc::FourCC;
use crate::generator_type::{GeneratorContext, GeneratorType};
use crate::riff_chunk::RiffChunk;

pub(crate) const MODULATOR_SIZE: usize = 10;

/// Selects which controller table the index of a [`Controller`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerPalette {
    /// Note-on velocity, key number, pressure, pitch wheel and the like.
    General,
    /// A MIDI continuous controller number.
    MidiCc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerDirection {
    /// Min to max.
    Forward,
    /// Max to min.
    Reverse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerPolarity {
    Unipolar,
    Bipolar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive)]
#[repr(u8)]
pub enum CurveType {
    Linear = 0,
    Concave = 1,
    Convex = 2,
    Switch = 3,
    #[num_enum(catch_all)]
    Unrecognized(u8),
}

/// A decoded modulator source descriptor.
///
/// Bit layout: index in bits 0-6, palette bit 7, direction bit 8, polarity bit 9 and the
/// curve type in bits 10-15.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controller {
    pub index: u8,
    pub palette: ControllerPalette,
    pub direction: ControllerDirection,
    pub polarity: ControllerPolarity,
    pub curve: CurveType,
    pub raw: u16,
}

impl From<u16> for Controller {
    fn from(raw: u16) -> Self {
        let palette = if raw & 0x0080 != 0 {
            ControllerPalette::MidiCc
        } else {
            ControllerPalette::General
        };
        let direction = if raw & 0x0100 != 0 {
            ControllerDirection::Reverse
        } else {
            ControllerDirection::Forward
        };
        let polarity = if raw & 0x0200 != 0 {
            ControllerPolarity::Bipolar
        } else {
            ControllerPolarity::Unipolar
        };

        Self {
            index: (raw & 0x007f) as u8,
            palette,
            direction,
            polarity,
            curve: CurveType::from((raw >> 10) as u8),
            raw,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive)]
#[repr(u16)]
pub enum Transform {
    Linear = 0,
    Absolute = 2,
    #[num_enum(catch_all)]
    Unrecognized(u16),
}

/// A modulator record, routing a controller signal to a destination generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Modulator {
    pub source: Controller,
    pub destination: GeneratorType,
    pub amount: i16,
    pub amount_source: Controller,
    pub transform: Transform,
}

impl Modulator {
    /// Decodes a `pmod` or `imod` sub-chunk.
    pub(crate) fn read_from_chunk(
        chunk: &RiffChunk,
        context: GeneratorContext,
    ) -> Result<Vec<Modulator>> {
        let expected = match context {
            GeneratorContext::Preset => FourCC::PMOD,
            GeneratorContext::Instrument => FourCC::IMOD,
        };
        chunk.expect_id(expected)?;
        let count = chunk.expect_record_size(MODULATOR_SIZE)?;

        let mut reader = chunk.reader();
        let mut modulators = Vec::with_capacity(count);
        for _ in 0..count {
            let source = Controller::from(reader.read_u16()?);
            let destination = GeneratorType::from(reader.read_u16()?);
            let amount = reader.read_i16()?;
            let amount_source = Controller::from(reader.read_u16()?);
            let transform = Transform::from(reader.read_u16()?);

            modulators.push(Modulator {
                source,
                destination,
                amount,
                amount_source,
                transform,
            });
        }

        Ok(modulators)
    }
}

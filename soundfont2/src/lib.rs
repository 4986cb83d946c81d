mod error;

mod binary_reader;
mod four_cc;
mod riff_chunk;

mod bank;
mod generator;
mod generator_type;
mod instrument;
mod instrument_info;
mod key;
mod loader_settings;
mod modulator;
mod preset;
mod preset_info;
mod sample;
mod sample_header;
mod soundfont;
mod soundfont_info;
mod soundfont_parameters;
mod soundfont_sampledata;
mod soundfont_version;
mod zone;
mod zone_info;

pub use self::bank::Bank;
pub use self::error::{ErrorKind, Result, SoundFontError};
pub use self::four_cc::FourCC;
pub use self::generator::{Generator, GeneratorAmount, Range};
pub use self::generator_type::{GeneratorContext, GeneratorType};
pub use self::instrument::{Instrument, InstrumentZone};
pub use self::instrument_info::InstrumentInfo;
pub use self::key::{Key, KeyCache};
pub use self::loader_settings::LoaderSettings;
pub use self::modulator::{
    Controller, ControllerDirection, ControllerPalette, ControllerPolarity, CurveType, Modulator,
    Transform,
};
pub use self::preset::{Preset, PresetZone};
pub use self::preset_info::PresetInfo;
pub use self::riff_chunk::RiffChunk;
pub use self::sample::Sample;
pub use self::sample_header::{SampleHeader, SampleType};
pub use self::soundfont::SoundFont;
pub use self::soundfont_info::SoundFontInfo;
pub use self::soundfont_parameters::SoundFontParameters;
pub use self::soundfont_version::SoundFontVersion;
pub use self::zone::{Zone, ZoneItems};
pub use self::zone_info::ZoneInfo;

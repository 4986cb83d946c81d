use std::collections::BTreeMap;
use std::io::Read;
use std::sync::Arc;

use crate::bank::{self, Bank};
use crate::error::{Result, SoundFontError};
use crate::instrument::Instrument;
use crate::key::{Key, KeyCache};
use crate::loader_settings::LoaderSettings;
use crate::preset::Preset;
use crate::riff_chunk::RiffChunk;
use crate::sample::{self, Sample};
use crate::soundfont_info::SoundFontInfo;
use crate::soundfont_parameters::SoundFontParameters;
use crate::soundfont_sampledata::SoundFontSampleData;
use crate::zone::ZoneSources;

/// Represents a SoundFont.
#[derive(Debug)]
pub struct SoundFont {
    info: SoundFontInfo,
    parameters: SoundFontParameters,
    wave_data: Vec<i16>,
    samples: Vec<Arc<Sample>>,
    instruments: Vec<Arc<Instrument>>,
    presets: Vec<Arc<Preset>>,
    banks: BTreeMap<u16, Bank>,
    key_cache: KeyCache,
}

impl SoundFont {
    /// Loads a SoundFont from the stream.
    ///
    /// # Arguments
    ///
    /// * `reader` - The data stream used to load the SoundFont.
    pub fn new<R: Read>(reader: &mut R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(&data)
    }

    /// Decodes a SoundFont held in memory with the default settings.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::with_settings(data, &LoaderSettings::default())
    }

    /// Decodes a SoundFont held in memory.
    ///
    /// # Arguments
    ///
    /// * `data` - The whole SoundFont file.
    /// * `settings` - The settings used to resolve the file.
    pub fn with_settings(data: &[u8], settings: &LoaderSettings) -> Result<Self> {
        let chunk = RiffChunk::parse(data)?;

        let [info_chunk, sample_chunk, parameters_chunk] = chunk.sub_chunks() else {
            return Err(SoundFontError::InvalidSfbkStructure {
                count: chunk.sub_chunks().len(),
            });
        };

        let info = SoundFontInfo::new(info_chunk)?;
        let sample_data = SoundFontSampleData::new(sample_chunk)?;
        let parameters = SoundFontParameters::new(parameters_chunk)?;

        let samples = sample::read_samples(&parameters.sample_headers, &sample_data)?;

        let instruments = Instrument::create(
            &parameters.instrument_headers,
            ZoneSources {
                zones: &parameters.instrument_zones,
                modulators: &parameters.instrument_modulators,
                generators: &parameters.instrument_generators,
            },
            &samples,
            settings.strict_references,
        )?;

        let presets = Preset::create(
            &parameters.preset_headers,
            ZoneSources {
                zones: &parameters.preset_zones,
                modulators: &parameters.preset_modulators,
                generators: &parameters.preset_generators,
            },
            &instruments,
            settings.strict_references,
        )?;

        let banks = bank::index_banks(&presets);

        log::info!(
            "loaded '{}' (version {}): {} samples, {} instruments, {} presets in {} banks",
            info.name,
            info.version,
            samples.len(),
            instruments.len(),
            presets.len(),
            banks.len()
        );

        Ok(Self {
            info,
            parameters,
            wave_data: sample_data.wave_data,
            samples,
            instruments,
            presets,
            banks,
            key_cache: KeyCache::new(),
        })
    }

    /// Gets the information of the SoundFont.
    pub fn info(&self) -> &SoundFontInfo {
        &self.info
    }

    /// The decoded `pdta` records, before zone resolution.
    pub fn parameters(&self) -> &SoundFontParameters {
        &self.parameters
    }

    /// The whole `smpl` pool as 16-bit PCM. Sample header offsets index into it.
    pub fn wave_data(&self) -> &[i16] {
        &self.wave_data
    }

    pub fn samples(&self) -> &[Arc<Sample>] {
        &self.samples
    }

    pub fn instruments(&self) -> &[Arc<Instrument>] {
        &self.instruments
    }

    pub fn presets(&self) -> &[Arc<Preset>] {
        &self.presets
    }

    pub fn banks(&self) -> &BTreeMap<u16, Bank> {
        &self.banks
    }

    pub fn bank(&self, bank_number: u16) -> Option<&Bank> {
        self.banks.get(&bank_number)
    }

    pub fn preset(&self, bank_number: u16, patch_number: u16) -> Option<&Arc<Preset>> {
        self.bank(bank_number)?.preset(patch_number)
    }

    /// The preset with the lowest bank and patch number. For a GM compatible SoundFont this
    /// is the piano.
    pub fn default_preset(&self) -> Option<&Arc<Preset>> {
        self.banks
            .values()
            .find_map(|bank| bank.presets().values().next())
    }

    /// Gets the data needed to play `key_number` with the preset at `bank_number` and
    /// `patch_number`.
    ///
    /// Results, including misses, are cached per model.
    pub fn key_data(&self, key_number: u8, bank_number: u16, patch_number: u16) -> Option<Arc<Key>> {
        self.key_cache
            .get_or_insert_with((key_number, bank_number, patch_number), || {
                let preset = self.preset(bank_number, patch_number)?;
                Key::find(key_number, preset)
            })
    }

    /// Same as [`SoundFont::key_data`] with bank 0 and patch 0.
    pub fn key_data_default(&self, key_number: u8) -> Option<Arc<Key>> {
        self.key_data(key_number, 0, 0)
    }

    pub fn key_cache(&self) -> &KeyCache {
        &self.key_cache
    }
}

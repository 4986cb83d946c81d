use std::collections::HashMap;
use std::sync::Arc;

use dashmap::DashMap;

use crate::generator::Generator;
use crate::generator_type::GeneratorType;
use crate::instrument::{Instrument, InstrumentZone};
use crate::modulator::Modulator;
use crate::preset::{Preset, PresetZone};
use crate::sample::Sample;

/// Everything needed to play one MIDI key of a preset.
///
/// `generators` and `modulators` are the preset zone's entries overlaid with the
/// instrument zone's; on a shared key the instrument zone wins.
#[derive(Debug)]
pub struct Key {
    pub key_number: u8,
    pub preset: Arc<Preset>,
    pub instrument: Arc<Instrument>,
    pub sample: Arc<Sample>,
    pub generators: HashMap<GeneratorType, Generator>,
    pub modulators: HashMap<GeneratorType, Modulator>,
}

impl Key {
    pub(crate) fn new(
        key_number: u8,
        preset: &Arc<Preset>,
        preset_zone: &PresetZone,
        instrument_zone: &InstrumentZone,
    ) -> Self {
        let mut generators = preset_zone.generators().clone();
        generators.extend(instrument_zone.generators());

        let mut modulators = preset_zone.modulators().clone();
        modulators.extend(instrument_zone.modulators());

        Self {
            key_number,
            preset: Arc::clone(preset),
            instrument: Arc::clone(preset_zone.instrument()),
            sample: Arc::clone(instrument_zone.sample()),
            generators,
            modulators,
        }
    }

    /// Looks `key_number` up in `preset`: the first preset zone covering the key, then the
    /// first zone of its instrument covering the key.
    pub(crate) fn find(key_number: u8, preset: &Arc<Preset>) -> Option<Self> {
        let preset_zone = preset.zone_for_key(key_number)?;
        let instrument_zone = preset_zone.instrument().zone_for_key(key_number)?;
        Some(Self::new(key_number, preset, preset_zone, instrument_zone))
    }

    pub fn generator(&self, id: GeneratorType) -> Option<&Generator> {
        self.generators.get(&id)
    }
}

/// Lookup results keyed by `(key, bank, program)`. Misses are stored too.
#[derive(Debug, Default)]
pub struct KeyCache {
    entries: DashMap<(u8, u16, u16), Option<Arc<Key>>>,
}

impl KeyCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn get_or_insert_with(
        &self,
        key: (u8, u16, u16),
        lookup: impl FnOnce() -> Option<Key>,
    ) -> Option<Arc<Key>> {
        self.entries
            .entry(key)
            .or_insert_with(|| lookup().map(Arc::new))
            .clone()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&self) {
        self.entries.clear();
    }
}

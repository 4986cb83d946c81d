use std::sync::Arc;

use crate::error::Result;
use crate::generator_type::GeneratorType;
use crate::instrument::Instrument;
use crate::preset_info::PresetInfo;
use crate::zone::{self, Zone, ZoneItems, ZoneSources};

/// A preset zone, bound to the instrument it plays.
pub type PresetZone = Zone<Instrument>;

impl Zone<Instrument> {
    pub fn instrument(&self) -> &Arc<Instrument> {
        self.reference()
    }
}

/// Represents a preset in the SoundFont.
#[derive(Debug)]
pub struct Preset {
    header: PresetInfo,
    global_zone: Option<ZoneItems>,
    zones: Vec<PresetZone>,
}

impl Preset {
    pub(crate) fn create(
        headers: &[PresetInfo],
        sources: ZoneSources,
        instruments: &[Arc<Instrument>],
        strict: bool,
    ) -> Result<Vec<Arc<Preset>>> {
        let resolved = zone::resolve_items(
            headers,
            sources,
            instruments,
            GeneratorType::Instrument,
            strict,
        )?;

        Ok(resolved
            .into_iter()
            .map(|item| {
                Arc::new(Preset {
                    header: item.header,
                    global_zone: item.global_zone,
                    zones: item.zones,
                })
            })
            .collect())
    }

    pub fn header(&self) -> &PresetInfo {
        &self.header
    }

    pub fn name(&self) -> &str {
        &self.header.name
    }

    /// Gets the bank number of the preset.
    pub fn bank_number(&self) -> u16 {
        self.header.bank
    }

    /// Gets the patch number (MIDI program) of the preset.
    pub fn patch_number(&self) -> u16 {
        self.header.preset
    }

    pub fn global_zone(&self) -> Option<&ZoneItems> {
        self.global_zone.as_ref()
    }

    pub fn zones(&self) -> &[PresetZone] {
        &self.zones
    }

    /// The first zone whose key range contains `key`.
    pub fn zone_for_key(&self, key: u8) -> Option<&PresetZone> {
        self.zones.iter().find(|zone| zone.contains_key(key))
    }
}

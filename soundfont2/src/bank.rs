use std::collections::BTreeMap;
use std::sync::Arc;

use crate::preset::Preset;

/// The presets of one MIDI bank, indexed by program number.
#[derive(Debug, Default)]
pub struct Bank {
    presets: BTreeMap<u16, Arc<Preset>>,
}

impl Bank {
    pub fn preset(&self, program: u16) -> Option<&Arc<Preset>> {
        self.presets.get(&program)
    }

    pub fn presets(&self) -> &BTreeMap<u16, Arc<Preset>> {
        &self.presets
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

/// Groups presets by bank and program. A later preset replaces an earlier one with the
/// same bank and program.
pub(crate) fn index_banks(presets: &[Arc<Preset>]) -> BTreeMap<u16, Bank> {
    let mut banks: BTreeMap<u16, Bank> = BTreeMap::new();
    for preset in presets {
        let bank = banks.entry(preset.bank_number()).or_default();
        if let Some(replaced) = bank
            .presets
            .insert(preset.patch_number(), Arc::clone(preset))
        {
            log::debug!(
                "preset '{}' replaces '{}' at bank {}, program {}",
                preset.name(),
                replaced.name(),
                preset.bank_number(),
                preset.patch_number()
            );
        }
    }
    banks
}

use std::sync::Arc;

use crate::error::Result;
use crate::generator_type::GeneratorType;
use crate::instrument_info::InstrumentInfo;
use crate::sample::Sample;
use crate::zone::{self, Zone, ZoneItems, ZoneSources};

/// An instrument zone, bound to the sample it plays.
pub type InstrumentZone = Zone<Sample>;

impl Zone<Sample> {
    pub fn sample(&self) -> &Arc<Sample> {
        self.reference()
    }
}

/// Represents an instrument in the SoundFont.
#[derive(Debug)]
pub struct Instrument {
    header: InstrumentInfo,
    global_zone: Option<ZoneItems>,
    zones: Vec<InstrumentZone>,
}

impl Instrument {
    pub(crate) fn create(
        headers: &[InstrumentInfo],
        sources: ZoneSources,
        samples: &[Arc<Sample>],
        strict: bool,
    ) -> Result<Vec<Arc<Instrument>>> {
        let resolved =
            zone::resolve_items(headers, sources, samples, GeneratorType::SampleId, strict)?;

        Ok(resolved
            .into_iter()
            .map(|item| {
                Arc::new(Instrument {
                    header: item.header,
                    global_zone: item.global_zone,
                    zones: item.zones,
                })
            })
            .collect())
    }

    pub fn header(&self) -> &InstrumentInfo {
        &self.header
    }

    pub fn name(&self) -> &str {
        &self.header.name
    }

    /// Generators and modulators shared by every zone of the instrument.
    pub fn global_zone(&self) -> Option<&ZoneItems> {
        self.global_zone.as_ref()
    }

    pub fn zones(&self) -> &[InstrumentZone] {
        &self.zones
    }

    /// The first zone whose key range contains `key`.
    pub fn zone_for_key(&self, key: u8) -> Option<&InstrumentZone> {
        self.zones.iter().find(|zone| zone.contains_key(key))
    }
}

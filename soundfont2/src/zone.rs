use std::collections::HashMap;
use std::ops;
use std::sync::Arc;

use crate::error::{Result, SoundFontError};
use crate::generator::{Generator, Range};
use crate::generator_type::GeneratorType;
use crate::instrument_info::InstrumentInfo;
use crate::modulator::Modulator;
use crate::preset_info::PresetInfo;
use crate::zone_info::ZoneInfo;

/// The generators and modulators of one zone, keyed by generator type.
///
/// Modulators are keyed by their destination generator. When a zone lists the same
/// key twice, the later record wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ZoneItems {
    pub generators: HashMap<GeneratorType, Generator>,
    pub modulators: HashMap<GeneratorType, Modulator>,
    pub key_range: Option<Range>,
}

impl ZoneItems {
    pub fn generator(&self, id: GeneratorType) -> Option<&Generator> {
        self.generators.get(&id)
    }

    pub fn velocity_range(&self) -> Option<Range> {
        self.generator(GeneratorType::VelRange)
            .and_then(Generator::range)
    }

    /// A zone without a key range covers every key.
    pub fn contains_key(&self, key: u8) -> bool {
        self.key_range.is_none_or(|range| range.contains(key))
    }
}

/// A zone bound to the item it plays: a sample for instrument zones, an instrument for
/// preset zones.
#[derive(Debug)]
pub struct Zone<R> {
    items: ZoneItems,
    reference: Arc<R>,
}

impl<R> Zone<R> {
    pub(crate) fn new(items: ZoneItems, reference: Arc<R>) -> Self {
        Self { items, reference }
    }

    pub fn items(&self) -> &ZoneItems {
        &self.items
    }

    pub fn generators(&self) -> &HashMap<GeneratorType, Generator> {
        &self.items.generators
    }

    pub fn modulators(&self) -> &HashMap<GeneratorType, Modulator> {
        &self.items.modulators
    }

    pub fn key_range(&self) -> Option<Range> {
        self.items.key_range
    }

    pub fn contains_key(&self, key: u8) -> bool {
        self.items.contains_key(key)
    }

    pub(crate) fn reference(&self) -> &Arc<R> {
        &self.reference
    }
}

/// A preset or instrument header, as far as zone resolution is concerned.
pub(crate) trait ItemHeader {
    /// Name of the record that terminates the header list.
    const TERMINAL: &'static str;

    fn name(&self) -> &str;
    fn bag_index(&self) -> u16;
}

impl ItemHeader for PresetInfo {
    const TERMINAL: &'static str = PresetInfo::TERMINAL;

    fn name(&self) -> &str {
        &self.name
    }

    fn bag_index(&self) -> u16 {
        self.bag_index
    }
}

impl ItemHeader for InstrumentInfo {
    const TERMINAL: &'static str = InstrumentInfo::TERMINAL;

    fn name(&self) -> &str {
        &self.name
    }

    fn bag_index(&self) -> u16 {
        self.bag_index
    }
}

/// The bag, modulator and generator lists of either presets or instruments.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ZoneSources<'a> {
    pub(crate) zones: &'a [ZoneInfo],
    pub(crate) modulators: &'a [Modulator],
    pub(crate) generators: &'a [Option<Generator>],
}

#[derive(Debug)]
pub(crate) struct ResolvedItem<H, R> {
    pub(crate) header: H,
    pub(crate) global_zone: Option<ZoneItems>,
    pub(crate) zones: Vec<Zone<R>>,
}

/// Resolves every header into its global zone and its bound zones.
///
/// `binding` is the generator whose amount indexes `references`: `Instrument` for
/// presets, `SampleId` for instruments. A zone whose reference does not exist is dropped,
/// or fails the whole resolution when `strict` is set. Terminal records are skipped but
/// still bound the zone range of the item before them.
pub(crate) fn resolve_items<H, R>(
    headers: &[H],
    sources: ZoneSources,
    references: &[Arc<R>],
    binding: GeneratorType,
    strict: bool,
) -> Result<Vec<ResolvedItem<H, R>>>
where
    H: ItemHeader + Clone,
{
    let mut items = Vec::with_capacity(headers.len().saturating_sub(1));

    for (i, header) in headers.iter().enumerate() {
        if header.name() == H::TERMINAL {
            continue;
        }

        let zone_range = span(
            header.bag_index() as usize,
            headers.get(i + 1).map(|next| next.bag_index() as usize),
            sources.zones.len(),
        );

        let mut global_zone = None;
        let mut zones = Vec::new();

        for j in zone_range.clone() {
            let items_in_zone = zone_items(j, sources);

            let Some(reference_id) = items_in_zone
                .generator(binding)
                .and_then(Generator::index)
            else {
                if j == zone_range.start {
                    global_zone = Some(items_in_zone);
                } else {
                    log::debug!(
                        "'{}': zone {} has no {:?} generator and is not the first zone, dropping it",
                        header.name(),
                        j,
                        binding
                    );
                }
                continue;
            };

            match references.get(reference_id) {
                Some(reference) => zones.push(Zone::new(items_in_zone, Arc::clone(reference))),
                None if strict => return Err(missing_reference(binding, i, reference_id)),
                None => log::warn!(
                    "'{}': zone {} refers to missing {:?} {}, dropping it",
                    header.name(),
                    j,
                    binding,
                    reference_id
                ),
            }
        }

        items.push(ResolvedItem {
            header: header.clone(),
            global_zone,
            zones,
        });
    }

    Ok(items)
}

fn zone_items(index: usize, sources: ZoneSources) -> ZoneItems {
    let zone = &sources.zones[index];
    let next = sources.zones.get(index + 1);

    let generator_range = span(
        zone.generator_index as usize,
        next.map(|next| next.generator_index as usize),
        sources.generators.len(),
    );
    let modulator_range = span(
        zone.modulator_index as usize,
        next.map(|next| next.modulator_index as usize),
        sources.modulators.len(),
    );

    let mut generators = HashMap::new();
    for generator in sources.generators[generator_range].iter().flatten() {
        generators.insert(generator.id, *generator);
    }

    let mut modulators = HashMap::new();
    for modulator in &sources.modulators[modulator_range] {
        modulators.insert(modulator.destination, *modulator);
    }

    let key_range = generators
        .get(&GeneratorType::KeyRange)
        .and_then(Generator::range);

    ZoneItems {
        generators,
        modulators,
        key_range,
    }
}

/// `start..end` clamped to `0..len`; a missing end means `len`.
fn span(start: usize, end: Option<usize>, len: usize) -> ops::Range<usize> {
    let end = end.unwrap_or(len).min(len);
    start.min(end)..end
}

fn missing_reference(binding: GeneratorType, item: usize, reference: usize) -> SoundFontError {
    match binding {
        GeneratorType::Instrument => SoundFontError::InvalidInstrumentId {
            preset_id: item,
            instrument_id: reference,
        },
        _ => SoundFontError::InvalidSampleId {
            instrument_id: item,
            sample_id: reference,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::generator::GeneratorAmount;
    use pretty_assertions::assert_eq;

    fn header(name: &str, bag_index: u16) -> InstrumentInfo {
        InstrumentInfo {
            name: name.to_string(),
            bag_index,
        }
    }

    fn bag(generator_index: u16, modulator_index: u16) -> ZoneInfo {
        ZoneInfo {
            generator_index,
            modulator_index,
        }
    }

    fn value(id: GeneratorType, value: i16) -> Option<Generator> {
        Some(Generator {
            id,
            amount: GeneratorAmount::Value(value),
        })
    }

    fn key_range(lo: u8, hi: u8) -> Option<Generator> {
        Some(Generator {
            id: GeneratorType::KeyRange,
            amount: GeneratorAmount::Range(Range::new(lo, hi)),
        })
    }

    fn samples(count: usize) -> Vec<Arc<&'static str>> {
        (0..count).map(|_| Arc::new("sample")).collect()
    }

    #[test]
    fn zone_ranges_use_the_next_header_or_the_zone_count() {
        // Five zones, all bound to sample 0 with one generator each.
        let generators: Vec<_> = (0..5).map(|_| value(GeneratorType::SampleId, 0)).collect();
        let zones: Vec<_> = (0..5).map(|i| bag(i, 0)).collect();
        let headers = vec![header("a", 0), header("b", 2), header("c", 5)];
        let sources = ZoneSources {
            zones: &zones,
            modulators: &[],
            generators: &generators,
        };

        let items = resolve_items(
            &headers,
            sources,
            &samples(1),
            GeneratorType::SampleId,
            false,
        )
        .unwrap();
        let counts: Vec<usize> = items.iter().map(|item| item.zones.len()).collect();
        assert_eq!(counts, vec![2, 3, 0]);

        // Without the terminal record the last item runs to the end of the zone list.
        let headers = vec![header("a", 0), header("b", 2)];
        let items = resolve_items(
            &headers,
            sources,
            &samples(1),
            GeneratorType::SampleId,
            false,
        )
        .unwrap();
        let counts: Vec<usize> = items.iter().map(|item| item.zones.len()).collect();
        assert_eq!(counts, vec![2, 3]);
    }

    #[test]
    fn terminal_records_are_excluded() {
        let zones = vec![bag(0, 0), bag(1, 0)];
        let generators = vec![value(GeneratorType::SampleId, 0)];
        let headers = vec![header("a", 0), header("EOI", 1)];
        let items = resolve_items(
            &headers,
            ZoneSources {
                zones: &zones,
                modulators: &[],
                generators: &generators,
            },
            &samples(1),
            GeneratorType::SampleId,
            false,
        )
        .unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].header.name, "a");
        assert_eq!(items[0].zones.len(), 1);
    }

    #[test]
    fn first_zone_without_binding_becomes_the_global_zone() {
        // zone 0: pan only (global), zone 1: sample 1, zone 2: pan only (dropped)
        let generators = vec![
            value(GeneratorType::Pan, -100),
            key_range(10, 20),
            value(GeneratorType::SampleId, 1),
            value(GeneratorType::Pan, 250),
        ];
        let zones = vec![bag(0, 0), bag(1, 0), bag(3, 0), bag(4, 0)];
        let headers = vec![header("a", 0), header("EOI", 3)];

        let items = resolve_items(
            &headers,
            ZoneSources {
                zones: &zones,
                modulators: &[],
                generators: &generators,
            },
            &samples(2),
            GeneratorType::SampleId,
            false,
        )
        .unwrap();

        let item = &items[0];
        let global = item.global_zone.as_ref().unwrap();
        assert_eq!(global.generator(GeneratorType::Pan).unwrap().value(), Some(-100));
        assert_eq!(global.key_range, None);

        assert_eq!(item.zones.len(), 1);
        assert_eq!(item.zones[0].key_range(), Some(Range::new(10, 20)));
        assert!(item.zones[0].contains_key(15));
        assert!(!item.zones[0].contains_key(21));
        assert_eq!(**item.zones[0].reference(), "sample");
    }

    #[test]
    fn missing_references_are_dropped_or_rejected() {
        let generators = vec![
            value(GeneratorType::SampleId, 0),
            value(GeneratorType::SampleId, 7),
        ];
        let zones = vec![bag(0, 0), bag(1, 0)];
        let headers = vec![header("a", 0)];
        let sources = ZoneSources {
            zones: &zones,
            modulators: &[],
            generators: &generators,
        };

        let items = resolve_items(
            &headers,
            sources,
            &samples(1),
            GeneratorType::SampleId,
            false,
        )
        .unwrap();
        assert_eq!(items[0].zones.len(), 1);
        assert!(items[0].global_zone.is_none());

        let err = resolve_items(
            &headers,
            sources,
            &samples(1),
            GeneratorType::SampleId,
            true,
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Reference);
        assert!(matches!(
            err,
            SoundFontError::InvalidSampleId {
                instrument_id: 0,
                sample_id: 7
            }
        ));
    }

    #[test]
    fn later_duplicates_win_and_modulators_are_sliced_per_zone() {
        let generators = vec![
            value(GeneratorType::FineTune, 1),
            value(GeneratorType::FineTune, 2),
            None,
            value(GeneratorType::SampleId, 0),
            value(GeneratorType::SampleId, 0),
        ];
        let modulator = |destination, amount| Modulator {
            source: 0x0502.into(),
            destination,
            amount,
            amount_source: 0.into(),
            transform: crate::modulator::Transform::Linear,
        };
        let modulators = vec![
            modulator(GeneratorType::InitialAttenuation, 100),
            modulator(GeneratorType::InitialAttenuation, 200),
            modulator(GeneratorType::Pan, 5),
        ];
        let zones = vec![bag(0, 0), bag(4, 2)];
        let headers = vec![header("a", 0)];

        let items = resolve_items(
            &headers,
            ZoneSources {
                zones: &zones,
                modulators: &modulators,
                generators: &generators,
            },
            &samples(1),
            GeneratorType::SampleId,
            false,
        )
        .unwrap();

        let first = &items[0].zones[0];
        assert_eq!(first.generators().len(), 2);
        assert_eq!(
            first.items().generator(GeneratorType::FineTune).unwrap().value(),
            Some(2)
        );
        assert_eq!(first.modulators().len(), 1);
        assert_eq!(first.modulators()[&GeneratorType::InitialAttenuation].amount, 200);

        let second = &items[0].zones[1];
        assert_eq!(second.generators().len(), 1);
        assert_eq!(second.modulators().len(), 1);
        assert!(second.modulators().contains_key(&GeneratorType::Pan));
    }

    #[test]
    fn exposes_key_and_velocity_ranges() {
        let generators = vec![
            key_range(36, 48),
            Some(Generator {
                id: GeneratorType::VelRange,
                amount: GeneratorAmount::Range(Range::new(0, 63)),
            }),
            value(GeneratorType::SampleId, 0),
            value(GeneratorType::SampleId, 0),
        ];
        let zones = vec![bag(0, 0), bag(3, 0)];
        let headers = vec![header("a", 0)];
        let items = resolve_items(
            &headers,
            ZoneSources {
                zones: &zones,
                modulators: &[],
                generators: &generators,
            },
            &samples(1),
            GeneratorType::SampleId,
            false,
        )
        .unwrap();

        let soft = items[0].zones[0].items();
        assert_eq!(soft.key_range, Some(Range::new(36, 48)));
        assert_eq!(soft.velocity_range(), Some(Range::new(0, 63)));

        let open = items[0].zones[1].items();
        assert_eq!(open.key_range, None);
        assert_eq!(open.velocity_range(), None);
        assert!(open.contains_key(0) && open.contains_key(127));
    }

    #[test]
    fn out_of_range_indices_are_clamped() {
        let generators = vec![value(GeneratorType::SampleId, 0)];
        let zones = vec![bag(0, 0), bag(40, 9)];
        let headers = vec![header("a", 0), header("b", 30)];
        let items = resolve_items(
            &headers,
            ZoneSources {
                zones: &zones,
                modulators: &[],
                generators: &generators,
            },
            &samples(1),
            GeneratorType::SampleId,
            false,
        )
        .unwrap();
        assert_eq!(items[0].zones.len(), 1);
        assert!(items[1].zones.is_empty());
        assert!(items[1].global_zone.is_none());
    }
}

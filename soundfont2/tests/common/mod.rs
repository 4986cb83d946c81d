//! Builds synthetic SoundFont images for the integration tests.

#![allow(dead_code)]

pub const INSTRUMENT: u16 = 41;
pub const KEY_RANGE: u16 = 43;
pub const VEL_RANGE: u16 = 44;
pub const INITIAL_ATTENUATION: u16 = 48;
pub const FINE_TUNE: u16 = 52;
pub const SAMPLE_ID: u16 = 53;
pub const PAN: u16 = 17;
pub const REVERB_EFFECTS_SEND: u16 = 16;

pub fn chunk(id: &[u8; 4], payload: &[u8]) -> Vec<u8> {
    let mut out = id.to_vec();
    out.extend_from_slice(&(payload.len() as u32).to_le_bytes());
    out.extend_from_slice(payload);
    if payload.len() % 2 == 1 {
        out.push(0);
    }
    out
}

fn container(id: &[u8; 4], form_type: &[u8; 4], children: &[Vec<u8>]) -> Vec<u8> {
    let mut payload = form_type.to_vec();
    for child in children {
        payload.extend_from_slice(child);
    }
    chunk(id, &payload)
}

pub fn list(form_type: &[u8; 4], children: &[Vec<u8>]) -> Vec<u8> {
    container(b"LIST", form_type, children)
}

pub fn riff(form_type: &[u8; 4], children: &[Vec<u8>]) -> Vec<u8> {
    container(b"RIFF", form_type, children)
}

fn name(text: &str) -> [u8; 20] {
    let mut out = [0; 20];
    let bytes = text.as_bytes();
    out[..bytes.len().min(20)].copy_from_slice(&bytes[..bytes.len().min(20)]);
    out
}

#[derive(Debug, Clone, Default)]
pub struct ZoneSpec {
    generators: Vec<(u16, u16)>,
    modulators: Vec<[u16; 5]>,
}

impl ZoneSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generator(mut self, id: u16, amount: i16) -> Self {
        self.generators.push((id, amount as u16));
        self
    }

    pub fn range(mut self, id: u16, lo: u8, hi: u8) -> Self {
        self.generators.push((id, u16::from_le_bytes([lo, hi])));
        self
    }

    pub fn key_range(self, lo: u8, hi: u8) -> Self {
        self.range(KEY_RANGE, lo, hi)
    }

    pub fn sample(self, index: u16) -> Self {
        self.generator(SAMPLE_ID, index as i16)
    }

    pub fn instrument(self, index: u16) -> Self {
        self.generator(INSTRUMENT, index as i16)
    }

    pub fn modulator(mut self, source: u16, destination: u16, amount: i16) -> Self {
        self.modulators
            .push([source, destination, amount as u16, 0, 0]);
        self
    }
}

#[derive(Debug, Clone)]
pub struct SampleSpec {
    pub name: String,
    pub frames: Vec<i16>,
    pub sample_rate: u32,
    pub original_pitch: u8,
    pub sample_type: u16,
    /// Overrides the header's `start..end` instead of pointing at `frames`.
    pub span: Option<(u32, u32)>,
}

impl SampleSpec {
    pub fn new(name: &str, frame_count: usize) -> Self {
        Self {
            name: name.to_string(),
            frames: (0..frame_count).map(|i| i as i16).collect(),
            sample_rate: 44100,
            original_pitch: 60,
            sample_type: 1,
            span: None,
        }
    }
}

/// Assembles the INFO, sdta and pdta lists of a SoundFont.
#[derive(Debug, Clone)]
pub struct SoundFontBuilder {
    pub name: String,
    pub version: Vec<u8>,
    pub info: Vec<Vec<u8>>,
    samples: Vec<SampleSpec>,
    instruments: Vec<(String, Vec<ZoneSpec>)>,
    presets: Vec<(String, u16, u16, Vec<ZoneSpec>)>,
}

impl SoundFontBuilder {
    pub const PADDING_FRAMES: usize = 46;

    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            version: vec![2, 0, 1, 0],
            info: Vec::new(),
            samples: Vec::new(),
            instruments: Vec::new(),
            presets: Vec::new(),
        }
    }

    pub fn info(mut self, id: &[u8; 4], text: &str) -> Self {
        let mut payload = text.as_bytes().to_vec();
        payload.push(0);
        self.info.push(chunk(id, &payload));
        self
    }

    pub fn sample(mut self, sample: SampleSpec) -> Self {
        self.samples.push(sample);
        self
    }

    pub fn instrument(mut self, name: &str, zones: Vec<ZoneSpec>) -> Self {
        self.instruments.push((name.to_string(), zones));
        self
    }

    pub fn preset(mut self, name: &str, bank: u16, program: u16, zones: Vec<ZoneSpec>) -> Self {
        self.presets.push((name.to_string(), bank, program, zones));
        self
    }

    pub fn info_list(&self) -> Vec<u8> {
        let mut children = vec![chunk(b"ifil", &self.version)];
        let mut inam = self.name.as_bytes().to_vec();
        inam.push(0);
        children.push(chunk(b"INAM", &inam));
        children.extend(self.info.iter().cloned());
        list(b"INFO", &children)
    }

    fn pool(&self) -> (Vec<u8>, Vec<(u32, u32)>) {
        let mut pool = Vec::new();
        let mut spans = Vec::new();
        let mut position = 0;
        for sample in &self.samples {
            for frame in &sample.frames {
                pool.extend_from_slice(&frame.to_le_bytes());
            }
            let start = position;
            let end = start + sample.frames.len() as u32;
            spans.push((start, end));
            pool.extend(std::iter::repeat_n(0, Self::PADDING_FRAMES * 2));
            position = end + Self::PADDING_FRAMES as u32;
        }
        (pool, spans)
    }

    pub fn sdta_list(&self) -> Vec<u8> {
        let (pool, _) = self.pool();
        list(b"sdta", &[chunk(b"smpl", &pool)])
    }

    pub fn pdta_list(&self) -> Vec<u8> {
        let mut phdr = Vec::new();
        let mut preset_zones = Vec::new();
        for (preset_name, bank, program, zones) in &self.presets {
            phdr.extend_from_slice(&name(preset_name));
            phdr.extend_from_slice(&program.to_le_bytes());
            phdr.extend_from_slice(&bank.to_le_bytes());
            phdr.extend_from_slice(&(preset_zones.len() as u16).to_le_bytes());
            phdr.extend_from_slice(&[0; 12]);
            preset_zones.extend(zones.iter().cloned());
        }
        phdr.extend_from_slice(&name("EOP"));
        phdr.extend_from_slice(&[0; 4]);
        phdr.extend_from_slice(&(preset_zones.len() as u16).to_le_bytes());
        phdr.extend_from_slice(&[0; 12]);

        let mut inst = Vec::new();
        let mut instrument_zones = Vec::new();
        for (instrument_name, zones) in &self.instruments {
            inst.extend_from_slice(&name(instrument_name));
            inst.extend_from_slice(&(instrument_zones.len() as u16).to_le_bytes());
            instrument_zones.extend(zones.iter().cloned());
        }
        inst.extend_from_slice(&name("EOI"));
        inst.extend_from_slice(&(instrument_zones.len() as u16).to_le_bytes());

        let (pbag, pmod, pgen) = zone_records(&preset_zones);
        let (ibag, imod, igen) = zone_records(&instrument_zones);

        let (_, spans) = self.pool();
        let mut shdr = Vec::new();
        for (sample, span) in self.samples.iter().zip(spans) {
            let (start, end) = sample.span.unwrap_or(span);
            shdr.extend_from_slice(&name(&sample.name));
            let (start_loop, end_loop) = if end > start + 2 {
                (start + 1, end - 1)
            } else {
                (start, end)
            };
            for value in [start, end, start_loop, end_loop, sample.sample_rate] {
                shdr.extend_from_slice(&value.to_le_bytes());
            }
            shdr.push(sample.original_pitch);
            shdr.push(0);
            shdr.extend_from_slice(&0_u16.to_le_bytes());
            shdr.extend_from_slice(&sample.sample_type.to_le_bytes());
        }
        shdr.extend_from_slice(&name("EOS"));
        shdr.extend_from_slice(&[0; 26]);

        list(
            b"pdta",
            &[
                chunk(b"phdr", &phdr),
                chunk(b"pbag", &pbag),
                chunk(b"pmod", &pmod),
                chunk(b"pgen", &pgen),
                chunk(b"inst", &inst),
                chunk(b"ibag", &ibag),
                chunk(b"imod", &imod),
                chunk(b"igen", &igen),
                chunk(b"shdr", &shdr),
            ],
        )
    }

    pub fn build(&self) -> Vec<u8> {
        riff(
            b"sfbk",
            &[self.info_list(), self.sdta_list(), self.pdta_list()],
        )
    }
}

/// Bag, modulator and generator records for `zones`, each list with its terminal record.
fn zone_records(zones: &[ZoneSpec]) -> (Vec<u8>, Vec<u8>, Vec<u8>) {
    let mut bags = Vec::new();
    let mut modulators = Vec::new();
    let mut generators = Vec::new();
    let (mut generator_count, mut modulator_count) = (0_u16, 0_u16);

    for zone in zones {
        bags.extend_from_slice(&generator_count.to_le_bytes());
        bags.extend_from_slice(&modulator_count.to_le_bytes());
        for (id, amount) in &zone.generators {
            generators.extend_from_slice(&id.to_le_bytes());
            generators.extend_from_slice(&amount.to_le_bytes());
        }
        for fields in &zone.modulators {
            for field in fields {
                modulators.extend_from_slice(&field.to_le_bytes());
            }
        }
        generator_count += zone.generators.len() as u16;
        modulator_count += zone.modulators.len() as u16;
    }

    bags.extend_from_slice(&generator_count.to_le_bytes());
    bags.extend_from_slice(&modulator_count.to_le_bytes());
    modulators.extend_from_slice(&[0; 10]);
    generators.extend_from_slice(&[0; 4]);

    (bags, modulators, generators)
}

/// A bank with one preset (bank 0, program 0, key range 60..=72) over one instrument
/// covering every key.
pub fn piano() -> SoundFontBuilder {
    SoundFontBuilder::new("Test Bank")
        .info(b"ICOP", "Copyright (c) Test")
        .info(b"ISFT", "Polyphone")
        .sample(SampleSpec::new("Piano C4", 100))
        .instrument(
            "Piano",
            vec![
                ZoneSpec::new()
                    .generator(PAN, -50),
                ZoneSpec::new()
                    .key_range(0, 127)
                    .generator(INITIAL_ATTENUATION, 100)
                    .generator(FINE_TUNE, -3)
                    .modulator(0x0502, INITIAL_ATTENUATION, 960)
                    .sample(0),
            ],
        )
        .preset(
            "Grand Piano",
            0,
            0,
            vec![
                ZoneSpec::new()
                    .key_range(60, 72)
                    .generator(INITIAL_ATTENUATION, 20)
                    .generator(REVERB_EFFECTS_SEND, 200)
                    .modulator(0x0502, INITIAL_ATTENUATION, 480)
                    .instrument(0),
            ],
        )
}

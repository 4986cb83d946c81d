use num_enum::FromPrimitive;

/// Identifies a generator, i.e. the synthesis parameter a zone sets.
///
/// The numbering follows the SoundFont 2.04 format, including the unused and
/// reserved slots. Any ID outside the known set decodes as [`GeneratorType::Unrecognized`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FromPrimitive)]
#[repr(u16)]
pub enum GeneratorType {
    StartAddrsOffset = 0,
    EndAddrsOffset = 1,
    StartloopAddrsOffset = 2,
    EndloopAddrsOffset = 3,
    StartAddrsCoarseOffset = 4,
    ModLfoToPitch = 5,
    VibLfoToPitch = 6,
    ModEnvToPitch = 7,
    InitialFilterFc = 8,
    InitialFilterQ = 9,
    ModLfoToFilterFc = 10,
    ModEnvToFilterFc = 11,
    EndAddrsCoarseOffset = 12,
    ModLfoToVolume = 13,
    Unused1 = 14,
    ChorusEffectsSend = 15,
    ReverbEffectsSend = 16,
    Pan = 17,
    Unused2 = 18,
    Unused3 = 19,
    Unused4 = 20,
    DelayModLfo = 21,
    FreqModLfo = 22,
    DelayVibLfo = 23,
    FreqVibLfo = 24,
    DelayModEnv = 25,
    AttackModEnv = 26,
    HoldModEnv = 27,
    DecayModEnv = 28,
    SustainModEnv = 29,
    ReleaseModEnv = 30,
    KeynumToModEnvHold = 31,
    KeynumToModEnvDecay = 32,
    DelayVolEnv = 33,
    AttackVolEnv = 34,
    HoldVolEnv = 35,
    DecayVolEnv = 36,
    SustainVolEnv = 37,
    ReleaseVolEnv = 38,
    KeynumToVolEnvHold = 39,
    KeynumToVolEnvDecay = 40,
    Instrument = 41,
    Reserved1 = 42,
    KeyRange = 43,
    VelRange = 44,
    StartloopAddrsCoarseOffset = 45,
    Keynum = 46,
    Velocity = 47,
    InitialAttenuation = 48,
    Reserved2 = 49,
    EndloopAddrsCoarseOffset = 50,
    CoarseTune = 51,
    FineTune = 52,
    SampleId = 53,
    SampleModes = 54,
    Reserved3 = 55,
    ScaleTuning = 56,
    ExclusiveClass = 57,
    OverridingRootKey = 58,
    Unused5 = 59,
    #[num_enum(catch_all)]
    Unrecognized(u16),
}

/// Whether a generator list belongs to presets (`pgen`) or instruments (`igen`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorContext {
    Preset,
    Instrument,
}

impl GeneratorType {
    /// Key and velocity ranges carry a (lo, hi) byte pair instead of a scalar.
    pub fn is_range(self) -> bool {
        matches!(self, GeneratorType::KeyRange | GeneratorType::VelRange)
    }

    pub fn is_recognized(self) -> bool {
        !matches!(self, GeneratorType::Unrecognized(_))
    }

    /// Generators that must be ignored when found in the given context.
    pub fn is_forbidden_in(self, context: GeneratorContext) -> bool {
        use GeneratorType::*;
        match context {
            GeneratorContext::Preset => matches!(
                self,
                StartAddrsOffset
                    | EndAddrsOffset
                    | StartloopAddrsOffset
                    | EndloopAddrsOffset
                    | StartAddrsCoarseOffset
                    | EndAddrsCoarseOffset
                    | StartloopAddrsCoarseOffset
                    | Keynum
                    | Velocity
                    | EndloopAddrsCoarseOffset
                    | SampleModes
                    | ExclusiveClass
                    | OverridingRootKey
            ),
            GeneratorContext::Instrument => matches!(
                self,
                Unused1 | Unused2 | Unused3 | Unused4 | Reserved1 | Reserved2 | Reserved3
            ),
        }
    }
}

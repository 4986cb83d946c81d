/// Specifies how a SoundFont is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoaderSettings {
    /// The value indicating whether a zone referring to a missing sample or instrument
    /// fails the load. When disabled, such zones are dropped with a warning.
    pub strict_references: bool,
}

impl LoaderSettings {
    pub const DEFAULT_STRICT_REFERENCES: bool = false;

    /// Initializes a new instance of loader settings with the default values.
    pub fn new() -> Self {
        Self {
            strict_references: LoaderSettings::DEFAULT_STRICT_REFERENCES,
        }
    }

    pub fn strict() -> Self {
        Self {
            strict_references: true,
        }
    }
}

impl Default for LoaderSettings {
    fn default() -> Self {
        Self::new()
    }
}

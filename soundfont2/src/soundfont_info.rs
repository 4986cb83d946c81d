use crate::binary_reader::decode_string;
use crate::error::{Result, SoundFontError};
use crate::four_cc::FourCC;
use crate::riff_chunk::RiffChunk;
use crate::soundfont_version::SoundFontVersion;

/// The information in the `INFO` list of a SoundFont.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundFontInfo {
    /// The SoundFont format version the file complies with (`ifil`).
    pub version: SoundFontVersion,
    /// The sound engine the bank was optimized for (`isng`).
    pub sound_engine: String,
    /// The bank name (`INAM`).
    pub name: String,
    /// The wavetable ROM the ROM samples refer to (`irom`).
    pub rom: Option<String>,
    /// The ROM revision (`iver`).
    pub rom_version: Option<SoundFontVersion>,
    pub creation_date: Option<String>,
    pub author: Option<String>,
    pub product: Option<String>,
    pub copyright: Option<String>,
    pub comments: Option<String>,
    /// The tool used to create or last modify the file (`ISFT`).
    pub created_by: Option<String>,
}

impl SoundFontInfo {
    pub const DEFAULT_SOUND_ENGINE: &'static str = "EMU8000";

    pub(crate) fn new(chunk: &RiffChunk) -> Result<Self> {
        chunk.expect_list(FourCC::INFO)?;

        let mut version: Option<SoundFontVersion> = None;
        let mut sound_engine: Option<String> = None;
        let mut name: Option<String> = None;
        let mut rom: Option<String> = None;
        let mut rom_version: Option<SoundFontVersion> = None;
        let mut creation_date: Option<String> = None;
        let mut author: Option<String> = None;
        let mut product: Option<String> = None;
        let mut copyright: Option<String> = None;
        let mut comments: Option<String> = None;
        let mut created_by: Option<String> = None;

        for sub_chunk in chunk.sub_chunks() {
            let text = || decode_string(sub_chunk.data());
            match sub_chunk.id() {
                FourCC::IFIL => version = Some(SoundFontVersion::read_from_chunk(sub_chunk)?),
                FourCC::IVER => rom_version = Some(SoundFontVersion::read_from_chunk(sub_chunk)?),
                FourCC::ISNG => sound_engine = Some(text()),
                FourCC::INAM => name = Some(text()),
                FourCC::IROM => rom = Some(text()),
                FourCC::ICRD => creation_date = Some(text()),
                FourCC::IENG => author = Some(text()),
                FourCC::IPRD => product = Some(text()),
                FourCC::ICOP => copyright = Some(text()),
                FourCC::ICMT => comments = Some(text()),
                FourCC::ISFT => created_by = Some(text()),
                other => log::debug!("ignoring unknown INFO sub-chunk '{}'", other),
            }
        }

        let version = version.ok_or(SoundFontError::SubChunkNotFound(FourCC::IFIL))?;
        let name = name
            .filter(|name| !name.is_empty())
            .ok_or(SoundFontError::SubChunkNotFound(FourCC::INAM))?;
        let sound_engine = sound_engine
            .filter(|engine| !engine.is_empty())
            .unwrap_or_else(|| Self::DEFAULT_SOUND_ENGINE.to_string());

        Ok(Self {
            version,
            sound_engine,
            name,
            rom,
            rom_version,
            creation_date,
            author,
            product,
            copyright,
            comments,
            created_by,
        })
    }
}

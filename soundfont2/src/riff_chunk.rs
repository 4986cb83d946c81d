use crate::binary_reader::BinaryReader;
use crate::error::{Result, SoundFontError};
use crate::four_cc::FourCC;

const CHUNK_HEADER_LENGTH: usize = 8;

/// A chunk of a RIFF file.
///
/// `RIFF` and `LIST` chunks start with a four-character form type and hold sub-chunks;
/// every other chunk is a leaf. The chunk borrows its payload from the input buffer.
#[derive(Debug, Clone)]
pub struct RiffChunk<'a> {
    id: FourCC,
    length: u32,
    data: &'a [u8],
    sub_chunks: Vec<RiffChunk<'a>>,
}

impl<'a> RiffChunk<'a> {
    /// Parses a whole SoundFont file into its chunk tree.
    ///
    /// The outermost chunk must be `RIFF` with the `sfbk` signature. Its declared length
    /// is clamped to the bytes actually present.
    pub fn parse(data: &'a [u8]) -> Result<Self> {
        let mut reader = BinaryReader::new(data);

        let id = reader.read_four_cc()?;
        if id != FourCC::RIFF {
            return Err(SoundFontError::RiffChunkNotFound {
                expected: FourCC::RIFF,
                actual: id,
            });
        }

        let declared = reader.read_u32()? as usize;

        let signature = reader.read_four_cc()?;
        if signature != FourCC::SFBK {
            return Err(SoundFontError::InvalidRiffChunkType {
                expected: FourCC::SFBK,
                actual: signature,
            });
        }

        let body = &data[CHUNK_HEADER_LENGTH..];
        let payload = &body[..declared.clamp(4, body.len())];
        if declared > body.len() {
            log::debug!(
                "RIFF chunk declares {} bytes, but only {} are present",
                declared,
                body.len()
            );
        }

        let sub_chunks = Self::parse_sub_chunks(&payload[4..])?;

        Ok(Self {
            id,
            length: payload.len() as u32,
            data: payload,
            sub_chunks,
        })
    }

    /// Reads consecutive chunks until fewer than 8 bytes remain in `region`.
    pub(crate) fn parse_sub_chunks(region: &'a [u8]) -> Result<Vec<Self>> {
        let mut reader = BinaryReader::new(region);
        let mut chunks = Vec::new();

        while reader.remaining() >= CHUNK_HEADER_LENGTH {
            chunks.push(Self::read_chunk(&mut reader)?);

            // Odd-length chunks are followed by a pad byte.
            if reader.position() % 2 == 1 && reader.remaining() > 0 {
                reader.skip(1)?;
            }
        }

        Ok(chunks)
    }

    fn read_chunk(reader: &mut BinaryReader<'a>) -> Result<Self> {
        let offset = reader.position();
        let id = reader.read_four_cc()?;
        let length = reader.read_u32()?;
        let data = reader.read_bytes(length as usize)?;

        let sub_chunks = if id.is_container() {
            Self::parse_sub_chunks(data.get(4..).unwrap_or(&[]))?
        } else {
            Vec::new()
        };

        log::trace!(
            "chunk '{}' at offset {}, {} bytes, {} sub-chunks",
            id,
            offset,
            length,
            sub_chunks.len()
        );

        Ok(Self {
            id,
            length,
            data,
            sub_chunks,
        })
    }

    pub fn id(&self) -> FourCC {
        self.id
    }

    pub fn length(&self) -> u32 {
        self.length
    }

    /// The raw payload, including the form type for container chunks.
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    pub fn sub_chunks(&self) -> &[RiffChunk<'a>] {
        &self.sub_chunks
    }

    /// The form type of a `RIFF` or `LIST` chunk.
    pub fn form_type(&self) -> Option<FourCC> {
        if !self.id.is_container() {
            return None;
        }
        let bytes: [u8; 4] = self.data.get(..4)?.try_into().ok()?;
        Some(FourCC::new(bytes))
    }

    pub(crate) fn reader(&self) -> BinaryReader<'a> {
        BinaryReader::new(self.data)
    }

    /// Fails unless this is a `LIST` chunk of the given form type.
    pub(crate) fn expect_list(&self, form_type: FourCC) -> Result<()> {
        if self.id != FourCC::LIST {
            return Err(SoundFontError::UnexpectedChunkId {
                expected: FourCC::LIST,
                actual: self.id,
            });
        }
        match self.form_type() {
            Some(actual) if actual == form_type => Ok(()),
            Some(actual) => Err(SoundFontError::InvalidListChunkType {
                expected: form_type,
                actual,
            }),
            None => Err(SoundFontError::SubChunkNotFound(form_type)),
        }
    }

    /// Fails unless this chunk has the given ID.
    pub(crate) fn expect_id(&self, expected: FourCC) -> Result<()> {
        if self.id != expected {
            return Err(SoundFontError::UnexpectedChunkId {
                expected,
                actual: self.id,
            });
        }
        Ok(())
    }

    /// Fails unless the payload holds a whole number of `record_size` records.
    pub(crate) fn expect_record_size(&self, record_size: usize) -> Result<usize> {
        if self.length as usize % record_size != 0 {
            return Err(SoundFontError::InvalidSubChunkSize {
                id: self.id,
                length: self.length,
                record_size,
            });
        }
        Ok(self.length as usize / record_size)
    }
}

use std::fmt;

/// A four-character code identifying a RIFF chunk.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FourCC([u8; 4]);

impl FourCC {
    pub const RIFF: FourCC = FourCC(*b"RIFF");
    pub const LIST: FourCC = FourCC(*b"LIST");
    pub const SFBK: FourCC = FourCC(*b"sfbk");

    pub const INFO: FourCC = FourCC(*b"INFO");
    pub const SDTA: FourCC = FourCC(*b"sdta");
    pub const PDTA: FourCC = FourCC(*b"pdta");

    pub const IFIL: FourCC = FourCC(*b"ifil");
    pub const ISNG: FourCC = FourCC(*b"isng");
    pub const INAM: FourCC = FourCC(*b"INAM");
    pub const IROM: FourCC = FourCC(*b"irom");
    pub const IVER: FourCC = FourCC(*b"iver");
    pub const ICRD: FourCC = FourCC(*b"ICRD");
    pub const IENG: FourCC = FourCC(*b"IENG");
    pub const IPRD: FourCC = FourCC(*b"IPRD");
    pub const ICOP: FourCC = FourCC(*b"ICOP");
    pub const ICMT: FourCC = FourCC(*b"ICMT");
    pub const ISFT: FourCC = FourCC(*b"ISFT");

    pub const SMPL: FourCC = FourCC(*b"smpl");

    pub const PHDR: FourCC = FourCC(*b"phdr");
    pub const PBAG: FourCC = FourCC(*b"pbag");
    pub const PMOD: FourCC = FourCC(*b"pmod");
    pub const PGEN: FourCC = FourCC(*b"pgen");
    pub const INST: FourCC = FourCC(*b"inst");
    pub const IBAG: FourCC = FourCC(*b"ibag");
    pub const IMOD: FourCC = FourCC(*b"imod");
    pub const IGEN: FourCC = FourCC(*b"igen");
    pub const SHDR: FourCC = FourCC(*b"shdr");

    pub const fn new(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }

    /// Chunks with this ID carry a form type followed by sub-chunks.
    pub fn is_container(&self) -> bool {
        *self == FourCC::RIFF || *self == FourCC::LIST
    }
}

impl fmt::Display for FourCC {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for &b in &self.0 {
            // Non-printable bytes are escaped so that garbage IDs stay readable in errors.
            if b.is_ascii_graphic() || b == b' ' {
                write!(f, "{}", b as char)?;
            } else {
                write!(f, "\\x{:02x}", b)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for FourCC {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "FourCC({})", self)
    }
}

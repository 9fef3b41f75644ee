use std::fmt::Display;

/// Number of residues in the canonical amino acid alphabet.
pub const ALPHABET_SIZE: usize = 20;

/// Canonical amino acid alphabet. The order defines residue indices used by substitution tables.
pub const ALPHABET: &[u8; ALPHABET_SIZE] = b"ARNDCQEGHILKMFPSTWYV";

/// One of the 20 standard amino acids, stored as its index in [`ALPHABET`].
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[repr(transparent)]
pub struct AminoAcid(u8);

impl AminoAcid {
    /// Index of the residue in [`ALPHABET`], always below [`ALPHABET_SIZE`].
    #[inline(always)]
    pub fn index(&self) -> usize {
        self.0 as usize
    }

    /// One-letter code of the residue.
    pub fn symbol(&self) -> char {
        ALPHABET[self.0 as usize] as char
    }

    pub fn all() -> impl Iterator<Item = AminoAcid> {
        (0..ALPHABET_SIZE as u8).map(AminoAcid)
    }
}

const fn _lookup() -> [u8; 256] {
    let mut table = [u8::MAX; 256];
    let mut i = 0;
    while i < ALPHABET_SIZE {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
}

static LOOKUP: [u8; 256] = _lookup();

impl TryFrom<u8> for AminoAcid {
    type Error = ();

    /// Only upper-case one-letter codes of the standard residues are accepted.
    #[inline(always)]
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match LOOKUP[value as usize] {
            u8::MAX => Err(()),
            ind => Ok(AminoAcid(ind)),
        }
    }
}

impl TryFrom<char> for AminoAcid {
    type Error = ();

    fn try_from(value: char) -> Result<Self, Self::Error> {
        if value.is_ascii() {
            AminoAcid::try_from(value as u8)
        } else {
            Err(())
        }
    }
}

impl Display for AminoAcid {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

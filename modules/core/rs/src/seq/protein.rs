use derive_getters::{Dissolve, Getters};
use derive_more::{Constructor, Display, Error};

use super::alphabet::AminoAcid;

/// The first residue of a sequence that is not part of the canonical alphabet.
#[derive(Clone, PartialEq, Eq, Debug, Display, Error, Constructor, Getters, Dissolve)]
#[display("sequence #{index} has invalid residue {symbol:?} at position {position}")]
pub struct InvalidResidue {
    index: usize,
    position: usize,
    symbol: char,
}

/// Validated protein sequence encoded as amino acid indices.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default, Dissolve)]
pub struct Protein {
    residues: Vec<AminoAcid>,
}

impl Protein {
    /// Validate and encode a sequence. `index` is the position of the sequence in the
    /// analysed collection and is only used for error reporting.
    pub fn new(index: usize, sequence: &str) -> Result<Self, InvalidResidue> {
        let mut residues = Vec::with_capacity(sequence.len());
        for (position, symbol) in sequence.chars().enumerate() {
            match AminoAcid::try_from(symbol) {
                Ok(aa) => residues.push(aa),
                Err(()) => return Err(InvalidResidue::new(index, position, symbol)),
            }
        }
        Ok(Self { residues })
    }

    pub fn len(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    pub fn residues(&self) -> &[AminoAcid] {
        &self.residues
    }
}

impl AsRef<[AminoAcid]> for Protein {
    fn as_ref(&self) -> &[AminoAcid] {
        &self.residues
    }
}

impl std::fmt::Display for Protein {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for aa in &self.residues {
            write!(f, "{}", aa)?;
        }
        Ok(())
    }
}

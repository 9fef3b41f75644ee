pub use alphabet::{AminoAcid, ALPHABET, ALPHABET_SIZE};
pub use protein::{InvalidResidue, Protein};

mod alphabet;
mod protein;

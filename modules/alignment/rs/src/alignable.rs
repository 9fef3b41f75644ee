use pairsim_core_rs::seq::{AminoAcid, Protein};

// Random access to the symbols of a sequence. Implemented for the containers the
// engine is fed with instead of requiring a particular sequence type.
pub trait Alignable {
    type Symbol;

    fn len(&self) -> usize;
    fn at(&self, pos: usize) -> &Self::Symbol;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Copy> Alignable for &[T] {
    type Symbol = T;

    #[inline(always)]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> &Self::Symbol {
        &self[pos]
    }
}

impl Alignable for Protein {
    type Symbol = AminoAcid;

    #[inline(always)]
    fn len(&self) -> usize {
        self.residues().len()
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> &Self::Symbol {
        &self.residues()[pos]
    }
}

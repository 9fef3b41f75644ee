use crate::pairwise::Op;

/// Kind of a diagonal alignment column.
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Type {
    Match,
    Mismatch,
    Equivalent,
}

pub trait Classifier {
    type Symbol;

    fn classify(&self, s1: &Self::Symbol, s2: &Self::Symbol) -> Type;
}

/// Plain identity: equal bytes match, everything else is a mismatch.
#[derive(Copy, Clone, Debug, Default)]
pub struct Equality {}

impl Classifier for Equality {
    type Symbol = u8;

    #[inline(always)]
    fn classify(&self, s1: &Self::Symbol, s2: &Self::Symbol) -> Type {
        if s1 == s2 { Type::Match } else { Type::Mismatch }
    }
}

impl From<Type> for Op {
    fn from(value: Type) -> Self {
        match value {
            Type::Match => Op::Match,
            Type::Mismatch => Op::Mismatch,
            Type::Equivalent => Op::Equivalent,
        }
    }
}

/// `Op` represents a single column of a pairwise alignment.
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum Op {
    /// Residue of the first sequence aligned against a gap (v)
    GapFirst,
    /// Residue of the second sequence aligned against a gap (^)
    GapSecond,
    /// Two different residues that are still considered similar, e.g. a non-negative
    /// substitution score (~)
    Equivalent,
    /// Identical residues (=)
    Match,
    /// Dissimilar residues (X)
    Mismatch,
}

impl Op {
    /// Returns `true` if the operation consumes a residue from both sequences.
    pub fn is_diagonal(&self) -> bool {
        matches!(self, Op::Match | Op::Mismatch | Op::Equivalent)
    }

    /// Returns `true` if the operation counts towards the similar residues of an alignment.
    pub fn is_similar(&self) -> bool {
        matches!(self, Op::Match | Op::Equivalent)
    }

    pub fn symbol(&self) -> char {
        match self {
            Op::GapFirst => 'v',
            Op::GapSecond => '^',
            Op::Equivalent => '~',
            Op::Match => '=',
            Op::Mismatch => 'X',
        }
    }
}

impl TryFrom<char> for Op {
    type Error = ();

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'v' => Ok(Op::GapFirst),
            '^' => Ok(Op::GapSecond),
            '~' => Ok(Op::Equivalent),
            '=' => Ok(Op::Match),
            'X' => Ok(Op::Mismatch),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_roundtrip() {
        for op in [
            Op::GapFirst,
            Op::GapSecond,
            Op::Equivalent,
            Op::Match,
            Op::Mismatch,
        ] {
            assert_eq!(Op::try_from(op.symbol()), Ok(op));
        }
        assert_eq!(Op::try_from('a'), Err(()));
    }

    #[test]
    fn test_classes() {
        assert!(Op::Match.is_diagonal() && Op::Match.is_similar());
        assert!(Op::Equivalent.is_diagonal() && Op::Equivalent.is_similar());
        assert!(Op::Mismatch.is_diagonal() && !Op::Mismatch.is_similar());
        assert!(!Op::GapFirst.is_diagonal() && !Op::GapFirst.is_similar());
        assert!(!Op::GapSecond.is_diagonal() && !Op::GapSecond.is_similar());
    }
}

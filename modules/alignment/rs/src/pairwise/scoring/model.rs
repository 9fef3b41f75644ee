use std::fmt::{Display, Formatter};
use std::str::FromStr;

use derive_getters::Getters;
use derive_more::{Display, Error};

use pairsim_core_rs::seq::AminoAcid;

use super::matrices::{self, Table};
use super::{Scheme, equiv, gaps, symbols};

/// Named substitution model with its recommended gap penalties.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Preset {
    #[default]
    Blosum45,
    Blosum50,
    Blosum62,
    Blosum80,
    Pam30,
    Pam70,
    Pam250,
}

impl Preset {
    pub const ALL: [Preset; 7] = [
        Preset::Blosum45,
        Preset::Blosum50,
        Preset::Blosum62,
        Preset::Blosum80,
        Preset::Pam30,
        Preset::Pam70,
        Preset::Pam250,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Preset::Blosum45 => "blosum45",
            Preset::Blosum50 => "blosum50",
            Preset::Blosum62 => "blosum62",
            Preset::Blosum80 => "blosum80",
            Preset::Pam30 => "pam30",
            Preset::Pam70 => "pam70",
            Preset::Pam250 => "pam250",
        }
    }

    pub fn table(&self) -> &'static Table {
        match self {
            Preset::Blosum45 => &matrices::BLOSUM45,
            Preset::Blosum50 => &matrices::BLOSUM50,
            Preset::Blosum62 => &matrices::BLOSUM62,
            Preset::Blosum80 => &matrices::BLOSUM80,
            Preset::Pam30 => &matrices::PAM30,
            Preset::Pam70 => &matrices::PAM70,
            Preset::Pam250 => &matrices::PAM250,
        }
    }

    /// Gap (open, extend) penalties as positive numbers.
    pub fn gap_penalties(&self) -> (i32, i32) {
        match self {
            Preset::Blosum45 => (14, 2),
            Preset::Blosum50 => (13, 2),
            Preset::Blosum62 => (11, 1),
            Preset::Blosum80 => (10, 1),
            Preset::Pam30 => (9, 1),
            Preset::Pam70 => (10, 1),
            Preset::Pam250 => (13, 2),
        }
    }

    pub fn model(&self) -> SubstitutionModel {
        let (gap_open, gap_extend) = self.gap_penalties();
        SubstitutionModel::new(*self, gap_open, gap_extend)
    }
}

impl Display for Preset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Eq, PartialEq, Debug, Display, Error)]
#[display("unknown substitution model {name:?}, expected one of: {}", Preset::ALL.map(|x| x.name()).join(", "))]
pub struct UnknownPreset {
    pub name: String,
}

impl FromStr for Preset {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim();
        Preset::ALL
            .into_iter()
            .find(|x| x.name().eq_ignore_ascii_case(normalized))
            .ok_or_else(|| UnknownPreset {
                name: s.to_string(),
            })
    }
}

/// Substitution table together with affine gap penalties. Gap penalties are stored as
/// positive numbers and applied as negative scores.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Getters)]
pub struct SubstitutionModel {
    preset: Preset,
    #[getter(skip)]
    table: &'static Table,
    gap_open: i32,
    gap_extend: i32,
}

impl SubstitutionModel {
    pub fn new(preset: Preset, gap_open: i32, gap_extend: i32) -> Self {
        Self {
            preset,
            table: preset.table(),
            gap_open,
            gap_extend,
        }
    }

    pub fn table(&self) -> &'static Table {
        self.table
    }

    #[inline(always)]
    pub fn substitution(&self, a: AminoAcid, b: AminoAcid) -> i32 {
        self.table[a.index()][b.index()] as i32
    }

    /// Largest entry of the substitution table.
    pub fn max_substitution(&self) -> i32 {
        self.table
            .iter()
            .flat_map(|row| row.iter())
            .copied()
            .max()
            .unwrap_or_default() as i32
    }
}

impl From<Preset> for SubstitutionModel {
    fn from(value: Preset) -> Self {
        value.model()
    }
}

impl symbols::PosInvariantScorer for SubstitutionModel {
    type SymScore = i32;
    type Symbol = AminoAcid;

    #[inline(always)]
    fn score(&self, s1: &Self::Symbol, s2: &Self::Symbol) -> Self::SymScore {
        self.substitution(*s1, *s2)
    }
}

impl gaps::PosInvariantScorer for SubstitutionModel {
    type GapScore = i32;

    #[inline(always)]
    fn gap_open(&self) -> Self::GapScore {
        -self.gap_open
    }

    #[inline(always)]
    fn gap_extend(&self) -> Self::GapScore {
        -self.gap_extend
    }
}

// Identical residues match, different residues with a non-negative score are similar.
impl equiv::Classifier for SubstitutionModel {
    type Symbol = AminoAcid;

    #[inline(always)]
    fn classify(&self, s1: &Self::Symbol, s2: &Self::Symbol) -> equiv::Type {
        if s1 == s2 {
            equiv::Type::Match
        } else if self.substitution(*s1, *s2) >= 0 {
            equiv::Type::Equivalent
        } else {
            equiv::Type::Mismatch
        }
    }
}

impl Scheme for SubstitutionModel {
    type Score = i32;
    type Symbol = AminoAcid;
}

use pairsim_alignment_rs::pairwise::scoring::{Preset, SubstitutionModel};
use pairsim_alignment_rs::pairwise::{Alignment, Op, sw};
use pairsim_core_rs::seq::{ALPHABET, AminoAcid, Protein};

type Engine = sw::Engine<
    i32,
    AminoAcid,
    sw::storage::Best<i32>,
    sw::traceback::TraceMatrix<i32>,
    SubstitutionModel,
>;

fn new_engine(preset: Preset) -> Engine {
    Engine::new(
        sw::storage::Best::new(),
        sw::traceback::TraceMatrix::new(),
        preset.model(),
    )
}

fn align(engine: &mut Engine, seq1: &str, seq2: &str) -> Option<Alignment<i32>> {
    let seq1 = Protein::new(0, seq1).unwrap();
    let seq2 = Protein::new(1, seq2).unwrap();
    let mut result = engine.scan_all(&seq1, &seq2).unwrap();
    assert!(result.len() <= 1);
    result.pop()
}

#[test]
fn test_identical_sequences() {
    let mut engine = new_engine(Preset::Blosum62);

    let aaaa = align(&mut engine, "AAAA", "AAAA").unwrap();
    assert_eq!(*aaaa.score(), 16);
    assert_eq!(aaaa.rle(), "4=");

    let cccc = align(&mut engine, "CCCC", "CCCC").unwrap();
    assert_eq!(*cccc.score(), 36);

    let all = align(&mut engine, "ACDEFGHIKLMNPQRSTVWY", "ACDEFGHIKLMNPQRSTVWY").unwrap();
    assert_eq!(*all.score(), 116);
    assert_eq!((all.matches(), all.similar(), all.len()), (20, 20, 20));
}

#[test]
fn test_no_positive_alignment() {
    let mut engine = new_engine(Preset::Blosum62);
    assert!(align(&mut engine, "AAAA", "CCCC").is_none());
    assert!(align(&mut engine, "", "CCCC").is_none());
    assert!(align(&mut engine, "", "").is_none());
}

#[test]
fn test_similar_residues() {
    let mut engine = new_engine(Preset::Blosum62);
    let alignment = align(&mut engine, "MKVLA", "MRVIA").unwrap();
    assert_eq!(*alignment.score(), 17);
    assert_eq!(alignment.rle(), "1=1~1=1~1=");
    assert_eq!(alignment.matches(), 3);
    assert_eq!(alignment.similar(), 5);
    assert_eq!(alignment.len(), 5);
}

#[test]
fn test_affine_gap_penalties() {
    let mut engine = new_engine(Preset::Blosum50);
    let alignment = align(&mut engine, "HEAGAWGHEE", "PAWHEAE").unwrap();
    assert_eq!(*alignment.score(), 23);
    assert_eq!(alignment.rle(), "2=1v2=");
    assert_eq!(*alignment.seq1(), 4..9);
    assert_eq!(*alignment.seq2(), 1..5);

    let mut engine = new_engine(Preset::Blosum62);
    let (long, short) = ("MKTAYIAKQRQISFVKSHFSRQ", "MKTAYIAKQISFVKSHFSRQ");
    let alignment = align(&mut engine, long, short).unwrap();
    assert_eq!(*alignment.score(), 87);
    assert_eq!(alignment.rle(), "8=2v12=");
    assert_eq!((alignment.matches(), alignment.len()), (20, 22));

    let alignment = align(&mut engine, short, long).unwrap();
    assert_eq!(*alignment.score(), 87);
    assert_eq!(alignment.rle(), "8=2^12=");

    // One long gap is cheaper than two short ones
    let alignment = align(
        &mut engine,
        "WWWWWWWWWWGGGGGGGGGGGGGGGGGGGGWWWWWWWWWW",
        "WWWWWWWWWWWWWWWWWWWW",
    )
    .unwrap();
    assert_eq!(*alignment.score(), 190);
    assert_eq!(alignment.rle(), "10=20v10=");
}

#[test]
fn test_scoring_can_be_swapped() {
    let mut engine = new_engine(Preset::Blosum62);
    let (long, short) = ("MKTAYIAKQRQISFVKSHFSRQ", "MKTAYIAKQISFVKSHFSRQ");
    assert_eq!(*align(&mut engine, long, short).unwrap().score(), 87);

    engine.with_scoring(Preset::Blosum45.model());
    assert_eq!(engine.scoring().preset(), &Preset::Blosum45);
    assert_eq!(*align(&mut engine, long, short).unwrap().score(), 100);

    engine.with_scoring(Preset::Pam250.model());
    assert_eq!(*align(&mut engine, "W", "W").unwrap().score(), 17);
}

// Plain O(n*m) Gotoh recurrence over full H/E/F matrices
fn reference_score(model: &SubstitutionModel, seq1: &Protein, seq2: &Protein) -> i32 {
    let (open, extend) = (*model.gap_open(), *model.gap_extend());
    let (r1, r2) = (seq1.residues(), seq2.residues());
    let (rows, cols) = (r1.len() + 1, r2.len() + 1);
    let (mut h, mut e, mut f) = (
        vec![vec![0; cols]; rows],
        vec![vec![i32::MIN / 2; cols]; rows],
        vec![vec![i32::MIN / 2; cols]; rows],
    );

    let mut best = 0;
    for i in 1..rows {
        for j in 1..cols {
            e[i][j] = (h[i - 1][j] - open).max(e[i - 1][j] - extend);
            f[i][j] = (h[i][j - 1] - open).max(f[i][j - 1] - extend);
            let diag = h[i - 1][j - 1] + model.substitution(r1[i - 1], r2[j - 1]);
            h[i][j] = 0.max(diag).max(e[i][j]).max(f[i][j]);
            best = best.max(h[i][j]);
        }
    }
    best
}

// Recompute the score of the traceback path and check that it spans the reported ranges
fn rescore(
    model: &SubstitutionModel,
    seq1: &Protein,
    seq2: &Protein,
    alignment: &Alignment<i32>,
) -> i32 {
    let (open, extend) = (*model.gap_open(), *model.gap_extend());
    let (r1, r2) = (seq1.residues(), seq2.residues());
    let (mut i, mut j) = (alignment.seq1().start, alignment.seq2().start);

    let mut score = 0;
    let mut previous: Option<Op> = None;
    for step in alignment.steps() {
        let (op, len) = (*step.op(), *step.len() as usize);
        assert!(len > 0);
        match op {
            Op::Match | Op::Equivalent | Op::Mismatch => {
                for _ in 0..len {
                    let (a, b) = (r1[i], r2[j]);
                    let expected = if a == b {
                        Op::Match
                    } else if model.substitution(a, b) >= 0 {
                        Op::Equivalent
                    } else {
                        Op::Mismatch
                    };
                    assert_eq!(op, expected, "{a:?} vs {b:?}");
                    score += model.substitution(a, b);
                    i += 1;
                    j += 1;
                }
            }
            Op::GapFirst | Op::GapSecond => {
                // Long gaps are split into several steps
                let continued = previous == Some(op);
                score -= if continued { 0 } else { open - extend };
                score -= extend * len as i32;
                if op == Op::GapFirst {
                    i += len;
                } else {
                    j += len;
                }
            }
        }
        previous = Some(op);
    }
    assert_eq!((i, j), (alignment.seq1().end, alignment.seq2().end));
    score
}

// Fixed-seed LCG, the cases are reproducible
struct Lcg(u64);

impl Lcg {
    fn next(&mut self, bound: usize) -> usize {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((self.0 >> 33) as usize) % bound
    }

    // A reduced alphabet makes gapped alignments more likely
    fn protein(&mut self, index: usize) -> Protein {
        let (len, letters) = (self.next(30), 1 + self.next(ALPHABET.len()));
        let residues: String = (0..len)
            .map(|_| ALPHABET[self.next(letters)] as char)
            .collect();
        Protein::new(index, &residues).unwrap()
    }
}

#[test]
fn test_random_pairs_match_reference_dp() {
    let mut rng = Lcg(0x5eed);
    for preset in Preset::ALL {
        let model = preset.model();
        let mut engine = new_engine(preset);
        for _ in 0..60 {
            let seq1 = rng.protein(0);
            let seq2 = rng.protein(1);
            let expected = reference_score(&model, &seq1, &seq2);

            let mut result = engine.scan_all(&seq1, &seq2).unwrap();
            assert!(result.len() <= 1);
            match result.pop() {
                None => assert_eq!(expected, 0, "{preset:?}: {seq1:?} vs {seq2:?}"),
                Some(alignment) => {
                    assert_eq!(*alignment.score(), expected, "{preset:?}: {seq1:?} vs {seq2:?}");
                    assert_eq!(
                        rescore(&model, &seq1, &seq2, &alignment),
                        expected,
                        "{preset:?}: {seq1:?} vs {seq2:?} as {}",
                        alignment.rle()
                    );
                    assert!(alignment.matches() <= alignment.similar());
                    assert!(alignment.similar() <= alignment.len());
                }
            }
        }
    }
}

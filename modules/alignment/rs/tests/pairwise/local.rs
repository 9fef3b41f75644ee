use pairsim_alignment_rs::pairwise::{alignment, scoring, sw};

pub type Score = i32;
pub type Symbol = u8;

pub fn invrle(rle: &str) -> String {
    let gapfirst = alignment::Op::GapFirst.symbol();
    let gapsecond = alignment::Op::GapSecond.symbol();
    rle.chars()
        .map(|x| {
            if x == gapfirst {
                gapsecond
            } else if x == gapsecond {
                gapfirst
            } else {
                x
            }
        })
        .collect::<String>()
}

type Engine = sw::Engine<
    Score,
    Symbol,
    sw::storage::Best<Score>,
    sw::traceback::TraceMatrix<Score>,
    scoring::Delegate<
        scoring::symbols::Equality<Score, Symbol>,
        scoring::gaps::Affine<Score>,
        scoring::equiv::Equality,
    >,
>;

struct Workload<'a> {
    seq1: (&'a [u8], usize),
    seq2: (&'a [u8], usize),
    score: Score,
    rle: &'a str,
}

fn ensure(engine: &mut Engine, w: Workload<'_>) {
    let invrle = invrle(w.rle);

    for (seq1, seq2, rle) in [(w.seq1, w.seq2, w.rle), (w.seq2, w.seq1, invrle.as_str())] {
        let mut result = engine.scan_all(&seq1.0, &seq2.0).unwrap();
        assert_eq!(result.len(), 1);
        let result = result.pop().unwrap();

        assert_eq!(result.seq1().start, seq1.1);
        assert_eq!(result.seq2().start, seq2.1);
        assert_eq!(*result.score(), w.score);
        assert_eq!(result.rle(), rle);
        assert_eq!(
            result.seq1().len(),
            result.len() - result.count(alignment::Op::GapSecond)
        );
        assert_eq!(
            result.seq2().len(),
            result.len() - result.count(alignment::Op::GapFirst)
        );
    }
}

fn test_empty(engine: &mut Engine) {
    let workload: Vec<(&[u8], &[u8])> = vec![
        (b"ACGT", b""),
        (b"", b"ACGT"),
        (b"", b""),
        (b"ACGT", b"----"),
        (b"_", b"A"),
    ];

    for (seq1, seq2) in workload {
        assert!(engine.scan_all(&seq1, &seq2).unwrap().is_empty());
        assert!(engine.scan_all(&seq2, &seq1).unwrap().is_empty());
    }
}

fn test_no_gaps(engine: &mut Engine) {
    let workload = vec![
        Workload {
            seq1: (b"AAGAA", 1),
            seq2: (b"AGA", 0),
            score: 3,
            rle: "3=",
        },
        Workload {
            seq1: (b"AGTCCCGTGTCCCAGGGG", 0),
            seq2: (b"AGTC", 0),
            score: 4,
            rle: "4=",
        },
        Workload {
            seq1: (b"CGCGCGCGTTT", 6),
            seq2: (b"CGTTT", 0),
            score: 5,
            rle: "5=",
        },
        Workload {
            seq1: (b"AAAGGGAGGGTTTA", 3),
            seq2: (b"GGGGGGG", 0),
            score: 4,
            rle: "3=1X3=",
        },
        Workload {
            seq1: (b"NNNN===*===*===*===*===", 4),
            seq2: (b"===================", 0),
            score: 7,
            rle: "3=1X3=1X3=1X3=1X3=",
        },
        Workload {
            seq1: (b"AGAAAAAAAGGAAAAAAAGGGGG", 1),
            seq2: (b"G", 0),
            score: 1,
            rle: "1=",
        },
    ];

    for w in workload {
        ensure(engine, w);
    }
}

fn test_affine_gaps(engine: &mut Engine) {
    let workload = vec![
        Workload {
            seq1: (b"AAAAAAAAAAAAAAAA*********AAAAAAAAAAAAAAAA", 0),
            seq2: (b"AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA", 0),
            score: 19,
            rle: "16=9v16=",
        },
        Workload {
            seq1: (b"ACGTACGTACGT****_________", 0),
            seq2: (b"****ACGTACGTACGT_________ACGT*****", 4),
            score: 13,
            rle: "12=4v9=",
        },
    ];

    for w in workload {
        ensure(engine, w);
    }
}

fn test_cheap_gap_open(engine: &mut Engine) {
    let workload = vec![
        Workload {
            seq1: (b"A***AAAAAAAA***AAAAAAAA***A", 4),
            seq2: (b"AAAAAAAAAAAAAAAA", 0),
            score: 13,
            rle: "8=3v8=",
        },
        Workload {
            seq1: (b"AAAAAAA**AAAAA*****", 0),
            seq2: (b"___AAAAAAAAAAA", 3),
            score: 9,
            rle: "7=2v4=",
        },
    ];

    for w in workload {
        ensure(engine, w);
    }
}

#[test]
pub fn test_all() {
    let mut engine = Engine::new(
        sw::storage::Best::new(),
        sw::traceback::TraceMatrix::new(),
        scoring::compose(
            scoring::symbols::Equality::new(1, -2),
            scoring::gaps::Affine {
                open: -5,
                extend: -1,
            },
            scoring::equiv::Equality {},
        ),
    );
    test_empty(&mut engine);
    test_no_gaps(&mut engine);
    test_affine_gaps(&mut engine);

    engine.with_scoring(scoring::compose(
        scoring::symbols::Equality::new(1, -2),
        scoring::gaps::Affine {
            open: -1,
            extend: -1,
        },
        scoring::equiv::Equality {},
    ));
    test_cheap_gap_open(&mut engine);
}

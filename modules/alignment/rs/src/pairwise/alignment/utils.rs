use crate::Alignable;
use crate::pairwise::scoring::equiv::Classifier;
use crate::pairwise::{Op, Step};

/// Resolve diagonal `Equivalent` steps produced by the traceback into matches, mismatches
/// and equivalences according to the classifier. Other steps are passed through.
pub fn disambiguate<C, Seq1, Seq2>(
    ops: Vec<Step<u8>>,
    classifier: &C,
    seq1: &Seq1,
    seq1offset: usize,
    seq2: &Seq2,
    seq2offset: usize,
) -> Vec<Step<u8>>
where
    C: Classifier,
    Seq1: Alignable<Symbol = C::Symbol>,
    Seq2: Alignable<Symbol = C::Symbol>,
{
    let mut s1 = seq1offset;
    let mut s2 = seq2offset;
    let mut result = Vec::with_capacity(ops.len() * 2);

    for step in ops {
        let len = *step.len() as usize;
        match step.op() {
            Op::GapFirst => {
                s1 += len;
                result.push(step);
            }
            Op::GapSecond => {
                s2 += len;
                result.push(step);
            }
            Op::Match | Op::Mismatch => {
                s1 += len;
                s2 += len;
                result.push(step);
            }
            Op::Equivalent => {
                let mut current: Op = classifier.classify(seq1.at(s1), seq2.at(s2)).into();
                let mut run = 0;
                for _ in 0..len {
                    let op: Op = classifier.classify(seq1.at(s1), seq2.at(s2)).into();
                    if op != current {
                        result.extend(Step::runs(current, run));
                        current = op;
                        run = 0;
                    }
                    run += 1;
                    s1 += 1;
                    s2 += 1;
                }
                result.extend(Step::runs(current, run));
            }
        }
    }

    Step::collapse(&mut result);
    result
}

use std::borrow::Borrow;
use std::fmt::Display;
use std::iter;

use derive_getters::{Dissolve, Getters};
use eyre::Result;

use pairsim_core_rs::num::PrimUInt;

use super::op::Op;

/// Run of identical alignment operations.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Getters, Dissolve)]
pub struct Step<Len: PrimUInt> {
    /// Number of consecutive columns with the same operation. Never zero.
    len: Len,
    op: Op,
}

impl<Len: PrimUInt> Step<Len> {
    pub fn new(op: Op, len: Len) -> Result<Self> {
        if len.is_zero() {
            return Err(eyre::eyre!("Step length must be greater than zero"));
        }
        Ok(Self { len, op })
    }

    /// Merge adjacent steps with the same operation in place.
    /// Runs longer than `Len::max_value()` are kept as several consecutive steps.
    pub fn collapse(steps: &mut Vec<Step<Len>>) {
        if steps.len() < 2 {
            return;
        }

        let mut writep = 0;
        for readp in 1..steps.len() {
            let next = steps[readp];
            if steps[writep].op != next.op {
                writep += 1;
                steps[writep] = next;
                continue;
            }

            match steps[writep].len.checked_add(&next.len) {
                Some(len) => steps[writep].len = len,
                None => {
                    let overflow = next.len - (Len::max_value() - steps[writep].len);
                    steps[writep].len = Len::max_value();
                    writep += 1;
                    steps[writep] = Step {
                        len: overflow,
                        op: next.op,
                    };
                }
            }
        }
        steps.truncate(writep + 1);
    }

    pub fn rle_string(steps: impl Iterator<Item: Borrow<Step<Len>>>) -> String
    where
        Len: Display,
    {
        // ~2 digits + 1 symbol per step
        let mut result = String::with_capacity(steps.size_hint().0 * 3);
        for step in steps {
            let step = step.borrow();
            result.push_str(&step.len.to_string());
            result.push(step.op.symbol());
        }
        result
    }
}

impl Step<u8> {
    /// Split `len` consecutive columns of `op` into steps that fit into `u8`.
    pub fn runs(op: Op, len: usize) -> impl Iterator<Item = Step<u8>> {
        let full = len / u8::MAX as usize;
        let tail = (len % u8::MAX as usize) as u8;

        iter::repeat_n(Step { len: u8::MAX, op }, full)
            .chain((tail > 0).then_some(Step { len: tail, op }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_steps<L: PrimUInt>(steps: &[(Op, L)]) -> Vec<Step<L>> {
        steps
            .iter()
            .map(|(op, len)| Step::new(*op, *len).unwrap())
            .collect()
    }

    #[test]
    fn test_zero_length_is_rejected() {
        assert!(Step::new(Op::Match, 0u8).is_err());
        assert!(Step::new(Op::Match, 1u8).is_ok());
    }

    #[test]
    fn test_collapse() {
        let mut steps = to_steps::<u8>(&[
            (Op::Match, 10),
            (Op::Match, 20),
            (Op::Match, 120),
            (Op::GapFirst, 200),
            (Op::GapFirst, 100),
            (Op::Equivalent, 3),
            (Op::Match, 15),
            (Op::Match, 15),
        ]);

        Step::collapse(&mut steps);
        let expected = to_steps::<u8>(&[
            (Op::Match, 150),
            (Op::GapFirst, 255),
            (Op::GapFirst, 45),
            (Op::Equivalent, 3),
            (Op::Match, 30),
        ]);
        assert_eq!(steps, expected);

        let mut single = to_steps::<u8>(&[(Op::Mismatch, 7)]);
        Step::collapse(&mut single);
        assert_eq!(single, to_steps::<u8>(&[(Op::Mismatch, 7)]));
    }

    #[test]
    fn test_runs() {
        assert_eq!(Step::runs(Op::Match, 0).count(), 0);
        assert_eq!(
            Step::runs(Op::GapSecond, 3).collect::<Vec<_>>(),
            to_steps::<u8>(&[(Op::GapSecond, 3)])
        );
        assert_eq!(
            Step::runs(Op::Match, 600).collect::<Vec<_>>(),
            to_steps::<u8>(&[(Op::Match, 255), (Op::Match, 255), (Op::Match, 90)])
        );
    }

    #[test]
    fn test_rle_string() {
        assert_eq!(Step::rle_string(std::iter::empty::<&Step<u8>>()), "");

        let steps = to_steps::<u8>(&[(Op::Match, 1), (Op::GapFirst, 2), (Op::Equivalent, 13)]);
        assert_eq!(Step::rle_string(steps.iter()), "1=2v13~");
    }
}

use std::fmt::Debug;

/// T values are primitive integers
pub trait PrimInt: ::num::PrimInt + Debug + Default {}
impl<T: ::num::PrimInt + Debug + Default> PrimInt for T {}

/// T values are non-negative primitive integers
pub trait PrimUInt: PrimInt + ::num::Unsigned {}

impl<T: PrimInt + ::num::Unsigned> PrimUInt for T {}

/// T values are signed primitive integers that can hold alignment scores.
/// Scores must be sendable across worker threads and convertible to f64 for reporting.
pub trait Score: PrimInt + ::num::Signed + Into<f64> + Send + Sync {}

impl<T: PrimInt + ::num::Signed + Into<f64> + Send + Sync> Score for T {}

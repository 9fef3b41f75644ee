pub use cancel::Cancellation;

mod cancel;
pub mod num;
pub mod parallelism;
pub mod seq;

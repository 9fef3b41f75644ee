pub use alignment::Alignment;
pub use op::Op;
pub use step::Step;

#[allow(clippy::module_inception)]
mod alignment;
mod op;
mod step;
pub mod utils;

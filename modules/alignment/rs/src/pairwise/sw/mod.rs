pub use engine::Engine;

pub mod algo;
mod engine;
pub mod storage;
pub mod traceback;

//! Runtime evaluation of e-lang expression trees

pub mod convert;
mod environment;
mod evaluator;
pub mod io;
mod math;
mod value;

pub use environment::Environment;
pub use evaluator::Evaluator;
pub use value::{Value, ValueKind};

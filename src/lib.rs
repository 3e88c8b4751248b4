pub mod error;
pub mod tracer;
pub mod wordcount;

pub use error::{Error, Result};

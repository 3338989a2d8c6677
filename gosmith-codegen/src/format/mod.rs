//! External formatter steps and the subprocess pipeline that runs them.
//!
//! A [`FormatterStep`] is a command line. [`apply_formatter`] feeds text to
//! one step's standard input and collects its standard output;
//! [`run_pipeline`] chains several steps, each consuming the previous
//! step's output.

mod pipeline;
mod step;

pub use pipeline::{apply_formatter, run_pipeline};
pub use step::FormatterStep;

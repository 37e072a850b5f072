//! Shared plumbing for the `eclipse-dates` and `binary-params` binaries.

pub mod logging;
pub mod prompt;
pub mod report;

pub use logging::init_logging;
pub use prompt::{DATE_PROMPT, FORMAT_HINT, PromptError, read_observation_date};
pub use report::{sci, write_binary_report, write_eclipses};

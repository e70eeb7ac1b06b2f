#[macro_use]
pub mod logging;
pub mod setup;

pub use logging::init_logging;
pub use setup::{CommandLineOptions, OutputFormat, Task};

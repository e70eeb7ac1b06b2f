use env_logger::{Builder, Env};
use log::LevelFilter;
use std::io::Write;

pub use colored::Colorize;

#[macro_export]
macro_rules! print_red {
    ($($arg:tt)*) => {
        println!("{}", $crate::common::logging::Colorize::red(format!($($arg)*).as_str()));
    };
}

#[macro_export]
macro_rules! print_green {
    ($($arg:tt)*) => {
        println!("{}", $crate::common::logging::Colorize::green(format!($($arg)*).as_str()));
    };
}

#[macro_export]
macro_rules! print_yellow {
    ($($arg:tt)*) => {
        println!("{}", $crate::common::logging::Colorize::yellow(format!($($arg)*).as_str()));
    };
}

#[macro_export]
macro_rules! print_blue {
    ($($arg:tt)*) => {
        println!("{}", $crate::common::logging::Colorize::blue(format!($($arg)*).as_str()));
    };
}

/// Filter used when `RUST_LOG` is unset.
pub fn default_filter(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Installs the global logger. `RUST_LOG` wins over `verbose`.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging(verbose: bool) {
    let filter = default_filter(verbose).to_string().to_lowercase();
    let _ = Builder::from_env(Env::default().default_filter_or(filter))
        .format(|buf, record| {
            let file = record.file().unwrap_or("unknown");
            let line = record.line().unwrap_or(0);
            writeln!(
                buf,
                "{} [{}:{}] {}",
                record.level(),
                file,
                line,
                record.args()
            )
        })
        .try_init();
}

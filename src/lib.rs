// Copyright (c) 2025 Sean McNamara <smcnam@gmail.com>
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Small leveled logger.
//!
//! Records are timestamped, tagged with an identifier (the pid unless
//! overridden) and written to stdout, to an append-only log file, or both:
//!
//! ```text
//! 5/3/2024 9:7:4 4242 INFO: hello
//! ```
//!
//! Build a [`Logger`] once from [`LogOptions`] and pass it to whatever needs
//! to log. `fatal` and [`Logger::init_or_exit`] terminate the process.

pub mod config;
pub mod constants;
pub mod format;
pub mod level;
pub mod logger;
pub mod options;

pub use config::Config;
pub use format::{Record, TimestampFormat};
pub use level::Level;
pub use logger::Logger;
pub use options::{LogOptions, LogPath};

/// `log_info!(logger, "loaded {} items", n)`
#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $logger.info(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)*) => {
        $logger.warn(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        $logger.debug(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {
        $logger.error(format_args!($($arg)*))
    };
}

/// Logs and exits the process.
#[macro_export]
macro_rules! log_fatal {
    ($logger:expr, $($arg:tt)*) => {
        $logger.fatal(format_args!($($arg)*))
    };
}

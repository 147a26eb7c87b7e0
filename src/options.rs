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

//! Logger configuration.
//!
//! [`LogOptions`] is a plain builder: every setter overwrites one field, so
//! when the same field is set twice the last call wins.

use std::path::{Path, PathBuf};

use crate::constants::DEFAULT_LOG_FILE;
use crate::format::TimestampFormat;

/// Options consumed by [`Logger::init`](crate::Logger::init).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogOptions {
    pub(crate) id: u32,
    pub(crate) write_to_terminal: bool,
    pub(crate) write_to_file: bool,
    pub(crate) debug: bool,
    pub(crate) color: bool,
    pub(crate) timestamp: TimestampFormat,
    pub(crate) log_file: String,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            id: std::process::id(),
            write_to_terminal: true,
            write_to_file: false,
            debug: false,
            color: true,
            timestamp: TimestampFormat::Standard,
            log_file: DEFAULT_LOG_FILE.to_string(),
        }
    }
}

impl LogOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the identifier written on every record (defaults to the pid).
    pub fn id(mut self, id: u32) -> Self {
        self.id = id;
        self
    }

    pub fn terminal(mut self, enabled: bool) -> Self {
        self.write_to_terminal = enabled;
        self
    }

    /// Let `debug` records through.
    pub fn debug(mut self, enabled: bool) -> Self {
        self.debug = enabled;
        self
    }

    /// Set the log file path. Also turns file output on.
    pub fn log_file(mut self, path: impl Into<String>) -> Self {
        self.log_file = path.into();
        self.write_to_file = true;
        self
    }

    /// Wrap terminal labels in ANSI color codes.
    pub fn color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    pub fn timestamp(mut self, format: TimestampFormat) -> Self {
        self.timestamp = format;
        self
    }
}

/// A log file path split into its directory and file name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LogPath {
    directory: String,
    filename: String,
}

impl LogPath {
    /// Split on the last `/`. A path without any `/` has an empty directory.
    pub fn split(path: &str) -> Self {
        match path.rsplit_once('/') {
            Some((directory, filename)) => Self {
                directory: directory.to_string(),
                filename: filename.to_string(),
            },
            None => Self {
                directory: String::new(),
                filename: path.to_string(),
            },
        }
    }

    pub fn directory(&self) -> &str {
        &self.directory
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Path of the file to open, relative to the working directory unless
    /// the configured path was absolute.
    pub fn file_path(&self) -> PathBuf {
        Path::new(&self.directory).join(&self.filename)
    }
}

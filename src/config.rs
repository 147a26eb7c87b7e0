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

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::format::TimestampFormat;
use crate::options::LogOptions;

/// Configuration file structure
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    /// Identifier written on every record (defaults to the pid)
    pub id: Option<u32>,

    /// Write records to stdout
    pub terminal: Option<bool>,

    /// Let debug records through
    pub debug: Option<bool>,

    /// Log file path; setting it turns file output on
    pub log_file: Option<String>,

    /// Color terminal labels
    pub color: Option<bool>,

    /// Write `hour:hour:second` timestamps like older log files
    pub legacy_timestamp: Option<bool>,
}

impl Config {
    /// Load config from a file, or return default if file doesn't exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Options described by this file alone, on top of the built-in defaults.
    pub fn to_options(&self) -> LogOptions {
        let mut options = LogOptions::new();
        if let Some(id) = self.id {
            options = options.id(id);
        }
        if let Some(terminal) = self.terminal {
            options = options.terminal(terminal);
        }
        if let Some(debug) = self.debug {
            options = options.debug(debug);
        }
        if let Some(log_file) = &self.log_file {
            options = options.log_file(log_file.clone());
        }
        if let Some(color) = self.color {
            options = options.color(color);
        }
        if self.legacy_timestamp == Some(true) {
            options = options.timestamp(TimestampFormat::Legacy);
        }
        options
    }
}

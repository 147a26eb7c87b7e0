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

use clap::Parser;
use std::path::PathBuf;

use plainlog::{Config, Level, LogOptions, TimestampFormat};

#[derive(Parser)]
#[command(name = "plainlog")]
#[command(about = "Write one leveled log record to the terminal and/or a log file")]
#[command(version)]
pub struct Cli {
    /// Path to config file (defaults to plainlog.toml in current directory if it exists)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Identifier written on the record (defaults to the pid)
    #[arg(long)]
    pub id: Option<u32>,

    /// Append the record to this file, creating missing directories
    #[arg(long)]
    pub log_file: Option<String>,

    /// Do not write to stdout
    #[arg(long)]
    pub no_terminal: bool,

    /// Emit debug records
    #[arg(long)]
    pub debug: bool,

    /// Plain labels on stdout
    #[arg(long)]
    pub no_color: bool,

    /// Write `hour:hour:second` timestamps
    #[arg(long)]
    pub legacy_timestamp: bool,

    /// Record level (info, warn, debug, error, fatal)
    pub level: Level,

    /// Message words, joined with single spaces
    #[arg(required = true)]
    pub message: Vec<String>,
}

impl Cli {
    /// Config file values first, then anything given on the command line.
    pub fn log_options(&self, config: &Config) -> LogOptions {
        let mut options = config.to_options();
        if let Some(id) = self.id {
            options = options.id(id);
        }
        if let Some(log_file) = &self.log_file {
            options = options.log_file(log_file.clone());
        }
        if self.no_terminal {
            options = options.terminal(false);
        }
        if self.debug {
            options = options.debug(true);
        }
        if self.no_color {
            options = options.color(false);
        }
        if self.legacy_timestamp {
            options = options.timestamp(TimestampFormat::Legacy);
        }
        options
    }

    pub fn message(&self) -> String {
        self.message.join(" ")
    }
}

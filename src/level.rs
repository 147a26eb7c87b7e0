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

use colored::Color;

/// Severity of a log record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warn,
    Debug,
    Error,
    Fatal,
}

impl Level {
    /// Label written in front of the message, trailing space included.
    pub fn label(self) -> &'static str {
        match self {
            Level::Info => "INFO: ",
            Level::Warn => "WARN: ",
            Level::Debug => "Debug: ",
            Level::Error => "ERROR: ",
            Level::Fatal => "FATAL: ",
        }
    }

    /// Terminal color of the label.
    pub fn color(self) -> Color {
        match self {
            Level::Info => Color::Cyan,
            Level::Warn | Level::Debug => Color::Yellow,
            Level::Error | Level::Fatal => Color::Red,
        }
    }
}

impl std::str::FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "debug" => Ok(Self::Debug),
            "error" => Ok(Self::Error),
            "fatal" => Ok(Self::Fatal),
            other => Err(format!("Invalid log level: {}", other)),
        }
    }
}

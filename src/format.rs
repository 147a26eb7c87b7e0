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

//! Record layout for the terminal and the log file.
//!
//! File lines are `<timestamp> <id> <LABEL><message>` with no escape codes.
//! Terminal lines are `<timestamp> <id> <LABEL> <message>`, where the label
//! may be wrapped in an ANSI color.

use chrono::NaiveDateTime;
use colored::Colorize;

use crate::level::Level;

/// How the timestamp at the start of each record is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimestampFormat {
    /// `day/month/year hour:minute:second`, unpadded.
    #[default]
    Standard,
    /// `day/month/year hour:hour:second`. Matches log files written by the
    /// older tooling, which printed the hour where the minutes belong.
    Legacy,
}

impl TimestampFormat {
    pub fn render(self, at: &NaiveDateTime) -> String {
        let pattern = match self {
            TimestampFormat::Standard => "%-d/%-m/%Y %-H:%-M:%-S",
            TimestampFormat::Legacy => "%-d/%-m/%Y %-H:%-H:%-S",
        };
        at.format(pattern).to_string()
    }
}

/// One formatted log record, ready to be written out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub timestamp: String,
    pub id: u32,
    pub level: Level,
    pub message: String,
}

impl Record {
    pub fn file_line(&self) -> String {
        format!(
            "{} {} {}{}\n",
            self.timestamp,
            self.id,
            self.level.label(),
            self.message
        )
    }

    pub fn terminal_line(&self, color: bool) -> String {
        let label = self.level.label();
        if color {
            format!(
                "{} {} {} {}\n",
                self.timestamp,
                self.id,
                label.color(self.level.color()),
                self.message
            )
        } else {
            format!("{} {} {} {}\n", self.timestamp, self.id, label, self.message)
        }
    }
}

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

mod cli;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use cli::Cli;
use plainlog::constants::DEFAULT_CONFIG_FILE;
use plainlog::{Config, Logger};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load config from specified path or default plainlog.toml
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    let config = Config::load(&config_path)?;

    let mut logger = Logger::init_or_exit(cli.log_options(&config));
    let message = cli.message();

    // Fatal records exit the process inside `log`.
    logger.log(cli.level, &message)?;

    logger.close()
}

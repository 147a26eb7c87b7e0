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

/// Log file used when file output is enabled without an explicit path.
pub const DEFAULT_LOG_FILE: &str = "log/log.log";

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "plainlog.toml";

/// rwxr-xr-x
pub const LOG_DIR_MODE: u32 = 0o755;

/// rw-rw-r--
pub const LOG_FILE_MODE: u32 = 0o664;

/// Exit status for `fatal` and for initialization failures.
pub const FATAL_EXIT_CODE: i32 = 1;

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
use chrono::Local;
use std::fmt::Display;
use std::fs::{DirBuilder, File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use crate::constants::{FATAL_EXIT_CODE, LOG_DIR_MODE, LOG_FILE_MODE};
use crate::format::{Record, TimestampFormat};
use crate::level::Level;
use crate::options::{LogOptions, LogPath};

/// Leveled logger writing to the terminal, a log file, or both.
///
/// Each record goes out with a single unbuffered write, so nothing is lost
/// if the process exits right after a call returns.
///
/// # Example
///
/// ```no_run
/// use plainlog::{LogOptions, Logger};
///
/// fn main() -> anyhow::Result<()> {
///     let mut logger = Logger::init(LogOptions::new().log_file("out/app.log"))?;
///     logger.info("hello");
///     logger.close()
/// }
/// ```
#[derive(Debug)]
pub struct Logger {
    id: u32,
    write_to_terminal: bool,
    write_to_file: bool,
    debug: bool,
    color: bool,
    timestamp: TimestampFormat,
    log_file: String,
    path: LogPath,
    file: Option<File>,
}

impl Logger {
    /// Build a logger from `options`, creating the log directory and opening
    /// the log file in append mode when file output is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if the log directory cannot be created or the log
    /// file cannot be opened.
    pub fn init(options: LogOptions) -> Result<Self> {
        let path = LogPath::split(&options.log_file);

        let file = if options.write_to_file {
            Some(open_log_file(&path)?)
        } else {
            None
        };

        Ok(Self {
            id: options.id,
            write_to_terminal: options.write_to_terminal,
            write_to_file: options.write_to_file,
            debug: options.debug,
            color: options.color,
            timestamp: options.timestamp,
            log_file: options.log_file,
            path,
            file,
        })
    }

    /// Like [`Logger::init`], but reports the failure on stderr and exits the
    /// process instead of returning it.
    pub fn init_or_exit(options: LogOptions) -> Self {
        match Self::init(options) {
            Ok(logger) => logger,
            Err(err) => {
                eprintln!("plainlog: {:#}", err);
                std::process::exit(FATAL_EXIT_CODE);
            }
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn terminal(&self) -> bool {
        self.write_to_terminal
    }

    /// The log file path as configured, before splitting. When no path was
    /// set this is the default `log/log.log`, even though file output is off.
    pub fn log_file(&self) -> &str {
        &self.log_file
    }

    pub fn log_path(&self) -> &LogPath {
        &self.path
    }

    pub fn writes_to_file(&self) -> bool {
        self.write_to_file
    }

    pub fn debug_enabled(&self) -> bool {
        self.debug
    }

    pub fn info(&self, message: impl Display) {
        let _ = self.log(Level::Info, message);
    }

    pub fn warn(&self, message: impl Display) {
        let _ = self.log(Level::Warn, message);
    }

    /// Dropped unless debug output was enabled at init.
    pub fn debug(&self, message: impl Display) {
        let _ = self.log(Level::Debug, message);
    }

    /// Log an error value through its `Display` message.
    pub fn error(&self, err: impl Display) {
        let _ = self.log(Level::Error, err);
    }

    /// Write a `FATAL` record, flush the log file and exit the process.
    pub fn fatal(&self, message: impl Display) -> ! {
        let _ = self.write_record(Level::Fatal, message);
        if let Some(file) = &self.file {
            let _ = sync_log_file(file);
        }
        std::process::exit(FATAL_EXIT_CODE);
    }

    /// Write one record to every enabled output.
    ///
    /// The leveled methods ignore write failures; this returns them. Both
    /// outputs are attempted even if the first one fails. `Level::Fatal`
    /// goes through [`Logger::fatal`] and never returns.
    pub fn log(&self, level: Level, message: impl Display) -> Result<()> {
        match level {
            Level::Fatal => self.fatal(message),
            Level::Debug if !self.debug => Ok(()),
            _ => self.write_record(level, message),
        }
    }

    fn write_record(&self, level: Level, message: impl Display) -> Result<()> {
        let record = Record {
            timestamp: self.timestamp.render(&Local::now().naive_local()),
            id: self.id,
            level,
            message: message.to_string(),
        };

        let terminal = if self.write_to_terminal {
            write_terminal(&record.terminal_line(self.color))
        } else {
            Ok(())
        };
        let file = match &self.file {
            Some(file) => self.write_file(file, &record.file_line()),
            None => Ok(()),
        };

        terminal.and(file)
    }

    /// Flush and release the log file. Calling it again, or on a logger
    /// without a file, does nothing.
    pub fn close(&mut self) -> Result<()> {
        let Some(file) = self.file.take() else {
            return Ok(());
        };

        sync_log_file(&file).with_context(|| {
            format!(
                "Failed to flush log file: {}",
                self.path.file_path().display()
            )
        })
    }

    fn write_file(&self, mut file: &File, line: &str) -> Result<()> {
        file.write_all(line.as_bytes()).with_context(|| {
            format!(
                "Failed to write log file: {}",
                self.path.file_path().display()
            )
        })
    }
}

/// Flush file contents to disk. Character devices and pipes (`/dev/null`,
/// a FIFO) reject fsync with `InvalidInput`; there is nothing to flush there.
fn sync_log_file(file: &File) -> io::Result<()> {
    match file.sync_all() {
        Err(err) if err.kind() == io::ErrorKind::InvalidInput => Ok(()),
        other => other,
    }
}

fn write_terminal(line: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(line.as_bytes())
        .and_then(|_| stdout.flush())
        .context("Failed to write to terminal")
}

fn open_log_file(path: &LogPath) -> Result<File> {
    let directory = path.directory();
    if !directory.is_empty() && !Path::new(directory).exists() {
        create_log_dir(directory)
            .with_context(|| format!("Failed to create log directory: {}", directory))?;
    }

    let file_path = path.file_path();
    let mut options = OpenOptions::new();
    options.create(true).append(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(LOG_FILE_MODE);
    }

    options
        .open(&file_path)
        .with_context(|| format!("Failed to open log file: {}", file_path.display()))
}

fn create_log_dir(directory: &str) -> io::Result<()> {
    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(LOG_DIR_MODE);
    }
    builder.create(directory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn file_logger(dir: &TempDir, relative_path: &str) -> Logger {
        let path = dir.path().join(relative_path);
        Logger::init(
            LogOptions::new()
                .id(4242)
                .terminal(false)
                .log_file(path.to_string_lossy().into_owned()),
        )
        .unwrap()
    }

    fn read_lines(dir: &TempDir, relative_path: &str) -> Vec<String> {
        fs::read_to_string(dir.path().join(relative_path))
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_default_logger() {
        let mut logger = Logger::init(LogOptions::new()).unwrap();

        assert_eq!(logger.id(), std::process::id());
        assert!(logger.terminal());
        assert!(!logger.writes_to_file());
        assert!(!logger.debug_enabled());
        assert_eq!(logger.log_file(), "log/log.log");
        assert!(logger.close().is_ok());
    }

    #[test]
    fn test_init_creates_missing_directory() {
        let dir = TempDir::new().unwrap();
        let mut logger = file_logger(&dir, "nested/deeper/app.log");

        assert!(dir.path().join("nested/deeper").is_dir());
        assert!(dir.path().join("nested/deeper/app.log").is_file());
        assert_eq!(logger.log_path().filename(), "app.log");
        logger.close().unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_directory_and_file_modes() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let mut logger = file_logger(&dir, "modes/app.log");
        logger.close().unwrap();

        // The process umask can only clear bits.
        let dir_mode = fs::metadata(dir.path().join("modes")).unwrap().permissions().mode();
        let file_mode = fs::metadata(dir.path().join("modes/app.log"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(dir_mode & 0o777 & !LOG_DIR_MODE, 0);
        assert_eq!(file_mode & 0o777 & !LOG_FILE_MODE, 0);
    }

    #[test]
    fn test_each_level_appends_one_line() {
        let dir = TempDir::new().unwrap();
        let mut logger = file_logger(&dir, "levels.log");

        logger.info("first");
        logger.warn("second");
        logger.error(io::Error::new(io::ErrorKind::NotFound, "missing thing"));
        logger.close().unwrap();

        let lines = read_lines(&dir, "levels.log");
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with(" 4242 INFO: first"));
        assert!(lines[1].ends_with(" 4242 WARN: second"));
        assert!(lines[2].ends_with(" 4242 ERROR: missing thing"));
    }

    #[test]
    fn test_file_records_have_no_color_codes() {
        let dir = TempDir::new().unwrap();
        let mut logger = file_logger(&dir, "plain.log");

        logger.error(anyhow::anyhow!("boom"));
        logger.close().unwrap();

        let contents = fs::read_to_string(dir.path().join("plain.log")).unwrap();
        assert!(!contents.contains('\u{1b}'));
        assert!(contents.ends_with("ERROR: boom\n"));
    }

    #[test]
    fn test_debug_is_gated() {
        let dir = TempDir::new().unwrap();
        let mut quiet = file_logger(&dir, "debug.log");
        quiet.debug("hidden");
        quiet.close().unwrap();
        assert!(read_lines(&dir, "debug.log").is_empty());

        let path = dir.path().join("debug.log");
        let mut verbose = Logger::init(
            LogOptions::new()
                .terminal(false)
                .debug(true)
                .log_file(path.to_string_lossy().into_owned()),
        )
        .unwrap();
        verbose.debug("shown");
        verbose.close().unwrap();

        let lines = read_lines(&dir, "debug.log");
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("Debug: shown"));
    }

    #[test]
    fn test_reinit_appends() {
        let dir = TempDir::new().unwrap();

        let mut first = file_logger(&dir, "append/app.log");
        first.info("one");
        first.close().unwrap();

        let mut second = file_logger(&dir, "append/app.log");
        second.info("two");
        second.close().unwrap();

        let lines = read_lines(&dir, "append/app.log");
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("INFO: one"));
        assert!(lines[1].ends_with("INFO: two"));
    }

    #[test]
    fn test_close_twice() {
        let dir = TempDir::new().unwrap();
        let mut logger = file_logger(&dir, "close.log");

        assert!(logger.close().is_ok());
        assert!(logger.close().is_ok());

        // Records after close go nowhere.
        logger.info("after close");
        assert!(read_lines(&dir, "close.log").is_empty());
    }

    #[test]
    fn test_no_outputs_is_silent() {
        let logger = Logger::init(LogOptions::new().terminal(false)).unwrap();

        assert!(logger.log(Level::Info, "nowhere").is_ok());
        assert!(logger.log(Level::Error, "still nowhere").is_ok());
    }

    #[test]
    fn test_init_fails_when_directory_is_a_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("blocker"), "not a directory").unwrap();

        let path = dir.path().join("blocker/app.log");
        let err = Logger::init(LogOptions::new().log_file(path.to_string_lossy().into_owned()))
            .unwrap_err();

        assert!(format!("{:#}", err).contains("Failed to open log file"));
    }

    #[test]
    fn test_init_fails_when_parent_directory_cannot_be_created() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("blocker"), "not a directory").unwrap();

        let path = dir.path().join("blocker/sub/app.log");
        let err = Logger::init(LogOptions::new().log_file(path.to_string_lossy().into_owned()))
            .unwrap_err();

        let message = format!("{:#}", err);
        assert!(message.contains("Failed to create log directory"));
        assert!(message.contains("blocker/sub"));
        assert!(!dir.path().join("blocker/sub").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_close_on_character_device() {
        let mut logger =
            Logger::init(LogOptions::new().terminal(false).log_file("/dev/null")).unwrap();

        assert!(logger.log(Level::Info, "discarded").is_ok());
        assert!(logger.close().is_ok());
        assert!(logger.close().is_ok());
    }

    #[test]
    fn test_legacy_timestamp_layout() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("legacy.log");
        let mut logger = Logger::init(
            LogOptions::new()
                .id(1)
                .terminal(false)
                .timestamp(TimestampFormat::Legacy)
                .log_file(path.to_string_lossy().into_owned()),
        )
        .unwrap();
        logger.info("old style");
        logger.close().unwrap();

        let line = read_lines(&dir, "legacy.log").remove(0);
        let clock = line.split(' ').nth(1).unwrap();
        let parts: Vec<&str> = clock.split(':').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], parts[1]);
    }
}

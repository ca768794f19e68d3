use std::{
    fs::{self, File},
    io::{self, Write},
    path::PathBuf,
};

use env_logger::fmt::Color;
use log::LevelFilter;

use crate::{config::LoggingSettings, tee::TeeStream, utils::get_path};

pub fn get_log_path(settings: &LoggingSettings) -> Option<PathBuf> {
    if settings.save_as == "file" {
        Some(get_path(&settings.path))
    } else if settings.save_as == "dir" {
        let yyyy_mm_dd = chrono::Local::now().format("%Y-%m-%d");
        let dir = get_path(&settings.path);
        let mut log_file = 1;

        // Skip numbers already taken by an earlier run.
        while dir.join(format!("{}-{}.log", yyyy_mm_dd, log_file)).exists() {
            log_file += 1;
        }

        Some(dir.join(format!("{}-{}.log", yyyy_mm_dd, log_file)))
    } else {
        None
    }
}

pub fn get_log_file(settings: &LoggingSettings) -> Option<Box<File>> {
    let file_path = get_log_path(settings)?;

    if let Some(parent) = file_path.parent() {
        let _ = fs::create_dir_all(parent);
    }

    let file = File::create(file_path).ok()?;
    Some(Box::new(file))
}

pub fn stdout_target() -> Box<dyn io::Write + Send> {
    Box::new(io::stdout())
}

/// Tees output to the configured log file and stdout. `None` when the
/// settings do not resolve to a log file.
pub fn tee_target(settings: &LoggingSettings) -> Option<TeeStream> {
    let file = get_log_file(settings)?;

    Some(TeeStream::with_timestamps(
        file,
        stdout_target(),
        settings.timestamp_file,
        settings.timestamp_console,
    ))
}

pub fn setup_logger(settings: &LoggingSettings) {
    let mut logger = env_logger::Builder::new();
    logger
        .filter_level(LevelFilter::Info)
        .format(|buf, record| {
            // Time color.
            let mut time_style = buf.style();
            time_style.set_color(Color::Cyan);

            // Get color for level.
            let level_style = buf.default_level_style(record.level());

            // Get color for target.
            let mut target_style = buf.style();
            target_style.set_color(Color::Magenta);

            writeln!(
                buf,
                "[{}] {} {} - {}",
                time_style.value(chrono::Local::now().format("%Y-%m-%d %H:%M:%S")),
                level_style.value(record.level()),
                target_style.value(record.target()),
                record.args()
            )
        });

    // Mirror every record into the log file when one is configured.
    match tee_target(settings) {
        Some(stream) => {
            let pipe: Box<dyn io::Write + Send> = stream.into();
            logger.target(env_logger::Target::Pipe(pipe)).init();
        }
        None => logger.init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(save_as: &str, path: &str) -> LoggingSettings {
        LoggingSettings {
            save_as: save_as.to_string(),
            path: path.to_string(),
            timestamp_console: false,
            timestamp_file: true,
        }
    }

    #[test]
    fn file_mode_uses_the_configured_path() {
        let settings = settings("file", "/tmp/minitee-test.log");
        assert_eq!(
            get_log_path(&settings),
            Some(PathBuf::from("/tmp/minitee-test.log"))
        );
    }

    #[test]
    fn dir_mode_skips_existing_numbered_files() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings("dir", dir.path().to_str().unwrap());

        let first = get_log_path(&settings).unwrap();
        assert!(first.to_str().unwrap().ends_with("-1.log"));

        File::create(&first).unwrap();
        let second = get_log_path(&settings).unwrap();
        assert!(second.to_str().unwrap().ends_with("-2.log"));
    }

    #[test]
    fn console_only_has_no_log_path() {
        let settings = settings("none", "./logs");
        assert_eq!(get_log_path(&settings), None);
        assert!(get_log_file(&settings).is_none());
        assert!(tee_target(&settings).is_none());
    }

    #[test]
    fn get_log_file_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("logs");
        let settings = settings("dir", nested.to_str().unwrap());

        assert!(get_log_file(&settings).is_some());
        assert!(nested.exists());
    }
}

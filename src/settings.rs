use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Error;

const APP_DIR_NAME: &str = "pocket-snake";
const SETTINGS_FILE_NAME: &str = "settings.json";

/// Optional user defaults read at startup.
///
/// Every field may be omitted; CLI flags take precedence over whatever is
/// present here.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub tick_ms: Option<u64>,
    pub theme: Option<String>,
    pub display_width: Option<i32>,
    pub display_height: Option<i32>,
    pub cell_size: Option<i32>,
}

/// Returns the platform-correct settings file path.
#[must_use]
pub fn settings_path() -> PathBuf {
    let mut base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(SETTINGS_FILE_NAME);
    base
}

/// Loads user settings from disk.
///
/// A missing file is first-run normal and yields defaults. A file that
/// exists but cannot be read or parsed is an error, surfaced before the
/// terminal enters raw mode.
pub fn load_settings() -> Result<Settings, Error> {
    load_settings_from_path(&settings_path())
}

fn load_settings_from_path(path: &Path) -> Result<Settings, Error> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Settings::default()),
        Err(e) => return Err(Error::Io(e)),
    };

    serde_json::from_str(&raw).map_err(|source| Error::Malformed {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::{load_settings_from_path, Settings};

    #[test]
    fn missing_settings_file_yields_defaults() {
        let path = unique_test_path("missing");
        // Deliberately do not create the file.
        let settings = load_settings_from_path(&path).expect("missing file should yield defaults");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn partial_settings_parse_with_remaining_defaults() {
        let path = unique_test_path("partial");
        write_test_file(&path, r#"{ "tick_ms": 150 }"#);

        let settings = load_settings_from_path(&path).expect("partial file should parse");

        assert_eq!(settings.tick_ms, Some(150));
        assert_eq!(settings.theme, None);
        assert_eq!(settings.display_width, None);

        cleanup_test_path(&path);
    }

    #[test]
    fn full_settings_parse() {
        let path = unique_test_path("full");
        write_test_file(
            &path,
            r#"{
                "tick_ms": 120,
                "theme": "ocean",
                "display_width": 400,
                "display_height": 480,
                "cell_size": 10
            }"#,
        );

        let settings = load_settings_from_path(&path).expect("full file should parse");

        assert_eq!(settings.tick_ms, Some(120));
        assert_eq!(settings.theme.as_deref(), Some("ocean"));
        assert_eq!(settings.display_width, Some(400));
        assert_eq!(settings.display_height, Some(480));
        assert_eq!(settings.cell_size, Some(10));

        cleanup_test_path(&path);
    }

    #[test]
    fn malformed_settings_file_is_an_error() {
        let path = unique_test_path("malformed");
        write_test_file(&path, "not-json");

        assert!(load_settings_from_path(&path).is_err());

        cleanup_test_path(&path);
    }

    fn write_test_file(path: &PathBuf, contents: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("test parent directory should be creatable");
        }
        fs::write(path, contents).expect("test file write should succeed");
    }

    fn unique_test_path(label: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after epoch")
            .as_nanos();

        std::env::temp_dir()
            .join("pocket-snake-settings-tests")
            .join(format!("{label}-{nanos}.json"))
    }

    fn cleanup_test_path(path: &PathBuf) {
        let _ = fs::remove_file(path);
        if let Some(parent) = path.parent() {
            let _ = fs::remove_dir(parent);
        }
    }
}

// src/config/saves.rs
//! セーブデータの置き場所の設定だよ。

use std::env;
use std::path::PathBuf;

use log::debug;

/// この環境変数があれば、セーブディレクトリをそこに変えるよ。
pub const SAVES_DIR_ENV: &str = "KLONDIKE_SAVES_DIR";
pub const DEFAULT_SAVES_DIR: &str = "saves";
pub const DEFAULT_SAVE_EXTENSION: &str = "json";

/// セーブディレクトリの設定。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveConfig {
    pub directory: PathBuf,
    /// セーブファイルの拡張子 (ドットなし)。
    pub extension: String,
}

impl Default for SaveConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(DEFAULT_SAVES_DIR),
            extension: DEFAULT_SAVE_EXTENSION.to_string(),
        }
    }
}

impl SaveConfig {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self { directory: directory.into(), ..Self::default() }
    }

    /// 環境変数 `KLONDIKE_SAVES_DIR` を見て設定を作る。
    /// 無いか空っぽならデフォルトのまま。
    pub fn from_env() -> Self {
        match env::var(SAVES_DIR_ENV) {
            Ok(dir) if !dir.trim().is_empty() => {
                debug!("Save directory overridden by {}: {}", SAVES_DIR_ENV, dir);
                Self::new(dir)
            }
            _ => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_saves_json() {
        let config = SaveConfig::default();
        assert_eq!(config.directory, PathBuf::from("saves"));
        assert_eq!(config.extension, "json");
    }

    #[test]
    fn new_keeps_default_extension() {
        let config = SaveConfig::new("/tmp/klondike");
        assert_eq!(config.directory, PathBuf::from("/tmp/klondike"));
        assert_eq!(config.extension, DEFAULT_SAVE_EXTENSION);
    }

    #[test]
    fn from_env_honours_override_and_ignores_blank() {
        // この環境変数を触るテストはここだけ
        env::set_var(SAVES_DIR_ENV, "/tmp/klondike_from_env");
        assert_eq!(SaveConfig::from_env().directory, PathBuf::from("/tmp/klondike_from_env"));

        env::set_var(SAVES_DIR_ENV, "   ");
        assert_eq!(SaveConfig::from_env(), SaveConfig::default(), "空っぽならデフォルト");

        env::remove_var(SAVES_DIR_ENV);
        assert_eq!(SaveConfig::from_env(), SaveConfig::default());
    }
}

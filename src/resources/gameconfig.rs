//! Host configuration read from an INI file.
//!
//! Every key is optional; anything missing or malformed keeps its default,
//! so the demo always starts even without a config file.
//!
//! ```ini
//! [window]
//! width = 1080
//! height = 1080
//! target_fps = 60
//! vsync = true
//! title = Sprite Demo
//!
//! [debug]
//! show_bounds = false
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{debug, info};
use std::path::{Path, PathBuf};

const WINDOW: &str = "window";
const DEBUG: &str = "debug";

/// `[window]` section.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowSettings {
    pub width: u32,
    pub height: u32,
    pub target_fps: u32,
    pub vsync: bool,
    pub title: String,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 1080,
            height: 1080,
            target_fps: 60,
            vsync: true,
            title: "Sprite Demo".to_string(),
        }
    }
}

/// `[debug]` section.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DebugSettings {
    /// Outline sprite bounds while rendering.
    pub show_bounds: bool,
}

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub window: WindowSettings,
    pub debug: DebugSettings,
    /// File read by [`load_from_file`](Self::load_from_file) and written by
    /// [`save_to_file`](Self::save_to_file).
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self::with_path("./config.ini")
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            window: WindowSettings::default(),
            debug: DebugSettings::default(),
            config_path: path.into(),
        }
    }

    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut ini = Ini::new();
        ini.load(&self.config_path)
            .map_err(|e| format!("cannot read {}: {}", self.config_path.display(), e))?;
        self.apply(&ini);
        info!(
            "Config {}: {}x{} @ {} fps, vsync {}, bounds overlay {}",
            self.config_path.display(),
            self.window.width,
            self.window.height,
            self.window.target_fps,
            self.window.vsync,
            self.debug.show_bounds
        );
        Ok(())
    }

    pub fn load_from_str(&mut self, contents: &str) -> Result<(), String> {
        let mut ini = Ini::new();
        ini.read(contents.to_string())
            .map_err(|e| format!("cannot parse config: {}", e))?;
        self.apply(&ini);
        Ok(())
    }

    fn apply(&mut self, ini: &Ini) {
        let uint = |key: &str| ini.getuint(WINDOW, key).ok().flatten().map(|v| v as u32);
        let w = &mut self.window;
        w.width = uint("width").unwrap_or(w.width);
        w.height = uint("height").unwrap_or(w.height);
        w.target_fps = uint("target_fps").unwrap_or(w.target_fps);
        w.vsync = ini.getbool(WINDOW, "vsync").ok().flatten().unwrap_or(w.vsync);
        if let Some(title) = ini.get(WINDOW, "title") {
            w.title = title;
        }

        if let Some(show) = ini.getbool(DEBUG, "show_bounds").ok().flatten() {
            self.debug.show_bounds = show;
        }
    }

    fn to_ini(&self) -> Ini {
        let mut ini = Ini::new();
        let w = &self.window;
        for (key, value) in [
            ("width", w.width.to_string()),
            ("height", w.height.to_string()),
            ("target_fps", w.target_fps.to_string()),
            ("vsync", w.vsync.to_string()),
            ("title", w.title.clone()),
        ] {
            ini.set(WINDOW, key, Some(value));
        }
        ini.set(DEBUG, "show_bounds", Some(self.debug.show_bounds.to_string()));
        ini
    }

    /// Write the current settings, creating the file if needed.
    pub fn save_to_file(&self) -> Result<(), String> {
        write_ini(&self.to_ini(), &self.config_path)
    }

    pub fn window_size(&self) -> (u32, u32) {
        (self.window.width, self.window.height)
    }
}

fn write_ini(ini: &Ini, path: &Path) -> Result<(), String> {
    ini.write(path)
        .map_err(|e| format!("cannot write {}: {}", path.display(), e))?;
    debug!("Saved config to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::new();
        assert_eq!(config.window_size(), (1080, 1080));
        assert_eq!(config.window.target_fps, 60);
        assert!(!config.debug.show_bounds);
    }

    #[test]
    fn test_partial_ini_keeps_defaults() {
        let mut config = GameConfig::new();
        config
            .load_from_str("[window]\nwidth = 800\n\n[debug]\nshow_bounds = true\n")
            .unwrap();
        assert_eq!(config.window.width, 800);
        assert_eq!(config.window.height, 1080);
        assert!(config.debug.show_bounds);
        assert!(config.window.vsync);
    }

    #[test]
    fn test_malformed_value_keeps_default() {
        let mut config = GameConfig::new();
        config
            .load_from_str("[window]\ntarget_fps = fast\nvsync = false\n")
            .unwrap();
        assert_eq!(config.window.target_fps, 60);
        assert!(!config.window.vsync);
    }

    #[test]
    fn test_missing_file_is_error() {
        let mut config = GameConfig::with_path("./definitely/not/here.ini");
        assert!(config.load_from_file().is_err());
        assert_eq!(config, GameConfig::with_path("./definitely/not/here.ini"));
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir().join("basicsprite_gameconfig_test.ini");
        let mut saved = GameConfig::with_path(&path);
        saved.window.width = 640;
        saved.window.title = "Roundtrip".to_string();
        saved.save_to_file().unwrap();

        let mut loaded = GameConfig::with_path(&path);
        loaded.load_from_file().unwrap();
        assert_eq!(loaded.window.width, 640);
        assert_eq!(loaded.window.title, "Roundtrip");
        let _ = std::fs::remove_file(&path);
    }
}

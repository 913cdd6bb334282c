//! Player settings and preferences
//!
//! Persisted separately from the score history.

use serde::{Deserialize, Serialize};

use crate::persistence::Store;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Skip the intro and after-credits cut-scenes
    pub skip_intro: bool,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Background music volume (0.0 - 1.0)
    pub music_volume: f32,
    /// Pickup sound volume (0.0 - 1.0)
    pub sfx_volume: f32,

    // === Debug ===
    /// Outline the actor's collection hitbox
    pub show_hitboxes: bool,

    // === Accessibility ===
    /// Reduced motion (no floating score gains)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            skip_intro: false,
            master_volume: 0.8,
            music_volume: 0.7,
            sfx_volume: 1.0,
            show_hitboxes: false,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Document name in the store
    const DOCUMENT: &'static str = "settings";

    /// Volumes clamped into range
    pub fn sanitized(mut self) -> Self {
        self.master_volume = self.master_volume.clamp(0.0, 1.0);
        self.music_volume = self.music_volume.clamp(0.0, 1.0);
        self.sfx_volume = self.sfx_volume.clamp(0.0, 1.0);
        self
    }

    pub fn load(store: &Store) -> Self {
        match store.load::<Settings>(Self::DOCUMENT) {
            Some(settings) => {
                log::info!("Loaded settings");
                settings.sanitized()
            }
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    pub fn save(&self, store: &Store) {
        match store.save(Self::DOCUMENT, self) {
            Ok(()) => log::info!("Settings saved"),
            Err(e) => log::warn!("Failed to save settings: {}", e),
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::persistence::test_support::temp_store;

    #[test]
    fn test_missing_file_gives_defaults() {
        let store = temp_store("settings-missing");
        assert_eq!(Settings::load(&store), Settings::default());
    }

    #[test]
    fn test_save_and_reload() {
        let store = temp_store("settings-roundtrip");
        let settings = Settings {
            skip_intro: true,
            show_hitboxes: true,
            ..Default::default()
        };
        settings.save(&store);
        assert_eq!(Settings::load(&store), settings);
    }

    #[test]
    fn test_partial_document_fills_defaults() {
        let store = temp_store("settings-partial");
        let path = store.path_for("settings");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, r#"{ "skip_intro": true, "sfx_volume": 4.0 }"#).unwrap();

        let settings = Settings::load(&store);
        assert!(settings.skip_intro);
        assert_eq!(settings.sfx_volume, 1.0);
        assert_eq!(settings.music_volume, 0.7);
    }
}

//! User preferences.
//!
//! Preferences are layered: the built-in `default.yaml` is loaded first and
//! the user's preferences file, if any, overrides individual values.

#![allow(missing_docs)] // field names are self-explanatory

#[macro_use]
extern crate lazy_static;

use std::path::Path;

use serde::{Deserialize, Serialize};

mod animation;
mod colors;
mod interaction;
pub mod persist;

pub use animation::*;
pub use colors::*;
pub use interaction::*;

const PREFS_FILE_FORMAT: config::FileFormat = config::FileFormat::Yaml;
const DEFAULT_PREFS_STR: &str = include_str!("default.yaml");

lazy_static! {
    pub static ref DEFAULT_PREFS: Preferences =
        serde_norway::from_str(DEFAULT_PREFS_STR).expect("error loading default preferences");
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct Preferences {
    pub animation: AnimationPreferences,
    pub interaction: InteractionPreferences,
    pub colors: ColorScheme,
}

impl Preferences {
    /// Loads preferences from `path`, or from the default preferences file if
    /// `path` is `None`.
    ///
    /// Missing values are taken from the defaults. If the file cannot be read
    /// or parsed, a warning is logged and the defaults are returned.
    pub fn load(path: Option<&Path>) -> Self {
        lazy_static::initialize(&DEFAULT_PREFS);

        let mut config = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_PREFS_STR, PREFS_FILE_FORMAT));

        let user_source = match path {
            Some(p) => Ok(persist::config_source(p)),
            None => persist::user_config_source(),
        };
        match user_source {
            Ok(source) => config = config.add_source(source),
            Err(e) => log::warn!("Error locating user preferences: {e}"),
        }

        config
            .build()
            .and_then(|c| c.try_deserialize::<Preferences>())
            .unwrap_or_else(|e| {
                log::warn!("Error loading preferences: {e}");
                DEFAULT_PREFS.clone()
            })
    }

    /// Saves preferences to `path`, or to the default preferences file if
    /// `path` is `None`.
    pub fn save(&self, path: Option<&Path>) -> eyre::Result<()> {
        match path {
            Some(p) => persist::save_to(p, self),
            None => persist::save(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_prefs_parse() {
        let prefs = &*DEFAULT_PREFS;
        assert_eq!(prefs.animation.twist_interpolation, InterpolateFn::EaseOut);
        assert_eq!(prefs.interaction.input_policy, InputPolicy::Queue);
        assert_eq!(prefs.colors.white.to_string(), "#ffffff");
    }

    #[test]
    fn test_code_defaults_match_default_file() {
        assert_eq!(Preferences::default(), *DEFAULT_PREFS);
        assert_eq!(
            AnimationPreferences::default().twist_interpolation,
            InterpolateFn::EaseOut,
        );
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().expect("error creating temp dir");
        let prefs = Preferences::load(Some(&dir.path().join("nonexistent.yaml")));
        assert_eq!(prefs, *DEFAULT_PREFS);
    }

    #[test]
    fn test_user_file_overrides_defaults() {
        let dir = tempfile::tempdir().expect("error creating temp dir");
        let path = dir.path().join("prefs.yaml");
        std::fs::write(
            &path,
            "animation:\n  twist_duration: 0.1\ninteraction:\n  input_policy: reject\n",
        )
        .expect("error writing prefs");

        let prefs = Preferences::load(Some(&path));
        assert_eq!(prefs.animation.twist_duration, 0.1);
        assert_eq!(prefs.interaction.input_policy, InputPolicy::Reject);
        // Values not in the user file come from the defaults.
        assert_eq!(prefs.animation.twist_interpolation, InterpolateFn::EaseOut);
        assert_eq!(prefs.colors, DEFAULT_PREFS.colors);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().expect("error creating temp dir");
        let path = dir.path().join("nested").join("prefs.yaml");

        let mut prefs = DEFAULT_PREFS.clone();
        prefs.animation.dynamic_twist_speed = false;
        prefs.interaction.max_queued_moves = 3;
        prefs.save(Some(&path)).expect("error saving prefs");

        assert_eq!(Preferences::load(Some(&path)), prefs);
    }
}

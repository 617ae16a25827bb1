use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const PRESETS_FILE: &str = "BuildPresets.json";

#[derive(Serialize, Deserialize, Debug)]
pub struct LibraryPreset {
    name: String,
    sources: Vec<PathBuf>,
    #[serde(default)]
    defines: Vec<String>,
    #[serde(default)]
    flags: Vec<String>,
    #[serde(default = "default_hidden")]
    hidden: bool,
}

impl LibraryPreset {
    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_sources(&self) -> &[PathBuf] {
        &self.sources
    }

    /// Yields each define with a `-D` prefix.
    pub fn get_defines(&self) -> impl Iterator<Item = String> + '_ {
        self.defines.iter().map(|d| format!("-D{}", d))
    }

    pub fn get_flags(&self) -> &[String] {
        &self.flags
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct BuildPresets {
    #[serde(rename = "libraryPresets")]
    library_presets: Vec<LibraryPreset>,
}

impl BuildPresets {
    pub fn new<T>(path: T) -> Result<Self>
    where
        T: Into<PathBuf>, {
        let path = path.into();

        let path = if path.ends_with(PRESETS_FILE) {
            path
        } else {
            path.join(PRESETS_FILE)
        };

        tracing::debug!("loading presets from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        let presets: BuildPresets = serde_json::from_str(&content)?;

        Ok(presets)
    }

    /// Hidden presets only exist to be referenced by hand and are never selected.
    pub fn get_preset(&self, name: &str) -> Result<&LibraryPreset> {
        self.library_presets
            .iter()
            .find(|p| p.name == name && !p.hidden)
            .ok_or_else(|| Error::PresetNotFound { name: name.to_string() })
    }
}

fn default_hidden() -> bool {
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixtures() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
    }

    #[test]
    fn get_library_preset() {
        let presets = BuildPresets::new(fixtures()).unwrap();
        let preset = presets.get_preset("adder").expect("Failed to get preset adder");
        assert_eq!(preset.get_name(), "adder");
        assert_eq!(preset.get_sources(), &[PathBuf::from("add.c")]);
        assert_eq!(preset.get_defines().collect::<Vec<_>>(), vec!["-DADD_OFFSET=0"]);
        assert!(preset.get_flags().is_empty());
    }

    #[test]
    fn accepts_direct_file_path() {
        let presets = BuildPresets::new(fixtures().join(PRESETS_FILE)).unwrap();
        assert!(presets.get_preset("adder").is_ok());
    }

    #[test]
    fn hidden_preset_is_not_selectable() {
        let presets = BuildPresets::new(fixtures()).unwrap();
        let err = presets.get_preset("internal").unwrap_err();
        assert!(matches!(err, Error::PresetNotFound { ref name } if name == "internal"));
    }

    #[test]
    fn unknown_preset() {
        let presets = BuildPresets::new(fixtures()).unwrap();
        assert!(matches!(presets.get_preset("nope"), Err(Error::PresetNotFound { .. })));
    }

    #[test]
    fn missing_file() {
        let err = BuildPresets::new(fixtures().join("does-not-exist")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn malformed_presets() {
        let parsed: std::result::Result<BuildPresets, _> =
            serde_json::from_str(r#"{ "libraryPresets": [ { "name": "x" } ] }"#);
        assert!(parsed.is_err());
    }
}

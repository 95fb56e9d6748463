//! Presets: a template image, the corpus to draw text from, and how to lay the text out.
//!
//! The built-in presets can be replaced by a JSON file holding an array of presets:
//!
//! ```json
//! [
//!   {
//!     "key": "cat",
//!     "title": "Cat",
//!     "template": "Cat.png",
//!     "source": "Cats",
//!     "layout": { "x": 10, "y": 20, "font_size": 12, "scale_percent": 100.0, "wrap": 30 },
//!     "min_length": 4,
//!     "max_length": 12
//!   }
//! ]
//! ```
//!
//! `state_size` may be left out and defaults to [`DEFAULT_STATE_SIZE`].

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::caption::Layout;
use crate::error::{Error, Result};
use crate::generator::Bounds;

/// Chain order used when a preset does not name one.
pub const DEFAULT_STATE_SIZE: usize = 2;

fn default_state_size() -> usize {
    DEFAULT_STATE_SIZE
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    /// Short name used on the command line and in output file names.
    pub key: String,
    pub title: String,
    pub template: PathBuf,
    /// Directory, under the corpus root, holding the source text.
    pub source: String,
    pub layout: Layout,
    pub min_length: usize,
    pub max_length: usize,
    #[serde(default = "default_state_size")]
    pub state_size: usize,
}

impl Preset {
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.min_length, self.max_length)
    }

    pub fn validate(&self) -> Result<()> {
        self.bounds().validate(self.state_size)?;
        self.layout.validate()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Presets {
    presets: Vec<Preset>,
}

impl Presets {
    pub fn new(presets: Vec<Preset>) -> Self {
        Self { presets }
    }

    /// The presets that ship with the tool.
    pub fn builtin() -> Self {
        fn preset(
            key: &str,
            title: &str,
            template: &str,
            source: &str,
            (x, y, font_size, wrap): (i32, i32, u32, usize),
        ) -> Preset {
            Preset {
                key: key.to_string(),
                title: title.to_string(),
                template: PathBuf::from(template),
                source: source.to_string(),
                layout: Layout {
                    x,
                    y,
                    font_size,
                    scale_percent: 100.0,
                    wrap,
                },
                min_length: 2,
                max_length: 5,
                state_size: DEFAULT_STATE_SIZE,
            }
        }

        Self::new(vec![
            preset("jerma", "Jerma", "JermaTemplate.jpg", "Jerma", (337, 125, 10, 20)),
            preset("garf", "Garfield", "GarfTemplate.png", "Garfield", (370, 40, 10, 20)),
            preset("custom", "Custom", "Custom.png", "Custom", (10, 378, 20, 50)),
        ])
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_json_str(&json)
    }

    pub fn get(&self, key: &str) -> Result<&Preset> {
        self.presets
            .iter()
            .find(|p| p.key == key)
            .ok_or_else(|| Error::UnknownPreset(key.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Preset> {
        self.presets.iter()
    }
}

impl Default for Presets {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_presets_are_valid() {
        let presets = Presets::builtin();
        let keys: Vec<_> = presets.iter().map(|p| p.key.as_str()).collect();
        assert_eq!(keys, vec!["jerma", "garf", "custom"]);
        for p in presets.iter() {
            p.validate().unwrap();
        }

        let custom = presets.get("custom").unwrap();
        assert_eq!((custom.layout.x, custom.layout.y), (10, 378));
        assert_eq!(custom.layout.wrap, 50);
        assert_eq!(custom.bounds(), Bounds::new(2, 5));
    }

    #[test]
    fn unknown_preset() {
        assert!(matches!(
            Presets::builtin().get("nope"),
            Err(Error::UnknownPreset(k)) if k == "nope"
        ));
    }

    #[test]
    fn presets_from_json() {
        let json = r#"[{
            "key": "cat",
            "title": "Cat",
            "template": "Cat.png",
            "source": "Cats",
            "layout": { "x": 10, "y": 20, "font_size": 12, "scale_percent": 50.0, "wrap": 30 },
            "min_length": 4,
            "max_length": 12
        }]"#;
        let presets = Presets::from_json_str(json).unwrap();
        let cat = presets.get("cat").unwrap();
        assert_eq!(cat.state_size, DEFAULT_STATE_SIZE);
        assert_eq!(cat.layout.scale(), 0.5);
        assert_eq!(cat.source, "Cats");
    }

    #[test]
    fn builtin_presets_survive_json() {
        let presets = Presets::builtin();
        let json = serde_json::to_string(&presets.iter().collect::<Vec<_>>()).unwrap();
        assert_eq!(Presets::from_json_str(&json).unwrap(), presets);
    }

    #[test]
    fn bad_json_is_a_preset_error() {
        assert!(matches!(
            Presets::from_json_str("{"),
            Err(Error::Presets(_))
        ));
    }

    #[test]
    fn inverted_lengths_are_invalid() {
        let mut p = Presets::builtin().get("jerma").unwrap().clone();
        p.min_length = 9;
        assert!(matches!(p.validate(), Err(Error::InvalidConfiguration(_))));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("presets.json");
        assert!(matches!(Presets::load(&path), Err(Error::Io { .. })));
        fs::write(&path, "[]").unwrap();
        assert_eq!(Presets::load(&path).unwrap().iter().count(), 0);
    }
}

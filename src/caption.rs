//! Placing generated text on a template image.
//!
//! Drawing is left to whoever owns the image; this module works out what goes where. Text is
//! wrapped to a fixed number of columns and each line gets a position on the scaled template.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use crate::config::Preset;
use crate::distribution::Picker;
use crate::error::{Error, Result};

/// Pixels between two lines, on top of the font size, before scaling.
pub const LINE_GAP: u32 = 10;

/// Saved images are numbered from 1 up to (not including) this.
const MAX_OUTPUT_NUMBER: usize = 5000;

/// Where and how big the caption is drawn. Positions are in unscaled template pixels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub x: i32,
    pub y: i32,
    pub font_size: u32,
    /// Template scale, in percent.
    pub scale_percent: f64,
    /// Maximum line width, in characters.
    pub wrap: usize,
}

/// One wrapped line and the point its text starts at.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CaptionLine {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

impl Layout {
    pub fn scale(&self) -> f64 {
        self.scale_percent / 100.0
    }

    pub fn validate(&self) -> Result<()> {
        if self.wrap == 0 {
            return Err(Error::invalid("wrap width must be at least 1"));
        }
        if self.font_size == 0 {
            return Err(Error::invalid("font size must be at least 1"));
        }
        if !(self.scale_percent > 0.0 && self.scale_percent.is_finite()) {
            return Err(Error::invalid(format!(
                "scale must be a positive percentage, got {}",
                self.scale_percent
            )));
        }
        Ok(())
    }

    /// Size of a `width` x `height` template once scaled.
    pub fn scaled_size(&self, width: u32, height: u32) -> (u32, u32) {
        let scale = self.scale();
        (
            (f64::from(width) * scale) as u32,
            (f64::from(height) * scale) as u32,
        )
    }

    /// Wraps `text` and positions every line. The first line starts at `(x, y)` scaled, with
    /// the vertical start truncated to a whole pixel; each following line sits
    /// `font_size + LINE_GAP` scaled pixels lower.
    pub fn lay_out(&self, text: &str) -> Vec<CaptionLine> {
        let scale = self.scale();
        let x = f64::from(self.x) * scale;
        let step = f64::from(self.font_size + LINE_GAP) * scale;
        let mut y = (f64::from(self.y) * scale).trunc();

        wrap(text, self.wrap)
            .into_iter()
            .map(|text| {
                let line = CaptionLine { text, x, y };
                y += step;
                line
            })
            .collect()
    }
}

/// Greedy word wrap to `width` columns, where a column is one grapheme cluster.
///
/// Whitespace between words collapses to a single space. A word wider than `width` goes on a
/// line of its own and is cut into `width`-sized pieces.
///
/// ```
/// # use markov_says::caption::wrap;
/// assert_eq!(wrap("the cat sat   on the mat", 7), vec!["the cat", "sat on", "the mat"]);
/// assert_eq!(wrap("abcdefgh ij", 3), vec!["abc", "def", "gh", "ij"]);
/// ```
///
/// # Panics
///
/// If `width` is zero.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    assert!(width > 0, "wrap width must be at least 1");

    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.graphemes(true).count();
        if !line.is_empty() && line_width + 1 + word_width <= width {
            line.push(' ');
            line.push_str(word);
            line_width += 1 + word_width;
            continue;
        }

        if !line.is_empty() {
            lines.push(std::mem::take(&mut line));
        }

        let mut rest = word;
        let mut rest_width = word_width;
        while rest_width > width {
            // Byte offset of the first grapheme past the line
            let (cut, _) = rest
                .grapheme_indices(true)
                .nth(width)
                .unwrap_or((rest.len(), ""));
            lines.push(rest[..cut].to_string());
            rest = &rest[cut..];
            rest_width -= width;
        }
        line.push_str(rest);
        line_width = rest_width;
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Picks a file name for a saved caption: `"{dir}/{key} Says_{n}.png"` with `n` in `1..5000`.
pub fn output_file_name(dir: &Path, key: &str, picker: &mut impl Picker) -> PathBuf {
    let n = picker.pick(MAX_OUTPUT_NUMBER - 1) + 1;
    dir.join(format!("{key} Says_{n}.png"))
}

/// Everything a renderer needs to produce one captioned image.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CaptionPlan {
    pub title: String,
    pub template: PathBuf,
    /// Font size in points. The font is not scaled with the template.
    pub font_size: u32,
    pub scale: f64,
    pub text: String,
    pub lines: Vec<CaptionLine>,
    pub output: PathBuf,
}

impl CaptionPlan {
    pub fn new(
        preset: &Preset,
        text: String,
        output_dir: &Path,
        picker: &mut impl Picker,
    ) -> Result<Self> {
        preset.layout.validate()?;
        Ok(Self {
            title: preset.title.clone(),
            template: preset.template.clone(),
            font_size: preset.layout.font_size,
            scale: preset.layout.scale(),
            lines: preset.layout.lay_out(&text),
            text,
            output: output_file_name(output_dir, &preset.key, picker),
        })
    }
}

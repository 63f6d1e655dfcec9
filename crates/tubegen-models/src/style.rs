//! Video style definitions and their visual templates.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Tone/template tag selected by the user for a video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "snake_case")]
pub enum VideoStyle {
    /// Informative script built around interesting facts
    #[default]
    Facts,
    /// Script told as a story
    Story,
    /// Inspirational, uplifting script
    Motivation,
    /// Teaching-oriented script
    Educational,
    /// Light, entertaining script
    Entertainment,
}

impl VideoStyle {
    /// All available styles, in display order.
    pub const ALL: &'static [VideoStyle] = &[
        VideoStyle::Facts,
        VideoStyle::Story,
        VideoStyle::Motivation,
        VideoStyle::Educational,
        VideoStyle::Entertainment,
    ];

    /// Resolve an optional style tag from a request.
    ///
    /// Missing or unknown tags resolve to [`VideoStyle::Facts`].
    pub fn from_tag(tag: Option<&str>) -> Self {
        tag.and_then(|t| t.trim().parse().ok()).unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VideoStyle::Facts => "facts",
            VideoStyle::Story => "story",
            VideoStyle::Motivation => "motivation",
            VideoStyle::Educational => "educational",
            VideoStyle::Entertainment => "entertainment",
        }
    }

    /// Visual template used when rendering a video in this style.
    pub fn template(&self) -> StyleTemplate {
        let (background_color, text_color, font_family, animations): (_, _, _, &[&str]) = match self {
            VideoStyle::Facts => ("#1a1a2e", "#eee", "Arial, sans-serif", &["fadeIn", "slideIn"]),
            VideoStyle::Story => ("#2d3561", "#fff", "Georgia, serif", &["fadeIn", "zoom"]),
            VideoStyle::Motivation => ("#f9a826", "#000", "Impact, sans-serif", &["pulse", "slideUp"]),
            VideoStyle::Educational => ("#0f3460", "#fff", "Verdana, sans-serif", &["fadeIn", "slideRight"]),
            VideoStyle::Entertainment => {
                ("#e94560", "#fff", "Comic Sans MS, cursive", &["bounce", "rotate"])
            }
        };

        StyleTemplate {
            background_color: background_color.to_string(),
            text_color: text_color.to_string(),
            font_family: font_family.to_string(),
            animations: animations.iter().map(|a| a.to_string()).collect(),
        }
    }
}

impl fmt::Display for VideoStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for VideoStyle {
    type Err = StyleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "facts" => Ok(VideoStyle::Facts),
            "story" => Ok(VideoStyle::Story),
            "motivation" => Ok(VideoStyle::Motivation),
            "educational" => Ok(VideoStyle::Educational),
            "entertainment" => Ok(VideoStyle::Entertainment),
            _ => Err(StyleParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
#[error("Unknown style: {0}")]
pub struct StyleParseError(String);

/// Colors, font and animations for a style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StyleTemplate {
    pub background_color: String,
    pub text_color: String,
    pub font_family: String,
    pub animations: Vec<String>,
}

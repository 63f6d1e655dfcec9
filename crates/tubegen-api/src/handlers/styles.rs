//! Style catalog handler.

use axum::Json;
use serde::Serialize;
use tubegen_models::{StyleTemplate, VideoStyle};
use tubegen_script::prompt::style_instruction;

/// One entry of the style catalog.
#[derive(Debug, Serialize)]
pub struct StyleInfo {
    pub style: VideoStyle,
    pub instruction: &'static str,
    pub template: StyleTemplate,
}

/// List every style with its prompt instruction and visual template.
pub async fn list_styles() -> Json<Vec<StyleInfo>> {
    let styles = VideoStyle::ALL
        .iter()
        .map(|&style| StyleInfo {
            style,
            instruction: style_instruction(style),
            template: style.template(),
        })
        .collect();

    Json(styles)
}

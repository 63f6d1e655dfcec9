//! Script generation for faceless videos.
//!
//! A script is requested from a text-generation model and parsed from its
//! labeled output. When the model is not configured or the call fails, a
//! templated script is used instead so callers always get content.

pub mod client;
pub mod error;
pub mod fallback;
pub mod parser;
pub mod prompt;
pub mod service;

pub use client::{OpenAiClient, OpenAiConfig, TextGenerator};
pub use error::{ScriptError, ScriptResult};
pub use fallback::fallback_script;
pub use parser::{default_description, parse_script_response};
pub use service::{ScriptOutcome, ScriptService};

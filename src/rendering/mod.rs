//! Rendering pipeline: layout, paint commands, and output surfaces

pub mod layout;
pub mod paint;
pub mod svg;
pub mod text;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Output surface a renderer produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Svg,
    Text,
}

impl std::str::FromStr for OutputFormat {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "svg" => Ok(OutputFormat::Svg),
            "text" | "txt" => Ok(OutputFormat::Text),
            other => Err(crate::Error::ConfigError(format!(
                "unsupported output format `{other}`; expected svg|text"
            ))),
        }
    }
}

/// A rendered chart, ready to be written out.
#[derive(Debug, Clone)]
pub struct Rendered {
    pub format: OutputFormat,
    pub body: String,
    /// Number of visible slices; zero for the empty state
    pub segment_count: usize,
}

impl Rendered {
    /// Hex-encoded SHA-256 of the body. Output is deterministic, so this is
    /// what golden tests compare.
    pub fn digest(&self) -> String {
        hex::encode(Sha256::digest(self.body.as_bytes()))
    }
}

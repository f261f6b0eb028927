use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::encode::format::ImageEncoding;
use crate::foundation::error::{ChartError, ChartResult};
use crate::render::style::ChartStyle;

/// How `POST /generate_chart` returns the chart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transfer {
    /// Raw image bytes in the response body.
    #[default]
    Direct,
    /// JSON `{"image_url": ...}` pointing at `GET /image/{filename}`.
    Reference,
}

impl std::str::FromStr for Transfer {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "direct" => Ok(Transfer::Direct),
            "reference" | "url" => Ok(Transfer::Reference),
            other => Err(ChartError::validation(format!(
                "unsupported transfer mode \"{other}\" (direct or reference)"
            ))),
        }
    }
}

/// Service configuration, loaded from JSON. Every field has a default.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServiceConfig {
    /// Socket address to listen on.
    pub bind: String,
    /// Base used for absolute image URLs, e.g. `https://charts.example.com`. When unset, the
    /// request's `Host` header is used.
    pub public_base_url: Option<String>,
    /// Flat directory for stored charts.
    pub artifact_dir: PathBuf,
    /// Encoding when the request does not ask for one.
    pub default_format: ImageEncoding,
    /// Transfer mode when the request does not ask for one.
    pub default_transfer: Transfer,
    /// Delete stored charts older than this many seconds. `None` keeps them forever.
    pub artifact_ttl_secs: Option<u64>,
    /// How often the TTL sweep runs.
    pub sweep_interval_secs: u64,
    /// Extra directories scanned for label fonts, on top of system fonts.
    pub font_dirs: Vec<PathBuf>,
    /// Chart appearance.
    pub style: ChartStyle,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:5000".to_owned(),
            public_base_url: None,
            artifact_dir: PathBuf::from("static/charts"),
            default_format: ImageEncoding::Png,
            default_transfer: Transfer::Direct,
            artifact_ttl_secs: None,
            sweep_interval_secs: 60,
            font_dirs: Vec::new(),
            style: ChartStyle::default(),
        }
    }
}

impl ServiceConfig {
    /// Parse a configuration from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> ChartResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| ChartError::validation(format!("parse service config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse a configuration from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> ChartResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ChartError::validation(format!("open service config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check cross-field constraints.
    pub fn validate(&self) -> ChartResult<()> {
        self.style.validate()?;
        if self.artifact_ttl_secs == Some(0) {
            return Err(ChartError::validation(
                "artifact_ttl_secs must be > 0 (omit it to disable the sweep)",
            ));
        }
        if self.sweep_interval_secs == 0 {
            return Err(ChartError::validation("sweep_interval_secs must be > 0"));
        }
        if let Some(base) = &self.public_base_url
            && !(base.starts_with("http://") || base.starts_with("https://"))
        {
            return Err(ChartError::validation(format!(
                "public_base_url must start with http:// or https://, got \"{base}\""
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;

//! Encode policy for normalized images.
//!
//! The historical behavior re-encodes every upload as JPEG at quality 80
//! regardless of the source format, flattening transparency. That stays the
//! default, but it's expressed as a policy value so a lossless target is a
//! configuration change rather than a code change.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

/// Output encoding for normalized images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetFormat {
    Jpeg,
    Png,
}

impl TargetFormat {
    /// Content type the store receives for uploaded bytes.
    pub fn content_type(&self) -> &'static str {
        match self {
            TargetFormat::Jpeg => "image/jpeg",
            TargetFormat::Png => "image/png",
        }
    }

    /// Whether the encoding discards the alpha channel.
    pub fn is_lossy(&self) -> bool {
        matches!(self, TargetFormat::Jpeg)
    }
}

impl FromStr for TargetFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "jpeg" | "jpg" => Ok(TargetFormat::Jpeg),
            "png" => Ok(TargetFormat::Png),
            _ => Err(anyhow::anyhow!("Invalid target format: {}", s)),
        }
    }
}

impl Display for TargetFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            TargetFormat::Jpeg => write!(f, "jpeg"),
            TargetFormat::Png => write!(f, "png"),
        }
    }
}

/// How normalized images are re-encoded before upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodePolicy {
    pub format: TargetFormat,
    /// Quality factor, 1–100. Only meaningful for lossy formats.
    pub quality: u8,
}

impl EncodePolicy {
    pub const DEFAULT_JPEG_QUALITY: u8 = 80;

    pub fn new(format: TargetFormat, quality: u8) -> Self {
        Self { format, quality }
    }
}

impl Default for EncodePolicy {
    fn default() -> Self {
        Self {
            format: TargetFormat::Jpeg,
            quality: Self::DEFAULT_JPEG_QUALITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_historical_behavior() {
        let policy = EncodePolicy::default();
        assert_eq!(policy.format, TargetFormat::Jpeg);
        assert_eq!(policy.quality, 80);
        assert_eq!(policy.format.content_type(), "image/jpeg");
    }

    #[test]
    fn test_target_format_parsing() {
        assert_eq!("jpg".parse::<TargetFormat>().unwrap(), TargetFormat::Jpeg);
        assert_eq!("JPEG".parse::<TargetFormat>().unwrap(), TargetFormat::Jpeg);
        assert_eq!("png".parse::<TargetFormat>().unwrap(), TargetFormat::Png);
        assert!("webp".parse::<TargetFormat>().is_err());
    }
}

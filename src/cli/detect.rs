//! Dictionary format auto-detection

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

use crate::dictionary::DictionaryFormat;

/// Detected format with the method that found it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatDetection {
    /// Detected format
    pub format: DictionaryFormat,
    /// Detection method used
    pub method: DetectionMethod,
}

/// Method used to detect dictionary format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectionMethod {
    /// Heuristic detection via file extension
    Extension,
    /// Heuristic detection via file content analysis
    Content,
    /// User explicitly specified
    UserSpecified,
}

impl std::fmt::Display for DetectionMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Extension => write!(f, "heuristic (file extension)"),
            Self::Content => write!(f, "heuristic (content analysis)"),
            Self::UserSpecified => write!(f, "user specified"),
        }
    }
}

/// Detect dictionary format: user choice, then extension, then content
pub fn detect_format(
    path: &Path,
    user_format: Option<DictionaryFormat>,
) -> Result<FormatDetection> {
    if let Some(format) = user_format {
        return Ok(FormatDetection {
            format,
            method: DetectionMethod::UserSpecified,
        });
    }

    if let Some(format) = detect_by_extension(path) {
        return Ok(FormatDetection {
            format,
            method: DetectionMethod::Extension,
        });
    }

    Ok(FormatDetection {
        format: detect_by_content(path)?,
        method: DetectionMethod::Content,
    })
}

/// Detect format by file extension
fn detect_by_extension(path: &Path) -> Option<DictionaryFormat> {
    let ext = path.extension().and_then(|s| s.to_str())?;
    match ext.to_lowercase().as_str() {
        "json" => Some(DictionaryFormat::Json),
        "dict" | "txt" | "text" => Some(DictionaryFormat::Text),
        _ => None,
    }
}

/// Detect format by analyzing the start of the file
fn detect_by_content(path: &Path) -> Result<DictionaryFormat> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open file: {}", path.display()))?;

    let mut header = Vec::with_capacity(1024);
    file.take(1024)
        .read_to_end(&mut header)
        .with_context(|| format!("Failed to read file header: {}", path.display()))?;

    let first = header.iter().find(|b| !b.is_ascii_whitespace());
    Ok(match first {
        Some(b'{') => DictionaryFormat::Json,
        _ => DictionaryFormat::Text,
    })
}

// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Landmark trace serialization and deserialization.
//!
//! This module handles exporting and importing landmark traces in YAML
//! and JSON formats. The format is chosen from the file extension.

use crate::models::trace::LandmarkTrace;
use anyhow::{bail, Context, Result};
use std::path::Path;

/// Trace file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceFormat {
    Yaml,
    Json,
}

impl TraceFormat {
    /// Pick the format from a path's extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path.extension().and_then(|s| s.to_str());
        match extension {
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            _ => bail!("Unsupported file extension: {:?}", extension),
        }
    }
}

/// Export a trace to YAML format.
pub fn export_yaml(trace: &LandmarkTrace, path: &Path) -> Result<()> {
    let yaml = serde_yaml::to_string(trace)?;
    std::fs::write(path, yaml)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Export a trace to JSON format.
pub fn export_json(trace: &LandmarkTrace, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(trace)?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Import a trace from YAML format.
pub fn import_yaml(path: &Path) -> Result<LandmarkTrace> {
    let yaml = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let trace = serde_yaml::from_str(&yaml)?;
    Ok(trace)
}

/// Import a trace from JSON format.
pub fn import_json(path: &Path) -> Result<LandmarkTrace> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let trace = serde_json::from_str(&json)?;
    Ok(trace)
}

/// Export a trace in the format implied by the path.
pub fn export_trace(trace: &LandmarkTrace, path: &Path) -> Result<()> {
    match TraceFormat::from_path(path)? {
        TraceFormat::Yaml => export_yaml(trace, path),
        TraceFormat::Json => export_json(trace, path),
    }
}

/// Import a trace in the format implied by the path.
pub fn import_trace(path: &Path) -> Result<LandmarkTrace> {
    match TraceFormat::from_path(path)? {
        TraceFormat::Yaml => import_yaml(path),
        TraceFormat::Json => import_json(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::landmark::Landmark;
    use crate::models::trace::TraceFrame;
    use std::path::PathBuf;
    use std::time::Duration;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("handpaint-{}-{}", std::process::id(), name))
    }

    fn sample() -> LandmarkTrace {
        let mut trace = LandmarkTrace::new();
        trace.push(TraceFrame::new(Duration::ZERO, None));
        trace.push(TraceFrame::new(
            Duration::from_millis(33),
            Some(vec![Landmark::new(0.25, 0.75); 21]),
        ));
        trace
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(TraceFormat::from_path(Path::new("a.yml")).unwrap(), TraceFormat::Yaml);
        assert_eq!(TraceFormat::from_path(Path::new("a.json")).unwrap(), TraceFormat::Json);
        assert!(TraceFormat::from_path(Path::new("a.png")).is_err());
        assert!(TraceFormat::from_path(Path::new("trace")).is_err());
    }

    #[test]
    fn test_yaml_without_landmarks_is_no_hand() {
        let yaml = "frames:\n  - timestamp_ms: 0\n  - timestamp_ms: 40\n    landmarks: []\n";
        let trace: LandmarkTrace = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(trace.frames[0].landmarks, None);
        assert_eq!(trace.frames[1].landmarks, Some(vec![]));
        assert_eq!(trace.duration(), Duration::from_millis(40));
    }

    #[test]
    fn test_json_ignores_depth_coordinate() {
        let json = r#"{"frames":[{"timestamp_ms":5,"landmarks":[{"x":0.1,"y":0.2,"z":-0.03}]}]}"#;
        let trace: LandmarkTrace = serde_json::from_str(json).unwrap();
        assert_eq!(trace.frames[0].landmarks, Some(vec![Landmark::new(0.1, 0.2)]));
    }

    #[test]
    fn test_export_import_files() {
        let trace = sample();
        for name in ["trace.yaml", "trace.json"] {
            let path = temp_path(name);
            export_trace(&trace, &path).unwrap();
            let loaded = import_trace(&path).unwrap();
            std::fs::remove_file(&path).ok();
            assert_eq!(loaded, trace);
        }
    }

    #[test]
    fn test_import_missing_file() {
        let err = import_trace(&temp_path("missing.json")).unwrap_err();
        assert!(err.to_string().starts_with("Failed to read"));
    }
}

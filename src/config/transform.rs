use crate::ops::Operation;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration of the `pixel_transform` tool.
///
/// ```json
/// {
///   "input": "input/lake.png",
///   "channels": 3,
///   "jobs": [
///     { "operations": [{ "op": "brighten" }], "output": "output/bright.png" },
///     { "operations": [{ "op": "edge_detect" }], "output": "output/edges.png" }
///   ],
///   "summary_json": "output/summary.json"
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct TransformToolConfig {
    pub input: PathBuf,
    /// Samples per pixel after decoding (1 = luma, 3 = RGB, 4 = RGBA).
    #[serde(default = "default_channels")]
    pub channels: usize,
    pub jobs: Vec<JobConfig>,
    #[serde(default)]
    pub summary_json: Option<PathBuf>,
}

/// One output file: a chain of operations applied to the decoded input.
#[derive(Debug, Deserialize)]
pub struct JobConfig {
    pub operations: Vec<Operation>,
    pub output: PathBuf,
}

fn default_channels() -> usize {
    3
}

pub fn load_config(path: &Path) -> Result<TransformToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

pub fn parse_config(data: &str) -> Result<TransformToolConfig, serde_json::Error> {
    serde_json::from_str(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convolve::BlurNormalization;

    #[test]
    fn parses_jobs_with_defaults() {
        let cfg = parse_config(
            r#"{
                "input": "in.png",
                "jobs": [
                    { "operations": [{ "op": "darken" }], "output": "out/dark.png" },
                    {
                        "operations": [
                            { "op": "blur", "kernel_size": 3, "normalization": "sample_count" },
                            { "op": "edge_detect" }
                        ],
                        "output": "out/soft_edges.png"
                    }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.channels, 3);
        assert!(cfg.summary_json.is_none());
        assert_eq!(cfg.jobs.len(), 2);
        assert_eq!(cfg.jobs[0].operations, vec![Operation::Darken { factor: 0.3 }]);
        assert_eq!(
            cfg.jobs[1].operations[0],
            Operation::Blur {
                kernel_size: 3,
                normalization: BlurNormalization::SampleCount
            }
        );
        assert_eq!(cfg.jobs[1].output, PathBuf::from("out/soft_edges.png"));
    }

    #[test]
    fn unknown_operation_is_rejected() {
        let err = parse_config(
            r#"{ "input": "a.png", "jobs": [{ "operations": [{ "op": "sharpen" }], "output": "b.png" }] }"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("sharpen"), "{err}");
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_config(Path::new("/nonexistent/pixel-transform.json")).unwrap_err();
        assert!(err.contains("/nonexistent/pixel-transform.json"), "{err}");
    }
}

use crate::scene::Scene;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read scene file {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse scene file {path}")]
    Parse {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("unsupported scene format: {0:?} (expected .yaml, .yml or .json)")]
    UnknownFormat(String),
}

/// 从 YAML 或 JSON 文件加载场景文档 (按扩展名区分格式)
pub fn load_scene(path: impl AsRef<Path>) -> Result<Scene, LoadError> {
    let path = path.as_ref();
    let display = path.display().to_string();

    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: display.clone(),
        source,
    })?;

    match path.extension().and_then(|e| e.to_str()).unwrap_or("") {
        "yaml" | "yml" => serde_yaml::from_str(&content).map_err(|e| LoadError::Parse {
            path: display,
            source: Box::new(e),
        }),
        "json" => serde_json::from_str(&content).map_err(|e| LoadError::Parse {
            path: display,
            source: Box::new(e),
        }),
        other => Err(LoadError::UnknownFormat(other.to_string())),
    }
}

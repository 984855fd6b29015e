use terrain_common::TerrainError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Unknown render style: {0}")]
    UnknownStyle(String),

    #[error("Invalid style: {0}")]
    InvalidStyle(String),

    #[error("Pixel buffer has {found} bytes, expected {expected} for {width}x{height}")]
    BufferSize {
        width: usize,
        height: usize,
        expected: usize,
        found: usize,
    },

    #[error("PNG encoding failed: {0}")]
    Encode(String),

    #[error("Style parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RenderError>;

impl From<RenderError> for TerrainError {
    fn from(err: RenderError) -> Self {
        match err {
            RenderError::UnknownStyle(name) => TerrainError::InvalidConfig(format!(
                "unknown render style '{}'",
                name
            )),
            RenderError::InvalidStyle(msg) => TerrainError::InvalidConfig(msg),
            RenderError::Json(e) => TerrainError::InvalidConfig(format!("style file: {}", e)),
            RenderError::Io(e) => TerrainError::Io(e),
            other => TerrainError::Render(other.to_string()),
        }
    }
}

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum ImageRenderError {
    #[error("font unavailable: {0}")]
    FontUnavailable(String),
    #[error("render backend failure: {0}")]
    Backend(String),
    #[error("png encoding failure: {0}")]
    PngEncoding(String),
    #[error("temporary image file failure: {0}")]
    TempFile(#[source] std::io::Error),
    #[error("render task join failure: {0}")]
    Join(String),
    #[error("render task panic: {0}")]
    Panic(String),
}

impl ImageRenderError {
    pub(crate) fn code(&self) -> &'static str {
        match self {
            Self::FontUnavailable(_) => "IMAGE_FONT_UNAVAILABLE",
            Self::Backend(_) => "IMAGE_BACKEND_ERROR",
            Self::PngEncoding(_) => "IMAGE_PNG_ENCODING_ERROR",
            Self::TempFile(_) => "IMAGE_TEMP_FILE_ERROR",
            Self::Join(_) => "IMAGE_TASK_JOIN_ERROR",
            Self::Panic(_) => "IMAGE_TASK_PANIC",
        }
    }
}

use thiserror::Error;

/// Failures raised by the reveal and carousel controllers.
///
/// None of these are fatal to the page. `UnsupportedEnvironment` in
/// particular is expected on old browsers and is answered by showing the
/// content without animation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ControllerError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("unsupported environment: {0} is not available")]
    UnsupportedEnvironment(&'static str),
    #[error("slide index {index} is out of range for {slide_count} slides")]
    IndexOutOfRange { index: usize, slide_count: usize },
}

impl ControllerError {
    /// Whether the caller should fall back to rendering content as visible.
    pub fn shows_content_anyway(&self) -> bool {
        matches!(
            self,
            ControllerError::UnsupportedEnvironment(_) | ControllerError::InvalidConfiguration(_)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("the {0} field is required")]
    MissingField(&'static str),
}

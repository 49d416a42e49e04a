//! Story panel errors

/// User-input failures raised by the story panel
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoryError {
    #[error("Please input some idea before clicking generate.")]
    MissingIdea,
}

impl StoryError {
    /// Title used when the error is shown in a dialog
    pub fn title(&self) -> &'static str {
        match self {
            StoryError::MissingIdea => "No Idea!",
        }
    }
}

use crate::model::generation::GenerationResult;

/// What the page is currently showing.
///
/// The result and error panels map to distinct variants, so at most one of
/// them is ever considered visible.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum UiState {
    #[default]
    Idle,
    Submitting,
    ShowingResult(GenerationResult),
    ShowingError(String),
}

impl UiState {
    pub fn error_message(&self) -> Option<&str> {
        match self {
            UiState::ShowingError(message) => Some(message),
            _ => None,
        }
    }

    pub fn result(&self) -> Option<&GenerationResult> {
        match self {
            UiState::ShowingResult(result) => Some(result),
            _ => None,
        }
    }
}

use crate::source::SourceError;

/// Lifecycle of one async load.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadState<T> {
    /// Nothing requested yet.
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Failed(SourceError),
}

impl<T> LoadState<T> {
    /// Map an in-flight outcome slot (`None` while pending) to a state.
    pub fn from_outcome(outcome: Option<&Result<T, SourceError>>) -> Self
    where
        T: Clone,
    {
        match outcome {
            None => LoadState::Loading,
            Some(Ok(value)) => LoadState::Loaded(value.clone()),
            Some(Err(err)) => LoadState::Failed(err.clone()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&SourceError> {
        match self {
            LoadState::Failed(err) => Some(err),
            _ => None,
        }
    }
}

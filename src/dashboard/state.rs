use crate::record::Record;

/// Message shown for any failed load. Details only go to the log.
pub const FETCH_FAILED: &str = "Failed to fetch data";

/// Where the directory is in its one-shot load.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Loaded(Vec<Record>),
    Failed(String),
}

impl LoadState {
    pub fn as_str(&self) -> &str {
        match self {
            LoadState::Loading => "Loading",
            LoadState::Loaded(_) => "Loaded",
            LoadState::Failed(_) => "Failed",
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }
}

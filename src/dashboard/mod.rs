// src/dashboard/mod.rs

use anyhow::Result;
use tracing::{error, info, warn};

use crate::fetch::SheetLoader;
use crate::filter::Filter;
use crate::record::Record;

mod state;

pub use state::{LoadState, FETCH_FAILED};

/// What the page should show right now.
#[derive(Debug, PartialEq)]
pub enum View<'a> {
    Loading,
    Error(&'a str),
    /// Records are loaded but none pass the filter.
    Empty,
    Cards(Vec<&'a Record>),
}

/// The company directory: one load, then any number of filter changes.
#[derive(Debug)]
pub struct Dashboard {
    state: LoadState,
    filter: Filter,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Dashboard {
    pub fn new() -> Self {
        Self {
            state: LoadState::Loading,
            filter: Filter::default(),
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            LoadState::Failed(msg) => Some(msg.as_str()),
            _ => None,
        }
    }

    /// Loaded records; empty while loading or after a failure.
    pub fn records(&self) -> &[Record] {
        match &self.state {
            LoadState::Loaded(records) => records.as_slice(),
            _ => &[],
        }
    }

    /// Run the loader once and record its outcome.
    pub async fn load(&mut self, loader: &SheetLoader) -> bool {
        let result = loader.fetch_records().await;
        self.finish(result)
    }

    /// Leave the loading state. Only the first call has any effect; returns
    /// whether this call was it.
    pub fn finish(&mut self, result: Result<Vec<Record>>) -> bool {
        if !self.state.is_loading() {
            warn!(state = self.state.as_str(), "load already finished; ignoring result");
            return false;
        }
        self.state = match result {
            Ok(records) => {
                info!(records = records.len(), "directory loaded");
                LoadState::Loaded(records)
            }
            Err(e) => {
                error!(error = ?e, "Error fetching data");
                LoadState::Failed(FETCH_FAILED.to_string())
            }
        };
        true
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filter.search = search.into();
    }

    pub fn set_exchange(&mut self, exchange: impl Into<String>) {
        self.filter.exchange = exchange.into();
    }

    pub fn set_sector(&mut self, sector: impl Into<String>) {
        self.filter.sector = sector.into();
    }

    pub fn clear_filters(&mut self) {
        self.filter.clear();
    }

    pub fn visible(&self) -> Vec<&Record> {
        self.filter.apply(self.records())
    }

    pub fn view(&self) -> View<'_> {
        match &self.state {
            LoadState::Loading => View::Loading,
            LoadState::Failed(msg) => View::Error(msg),
            LoadState::Loaded(records) => {
                let shown = self.filter.apply(records);
                if shown.is_empty() {
                    View::Empty
                } else {
                    View::Cards(shown)
                }
            }
        }
    }
}

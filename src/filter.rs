// src/filter.rs

use std::collections::BTreeSet;

use crate::record::{fields, Record};

/// Fields the free-text search looks at.
pub const SEARCH_FIELDS: [&str; 3] = [fields::COMPANY_NAME, fields::INDUSTRY, fields::HEADQUARTERS];

/// The three user inputs that decide which records are shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    pub search: String,
    pub exchange: String,
    pub sector: String,
}

impl Filter {
    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.exchange.is_empty() && self.sector.is_empty()
    }

    /// Reset all three inputs together.
    pub fn clear(&mut self) {
        *self = Filter::default();
    }

    pub fn matches(&self, record: &Record) -> bool {
        self.matches_search(record)
            && exact(&self.exchange, record, fields::EXCHANGE)
            && exact(&self.sector, record, fields::SECTOR)
    }

    /// Records passing every predicate, in their original order.
    pub fn apply<'a>(&self, records: &'a [Record]) -> Vec<&'a Record> {
        records.iter().filter(|r| self.matches(r)).collect()
    }

    fn matches_search(&self, record: &Record) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        SEARCH_FIELDS.iter().any(|f| {
            record
                .text(f)
                .map_or(false, |t| t.to_lowercase().contains(&needle))
        })
    }
}

fn exact(selected: &str, record: &Record, field: &str) -> bool {
    selected.is_empty() || record.text(field).map_or(false, |t| t == selected)
}

/// Distinct non-empty values of `field`, sorted.
pub fn options(records: &[Record], field: &str) -> Vec<String> {
    records
        .iter()
        .filter_map(|r| r.non_empty(field))
        .map(|t| t.into_owned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

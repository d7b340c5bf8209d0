// src/render/mod.rs

use std::fmt::Write;

use crate::dashboard::{Dashboard, View};

pub mod card;
pub mod landing;

pub use card::Card;

pub const LOADING: &str = "⟳ Loading companies…";
pub const EMPTY_TITLE: &str = "No companies match your search criteria";
pub const EMPTY_HINT: &str = "Try adjusting your filters or search term";
pub const CLEAR_ACTION: &str = "[clear] Clear all filters";

/// Render whatever the dashboard currently shows.
pub fn render(dashboard: &Dashboard) -> String {
    render_view(&dashboard.view())
}

pub fn render_view(view: &View<'_>) -> String {
    let mut out = String::new();
    match view {
        View::Loading => out.push_str(LOADING),
        View::Error(msg) => {
            let _ = write!(out, "✖ {}", msg);
        }
        View::Empty => {
            let _ = write!(out, "{}\n{}\n{}", EMPTY_TITLE, EMPTY_HINT, CLEAR_ACTION);
        }
        View::Cards(records) => {
            let _ = writeln!(out, "Company Directory ({})", records.len());
            for record in records {
                let _ = write!(out, "\n{}\n", Card::from_record(record));
            }
        }
    }
    out
}

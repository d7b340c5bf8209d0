pub mod config;
pub mod dashboard;
pub mod fetch;
pub mod filter;
pub mod glow;
pub mod record;
pub mod render;
pub mod session;

pub use config::SheetConfig;
pub use dashboard::{Dashboard, LoadState, View};
pub use fetch::SheetLoader;
pub use filter::Filter;
pub use record::{CellValue, Record};

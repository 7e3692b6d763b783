pub mod app;

pub use app::models::{IndexEntry, RuntimeConfig};
pub use app::{build_index, write_index};

pub mod loader;

pub use loader::{apply_filters, load_data, read_trips};

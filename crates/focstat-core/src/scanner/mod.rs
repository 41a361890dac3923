pub mod walk;

pub use walk::{is_jpeg, FileCollector};

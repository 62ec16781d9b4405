pub mod preview;
pub mod writer;

pub use preview::render_preview;
pub use writer::{save_csv, to_json, write_csv};

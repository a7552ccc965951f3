pub mod analyze;
pub mod model;

pub use analyze::{analyze_entries, Analysis, Block, Edge, EdgeKind, EdgeOut, FunctionOut};
pub use model::{load_raw_bin, read_bytes, Image, Segment};

pub mod config;
pub mod error;
pub mod packing;
pub mod report;
pub mod telemetry;

pub use packing::{generate, generate_packing_list, PackingList, TripParameters};
pub use report::PackingDocument;

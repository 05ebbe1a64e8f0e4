pub mod flat_file;

pub use flat_file::{FlatFileStore, Namespace, StoreError};

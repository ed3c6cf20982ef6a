// deq Infrastructure - JSON File Adapter
// Implements: DocumentStore over a single pretty-printed JSON file

mod atomic_write;
mod file_store;

pub use atomic_write::write_json_atomic;
pub use file_store::JsonFileStore;

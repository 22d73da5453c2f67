//! Result store adapters.

mod file_result_store;
mod in_memory_result_store;

pub use file_result_store::FileResultStore;
pub use in_memory_result_store::InMemoryResultStore;

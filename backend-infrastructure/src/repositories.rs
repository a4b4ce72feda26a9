pub mod http_document_store;
pub mod local_storage;
pub mod memory_document_store;
pub mod seed_files;

pub use http_document_store::*;
pub use local_storage::*;
pub use memory_document_store::*;
pub use seed_files::*;

//! Adapters: implementations of the port traits

pub mod csv_export;
pub mod json_profiles;
pub mod memory_export;

pub use csv_export::CsvExporter;
pub use json_profiles::JsonProfileStore;
pub use memory_export::MemoryExporter;

//! Storage abstractions for service layer
//!
//! Contains the ordered in-memory store every resource is built on.

pub mod memory_store;

pub use memory_store::MemoryStore;

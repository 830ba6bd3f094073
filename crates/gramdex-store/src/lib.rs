#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]

mod file_document_store;

pub use file_document_store::FileDocumentStore;

pub mod archive;
pub mod decoder;
pub mod error;

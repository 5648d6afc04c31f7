//! Concrete artifact store implementations

pub mod filesystem;

pub use filesystem::FsStore;

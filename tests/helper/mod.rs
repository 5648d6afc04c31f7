pub mod store;

#[allow(unused_imports)]
pub use store::*;

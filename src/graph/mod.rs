pub mod connections;

pub use connections::*;

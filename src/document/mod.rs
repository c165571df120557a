mod lenient;
pub mod model;
pub mod source;
pub mod summary;
pub mod update;

pub use model::*;
pub use source::*;
pub use summary::*;
pub use update::*;

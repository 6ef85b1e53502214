pub mod errors;
pub mod mime;
pub mod range;
pub mod streaming;

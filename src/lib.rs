pub mod boundary;
pub mod cs;
pub mod error;
pub mod service;
pub mod source;

pub use cs::select;
pub use error::{Error, Result, SourceError};
pub use service::{SelectionService, SelectionServiceBuilder};

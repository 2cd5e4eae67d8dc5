mod error;
pub mod recipe;
pub mod request;
pub mod schedule;
mod text;

pub use error::*;
pub use text::*;

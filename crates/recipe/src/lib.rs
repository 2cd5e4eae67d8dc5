mod command;
pub mod image;
mod query;
pub mod tagging;

pub use command::*;
pub use query::*;

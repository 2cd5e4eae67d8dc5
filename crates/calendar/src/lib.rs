mod cursor;
mod date;
pub mod editor;
pub mod focus;
mod grid;
mod upcoming;

pub use cursor::*;
pub use date::*;
pub use grid::*;
pub use upcoming::*;

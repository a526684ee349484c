pub mod club;
pub mod form;
pub mod player;
pub mod selection;
pub mod tactics;

pub use club::*;
pub use form::*;
pub use player::*;
pub use selection::*;
pub use tactics::*;

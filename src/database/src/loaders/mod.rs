mod club;
mod names;
mod referee;

pub use club::*;
pub use names::*;
pub use referee::*;

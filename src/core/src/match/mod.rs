pub mod engine;
pub mod result;
pub mod squad;
pub mod strength;

pub use engine::*;
pub use result::*;
pub use squad::*;
pub use strength::*;

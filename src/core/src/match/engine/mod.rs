pub mod engine;
pub mod events;
pub mod goals;
pub mod outcome;
pub mod settings;

pub use engine::*;
pub use outcome::*;
pub use settings::*;

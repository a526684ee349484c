pub mod attributes;
pub mod builder;
pub mod injury;
pub mod player;
pub mod positions;
pub mod skills;

pub use attributes::*;
pub use builder::*;
pub use injury::*;
pub use player::*;
pub use positions::*;
pub use skills::*;

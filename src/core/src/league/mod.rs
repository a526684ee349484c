pub mod calendar;
pub mod fixture;
pub mod league;
pub mod referee;
pub mod result;
pub mod schedule;
pub mod scheduler;
pub mod season;
pub mod settings;
pub mod table;

pub use calendar::*;
pub use fixture::*;
pub use league::*;
pub use referee::*;
pub use result::*;
pub use schedule::*;
pub use scheduler::*;
pub use season::*;
pub use settings::*;
pub use table::*;

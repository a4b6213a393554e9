//! Party card engine. Keep this crate free of IO and platform concerns.

pub mod cards;
pub mod categorize;
pub mod config;
pub mod events;
pub mod pool;
pub mod rng;
pub mod select;
pub mod session;
pub mod state;
pub mod targets;
pub mod timer;
pub mod view;

pub use cards::*;
pub use categorize::*;
pub use config::*;
pub use events::*;
pub use pool::*;
pub use rng::*;
pub use select::*;
pub use session::*;
pub use state::*;
pub use targets::*;
pub use timer::*;
pub use view::*;

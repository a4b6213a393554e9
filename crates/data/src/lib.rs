//! Loading and validation of card data and game settings.

pub mod load;
pub mod schema;

pub use load::*;
pub use schema::*;

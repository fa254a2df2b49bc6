pub mod config;
pub mod display;
pub mod observability;
pub mod refresh;

pub use display::Panel;
pub use refresh::{Refresher, Update};

// MIT/Apache2 License

mod caps;
mod descriptor;
mod dispatch;
mod entries;
mod state;
mod table;
pub mod types;

pub use caps::{Capabilities, Version};
pub use descriptor::*;
pub use dispatch::*;
pub use entries::*;
pub use state::*;
pub use table::*;

//! CLI command implementations.

mod generate;
mod inspect;
mod serve;

pub use generate::{run_generate, GenerateArgs};
pub use inspect::{show_inspect, InspectArgs};
pub use serve::{run_server, ServeArgs};

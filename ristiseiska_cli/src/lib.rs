mod command;
mod interactive;
mod settings;
mod simulation;
pub use command::*;
pub use interactive::*;
pub use settings::*;
pub use simulation::*;

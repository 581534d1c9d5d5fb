pub use cards::*;
pub use config::*;
pub use deck::*;
pub use errors::*;
pub use game_code::*;
pub use game_log::*;
pub use game_state::*;
pub use player::*;
pub use policy::*;
pub use rules::*;
pub use scheduler::*;
pub use table::*;
pub use turn::*;
pub use view::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod cards;
mod config;
mod deck;
mod errors;
mod game_code;
mod game_log;
mod game_state;
mod player;
mod policy;
mod rules;
mod scheduler;
mod table;
pub mod turn;
mod view;
mod visualization;

pub mod cli;

mod extract;
pub use extract::*;

mod state;
pub use state::*;

pub mod routes;

mod store;
pub use store::*;

mod state;
pub use state::*;

mod create;
pub use create::*;

mod list;
pub use list::*;

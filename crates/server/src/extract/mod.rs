mod payload;
pub use payload::*;

mod user_id;
pub use user_id::*;

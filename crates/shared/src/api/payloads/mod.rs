mod exercise;
pub use exercise::*;

mod log;
pub use log::*;

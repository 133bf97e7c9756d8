mod exercise;
pub use exercise::*;

mod date;
pub use date::*;

mod new;
pub use new::*;

mod log;
pub use log::*;

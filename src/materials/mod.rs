pub mod fiber;

pub use fiber::*;

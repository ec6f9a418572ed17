pub mod catalog;
pub mod macros;
pub mod views;

pub use catalog::*;
pub use views::*;

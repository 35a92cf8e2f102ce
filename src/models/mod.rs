pub mod food;
pub mod user;

pub use food::*;
pub use user::*;

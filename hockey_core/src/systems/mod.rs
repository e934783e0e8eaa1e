pub mod forces;
pub mod paddles;
pub mod referee;

pub use forces::*;
pub use paddles::*;
pub use referee::*;

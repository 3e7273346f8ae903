pub mod advisory;
pub mod crop;
pub mod soil;
pub mod weather;

pub use advisory::*;
pub use crop::*;
pub use soil::*;
pub use weather::*;

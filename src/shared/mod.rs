pub mod macros;
pub mod structs;

pub use structs::CarState;
pub use structs::Direction;

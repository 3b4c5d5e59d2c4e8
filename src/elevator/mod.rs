pub mod car;
pub mod motion;

pub use car::Car;
pub use motion::{ChannelHook, FixedDelay, MotionHook, NoDelay, Step};

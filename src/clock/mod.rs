mod local;
mod source;

pub use local::Timestamp;
pub use source::{ScriptedClock, SystemClock, WallClock};

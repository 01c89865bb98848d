pub mod duration;
pub mod timer;

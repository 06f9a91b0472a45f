pub mod coord;
pub mod distance;
pub mod round;
pub mod route;
pub mod shared;
pub mod time;

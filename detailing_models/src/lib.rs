pub mod animation;
pub mod booking;
pub mod channel;
pub mod device;
mod macros;
pub mod page;

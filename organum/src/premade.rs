// premade devices that can be plugged into a bus
pub mod bus;
pub mod memory;
pub mod serial;

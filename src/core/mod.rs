pub mod alphabet;
pub mod bitmask;
pub mod config;

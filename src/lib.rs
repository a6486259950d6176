pub mod cache;
pub mod config;
pub mod qr;
pub mod schedule;
pub mod slideshow;
pub mod storage;
pub mod timer;
pub mod urlenc;

#[cfg(feature = "tui")]
pub mod tui;

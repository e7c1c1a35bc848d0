//! FPL API access and the forfeit scoring rules.

pub mod aggregate;
pub mod compute;
pub mod http;
pub mod period;
pub mod sample;
pub mod types;

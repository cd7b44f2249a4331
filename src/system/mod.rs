//! System-level modules
//!
//! Process-level concerns that sit outside the request path.

pub mod logging;

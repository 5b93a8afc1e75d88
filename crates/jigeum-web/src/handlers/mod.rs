//! HTTP 핸들러.

pub mod push;
pub mod status;

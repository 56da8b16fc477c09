//! Command implementations for transit

pub mod analyze;
pub mod compare;
pub mod dispatch;
pub mod path;
pub mod stations;

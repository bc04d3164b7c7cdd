//! Data models

pub mod activity;
pub mod api;
pub mod state;
pub mod threat;

pub use activity::*;
pub use api::*;
pub use state::*;
pub use threat::*;

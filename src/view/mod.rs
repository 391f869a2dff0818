pub mod controller;
pub mod poller;

pub use controller::{DashboardController, DashboardUpdate, ViewMode};

pub mod state;

pub use state::{AppState, UpdateSender};

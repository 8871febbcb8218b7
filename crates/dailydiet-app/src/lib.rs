pub mod application;
pub mod presentation;

pub use presentation::{build_app_state, build_router, run, AppState, SharedState};

pub mod app;
pub mod routes;
pub mod state;

pub use app::build_router;
pub use state::AppState;

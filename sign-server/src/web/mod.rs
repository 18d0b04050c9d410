//! Web layer: JSON API for the arrival sign.

mod dto;
mod routes;
mod state;

pub use dto::{BoardResponse, CreateGroupRequest, build_board};
pub use routes::create_router;
pub use state::AppState;

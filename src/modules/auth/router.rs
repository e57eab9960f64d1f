use axum::{Router, routing::post};

use crate::state::AppState;

use super::controller::{login_teacher, register_teacher};

pub fn init_auth_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register_teacher))
        .route("/login", post(login_teacher))
}

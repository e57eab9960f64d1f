use axum::{
    Router,
    routing::{delete, get},
};

use crate::state::AppState;

use super::controller::{create_mark, delete_mark, get_marks, update_mark};

pub fn init_marks_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_marks).post(create_mark).put(update_mark))
        .route("/{id}", delete(delete_mark))
}

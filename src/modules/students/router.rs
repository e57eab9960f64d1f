use axum::{
    Router,
    routing::{get, put},
};

use crate::state::AppState;

use super::controller::{create_student, delete_student, get_students, update_student};

pub fn init_students_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_students).post(create_student))
        .route("/{id}", put(update_student).delete(delete_student))
}

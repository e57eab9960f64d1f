pub use gradebook_auth::Claims;
pub use gradebook_models::{
    LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, Teacher,
};

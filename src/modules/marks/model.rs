pub use gradebook_models::{Mark, MarkDto, MarkId, MessageResponse};

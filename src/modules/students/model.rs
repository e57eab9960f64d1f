pub use gradebook_models::{CreateStudentDto, MessageResponse, Student, StudentId, UpdateStudentDto};

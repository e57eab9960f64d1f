pub use gradebook_models::subjects::EnrollmentRow;
pub use gradebook_models::{
    Enrollment, MessageResponse, Subject, SubjectDto, SubjectId, SubjectWithStudents,
};

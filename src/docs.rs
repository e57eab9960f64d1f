use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use gradebook_core::ErrorResponse;
use gradebook_models::{
    CreateStudentDto, Enrollment, LoginRequest, LoginResponse, Mark, MarkDto, MessageResponse,
    RegisterRequest, RegisterResponse, Student, Subject, SubjectDto, SubjectWithStudents, Teacher,
    UpdateStudentDto,
};

use crate::modules::system::model::HealthResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::register_teacher,
        crate::modules::auth::controller::login_teacher,
        crate::modules::students::controller::create_student,
        crate::modules::students::controller::get_students,
        crate::modules::students::controller::update_student,
        crate::modules::students::controller::delete_student,
        crate::modules::subjects::controller::create_subject,
        crate::modules::subjects::controller::get_subjects,
        crate::modules::subjects::controller::update_subject,
        crate::modules::subjects::controller::delete_subject,
        crate::modules::marks::controller::get_marks,
        crate::modules::marks::controller::create_mark,
        crate::modules::marks::controller::update_mark,
        crate::modules::marks::controller::delete_mark,
        crate::modules::system::controller::health_check,
        crate::modules::system::controller::render_metrics,
    ),
    components(
        schemas(
            Teacher,
            RegisterRequest,
            RegisterResponse,
            LoginRequest,
            LoginResponse,
            Student,
            CreateStudentDto,
            UpdateStudentDto,
            Subject,
            SubjectDto,
            SubjectWithStudents,
            Enrollment,
            Mark,
            MarkDto,
            MessageResponse,
            ErrorResponse,
            HealthResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Teacher registration and login"),
        (name = "Students", description = "Student management"),
        (name = "Subjects", description = "Subjects and student enrollment"),
        (name = "Marks", description = "One mark per student and subject"),
        (name = "System", description = "Health and metrics")
    ),
    info(
        title = "Gradebook API",
        version = "0.1.0",
        description = "Gradebook backend: teachers manage students, subjects, enrollments and marks behind JWT authentication.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}

use sqlx::PgPool;
use tracing::instrument;

use gradebook_auth::create_session_token;
use gradebook_config::JwtConfig;
use gradebook_core::{AppError, hash_password, verify_password_or_dummy};
use gradebook_db::teachers::insert_teacher;
use gradebook_models::TeacherId;
use gradebook_observability::{track_login, track_teacher_registered};

use super::model::{LoginRequest, LoginResponse, RegisterRequest, Teacher};

pub struct AuthService;

impl AuthService {
    /// Creates a teacher account. The unique index on `teachers.email` decides
    /// duplicates.
    #[instrument(skip(db, dto), fields(email = %dto.email))]
    pub async fn register_teacher(db: &PgPool, dto: RegisterRequest) -> Result<Teacher, AppError> {
        let hashed_password = hash_password(&dto.password)?;

        let teacher = insert_teacher(db, &dto.email, &hashed_password).await?;

        track_teacher_registered();
        tracing::info!(teacher_id = %teacher.id, "Teacher registered");

        Ok(teacher)
    }

    #[instrument(skip(db, dto, jwt_config), fields(email = %dto.email))]
    pub async fn login_teacher(
        db: &PgPool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResponse, AppError> {
        #[derive(sqlx::FromRow)]
        struct TeacherWithPassword {
            id: TeacherId,
            email: String,
            password: String,
        }

        let result: Result<LoginResponse, AppError> = async {
            let teacher = sqlx::query_as::<_, TeacherWithPassword>(
                "SELECT id, email, password FROM teachers WHERE email = $1",
            )
            .bind(&dto.email)
            .fetch_optional(db)
            .await
            .map_err(AppError::database)?;

            // Unknown emails still pay for a bcrypt check.
            let stored = teacher.as_ref().map(|t| t.password.as_str());
            let verified = verify_password_or_dummy(&dto.password, stored)?;

            let teacher = match teacher {
                Some(teacher) if verified => teacher,
                _ => return Err(AppError::invalid_credentials()),
            };

            let token = create_session_token(teacher.id.into_inner(), &teacher.email, jwt_config)?;
            tracing::info!(teacher_id = %teacher.id, "Teacher logged in");

            Ok(LoginResponse { token })
        }
        .await;

        track_login(result.is_ok());
        result
    }
}

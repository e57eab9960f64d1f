use anyhow::Context;
use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;

use gradebook_cli::seeder::{SeedConfig, clear_seeded_data, find_teacher, seed_database};
use gradebook_cli::teachers::create_teacher;
use gradebook_config::ServerConfig;
use gradebook_db::PgPool;
use gradebook_observability::init_console_logging;

#[derive(Parser)]
#[command(name = "gradebook-cli")]
#[command(about = "Gradebook CLI - Administrative tools for the Gradebook API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a teacher account
    CreateTeacher {
        /// Email address
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Seed the database with fake students, subjects, enrollments and marks
    Seed {
        /// Number of students to create
        #[arg(long, default_value = "20")]
        students: usize,

        /// Number of subjects to create
        #[arg(long, default_value = "5")]
        subjects: usize,

        /// Teacher who owns the seeded students (defaults to the first teacher)
        #[arg(long)]
        teacher_email: Option<String>,
    },
    /// Delete all marks, enrollments, subjects and students (keeps teachers)
    Clear,
    /// Apply pending database migrations
    Migrate,
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    init_console_logging();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("\n❌ {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let pool = connect().await?;

    match cli.command {
        Commands::CreateTeacher { email, password } => {
            handle_create_teacher(&pool, email, password).await
        }
        Commands::Seed {
            students,
            subjects,
            teacher_email,
        } => {
            let teacher_id = find_teacher(&pool, teacher_email.as_deref()).await?;
            seed_database(&pool, teacher_id, SeedConfig::new(students, subjects)).await?;
            println!("\n✅ Database seeded successfully!");
            Ok(())
        }
        Commands::Clear => {
            clear_seeded_data(&pool).await?;
            println!("\n✅ Gradebook data cleared successfully!");
            Ok(())
        }
        Commands::Migrate => {
            gradebook_db::run_migrations(&pool)
                .await
                .context("Failed to run migrations")?;
            println!("\n✅ Migrations applied");
            Ok(())
        }
    }
}

async fn connect() -> anyhow::Result<PgPool> {
    let config = ServerConfig::from_env();
    let database_url = config
        .database_url
        .context("DATABASE_URL must be set")?;

    gradebook_db::init_db_pool(&database_url, 5)
        .await
        .context("Failed to connect to database")
}

async fn handle_create_teacher(
    pool: &PgPool,
    email: Option<String>,
    password: Option<String>,
) -> anyhow::Result<()> {
    let email = match email {
        Some(email) => email,
        None => Input::new()
            .with_prompt("Email address")
            .interact_text()
            .context("Failed to read email")?,
    };

    let password = match password {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()
            .context("Failed to read password")?,
    };

    let teacher = create_teacher(pool, &email, &password)
        .await
        .map_err(|e| anyhow::anyhow!("Error creating teacher: {}", e.message()))?;

    println!("\n✅ Teacher created successfully!");
    println!("   Id: {}", teacher.id);
    println!("   Email: {}", teacher.email);
    Ok(())
}

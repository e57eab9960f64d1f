//! # Gradebook CLI
//!
//! Administrative operations used by the `gradebook-cli` binary:
//!
//! - [`teachers::create_teacher`]: create a teacher account outside the API
//! - [`seeder::seed_database`]: fill the database with fake students,
//!   subjects, enrollments and marks
//! - [`seeder::clear_seeded_data`]: remove everything except teachers
//!
//! ```ignore
//! use gradebook_cli::seeder::{SeedConfig, find_teacher, seed_database};
//!
//! let teacher_id = find_teacher(&pool, Some("admin@school.test")).await?;
//! let summary = seed_database(&pool, teacher_id, SeedConfig::new(20, 5)).await?;
//! println!("{} marks", summary.marks);
//! ```

pub mod seeder;
pub mod teachers;

use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Creates and returns a PostgreSQL connection pool.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

struct Migration {
    id: i32,
    description: &'static str,
    statements: &'static [&'static str],
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        id: 1,
        description: "applicants, skills and work history",
        statements: &[
            r#"
            CREATE TABLE IF NOT EXISTS applicants (
                id UUID PRIMARY KEY,
                first_name TEXT NOT NULL,
                last_name TEXT NOT NULL,
                email TEXT NOT NULL UNIQUE,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
            r#"
            CREATE TABLE IF NOT EXISTS applicant_skills (
                id BIGSERIAL PRIMARY KEY,
                applicant_id UUID NOT NULL REFERENCES applicants(id) ON DELETE CASCADE,
                skill TEXT NOT NULL,
                level TEXT,
                years_of_experience DOUBLE PRECISION
            )
            "#,
            r#"
            CREATE TABLE IF NOT EXISTS applicant_experience (
                id BIGSERIAL PRIMARY KEY,
                applicant_id UUID NOT NULL REFERENCES applicants(id) ON DELETE CASCADE,
                position TEXT NOT NULL DEFAULT '',
                company TEXT NOT NULL DEFAULT '',
                start_date DATE,
                end_date DATE
            )
            "#,
            "CREATE INDEX IF NOT EXISTS idx_applicant_skills_applicant ON applicant_skills(applicant_id)",
            "CREATE INDEX IF NOT EXISTS idx_applicant_experience_applicant ON applicant_experience(applicant_id)",
        ],
    },
    Migration {
        id: 2,
        description: "jobs and applications with match scores",
        statements: &[
            r#"
            CREATE TABLE IF NOT EXISTS jobs (
                id UUID PRIMARY KEY,
                employer_id UUID NOT NULL,
                title TEXT NOT NULL,
                required_skills TEXT[] NOT NULL DEFAULT '{}',
                experience_level TEXT,
                status TEXT NOT NULL DEFAULT 'draft',
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
            r#"
            CREATE TABLE IF NOT EXISTS applications (
                id UUID PRIMARY KEY,
                applicant_id UUID NOT NULL REFERENCES applicants(id) ON DELETE CASCADE,
                job_id UUID NOT NULL REFERENCES jobs(id) ON DELETE CASCADE,
                match_score INTEGER CHECK (match_score BETWEEN 0 AND 100),
                status TEXT NOT NULL DEFAULT 'new'
                    CHECK (status IN ('new', 'shortlisted', 'interview', 'hired', 'rejected')),
                applied_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                UNIQUE (applicant_id, job_id)
            )
            "#,
        ],
    },
];

/// Applies every migration not yet recorded in `schema_migrations`, in id order.
/// Each migration runs in its own transaction.
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS schema_migrations (
            id INTEGER PRIMARY KEY,
            description TEXT NOT NULL,
            applied_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await
    .context("failed to create schema_migrations table")?;

    for migration in MIGRATIONS {
        let applied: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM schema_migrations WHERE id = $1)")
                .bind(migration.id)
                .fetch_one(pool)
                .await?;
        if applied {
            continue;
        }

        let mut tx = pool.begin().await?;
        for statement in migration.statements {
            sqlx::query(statement)
                .execute(&mut *tx)
                .await
                .with_context(|| format!("migration {} failed", migration.id))?;
        }
        sqlx::query("INSERT INTO schema_migrations (id, description) VALUES ($1, $2)")
            .bind(migration.id)
            .bind(migration.description)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        info!("Applied migration {}: {}", migration.id, migration.description);
    }

    Ok(())
}

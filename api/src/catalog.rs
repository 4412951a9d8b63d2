//! The fixed technology catalog.
//!
//! The allow-list is process-wide static data: membership is checked against
//! [`TECHNOLOGIES`] without touching the database, and the `technologies`
//! table only resolves a supported name to its id. [`seed`] keeps the table in
//! sync with the constant at startup.

use sqlx::{PgExecutor, PgPool};

use crate::models::Technology;

/// Every technology name a project may be associated with.
pub const TECHNOLOGIES: [&str; 9] = [
    "JavaScript",
    "Python",
    "React",
    "Express.js",
    "HTML",
    "CSS",
    "Django",
    "PostgreSQL",
    "MongoDB",
];

/// Whether `name` is in the allow-list. Case-sensitive, exact spelling.
pub fn is_supported(name: &str) -> bool {
    TECHNOLOGIES.contains(&name)
}

/// Resolve a technology name to its catalog row.
pub async fn find_by_name<'e>(
    executor: impl PgExecutor<'e>,
    name: &str,
) -> sqlx::Result<Option<Technology>> {
    sqlx::query_as("SELECT id, name FROM technologies WHERE name = $1")
        .bind(name)
        .fetch_optional(executor)
        .await
}

/// Insert any catalog names missing from the `technologies` table.
pub async fn seed(pool: &PgPool) -> sqlx::Result<()> {
    for name in TECHNOLOGIES {
        sqlx::query("INSERT INTO technologies (name) VALUES ($1) ON CONFLICT (name) DO NOTHING")
            .bind(name)
            .execute(pool)
            .await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supported_names_pass() {
        for name in TECHNOLOGIES {
            assert!(is_supported(name), "{name} should be supported");
        }
    }

    #[test]
    fn membership_is_exact() {
        assert!(!is_supported("Rust"));
        assert!(!is_supported("javascript"));
        assert!(!is_supported("React "));
        assert!(!is_supported(""));
    }

    #[test]
    fn catalog_has_nine_entries() {
        assert_eq!(TECHNOLOGIES.len(), 9);
    }
}

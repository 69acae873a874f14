//! PostgreSQL implementation of the package registry.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use super::builtin_packages::builtin_packages;
use crate::domain::entities::{
    NewTemplatePackage, PackageFilter, TemplateConfig, TemplatePackage, Tier,
};
use crate::domain::repositories::PackageRepository;
use crate::error::AppError;

const SELECT_COLUMNS: &str = "id, name, description, thumbnail, nav, hero, product_card, \
                              footer, background, tier, builtin, created_at";

#[derive(Debug, FromRow)]
struct PackageRow {
    id: String,
    name: String,
    description: String,
    thumbnail: String,
    nav: Option<String>,
    hero: Option<String>,
    product_card: String,
    footer: Option<String>,
    background: Option<String>,
    tier: String,
    builtin: bool,
    created_at: DateTime<Utc>,
}

impl TryFrom<PackageRow> for TemplatePackage {
    type Error = AppError;

    fn try_from(row: PackageRow) -> Result<Self, Self::Error> {
        let tier: Tier = row.tier.parse().map_err(|_| {
            AppError::internal(
                "Stored template has an unknown tier",
                json!({ "id": row.id, "tier": row.tier }),
            )
        })?;

        Ok(TemplatePackage {
            id: row.id,
            name: row.name,
            description: row.description,
            thumbnail: row.thumbnail,
            config: TemplateConfig {
                nav: row.nav,
                hero: row.hero,
                product_card: row.product_card,
                footer: row.footer,
                background: row.background,
            },
            tier,
            builtin: row.builtin,
            created_at: row.created_at,
        })
    }
}

/// PostgreSQL repository for template packages.
///
/// Slots are stored as one nullable column each, so a package row mirrors
/// [`TemplateConfig`] directly.
pub struct PgPackageRepository {
    pool: Arc<PgPool>,
}

impl PgPackageRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Inserts the built-in packages that are not yet stored.
    ///
    /// Existing rows are left untouched. Returns the number of rows inserted.
    pub async fn seed_builtin(&self) -> Result<u64, AppError> {
        let mut tx = self.pool.begin().await?;
        let mut inserted = 0;

        for package in builtin_packages() {
            let result = sqlx::query(
                r#"
                INSERT INTO template_packages
                    (id, name, description, thumbnail, nav, hero, product_card, footer, background, tier, builtin)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, TRUE)
                ON CONFLICT (id) DO NOTHING
                "#,
            )
            .bind(&package.id)
            .bind(&package.name)
            .bind(&package.description)
            .bind(&package.thumbnail)
            .bind(&package.config.nav)
            .bind(&package.config.hero)
            .bind(&package.config.product_card)
            .bind(&package.config.footer)
            .bind(&package.config.background)
            .bind(package.tier.as_str())
            .execute(&mut *tx)
            .await?;

            inserted += result.rows_affected();
        }

        tx.commit().await?;
        Ok(inserted)
    }
}

#[async_trait]
impl PackageRepository for PgPackageRepository {
    async fn create(&self, new_package: NewTemplatePackage) -> Result<TemplatePackage, AppError> {
        let row: PackageRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO template_packages
                (id, name, description, thumbnail, nav, hero, product_card, footer, background, tier, builtin)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, FALSE)
            RETURNING {SELECT_COLUMNS}
            "#
        ))
        .bind(&new_package.id)
        .bind(&new_package.name)
        .bind(&new_package.description)
        .bind(&new_package.thumbnail)
        .bind(&new_package.config.nav)
        .bind(&new_package.config.hero)
        .bind(&new_package.config.product_card)
        .bind(&new_package.config.footer)
        .bind(&new_package.config.background)
        .bind(new_package.tier.as_str())
        .fetch_one(self.pool.as_ref())
        .await?;

        row.try_into()
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<TemplatePackage>, AppError> {
        let row: Option<PackageRow> = sqlx::query_as(&format!(
            "SELECT {SELECT_COLUMNS} FROM template_packages WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    async fn list(&self, filter: PackageFilter) -> Result<Vec<TemplatePackage>, AppError> {
        let search = filter
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| format!("%{}%", escape_like(&s.to_lowercase())));

        let rows: Vec<PackageRow> = sqlx::query_as(&format!(
            r#"
            SELECT {SELECT_COLUMNS}
            FROM template_packages
            WHERE ($1::TEXT IS NULL OR tier = $1)
              AND ($2::TEXT IS NULL
                   OR LOWER(id) LIKE $2
                   OR LOWER(name) LIKE $2
                   OR LOWER(description) LIKE $2)
            ORDER BY created_at, id
            "#
        ))
        .bind(filter.tier.map(|t| t.as_str()))
        .bind(search)
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM template_packages WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(
                "Template not found",
                json!({ "id": id }),
            ));
        }

        Ok(())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM template_packages")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}

/// Escapes `LIKE` wildcards so the search term matches literally.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("50%_off"), "50\\%\\_off");
        assert_eq!(escape_like("plain"), "plain");
    }

    #[test]
    fn test_row_with_unknown_tier() {
        let row = PackageRow {
            id: "x".into(),
            name: "X".into(),
            description: String::new(),
            thumbnail: String::new(),
            nav: None,
            hero: None,
            product_card: "card-minimal".into(),
            footer: None,
            background: None,
            tier: "GOLD".into(),
            builtin: false,
            created_at: Utc::now(),
        };

        let result: Result<TemplatePackage, _> = row.try_into();

        assert!(matches!(result, Err(AppError::Internal { .. })));
    }
}

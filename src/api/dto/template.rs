//! DTOs for template package endpoints.

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_with::{NoneAsEmptyString, serde_as};
use std::sync::LazyLock;
use validator::Validate;

use crate::domain::entities::{
    NewTemplatePackage, PackageFilter, TemplateConfig, TemplatePackage, Tier,
};

static TEMPLATE_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9][a-z0-9-]*$").unwrap());

/// Query parameters for `GET /api/templates`.
///
/// Empty values (`?tier=&q=`) are treated as absent.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct ListTemplatesQuery {
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub tier: Option<Tier>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub q: Option<String>,
}

impl From<ListTemplatesQuery> for PackageFilter {
    fn from(query: ListTemplatesQuery) -> Self {
        PackageFilter {
            tier: query.tier,
            search: query.q,
        }
    }
}

/// Request to register a new template package.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTemplateRequest {
    #[validate(length(min = 2, max = 64))]
    #[validate(regex(path = "*TEMPLATE_ID_REGEX", message = "Use a-z, 0-9 and hyphens"))]
    pub id: String,

    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[serde(default)]
    #[validate(length(max = 500))]
    pub description: String,

    #[serde(default)]
    #[validate(length(max = 500))]
    pub thumbnail: String,

    pub config: TemplateConfig,

    #[serde(default)]
    pub tier: Tier,
}

impl From<CreateTemplateRequest> for NewTemplatePackage {
    fn from(req: CreateTemplateRequest) -> Self {
        NewTemplatePackage {
            id: req.id,
            name: req.name.trim().to_string(),
            description: req.description,
            thumbnail: req.thumbnail,
            config: req.config,
            tier: req.tier,
        }
    }
}

/// Public view of a template package.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub thumbnail: String,
    pub config: TemplateConfig,
    pub tier: Tier,
    pub builtin: bool,
    pub created_at: DateTime<Utc>,
}

impl From<TemplatePackage> for TemplateResponse {
    fn from(p: TemplatePackage) -> Self {
        TemplateResponse {
            id: p.id,
            name: p.name,
            description: p.description,
            thumbnail: p.thumbnail,
            config: p.config,
            tier: p.tier,
            builtin: p.builtin,
            created_at: p.created_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TemplateListResponse {
    pub total: usize,
    pub items: Vec<TemplateResponse>,
}

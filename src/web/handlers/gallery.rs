//! Template gallery page.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};

use crate::api::dto::template::ListTemplatesQuery;
use crate::domain::entities::{TemplatePackage, Tier};
use crate::error::AppError;
use crate::state::AppState;

/// One package card in the gallery.
pub struct GalleryItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub thumbnail: String,
    pub tier: &'static str,
    pub slots: Vec<String>,
}

impl From<TemplatePackage> for GalleryItem {
    fn from(p: TemplatePackage) -> Self {
        let slots = p
            .config
            .slots()
            .into_iter()
            .map(|(kind, name)| format!("{kind}: {name}"))
            .collect();

        GalleryItem {
            tier: p.tier.as_str(),
            id: p.id,
            name: p.name,
            description: p.description,
            thumbnail: p.thumbnail,
            slots,
        }
    }
}

pub struct TierOption {
    pub value: &'static str,
    pub selected: bool,
}

/// Renders `templates/gallery.html`.
#[derive(Template, WebTemplate)]
#[template(path = "gallery.html")]
pub struct GalleryTemplate {
    pub items: Vec<GalleryItem>,
    pub tiers: Vec<TierOption>,
    pub search: String,
}

/// Lists template packages as preview cards.
///
/// # Endpoint
///
/// `GET /templates?tier=PREMIUM&q=card`
pub async fn gallery_handler(
    State(state): State<AppState>,
    Query(query): Query<ListTemplatesQuery>,
) -> Result<GalleryTemplate, AppError> {
    let selected = query.tier;
    let search = query.q.clone().unwrap_or_default();

    let items = state
        .package_service
        .list(query.into())
        .await?
        .into_iter()
        .map(GalleryItem::from)
        .collect();

    let tiers = Tier::ALL
        .into_iter()
        .map(|tier| TierOption {
            value: tier.as_str(),
            selected: selected == Some(tier),
        })
        .collect();

    Ok(GalleryTemplate {
        items,
        tiers,
        search,
    })
}

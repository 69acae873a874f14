//! In-memory component catalog loaded once at start-up.

use async_trait::async_trait;
use std::collections::BTreeMap;
use tracing::{info, warn};

use super::fs_store::FsComponentRepository;
use crate::domain::entities::{Component, ComponentKind, is_valid_component_name};
use crate::domain::repositories::ComponentRepository;
use crate::error::TemplateError;

/// Component catalog held entirely in memory.
///
/// The catalog is fixed at deploy time, so it is read once and every render
/// afterwards is served without touching the disk.
#[derive(Debug, Clone, Default)]
pub struct PreloadedComponentRepository {
    components: BTreeMap<(ComponentKind, String), Component>,
}

impl PreloadedComponentRepository {
    /// Reads every component of every kind from a filesystem catalog.
    ///
    /// # Errors
    ///
    /// Returns the first error hit while listing or reading; a component
    /// without markup or style aborts the load.
    pub async fn load(source: &FsComponentRepository) -> Result<Self, TemplateError> {
        let mut components = BTreeMap::new();

        for kind in ComponentKind::ALL {
            for name in source.list(kind).await? {
                let component = source.find(kind, &name).await?;
                components.insert((kind, name), component);
            }
        }

        info!(
            "Preloaded {} components from {}",
            components.len(),
            source.root().display()
        );

        Ok(Self { components })
    }

    /// Builds a catalog from already-constructed components.
    pub fn from_components(components: impl IntoIterator<Item = Component>) -> Self {
        Self {
            components: components
                .into_iter()
                .map(|c| ((c.kind, c.name.clone()), c))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

#[async_trait]
impl ComponentRepository for PreloadedComponentRepository {
    async fn find(&self, kind: ComponentKind, name: &str) -> Result<Component, TemplateError> {
        if !is_valid_component_name(name) {
            return Err(TemplateError::InvalidComponentName {
                name: name.to_string(),
            });
        }

        self.components
            .get(&(kind, name.to_string()))
            .cloned()
            .ok_or_else(|| {
                warn!("Component {}/{} is not in the preloaded catalog", kind, name);
                TemplateError::ComponentNotFound {
                    kind,
                    name: name.to_string(),
                }
            })
    }

    async fn list(&self, kind: ComponentKind) -> Result<Vec<String>, TemplateError> {
        Ok(self
            .components
            .keys()
            .filter(|(k, _)| *k == kind)
            .map(|(_, name)| name.clone())
            .collect())
    }
}

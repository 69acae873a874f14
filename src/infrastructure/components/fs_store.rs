//! Filesystem component catalog read on every lookup.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::domain::entities::{Component, ComponentKind, is_valid_component_name};
use crate::domain::repositories::ComponentRepository;
use crate::error::TemplateError;

const MARKUP_EXT: &str = "html";
const STYLE_EXT: &str = "css";
const SCRIPT_EXT: &str = "js";

/// Component catalog backed by a directory tree:
///
/// ```text
/// <root>/<kind>/<name>.html   markup (required)
/// <root>/<kind>/<name>.css    style  (required)
/// <root>/<kind>/<name>.js     script (optional)
/// ```
///
/// Every lookup hits the disk, so edits show up without a restart. Use
/// [`super::PreloadedComponentRepository`] in production.
#[derive(Debug, Clone)]
pub struct FsComponentRepository {
    root: PathBuf,
}

impl FsComponentRepository {
    /// Creates a repository rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn file(&self, kind: ComponentKind, name: &str, ext: &str) -> PathBuf {
        self.root.join(kind.as_str()).join(format!("{name}.{ext}"))
    }
}

/// Reads a file, mapping "not found" to `None`.
async fn read_optional(path: &Path) -> Result<Option<String>, TemplateError> {
    match tokio::fs::read_to_string(path).await {
        Ok(body) => Ok(Some(body)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

#[async_trait]
impl ComponentRepository for FsComponentRepository {
    async fn find(&self, kind: ComponentKind, name: &str) -> Result<Component, TemplateError> {
        if !is_valid_component_name(name) {
            return Err(TemplateError::InvalidComponentName {
                name: name.to_string(),
            });
        }

        let markup_path = self.file(kind, name, MARKUP_EXT);
        let style_path = self.file(kind, name, STYLE_EXT);

        let (Some(markup), Some(style)) = (
            read_optional(&markup_path).await?,
            read_optional(&style_path).await?,
        ) else {
            warn!(
                "Component {}/{} is missing its markup or style file under {}",
                kind,
                name,
                self.root.display()
            );
            return Err(TemplateError::ComponentNotFound {
                kind,
                name: name.to_string(),
            });
        };

        let script = read_optional(&self.file(kind, name, SCRIPT_EXT))
            .await?
            .unwrap_or_default();

        debug!("Loaded component {}/{} from disk", kind, name);

        Ok(Component::new(kind, name, markup, style, script))
    }

    async fn list(&self, kind: ComponentKind) -> Result<Vec<String>, TemplateError> {
        let dir = self.root.join(kind.as_str());

        let mut entries = match tokio::fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No component directory for kind {} at {}", kind, dir.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(MARKUP_EXT) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str())
                && is_valid_component_name(stem)
            {
                names.push(stem.to_string());
            }
        }

        names.sort();
        Ok(names)
    }
}

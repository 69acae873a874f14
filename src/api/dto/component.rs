//! DTOs for the component catalog endpoint.

use serde::Serialize;

use crate::domain::entities::ComponentKind;

#[derive(Debug, Serialize)]
pub struct ComponentListResponse {
    pub kind: ComponentKind,
    pub names: Vec<String>,
}

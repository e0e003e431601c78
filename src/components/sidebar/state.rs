use serde::{Deserialize, Serialize};
use strum_macros::EnumString;

#[derive(
    Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize, EnumString,
)]
pub enum SidebarType {
    #[default]
    List,
    Edit,
    Add,
}

impl SidebarType {
    pub fn is_list(&self) -> bool {
        matches!(self, SidebarType::List)
    }

    pub fn is_edit(&self) -> bool {
        matches!(self, SidebarType::Edit)
    }
}

/// Immutable record. `with_type` hands out a new instance instead of
/// mutating this one.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct SidebarState {
    #[serde(rename = "type", default)]
    kind: SidebarType,
}

impl SidebarState {
    pub fn new(kind: SidebarType) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> SidebarType {
        self.kind
    }

    pub fn with_type(&self, kind: SidebarType) -> Self {
        Self { kind }
    }
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The persisted light/dark preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ThemeState {
    #[schema(example = false)]
    pub is_dark_mode: bool,
}

impl ThemeState {
    pub fn new(is_dark_mode: bool) -> Self {
        Self { is_dark_mode }
    }

    pub fn toggled(self) -> Self {
        Self {
            is_dark_mode: !self.is_dark_mode,
        }
    }
}

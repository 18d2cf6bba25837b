//! Optional screen features, decided once at the application root.

use common::page_selection::MatrixView;
use dioxus::prelude::*;


#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureConfig {
    /// Professors can issue invitation codes from the course page.
    pub invite_codes: bool,
    /// Professors can set an upload deadline on the week page.
    pub upload_deadlines: bool,
    /// Matrix cells show the backend-rendered page thumbnail.
    pub page_thumbnails: bool,
    /// View the custom PDF editor opens with.
    pub default_matrix_view: MatrixView,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            invite_codes: true,
            upload_deadlines: true,
            page_thumbnails: true,
            default_matrix_view: MatrixView::Grid,
        }
    }
}

pub fn use_feature_config() -> FeatureConfig {
    use_context::<FeatureConfig>()
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn everything_is_on_by_default() {
        let config = FeatureConfig::default();
        assert!(config.invite_codes && config.upload_deadlines && config.page_thumbnails);
        assert_eq!(config.default_matrix_view, MatrixView::Grid);
    }
}

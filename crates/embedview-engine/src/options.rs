use embedview_types::ViewConfig;

use crate::visibility::is_view_visible;

/// One selectable view in the editor's picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewOption {
    /// Lookup identifier: the view's path, or its index token when pathless
    pub value: String,
    pub label: String,
}

/// Build picker options for the views of one dashboard, filtered to those
/// visible to the user. Index values refer to positions in the full list,
/// so they stay valid as lookup identifiers after filtering.
pub fn view_options(views: &[ViewConfig], user_id: Option<&str>) -> Vec<ViewOption> {
    views
        .iter()
        .enumerate()
        .filter(|(_, view)| is_view_visible(view, user_id))
        .map(|(index, view)| {
            let value = view.path.clone().unwrap_or_else(|| index.to_string());
            let label = view
                .title
                .clone()
                .or_else(|| view.name.clone())
                .or_else(|| view.path.clone())
                .unwrap_or_else(|| {
                    if index == 0 {
                        "Home".to_string()
                    } else {
                        format!("Index {}", index)
                    }
                });
            ViewOption { value, label }
        })
        .collect()
}

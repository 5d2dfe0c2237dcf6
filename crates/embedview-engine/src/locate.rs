use embedview_types::ViewConfig;

use crate::target::index_token;

/// Find a view in a list by identifier: exact path match first, then the
/// bounds-checked index-token form. Returns the positional index alongside
/// the view so the caller can hand it to the render adapter.
pub fn find_view<'a>(views: &'a [ViewConfig], view_id: &str) -> Option<(usize, &'a ViewConfig)> {
    if let Some(found) = views
        .iter()
        .enumerate()
        .find(|(_, view)| view.path.as_deref() == Some(view_id))
    {
        return Some(found);
    }
    let index = index_token(view_id)?;
    views.get(index).map(|view| (index, view))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(path: Option<&str>) -> ViewConfig {
        ViewConfig {
            path: path.map(str::to_string),
            ..ViewConfig::default()
        }
    }

    #[test]
    fn finds_by_path() {
        let views = [view(Some("home")), view(Some("kitchen"))];
        let (index, found) = find_view(&views, "kitchen").unwrap();
        assert_eq!(index, 1);
        assert_eq!(found.path.as_deref(), Some("kitchen"));
    }

    #[test]
    fn finds_by_bare_index() {
        let views = [view(Some("home")), view(None)];
        let (index, _) = find_view(&views, "1").unwrap();
        assert_eq!(index, 1);
    }

    #[test]
    fn finds_by_index_token() {
        let views = [view(Some("home")), view(None)];
        assert_eq!(find_view(&views, "index-0").map(|(i, _)| i), Some(0));
    }

    #[test]
    fn path_match_wins_over_index_interpretation() {
        // a view literally named "0" must not resolve to position zero
        let views = [view(Some("home")), view(Some("0"))];
        assert_eq!(find_view(&views, "0").map(|(i, _)| i), Some(1));
    }

    #[test]
    fn out_of_range_index_misses() {
        let views = [view(Some("home"))];
        assert_eq!(find_view(&views, "3"), None);
        assert_eq!(find_view(&views, "index-1"), None);
    }

    #[test]
    fn unknown_path_misses() {
        let views = [view(Some("home"))];
        assert_eq!(find_view(&views, "garage"), None);
    }
}

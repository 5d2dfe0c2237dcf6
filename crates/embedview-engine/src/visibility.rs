use embedview_types::ViewConfig;
use serde_json::Value;

/// Whether a view is visible to the given user.
///
/// Fail-open: with no user id, or no usable visibility declaration, the
/// view is visible. The declaration is the first of `visible`,
/// `visibility`, `users` that is a non-empty array; anything else (missing,
/// not a list, empty list) does not count. With a declaration present, the
/// view is visible iff some rule names the user.
pub fn is_view_visible(view: &ViewConfig, user_id: Option<&str>) -> bool {
    let Some(uid) = user_id else {
        return true;
    };

    let declaration = [&view.visible, &view.visibility, &view.users]
        .into_iter()
        .find_map(|field| {
            field
                .as_ref()
                .and_then(Value::as_array)
                .filter(|rules| !rules.is_empty())
        });

    match declaration {
        Some(rules) => rules.iter().any(|rule| rule_matches(rule, uid)),
        None => true,
    }
}

/// A rule names a user as a bare id string, an object whose `user` field
/// equals or contains the id, or an object whose `users` list contains it.
fn rule_matches(rule: &Value, uid: &str) -> bool {
    match rule {
        Value::String(id) => id == uid,
        Value::Object(rule) => {
            let user_matches = match rule.get("user") {
                Some(Value::String(id)) => id == uid,
                Some(Value::Array(ids)) => ids.iter().any(|id| id.as_str() == Some(uid)),
                _ => false,
            };
            let users_match = matches!(
                rule.get("users"),
                Some(Value::Array(ids)) if ids.iter().any(|id| id.as_str() == Some(uid))
            );
            user_matches || users_match
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn view_with_visible(visible: Value) -> ViewConfig {
        ViewConfig {
            visible: Some(visible),
            ..ViewConfig::default()
        }
    }

    #[test]
    fn no_user_is_fail_open() {
        let view = view_with_visible(json!(["someone-else"]));
        assert!(is_view_visible(&view, None));
    }

    #[test]
    fn no_declaration_is_visible_to_anyone() {
        assert!(is_view_visible(&ViewConfig::default(), Some("abc")));
    }

    #[test]
    fn empty_declaration_does_not_count() {
        let view = view_with_visible(json!([]));
        assert!(is_view_visible(&view, Some("abc")));
    }

    #[test]
    fn non_list_declaration_does_not_count() {
        let view = view_with_visible(json!(true));
        assert!(is_view_visible(&view, Some("abc")));
    }

    #[test]
    fn empty_primary_field_falls_through_to_alias() {
        let view = ViewConfig {
            visible: Some(json!([])),
            users: Some(json!(["abc"])),
            ..ViewConfig::default()
        };
        assert!(is_view_visible(&view, Some("abc")));
        assert!(!is_view_visible(&view, Some("xyz")));
    }

    #[test]
    fn bare_string_rule_matches() {
        let view = view_with_visible(json!(["abc"]));
        assert!(is_view_visible(&view, Some("abc")));
        assert!(!is_view_visible(&view, Some("xyz")));
    }

    #[test]
    fn object_user_string_matches() {
        let view = view_with_visible(json!([{ "user": "abc" }]));
        assert!(is_view_visible(&view, Some("abc")));
    }

    #[test]
    fn object_user_list_matches() {
        let view = view_with_visible(json!([{ "user": ["abc", "def"] }]));
        assert!(is_view_visible(&view, Some("def")));
    }

    #[test]
    fn object_users_list_matches() {
        let view = view_with_visible(json!([{ "users": ["abc"] }]));
        assert!(is_view_visible(&view, Some("abc")));
    }

    #[test]
    fn rules_without_a_match_hide_the_view() {
        let view = view_with_visible(json!(["other", { "user": "else" }]));
        assert!(!is_view_visible(&view, Some("abc")));
    }

    #[test]
    fn garbage_rules_count_as_rules_but_never_match() {
        let view = view_with_visible(json!([42, null]));
        assert!(!is_view_visible(&view, Some("abc")));
    }

    #[test]
    fn visibility_alias_field_is_honored() {
        let view = ViewConfig {
            visibility: Some(json!([{ "user": "abc" }])),
            ..ViewConfig::default()
        };
        assert!(is_view_visible(&view, Some("abc")));
        assert!(!is_view_visible(&view, Some("xyz")));
    }
}

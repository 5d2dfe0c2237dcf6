// Engine module - pure resolution logic (parsing, lookup, visibility)
// This layer sits between normalized configuration (types) and the runtime controller

pub mod locate;
pub mod options;
pub mod target;
pub mod visibility;

pub use locate::find_view;
pub use options::{view_options, ViewOption};
pub use target::{index_token, parse_static, parse_target_string, TargetCandidate};
pub use visibility::is_view_visible;

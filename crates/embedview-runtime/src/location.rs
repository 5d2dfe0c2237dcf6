use crate::host::HostLookup;

/// Where the host currently is. Read fresh on every update; the host may
/// navigate without notifying this engine directly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    /// `None` while the host is still mounting
    pub dashboard: Option<String>,
    /// `None` when the navigation path carries no view segment
    pub view: Option<String>,
}

/// Read the current (dashboard, view) pair. The dashboard comes from the
/// active root handle; the view is the percent-decoded path segment right
/// after the dashboard's own segment in the navigation path.
pub fn current_location<L: HostLookup>(host: &L) -> Location {
    let dashboard = host.root().map(|root| root.url_path);
    let view = dashboard
        .as_deref()
        .and_then(|dashboard| view_segment(&host.nav_path(), dashboard));
    Location { dashboard, view }
}

fn view_segment(nav_path: &str, dashboard: &str) -> Option<String> {
    let segments: Vec<&str> = nav_path.split('/').filter(|s| !s.is_empty()).collect();
    let position = segments.iter().position(|segment| *segment == dashboard)?;
    segments
        .get(position + 1)
        .map(|segment| percent_decode(segment))
}

/// Decode %XX escapes in a path segment. Malformed escapes and non-UTF-8
/// results fall back to the segment as-is.
fn percent_decode(segment: &str) -> String {
    let bytes = segment.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%'
            && let Some(hi) = bytes.get(i + 1).copied().and_then(hex_digit)
            && let Some(lo) = bytes.get(i + 2).copied().and_then(hex_digit)
        {
            out.push(hi * 16 + lo);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8(out).unwrap_or_else(|_| segment.to_string())
}

fn hex_digit(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

use serde::{Deserialize, Serialize};

/// Presentation flags carried on the card configuration. The bleed insets
/// apply only when chrome wrapping is off; with `wrap_in_card` enabled the
/// host card supplies its own padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleOptions {
    pub wrap_in_card: bool,
    pub bleed_enabled: bool,
    /// Horizontal inset in pixels (left/right)
    pub bleed_inline: u32,
    /// Vertical inset in pixels (top/bottom)
    pub bleed_block: u32,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            wrap_in_card: true,
            bleed_enabled: false,
            bleed_inline: 16,
            bleed_block: 8,
        }
    }
}

impl StyleOptions {
    /// Effective (inline, block) pixel margins for the embedded content.
    /// Negative values pull the content over the host's outer padding.
    pub fn insets(&self) -> (i32, i32) {
        if !self.wrap_in_card && self.bleed_enabled {
            (-(self.bleed_inline as i32), -(self.bleed_block as i32))
        } else {
            (0, 0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let style = StyleOptions::default();
        assert!(style.wrap_in_card);
        assert!(!style.bleed_enabled);
        assert_eq!(style.bleed_inline, 16);
        assert_eq!(style.bleed_block, 8);
    }

    #[test]
    fn insets_zero_under_chrome_wrap() {
        let style = StyleOptions {
            bleed_enabled: true,
            ..StyleOptions::default()
        };
        assert_eq!(style.insets(), (0, 0));
    }

    #[test]
    fn insets_zero_with_bleed_off() {
        let style = StyleOptions {
            wrap_in_card: false,
            ..StyleOptions::default()
        };
        assert_eq!(style.insets(), (0, 0));
    }

    #[test]
    fn insets_negative_with_wrap_off_and_bleed_on() {
        let style = StyleOptions {
            wrap_in_card: false,
            bleed_enabled: true,
            ..StyleOptions::default()
        };
        assert_eq!(style.insets(), (-16, -8));
    }

    #[test]
    fn insets_use_configured_values() {
        let style = StyleOptions {
            wrap_in_card: false,
            bleed_enabled: true,
            bleed_inline: 24,
            bleed_block: 0,
        };
        assert_eq!(style.insets(), (-24, 0));
    }
}

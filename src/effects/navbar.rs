/// Scroll offset past which the navbar switches to its compact look.
pub const COMPACT_AFTER_PX: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavbarMode {
    Top,
    Compact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavbarStyle {
    pub background: &'static str,
    pub box_shadow: &'static str,
}

impl NavbarMode {
    pub fn from_scroll(scroll_y: f64) -> Self {
        if scroll_y > COMPACT_AFTER_PX {
            NavbarMode::Compact
        } else {
            NavbarMode::Top
        }
    }

    pub fn style(self) -> NavbarStyle {
        match self {
            NavbarMode::Compact => NavbarStyle {
                background: "rgba(10, 14, 39, 0.98)",
                box_shadow: "0 4px 30px rgba(0, 240, 255, 0.1), 0 4px 12px rgba(0, 0, 0, 0.3)",
            },
            NavbarMode::Top => NavbarStyle {
                background: "rgba(10, 14, 39, 0.95)",
                box_shadow: "0 4px 30px rgba(0, 0, 0, 0.3)",
            },
        }
    }
}

impl NavbarStyle {
    pub fn to_css(&self) -> String {
        format!("background: {}; box-shadow: {};", self.background, self.box_shadow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_exclusive() {
        assert_eq!(NavbarMode::from_scroll(0.0), NavbarMode::Top);
        assert_eq!(NavbarMode::from_scroll(50.0), NavbarMode::Top);
        assert_eq!(NavbarMode::from_scroll(50.5), NavbarMode::Compact);
        assert_eq!(NavbarMode::from_scroll(51.0), NavbarMode::Compact);
    }

    #[test]
    fn repeated_scroll_positions_give_the_same_style() {
        let first = NavbarMode::from_scroll(51.0).style();
        let again = NavbarMode::from_scroll(51.0).style();
        assert_eq!(first, again);
        assert_eq!(first.to_css(), again.to_css());
    }

    #[test]
    fn styles_match_the_theme() {
        assert_eq!(
            NavbarMode::Top.style().to_css(),
            "background: rgba(10, 14, 39, 0.95); box-shadow: 0 4px 30px rgba(0, 0, 0, 0.3);"
        );
        let compact = NavbarMode::Compact.style();
        assert_eq!(compact.background, "rgba(10, 14, 39, 0.98)");
        assert_eq!(
            compact.box_shadow,
            "0 4px 30px rgba(0, 240, 255, 0.1), 0 4px 12px rgba(0, 0, 0, 0.3)"
        );
    }
}

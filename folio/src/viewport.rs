/// Width below which the layout switches to the compact regime.
pub(crate) const COMPACT_BREAKPOINT: f32 = 768.0;

/// Layout regime derived from the current window width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ViewportMode {
    Compact,
    Wide,
}

impl ViewportMode {
    /// Classify a window width into a layout regime.
    pub(crate) fn classify(width: f32) -> Self {
        if width < COMPACT_BREAKPOINT {
            Self::Compact
        } else {
            Self::Wide
        }
    }

    pub(crate) fn is_compact(self) -> bool {
        matches!(self, Self::Compact)
    }
}

#[cfg(test)]
mod tests {
    use super::{COMPACT_BREAKPOINT, ViewportMode};

    #[test]
    fn given_width_below_breakpoint_when_classifying_then_mode_is_compact() {
        assert_eq!(
            ViewportMode::classify(COMPACT_BREAKPOINT - 0.1),
            ViewportMode::Compact
        );
    }

    #[test]
    fn given_width_at_breakpoint_when_classifying_then_mode_is_wide() {
        assert_eq!(
            ViewportMode::classify(COMPACT_BREAKPOINT),
            ViewportMode::Wide
        );
        assert_eq!(ViewportMode::classify(1920.0), ViewportMode::Wide);
    }
}

use alloc::string::String;

use crate::RootMargin;

/// Configuration for [`crate::SectionTracker`].
///
/// Defaults mirror a typical page layout: a root band starting 20% below the viewport top,
/// a 100px reference line for the positional fallback and an 80px offset for section jumps
/// (room for a fixed navbar).
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TrackerOptions {
    /// Bands excluded from the intersection root.
    pub root_margin: RootMargin,
    /// Minimum intersection ratio for a section to count as intersecting the root band.
    pub threshold: f64,
    /// Distance (px) below the viewport top used by the positional fallback.
    pub reference_line: f64,
    /// Distance (px) below the viewport top where a jumped-to section should land.
    pub scroll_offset: f64,
    pub scroll_behavior: crate::ScrollBehavior,
    pub scroll_throttle_ms: u64,
    pub resize_throttle_ms: u64,
    /// The scroll-to-top control is shown once the scroll offset exceeds
    /// `viewport_height * scroll_to_top_ratio`.
    pub scroll_to_top_ratio: f64,
    /// Prepended to a section heading when announcing it.
    pub announcement_prefix: String,
}

impl Default for TrackerOptions {
    fn default() -> Self {
        Self {
            root_margin: RootMargin::default(),
            threshold: 0.1,
            reference_line: 100.0,
            scroll_offset: 80.0,
            scroll_behavior: crate::ScrollBehavior::Smooth,
            scroll_throttle_ms: 100,
            resize_throttle_ms: 250,
            scroll_to_top_ratio: 0.5,
            announcement_prefix: String::from("Now viewing: "),
        }
    }
}

impl TrackerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root_margin(mut self, top: f64, bottom: f64) -> Self {
        self.root_margin = RootMargin::new(top, bottom);
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_reference_line(mut self, reference_line: f64) -> Self {
        self.reference_line = reference_line;
        self
    }

    pub fn with_scroll_offset(mut self, scroll_offset: f64) -> Self {
        self.scroll_offset = scroll_offset;
        self
    }

    pub fn with_scroll_behavior(mut self, behavior: crate::ScrollBehavior) -> Self {
        self.scroll_behavior = behavior;
        self
    }

    pub fn with_throttle_ms(mut self, scroll_ms: u64, resize_ms: u64) -> Self {
        self.scroll_throttle_ms = scroll_ms;
        self.resize_throttle_ms = resize_ms;
        self
    }

    pub fn with_scroll_to_top_ratio(mut self, ratio: f64) -> Self {
        self.scroll_to_top_ratio = ratio;
        self
    }

    pub fn with_announcement_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.announcement_prefix = prefix.into();
        self
    }
}

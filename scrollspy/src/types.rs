use alloc::string::String;

/// A section's bounding box on the scroll axis, in viewport coordinates.
///
/// `top` may be negative (the section starts above the viewport).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SectionRect {
    pub top: f64,
    pub bottom: f64,
}

impl SectionRect {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    pub fn from_top_height(top: f64, height: f64) -> Self {
        Self {
            top,
            bottom: top + height.max(0.0),
        }
    }

    pub fn height(&self) -> f64 {
        (self.bottom - self.top).max(0.0)
    }

    /// Whether the rect covers `line` (edges inclusive).
    pub fn straddles(&self, line: f64) -> bool {
        self.top <= line && line <= self.bottom
    }

    /// Absolute distance from `line` to the top edge.
    pub fn distance_to(&self, line: f64) -> f64 {
        (self.top - line).abs()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Bands excluded from the intersection root, as fractions of the viewport height.
///
/// `top` is the "already scrolled past" zone, `bottom` the "not yet reached" zone.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RootMargin {
    pub top: f64,
    pub bottom: f64,
}

impl RootMargin {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// The remaining root band `(top, bottom)` for a viewport of `viewport_height`.
    ///
    /// The band never inverts: when the margins overlap it collapses to a line.
    pub fn band(&self, viewport_height: f64) -> (f64, f64) {
        let top = viewport_height * self.top.clamp(0.0, 1.0);
        let bottom = viewport_height * (1.0 - self.bottom.clamp(0.0, 1.0));
        (top, bottom.max(top))
    }
}

impl Default for RootMargin {
    fn default() -> Self {
        Self {
            top: 0.2,
            bottom: 0.8,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollBehavior {
    #[default]
    Smooth,
    Instant,
}

/// A request for the host to scroll the document to `top`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollRequest {
    /// Target document offset (never negative).
    pub top: f64,
    pub behavior: ScrollBehavior,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Section {
    pub id: String,
    /// Heading text used for announcements. Sections without one are tracked silently.
    pub heading: Option<String>,
    pub rect: SectionRect,
}

impl Section {
    pub fn new(id: impl Into<String>, heading: Option<&str>) -> Self {
        Self {
            id: id.into(),
            heading: heading.map(String::from),
            rect: SectionRect::default(),
        }
    }

    pub fn with_rect(mut self, rect: SectionRect) -> Self {
        self.rect = rect;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavLink {
    pub section_id: String,
    pub label: String,
    pub active: bool,
}

impl NavLink {
    pub fn new(section_id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            section_id: section_id.into(),
            label: label.into(),
            active: false,
        }
    }
}

/// The outcome of a `set_active` call that changed the active section.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActiveChange {
    pub previous: Option<String>,
    pub current: String,
    /// `true` when a navigation link matches `current`.
    pub has_link: bool,
    /// Announcement text, when the section has a heading.
    pub announcement: Option<String>,
}

/// A scroll target plus the announcement to emit right away.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SectionTarget {
    pub request: ScrollRequest,
    pub announcement: Option<String>,
}

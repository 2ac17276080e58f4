use alloc::string::String;

use scrollspy::{ScrollRequest, SectionRect, Viewport};

/// Host events the controller subscribes to.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    Scroll,
    Resize,
    Keydown,
    VisibilityChange,
    /// Activation (click/Enter) of the navigation link targeting a section.
    LinkActivate { section_id: String },
    ScrollToTopActivate,
}

/// Opaque handle returned by [`EventHost::listen`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListenerId(pub u64);

/// One attached listener. The controller keeps these so teardown can remove exactly what was
/// added.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Subscription {
    pub id: ListenerId,
    pub kind: EventKind,
}

/// Event registration and the intersection watcher.
pub trait EventHost {
    fn listen(&mut self, kind: &EventKind) -> ListenerId;
    fn unlisten(&mut self, id: ListenerId);

    /// Starts watching a section with the intersection watcher.
    ///
    /// Hosts without a native watcher can ignore this and call
    /// [`crate::Controller::poll_intersections`] instead.
    fn observe(&mut self, section_id: &str);
    fn disconnect(&mut self);
}

/// Read access to the host's current geometry.
pub trait Layout {
    fn viewport(&self) -> Viewport;
    fn scroll_offset(&self) -> f64;
    /// A section's rect in viewport coordinates, or `None` if it is not laid out.
    fn section_rect(&self, section_id: &str) -> Option<SectionRect>;
}

/// Navigation UI side effects.
pub trait NavigationView {
    /// Toggles the active state and the `aria-current` marker of a link.
    fn set_link_active(&mut self, section_id: &str, active: bool);
    fn set_link_label(&mut self, section_id: &str, label: &str);
    /// Points the section's accessible name at `heading_id`, assigning that id to its heading.
    fn label_section(&mut self, section_id: &str, heading_id: &str);
    fn set_scroll_to_top_visible(&mut self, visible: bool);
    fn set_focus_outline(&mut self, section_id: &str, on: bool);
    /// Collapses the mobile navigation menu. Returns `false` if it was not expanded.
    fn collapse_menu(&mut self) -> bool;
    fn scroll_to(&mut self, request: ScrollRequest);
}

/// An off-screen polite live region.
pub trait Announcer {
    fn attach(&mut self);
    fn announce(&mut self, text: &str);
    fn detach(&mut self);
}

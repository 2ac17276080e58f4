use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::geometry::{self, is_intersecting};
use crate::{
    ActiveChange, NavLink, ScrollRequest, Section, SectionRect, SectionTarget, TrackerOptions,
    TrackerState, Viewport,
};

/// A headless scroll-spy tracker.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects.
/// - Your adapter drives it by providing viewport geometry, scroll offsets and section rects.
/// - Side effects are returned as values ([`ActiveChange`], [`SectionTarget`]) for the adapter
///   to apply.
///
/// The section and link sets are fixed at construction. Links are matched to sections by id;
/// either side may lack a counterpart.
#[derive(Clone, Debug)]
pub struct SectionTracker {
    options: TrackerOptions,
    sections: Vec<Section>,
    links: Vec<NavLink>,
    viewport: Viewport,
    scroll_offset: f64,
    state: TrackerState,
}

impl SectionTracker {
    /// Creates a tracker over `sections` (in document order) and `links`.
    ///
    /// Duplicate section ids are ignored after the first occurrence. Links start inactive.
    pub fn new(sections: Vec<Section>, links: Vec<NavLink>, options: TrackerOptions) -> Self {
        let mut unique: Vec<Section> = Vec::with_capacity(sections.len());
        for section in sections {
            if unique.iter().any(|s| s.id == section.id) {
                swarn!(id = %section.id, "SectionTracker: duplicate section id ignored");
                continue;
            }
            unique.push(section);
        }
        let links = links
            .into_iter()
            .map(|mut link| {
                link.active = false;
                link
            })
            .collect::<Vec<_>>();
        sdebug!(
            sections = unique.len(),
            links = links.len(),
            "SectionTracker::new"
        );
        Self {
            options,
            sections: unique,
            links,
            viewport: Viewport::default(),
            scroll_offset: 0.0,
            state: TrackerState::default(),
        }
    }

    pub fn options(&self) -> &TrackerOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: TrackerOptions) {
        self.options = options;
        strace!("SectionTracker::set_options");
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut TrackerOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    pub fn link(&self, section_id: &str) -> Option<&NavLink> {
        self.links.iter().find(|l| l.section_id == section_id)
    }

    pub fn active(&self) -> Option<&str> {
        self.state.active.as_deref()
    }

    pub fn active_link(&self) -> Option<&NavLink> {
        self.links.iter().find(|l| l.active)
    }

    pub fn state(&self) -> &TrackerState {
        &self.state
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    pub fn set_scroll_offset(&mut self, offset: f64) {
        self.scroll_offset = offset.max(0.0);
    }

    /// Updates a section's viewport rect. Returns `false` for unknown ids.
    pub fn set_section_rect(&mut self, id: &str, rect: SectionRect) -> bool {
        let Some(section) = self.sections.iter_mut().find(|s| s.id == id) else {
            return false;
        };
        section.rect = rect;
        true
    }

    /// Refreshes every section rect from `measure`. Sections it cannot measure keep their
    /// previous rect.
    pub fn measure_sections(&mut self, mut measure: impl FnMut(&str) -> Option<SectionRect>) {
        for section in &mut self.sections {
            if let Some(rect) = measure(&section.id) {
                section.rect = rect;
            }
        }
        strace!(sections = self.sections.len(), "measure_sections");
    }

    /// Visible fraction of a section within the full viewport.
    pub fn visibility_fraction(&self, id: &str) -> Option<f64> {
        let section = self.section(id)?;
        Some(geometry::visibility_fraction(
            section.rect,
            self.viewport.height,
        ))
    }

    /// Emits, in document order, the ids of sections touching the margin-adjusted root band.
    ///
    /// Adapters without a native intersection watcher can feed this into
    /// [`Self::determine_active`].
    pub fn for_each_intersecting(&self, mut f: impl FnMut(&str)) {
        for section in &self.sections {
            if is_intersecting(
                section.rect,
                self.options.root_margin,
                self.options.threshold,
                self.viewport.height,
            ) {
                f(&section.id);
            }
        }
    }

    pub fn collect_intersecting(&self, out: &mut Vec<String>) {
        out.clear();
        self.for_each_intersecting(|id| out.push(String::from(id)));
    }

    /// Picks the candidate with the greatest visible fraction.
    ///
    /// Ties keep the first candidate in iteration order. Unknown ids are skipped. Returns `None`
    /// when no candidate is visible; the active section is never changed here.
    pub fn determine_active<'a>(
        &self,
        candidates: impl IntoIterator<Item = &'a str>,
    ) -> Option<&Section> {
        let known = candidates
            .into_iter()
            .filter_map(|id| self.section(id))
            .map(|s| (s, s.rect));
        geometry::select_most_visible(known, self.viewport.height)
    }

    /// Positional fallback: the section straddling the reference line, else the one whose top is
    /// nearest to it.
    pub fn determine_active_by_position(&self) -> Option<&Section> {
        let index = geometry::select_by_position(
            self.sections.iter().map(|s| s.rect),
            self.options.reference_line,
        )?;
        self.sections.get(index)
    }

    /// Marks `section_id` active.
    ///
    /// Returns `None` when `section_id` is already the active section, or when neither a
    /// section nor a link carries that id.
    pub fn set_active(&mut self, section_id: &str) -> Option<ActiveChange> {
        if self.state.active.as_deref() == Some(section_id) {
            return None;
        }
        let has_section = self.section(section_id).is_some();
        let has_link = self.link(section_id).is_some();
        if !has_section && !has_link {
            strace!(section_id, "set_active: unknown section");
            return None;
        }

        for link in &mut self.links {
            link.active = link.section_id == section_id;
        }
        let announcement = self.announcement_for(section_id);
        let previous = self.state.active.replace(String::from(section_id));
        sdebug!(
            previous = ?previous,
            current = section_id,
            "active section changed"
        );
        Some(ActiveChange {
            previous,
            current: String::from(section_id),
            has_link,
            announcement,
        })
    }

    /// Runs the positional fallback and activates its pick.
    pub fn activate_by_position(&mut self) -> Option<ActiveChange> {
        let id = self.determine_active_by_position()?.id.clone();
        self.set_active(&id)
    }

    /// Runs intersection selection over `candidates` and activates its pick.
    pub fn activate_most_visible<'a>(
        &mut self,
        candidates: impl IntoIterator<Item = &'a str>,
    ) -> Option<ActiveChange> {
        let id = self.determine_active(candidates)?.id.clone();
        self.set_active(&id)
    }

    /// The announcement text for a section, when it has a heading.
    pub fn announcement_for(&self, section_id: &str) -> Option<String> {
        let heading = self.section(section_id)?.heading.as_deref()?;
        Some(format!("{}{}", self.options.announcement_prefix, heading))
    }

    /// Computes the scroll target that lands `section_id` `options.scroll_offset` px below the
    /// viewport top, plus the announcement to emit immediately.
    ///
    /// The active section is left to the regular tracking path; this only announces.
    pub fn scroll_to_section(&self, section_id: &str) -> Option<SectionTarget> {
        self.scroll_to_section_with_offset(section_id, self.options.scroll_offset)
    }

    pub fn scroll_to_section_with_offset(
        &self,
        section_id: &str,
        offset: f64,
    ) -> Option<SectionTarget> {
        let section = self.section(section_id)?;
        let document_top = section.rect.top + self.scroll_offset;
        let top = (document_top - offset).max(0.0);
        strace!(section_id, top, "scroll_to_section");
        Some(SectionTarget {
            request: ScrollRequest {
                top,
                behavior: self.options.scroll_behavior,
            },
            announcement: self.announcement_for(section_id),
        })
    }

    /// Scroll target for the document top, announcing the first section.
    pub fn scroll_to_top(&self) -> SectionTarget {
        SectionTarget {
            request: ScrollRequest {
                top: 0.0,
                behavior: self.options.scroll_behavior,
            },
            announcement: self
                .sections
                .first()
                .and_then(|s| self.announcement_for(&s.id)),
        }
    }

    pub fn should_show_scroll_to_top(&self) -> bool {
        self.scroll_offset > self.viewport.height * self.options.scroll_to_top_ratio
    }

    /// Recomputes scroll-to-top visibility from the current offset and viewport.
    pub fn update_scroll_to_top_visibility(&mut self) -> bool {
        let visible = self.should_show_scroll_to_top();
        self.state.scroll_to_top_visible = visible;
        visible
    }

    /// Clears the active section and every link flag.
    pub fn reset(&mut self) {
        for link in &mut self.links {
            link.active = false;
        }
        self.state = TrackerState::default();
    }
}

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use scrollspy::{ActiveChange, SectionTarget, SectionTracker, Throttle, Timer, Viewport};

use crate::{
    Announcer, EventHost, EventKind, Key, KeyEvent, KeyTarget, Layout, NavigationView,
    Subscription,
};

/// How long a keyboard focus outline stays on a navigation link.
pub const FOCUS_OUTLINE_MS: u64 = 300;

/// A framework-neutral controller that wires a [`SectionTracker`] to a host page.
///
/// This type does not hold any UI objects directly. The host provides capabilities
/// ([`NavigationView`], [`Announcer`], [`EventHost`] + [`Layout`]) and drives it by calling:
/// - `attach()` once the layout is ready
/// - `on_*` methods when subscribed events occur
/// - `tick(now_ms)` each frame/timer tick (throttled reactions and focus-outline resets)
/// - `destroy()` on teardown
///
/// Events delivered before `attach` or after `destroy` are ignored.
#[derive(Debug)]
pub struct Controller<V, A, H> {
    tracker: SectionTracker,
    view: V,
    announcer: A,
    host: H,
    has_scroll_to_top: bool,
    focus_outline_ms: u64,
    subscriptions: Vec<Subscription>,
    scroll: Throttle<f64>,
    resize: Throttle<Viewport>,
    focus_resets: Vec<(String, Timer)>,
    intersecting: bool,
    candidates: Vec<String>,
    attached: bool,
    destroyed: bool,
}

impl<V, A, H> Controller<V, A, H>
where
    V: NavigationView,
    A: Announcer,
    H: EventHost + Layout,
{
    pub fn new(tracker: SectionTracker, view: V, announcer: A, host: H) -> Self {
        let scroll = Throttle::new(tracker.options().scroll_throttle_ms);
        let resize = Throttle::new(tracker.options().resize_throttle_ms);
        Self {
            tracker,
            view,
            announcer,
            host,
            has_scroll_to_top: true,
            focus_outline_ms: FOCUS_OUTLINE_MS,
            subscriptions: Vec::new(),
            scroll,
            resize,
            focus_resets: Vec::new(),
            intersecting: false,
            candidates: Vec::new(),
            attached: false,
            destroyed: false,
        }
    }

    /// Declares whether the page has a scroll-to-top control. Defaults to `true`.
    pub fn with_scroll_to_top(mut self, present: bool) -> Self {
        self.has_scroll_to_top = present;
        self
    }

    pub fn with_focus_outline_ms(mut self, ms: u64) -> Self {
        self.focus_outline_ms = ms;
        self
    }

    pub fn tracker(&self) -> &SectionTracker {
        &self.tracker
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn announcer(&self) -> &A {
        &self.announcer
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_parts(self) -> (SectionTracker, V, A, H) {
        (self.tracker, self.view, self.announcer, self.host)
    }

    /// Listeners currently attached to the host.
    pub fn subscriptions(&self) -> &[Subscription] {
        &self.subscriptions
    }

    pub fn is_attached(&self) -> bool {
        self.attached && !self.destroyed
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Subscribes to host events, starts the intersection watcher, sets up accessible labels
    /// and the live region, then syncs scroll-to-top visibility.
    ///
    /// Returns `false` if already attached or destroyed.
    pub fn attach(&mut self) -> bool {
        if self.attached || self.destroyed {
            return false;
        }

        let link_ids = self
            .tracker
            .links()
            .iter()
            .map(|l| l.section_id.clone())
            .collect::<Vec<_>>();
        for section_id in link_ids {
            self.subscribe(EventKind::LinkActivate { section_id });
        }
        if self.has_scroll_to_top {
            self.subscribe(EventKind::ScrollToTopActivate);
        }
        self.subscribe(EventKind::Scroll);
        self.subscribe(EventKind::Resize);
        self.subscribe(EventKind::Keydown);
        self.subscribe(EventKind::VisibilityChange);

        for section in self.tracker.sections() {
            self.host.observe(&section.id);
        }

        self.setup_accessibility();
        self.attached = true;

        self.sync_geometry();
        self.update_scroll_to_top();
        adebug!(
            subscriptions = self.subscriptions.len(),
            sections = self.tracker.sections().len(),
            "Controller::attach"
        );
        true
    }

    fn subscribe(&mut self, kind: EventKind) {
        let id = self.host.listen(&kind);
        self.subscriptions.push(Subscription { id, kind });
    }

    fn setup_accessibility(&mut self) {
        for link in self.tracker.links() {
            let Some(section) = self.tracker.section(&link.section_id) else {
                continue;
            };
            let label = format!("Navigate to {} section", link.label);
            self.view.set_link_label(&link.section_id, &label);
            if section.heading.is_some() {
                let heading_id = format!("{}-heading", section.id);
                self.view.label_section(&section.id, &heading_id);
            }
        }
        self.announcer.attach();
    }

    /// Queues a scroll reaction. It runs from `tick` once the scroll throttle window elapses
    /// without a newer event.
    pub fn on_scroll(&mut self, offset: f64, now_ms: u64) {
        if !self.is_attached() {
            return;
        }
        self.scroll.push(offset, now_ms);
    }

    /// Queues a resize reaction (see [`Self::on_scroll`]).
    pub fn on_resize(&mut self, viewport: Viewport, now_ms: u64) {
        if !self.is_attached() {
            return;
        }
        self.resize.push(viewport, now_ms);
    }

    /// Handles an intersection watcher callback listing the sections currently intersecting.
    ///
    /// Returns `true` when the active section changed.
    pub fn on_intersections<'a>(&mut self, section_ids: impl IntoIterator<Item = &'a str>) -> bool {
        if !self.is_attached() {
            return false;
        }
        self.sync_geometry();
        let picked = self
            .tracker
            .determine_active(section_ids)
            .map(|s| s.id.clone());
        self.intersecting = picked.is_some();
        let Some(id) = picked else {
            return false;
        };
        self.activate(&id)
    }

    /// Computes intersections from the host layout, for hosts without a native watcher.
    ///
    /// Returns `true` when the active section changed.
    pub fn poll_intersections(&mut self) -> bool {
        if !self.is_attached() {
            return false;
        }
        self.sync_geometry();
        self.tracker.collect_intersecting(&mut self.candidates);
        let picked = self
            .tracker
            .determine_active(self.candidates.iter().map(String::as_str))
            .map(|s| s.id.clone());
        self.intersecting = picked.is_some();
        let Some(id) = picked else {
            return false;
        };
        self.activate(&id)
    }

    /// Handles activation of the navigation link for `section_id`.
    ///
    /// Returns `true` when the controller handled it (the host should suppress its default
    /// navigation). Links whose section does not exist are left to the host.
    pub fn on_link_activate(&mut self, section_id: &str) -> bool {
        if !self.is_attached() {
            return false;
        }
        self.sync_geometry();
        let Some(target) = self.tracker.scroll_to_section(section_id) else {
            return false;
        };
        atrace!(section_id, top = target.request.top, "on_link_activate");
        self.apply_target(target);
        true
    }

    pub fn on_scroll_to_top_activate(&mut self) -> bool {
        if !self.is_attached() || !self.has_scroll_to_top {
            return false;
        }
        let target = self.tracker.scroll_to_top();
        self.apply_target(target);
        true
    }

    pub fn on_keydown(&mut self, event: &KeyEvent, now_ms: u64) {
        if !self.is_attached() {
            return;
        }
        match (&event.key, &event.target) {
            (Key::Tab, KeyTarget::NavLink(section_id)) => {
                self.view.set_focus_outline(section_id, true);
                let delay = self.focus_outline_ms;
                match self.focus_resets.iter_mut().find(|(id, _)| id == section_id) {
                    Some((_, timer)) => timer.start(now_ms, delay),
                    None => self
                        .focus_resets
                        .push((section_id.clone(), Timer::started(now_ms, delay))),
                }
            }
            (Key::Escape, _) => {
                if !self.view.collapse_menu() {
                    atrace!("escape: menu not expanded");
                }
            }
            _ => {}
        }
    }

    /// Re-syncs highlighting and scroll-to-top state when the page becomes visible again.
    pub fn on_visibility_change(&mut self, hidden: bool) {
        if hidden || !self.is_attached() {
            return;
        }
        self.sync_geometry();
        if let Some(change) = self.tracker.activate_by_position() {
            self.apply_change(change);
        }
        self.update_scroll_to_top();
    }

    /// Runs due throttled reactions and focus-outline resets.
    pub fn tick(&mut self, now_ms: u64) {
        if !self.is_attached() {
            return;
        }
        if let Some(offset) = self.scroll.poll(now_ms) {
            self.handle_scroll(offset);
        }
        if let Some(viewport) = self.resize.poll(now_ms) {
            self.handle_resize(viewport);
        }
        let view = &mut self.view;
        self.focus_resets.retain_mut(|(id, timer)| {
            if timer.poll(now_ms) {
                view.set_focus_outline(id, false);
                return false;
            }
            true
        });
    }

    /// Disconnects the intersection watcher, removes every listener and the live region.
    ///
    /// Returns `false` if already destroyed. Later events are ignored.
    pub fn destroy(&mut self) -> bool {
        if self.destroyed {
            return false;
        }
        self.destroyed = true;
        self.scroll.cancel();
        self.resize.cancel();
        if !self.attached {
            return true;
        }

        self.host.disconnect();
        for sub in self.subscriptions.drain(..) {
            self.host.unlisten(sub.id);
        }
        for (id, _) in self.focus_resets.drain(..) {
            self.view.set_focus_outline(&id, false);
        }
        self.announcer.detach();
        adebug!("Controller::destroy");
        true
    }

    fn handle_scroll(&mut self, offset: f64) {
        atrace!(offset, "handle_scroll");
        self.tracker.set_viewport(self.host.viewport());
        self.tracker.set_scroll_offset(offset);
        self.measure_sections();
        self.update_scroll_to_top();
        if !self.intersecting {
            if let Some(change) = self.tracker.activate_by_position() {
                self.apply_change(change);
            }
        }
    }

    fn handle_resize(&mut self, viewport: Viewport) {
        atrace!(width = viewport.width, height = viewport.height, "handle_resize");
        self.tracker.set_viewport(viewport);
        self.measure_sections();
        self.update_scroll_to_top();
    }

    fn sync_geometry(&mut self) {
        self.tracker.set_viewport(self.host.viewport());
        self.tracker.set_scroll_offset(self.host.scroll_offset());
        self.measure_sections();
    }

    fn measure_sections(&mut self) {
        let host = &self.host;
        self.tracker.measure_sections(|id| host.section_rect(id));
    }

    fn update_scroll_to_top(&mut self) {
        let visible = self.tracker.update_scroll_to_top_visibility();
        if self.has_scroll_to_top {
            self.view.set_scroll_to_top_visible(visible);
        }
    }

    fn activate(&mut self, section_id: &str) -> bool {
        match self.tracker.set_active(section_id) {
            Some(change) => {
                self.apply_change(change);
                true
            }
            None => false,
        }
    }

    fn apply_change(&mut self, change: ActiveChange) {
        for link in self.tracker.links() {
            self.view.set_link_active(&link.section_id, false);
        }
        if change.has_link {
            self.view.set_link_active(&change.current, true);
        }
        if let Some(text) = &change.announcement {
            self.announcer.announce(text);
        }
    }

    fn apply_target(&mut self, target: SectionTarget) {
        self.view.scroll_to(target.request);
        if let Some(text) = &target.announcement {
            self.announcer.announce(text);
        }
    }
}

// Example: a simulated host page driving the controller.
use std::collections::HashMap;

use scrollspy::{NavLink, ScrollRequest, Section, SectionRect, SectionTracker, TrackerOptions, Viewport};
use scrollspy_adapter::{
    Announcer, Controller, EventHost, EventKind, Key, KeyEvent, Layout, ListenerId,
    NavigationView, PageEvent, PageLoad, PageLoadOptions,
};

struct ConsoleView;

impl NavigationView for ConsoleView {
    fn set_link_active(&mut self, section_id: &str, active: bool) {
        if active {
            println!("  [nav] {section_id} is active");
        }
    }

    fn set_link_label(&mut self, section_id: &str, label: &str) {
        println!("  [a11y] link {section_id}: {label:?}");
    }

    fn label_section(&mut self, section_id: &str, heading_id: &str) {
        println!("  [a11y] section {section_id} labelled by #{heading_id}");
    }

    fn set_scroll_to_top_visible(&mut self, visible: bool) {
        println!("  [top] visible={visible}");
    }

    fn set_focus_outline(&mut self, section_id: &str, on: bool) {
        println!("  [focus] {section_id} outline={on}");
    }

    fn collapse_menu(&mut self) -> bool {
        false
    }

    fn scroll_to(&mut self, request: ScrollRequest) {
        println!("  [scroll] to {} ({:?})", request.top, request.behavior);
    }
}

struct ConsoleAnnouncer;

impl Announcer for ConsoleAnnouncer {
    fn attach(&mut self) {
        println!("  [live] region attached");
    }

    fn announce(&mut self, text: &str) {
        println!("  [live] {text}");
    }

    fn detach(&mut self) {
        println!("  [live] region removed");
    }
}

/// Sections stacked in a document; rects derive from the scroll offset.
struct Page {
    scroll: f64,
    tops: HashMap<&'static str, (f64, f64)>,
    next_listener: u64,
}

impl EventHost for Page {
    fn listen(&mut self, kind: &EventKind) -> ListenerId {
        self.next_listener += 1;
        println!("  [host] listen {kind:?}");
        ListenerId(self.next_listener)
    }

    fn unlisten(&mut self, id: ListenerId) {
        println!("  [host] unlisten {id:?}");
    }

    fn observe(&mut self, _section_id: &str) {}

    fn disconnect(&mut self) {
        println!("  [host] intersection watcher disconnected");
    }
}

impl Layout for Page {
    fn viewport(&self) -> Viewport {
        Viewport::new(1280.0, 800.0)
    }

    fn scroll_offset(&self) -> f64 {
        self.scroll
    }

    fn section_rect(&self, section_id: &str) -> Option<SectionRect> {
        let &(top, height) = self.tops.get(section_id)?;
        Some(SectionRect::from_top_height(top - self.scroll, height))
    }
}

fn main() {
    let sections = vec![
        Section::new("education", Some("Education")),
        Section::new("research", Some("Publications & Research")),
        Section::new("contact", Some("Contact Me")),
    ];
    let links = vec![
        NavLink::new("education", "Education"),
        NavLink::new("research", "Research"),
        NavLink::new("contact", "Contact"),
    ];
    let page = Page {
        scroll: 0.0,
        tops: HashMap::from([
            ("education", (0.0, 900.0)),
            ("research", (900.0, 1400.0)),
            ("contact", (2300.0, 600.0)),
        ]),
        next_listener: 0,
    };
    let tracker = SectionTracker::new(sections, links, TrackerOptions::default());
    let mut nav = Controller::new(tracker, ConsoleView, ConsoleAnnouncer, page);

    let mut load = PageLoad::start(PageLoadOptions::default().with_announcement("Webpage loaded"), 0);
    let mut now_ms = 0u64;
    while !nav.is_attached() {
        now_ms += 16;
        load.tick(now_ms, |event| {
            println!("t={now_ms}ms page: {event:?}");
            if event == PageEvent::NavigationReady {
                nav.attach();
            }
        });
    }

    // The user scrolls down smoothly; the host reports scroll events every frame.
    for _ in 0..80 {
        now_ms += 16;
        let offset = nav.host().scroll + 25.0;
        nav.host_mut().scroll = offset;
        nav.on_scroll(offset, now_ms);
        nav.poll_intersections();
        nav.tick(now_ms);
    }
    now_ms += 200;
    nav.tick(now_ms);
    println!("t={now_ms}ms active={:?}", nav.tracker().active());

    nav.on_keydown(&KeyEvent::on_link(Key::Tab, "contact"), now_ms);
    if nav.on_link_activate("contact") {
        nav.host_mut().scroll = 2300.0 - 80.0;
    }
    now_ms += 400;
    nav.tick(now_ms);
    nav.on_scroll_to_top_activate();

    nav.destroy();
}

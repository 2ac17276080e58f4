// Example: coalescing a burst of scroll events into one tracker update.
use scrollspy::{Section, SectionRect, SectionTracker, Throttle, TrackerOptions, Viewport};

fn main() {
    let options = TrackerOptions::default();
    let mut scroll = Throttle::new(options.scroll_throttle_ms);

    let sections = vec![
        Section::new("intro", Some("Intro")).with_rect(SectionRect::new(-400.0, 60.0)),
        Section::new("work", Some("Work")).with_rect(SectionRect::new(60.0, 900.0)),
    ];
    let mut t = SectionTracker::new(sections, Vec::new(), options);
    t.set_viewport(Viewport::new(1024.0, 768.0));

    // Simulate a wheel burst: one event every 5ms.
    let mut now_ms = 0u64;
    for step in 0..10u64 {
        scroll.push(400.0 + step as f64 * 6.0, now_ms);
        now_ms += 5;
    }

    // A 16ms frame loop draining the throttle.
    while scroll.is_pending() {
        now_ms += 16;
        if let Some(offset) = scroll.poll(now_ms) {
            t.set_scroll_offset(offset);
            let change = t.activate_by_position();
            println!("t={now_ms}ms offset={offset} change={change:?}");
        }
    }
}

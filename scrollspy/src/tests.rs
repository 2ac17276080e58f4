use crate::*;

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

fn page() -> SectionTracker {
    let sections = vec![
        Section::new("education", Some("Education")),
        Section::new("research", Some("Publications & Research")),
        Section::new("projects", None),
        Section::new("contact", Some("Contact Me")),
    ];
    let links = vec![
        NavLink::new("education", "Education"),
        NavLink::new("research", "Research"),
        NavLink::new("projects", "Projects"),
        NavLink::new("contact", "Contact"),
    ];
    let mut t = SectionTracker::new(sections, links, TrackerOptions::default());
    t.set_viewport(Viewport::new(1200.0, 800.0));
    t
}

fn layout(t: &mut SectionTracker, rects: &[(&str, f64, f64)]) {
    for &(id, top, bottom) in rects {
        assert!(t.set_section_rect(id, SectionRect::new(top, bottom)));
    }
}

fn active_links(t: &SectionTracker) -> usize {
    t.links().iter().filter(|l| l.active).count()
}

#[test]
fn visibility_fraction_is_clamped() {
    // Fully inside.
    assert_eq!(visibility_fraction(SectionRect::new(100.0, 300.0), 800.0), 1.0);
    // Half above the viewport.
    assert_eq!(visibility_fraction(SectionRect::new(-100.0, 100.0), 800.0), 0.5);
    // Below the viewport.
    assert_eq!(visibility_fraction(SectionRect::new(900.0, 1000.0), 800.0), 0.0);
    // Taller than the viewport.
    assert_eq!(visibility_fraction(SectionRect::new(-800.0, 800.0), 800.0), 0.5);
    // Degenerate.
    assert_eq!(visibility_fraction(SectionRect::new(50.0, 50.0), 800.0), 0.0);
}

#[test]
fn determine_active_picks_greatest_visible_fraction() {
    let mut t = page();
    // education: 600 of 1000 visible (0.6), research: 720 of 800 visible (0.9).
    layout(
        &mut t,
        &[("education", -400.0, 600.0), ("research", 80.0, 880.0)],
    );
    assert_eq!(t.visibility_fraction("education"), Some(0.6));
    assert_eq!(t.visibility_fraction("research"), Some(0.9));

    let picked = t.determine_active(["education", "research"]).unwrap();
    assert_eq!(picked.id, "research");
    let picked = t.determine_active(["research", "education"]).unwrap();
    assert_eq!(picked.id, "research");

    // Selection alone never changes the active section.
    assert_eq!(t.active(), None);
}

#[test]
fn determine_active_ties_keep_first_seen() {
    let mut t = page();
    layout(
        &mut t,
        &[("education", 0.0, 200.0), ("research", 300.0, 500.0)],
    );
    assert_eq!(t.determine_active(["research", "education"]).unwrap().id, "research");
    assert_eq!(t.determine_active(["education", "research"]).unwrap().id, "education");
}

#[test]
fn determine_active_ignores_unknown_and_invisible_candidates() {
    let mut t = page();
    layout(&mut t, &[("education", 900.0, 1200.0)]);
    assert!(t.determine_active(["nope", "education"]).is_none());
    assert!(t.determine_active(core::iter::empty()).is_none());
}

#[test]
fn select_most_visible_works_on_arbitrary_keys() {
    let picked = select_most_visible(
        [
            (7u32, SectionRect::new(-50.0, 50.0)),
            (9u32, SectionRect::new(10.0, 20.0)),
        ],
        800.0,
    );
    assert_eq!(picked, Some(9));
}

#[test]
fn fallback_prefers_straddling_section() {
    let mut t = page();
    layout(
        &mut t,
        &[
            ("education", -500.0, -10.0),
            ("research", -10.0, 400.0),
            ("projects", 400.0, 900.0),
            ("contact", 900.0, 1300.0),
        ],
    );
    assert_eq!(t.determine_active_by_position().unwrap().id, "research");
}

#[test]
fn fallback_picks_nearest_when_nothing_straddles() {
    let rects = [SectionRect::new(-50.0, 50.0), SectionRect::new(120.0, 400.0)];
    // Distances to the line: 50 and 20.
    assert_eq!(select_by_position(rects, 100.0), Some(1));

    let rects = [SectionRect::new(-50.0, 60.0), SectionRect::new(250.0, 400.0)];
    // Equal distances: first one wins.
    assert_eq!(select_by_position(rects, 100.0), Some(0));

    assert_eq!(select_by_position(core::iter::empty(), 100.0), None);
}

#[test]
fn fallback_measures_from_section_top() {
    // A long section almost scrolled past loses to the upcoming one: 1000 vs 70.
    let rects = [SectionRect::new(-900.0, 30.0), SectionRect::new(170.0, 900.0)];
    assert_eq!(select_by_position(rects, 100.0), Some(1));

    let mut t = page();
    layout(
        &mut t,
        &[
            ("education", -1900.0, -900.0),
            ("research", -900.0, 30.0),
            ("projects", 170.0, 900.0),
            ("contact", 900.0, 1300.0),
        ],
    );
    assert_eq!(t.determine_active_by_position().unwrap().id, "projects");
}

#[test]
fn fallback_first_straddler_wins() {
    let rects = [
        SectionRect::new(0.0, 100.0),
        SectionRect::new(100.0, 200.0),
    ];
    assert_eq!(select_by_position(rects, 100.0), Some(0));
}

#[test]
fn set_active_is_idempotent() {
    let mut t = page();
    let change = t.set_active("research").unwrap();
    assert_eq!(change.previous, None);
    assert_eq!(change.current, "research");
    assert!(change.has_link);
    assert_eq!(
        change.announcement.as_deref(),
        Some("Now viewing: Publications & Research")
    );
    assert!(t.set_active("research").is_none());
    assert_eq!(t.active(), Some("research"));
    assert_eq!(t.active_link().unwrap().section_id, "research");
}

#[test]
fn at_most_one_link_is_active() {
    let mut t = page();
    assert_eq!(active_links(&t), 0);
    for id in ["education", "contact", "contact", "projects", "education", "nope"] {
        t.set_active(id);
        assert!(active_links(&t) <= 1);
    }
    assert_eq!(active_links(&t), 1);
    assert_eq!(t.active(), Some("education"));
}

#[test]
fn set_active_handles_missing_heading_and_unknown_ids() {
    let mut t = page();
    let change = t.set_active("projects").unwrap();
    assert_eq!(change.announcement, None);
    assert_eq!(change.previous, None);

    assert!(t.set_active("does-not-exist").is_none());
    assert_eq!(t.active(), Some("projects"));
}

#[test]
fn set_active_without_link_still_tracks() {
    let sections = vec![Section::new("intro", Some("Intro"))];
    let mut t = SectionTracker::new(sections, Vec::new(), TrackerOptions::default());
    let change = t.set_active("intro").unwrap();
    assert!(!change.has_link);
    assert_eq!(change.announcement.as_deref(), Some("Now viewing: Intro"));
    assert!(t.active_link().is_none());
}

#[test]
fn scroll_to_top_visibility_follows_half_viewport() {
    let mut t = page();
    t.set_scroll_offset(500.0);
    assert!(t.update_scroll_to_top_visibility());
    assert!(t.state().scroll_to_top_visible);

    t.set_scroll_offset(300.0);
    assert!(!t.update_scroll_to_top_visibility());
    assert!(!t.state().scroll_to_top_visible);

    // Exactly half is still hidden.
    t.set_scroll_offset(400.0);
    assert!(!t.should_show_scroll_to_top());
}

#[test]
fn scroll_to_section_targets_offset_below_viewport_top() {
    let mut t = page();
    t.set_scroll_offset(1000.0);
    layout(&mut t, &[("contact", 600.0, 1000.0)]);

    let target = t.scroll_to_section("contact").unwrap();
    assert_eq!(target.request.top, 1520.0);
    assert_eq!(target.request.behavior, ScrollBehavior::Smooth);
    assert_eq!(target.announcement.as_deref(), Some("Now viewing: Contact Me"));

    let target = t.scroll_to_section_with_offset("contact", 0.0).unwrap();
    assert_eq!(target.request.top, 1600.0);

    // Jumping does not change the active section by itself.
    assert_eq!(t.active(), None);
    assert!(t.scroll_to_section("nope").is_none());
}

#[test]
fn scroll_to_section_clamps_at_document_top() {
    let mut t = page();
    layout(&mut t, &[("education", 20.0, 400.0)]);
    assert_eq!(t.scroll_to_section("education").unwrap().request.top, 0.0);
}

#[test]
fn scroll_to_top_announces_first_section() {
    let t = page();
    let target = t.scroll_to_top();
    assert_eq!(target.request.top, 0.0);
    assert_eq!(target.announcement.as_deref(), Some("Now viewing: Education"));
}

#[test]
fn intersection_watcher_reports_sections_crossing_the_band() {
    let mut t = page();
    // Default margins collapse the band to the line at 20% (160px).
    layout(
        &mut t,
        &[
            ("education", -400.0, 100.0),
            ("research", 100.0, 700.0),
            ("projects", 700.0, 1200.0),
            ("contact", 1200.0, 1500.0),
        ],
    );
    let mut out = Vec::new();
    t.collect_intersecting(&mut out);
    assert_eq!(out, vec![String::from("research")]);

    let change = t
        .activate_most_visible(out.iter().map(String::as_str))
        .unwrap();
    assert_eq!(change.current, "research");
}

#[test]
fn intersection_threshold_applies_to_wide_bands() {
    let mut t = page();
    t.set_options(TrackerOptions::default().with_root_margin(0.0, 0.0));
    // 50px of a 1000px section in view: ratio 0.05 < 0.1.
    layout(
        &mut t,
        &[("education", -950.0, 50.0), ("research", 50.0, 700.0)],
    );
    let mut out = Vec::new();
    t.collect_intersecting(&mut out);
    assert_eq!(out, vec![String::from("research")]);

    t.update_options(|o| o.threshold = 0.0);
    t.collect_intersecting(&mut out);
    assert_eq!(out, vec![String::from("education"), String::from("research")]);
}

#[test]
fn root_margin_band_never_inverts() {
    assert_eq!(RootMargin::default().band(800.0), (160.0, 160.0));
    assert_eq!(RootMargin::new(0.7, 0.7).band(1000.0), (700.0, 700.0));
    assert_eq!(
        intersection_ratio(SectionRect::new(0.0, 1000.0), RootMargin::new(0.0, 0.5), 1000.0),
        0.5
    );
}

#[test]
fn measure_sections_keeps_unmeasured_rects() {
    let mut t = page();
    layout(&mut t, &[("contact", 1.0, 2.0)]);
    t.measure_sections(|id| (id != "contact").then(|| SectionRect::from_top_height(10.0, 5.0)));
    assert_eq!(t.section("education").unwrap().rect, SectionRect::new(10.0, 15.0));
    assert_eq!(t.section("contact").unwrap().rect, SectionRect::new(1.0, 2.0));
    assert!(!t.set_section_rect("nope", SectionRect::default()));
}

#[test]
fn duplicate_section_ids_keep_first() {
    let sections = vec![
        Section::new("a", Some("First")),
        Section::new("a", Some("Second")),
    ];
    let t = SectionTracker::new(sections, Vec::new(), TrackerOptions::default());
    assert_eq!(t.sections().len(), 1);
    assert_eq!(t.announcement_for("a").as_deref(), Some("Now viewing: First"));
}

#[test]
fn reset_clears_state_and_links() {
    let mut t = page();
    t.set_scroll_offset(900.0);
    t.update_scroll_to_top_visibility();
    t.set_active("contact");
    t.reset();
    assert_eq!(t.state(), &TrackerState::default());
    assert_eq!(active_links(&t), 0);
    // After a reset the same id announces again.
    assert!(t.set_active("contact").is_some());
}

#[test]
fn announcement_prefix_is_configurable() {
    let mut t = page();
    t.update_options(|o| o.announcement_prefix = String::from("Section: "));
    assert_eq!(t.announcement_for("contact").as_deref(), Some("Section: Contact Me"));
}

#[test]
fn throttle_coalesces_to_last_value() {
    let mut th = Throttle::new(100);
    let mut fired = Vec::new();
    for i in 0..10u64 {
        th.push(i, i * 5);
        if let Some(v) = th.poll(i * 5) {
            fired.push(v);
        }
    }
    assert!(fired.is_empty());
    assert_eq!(th.due_ms(), Some(145));
    assert_eq!(th.poll(144), None);
    assert_eq!(th.poll(145), Some(9));
    assert_eq!(th.poll(1_000), None);
    assert!(!th.is_pending());
}

#[test]
fn throttle_cancel_drops_pending_value() {
    let mut th = Throttle::new(250);
    th.push("resize", 0);
    th.cancel();
    assert_eq!(th.poll(1_000), None);
}

#[test]
fn timer_fires_once() {
    let mut timer = Timer::started(100, 300);
    assert!(timer.is_armed());
    assert!(!timer.poll(399));
    assert!(timer.poll(400));
    assert!(!timer.poll(500));
    assert!(!timer.is_armed());

    timer.start(0, 10);
    timer.cancel();
    assert!(!timer.poll(100));
}

#[cfg(feature = "serde")]
#[test]
fn options_deserialize_with_defaults() {
    fn assert_serde<T: serde::Serialize + serde::de::DeserializeOwned>() {}
    assert_serde::<TrackerOptions>();
    assert_serde::<TrackerState>();
    assert_serde::<SectionRect>();
}

use scrollspy::{NavLink, Section, SectionRect, SectionTracker, TrackerOptions, Viewport};

fn main() {
    let sections = vec![
        Section::new("education", Some("Education")),
        Section::new("research", Some("Publications & Research")),
        Section::new("contact", Some("Contact Me")),
    ];
    let links = sections
        .iter()
        .map(|s| NavLink::new(s.id.clone(), s.heading.clone().unwrap_or_default()))
        .collect();
    let mut t = SectionTracker::new(sections, links, TrackerOptions::default());
    t.set_viewport(Viewport::new(1280.0, 800.0));

    // Each section is 900px tall, stacked from the document top.
    for scroll in [0.0, 700.0, 1500.0, 2200.0] {
        t.set_scroll_offset(scroll);
        t.measure_sections(|id| {
            let index = match id {
                "education" => 0.0,
                "research" => 1.0,
                "contact" => 2.0,
                _ => return None,
            };
            Some(SectionRect::from_top_height(index * 900.0 - scroll, 900.0))
        });

        let mut candidates = Vec::new();
        t.collect_intersecting(&mut candidates);
        let change = t.activate_most_visible(candidates.iter().map(String::as_str));
        let show_top = t.update_scroll_to_top_visibility();
        println!(
            "scroll={scroll} candidates={candidates:?} active={:?} announce={:?} scroll_to_top={show_top}",
            t.active(),
            change.and_then(|c| c.announcement),
        );
    }

    let target = t.scroll_to_section("research").unwrap();
    println!("jump to research: {target:?}");
}

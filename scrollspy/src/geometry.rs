//! Pure viewport geometry used by the tracker.

use crate::{RootMargin, SectionRect};

/// Fraction of the section's own height that lies inside `[0, viewport_height]`.
///
/// Clamped to `[0, 1]`. Zero-height sections report `0.0`.
pub fn visibility_fraction(rect: SectionRect, viewport_height: f64) -> f64 {
    let height = rect.height();
    if height <= 0.0 {
        return 0.0;
    }
    let visible_top = rect.top.max(0.0);
    let visible_bottom = rect.bottom.min(viewport_height);
    let visible = (visible_bottom - visible_top).max(0.0);
    (visible / height).clamp(0.0, 1.0)
}

/// Fraction of the section covered by the margin-adjusted root band.
pub fn intersection_ratio(rect: SectionRect, margin: RootMargin, viewport_height: f64) -> f64 {
    let height = rect.height();
    if height <= 0.0 {
        return 0.0;
    }
    let (band_top, band_bottom) = margin.band(viewport_height);
    let overlap = (rect.bottom.min(band_bottom) - rect.top.max(band_top)).max(0.0);
    (overlap / height).clamp(0.0, 1.0)
}

/// Whether a section is reported by the intersection watcher.
///
/// A section must touch the root band (edges inclusive). When the band has a height,
/// the covered fraction must also reach `threshold`. A band collapsed to a line (the
/// default 20%/80% margins) reports every section crossing that line.
pub(crate) fn is_intersecting(
    rect: SectionRect,
    margin: RootMargin,
    threshold: f64,
    viewport_height: f64,
) -> bool {
    if rect.height() <= 0.0 {
        return false;
    }
    let (band_top, band_bottom) = margin.band(viewport_height);
    if rect.bottom < band_top || rect.top > band_bottom {
        return false;
    }
    if band_bottom <= band_top {
        return true;
    }
    intersection_ratio(rect, margin, viewport_height) >= threshold
}

/// Picks the candidate with the greatest visibility fraction.
///
/// Ties keep the first candidate seen. Candidates with no visible area are never picked.
pub fn select_most_visible<T>(
    candidates: impl IntoIterator<Item = (T, SectionRect)>,
    viewport_height: f64,
) -> Option<T> {
    let mut best: Option<T> = None;
    let mut max_visible = 0.0f64;
    for (candidate, rect) in candidates {
        let visible = visibility_fraction(rect, viewport_height);
        if visible > max_visible {
            max_visible = visible;
            best = Some(candidate);
        }
    }
    best
}

/// Picks the first rect straddling `line`, else the first rect whose top edge is nearest to it.
///
/// Returns the position of the rect in iteration order.
pub fn select_by_position(rects: impl IntoIterator<Item = SectionRect>, line: f64) -> Option<usize> {
    let mut nearest: Option<(usize, f64)> = None;
    for (i, rect) in rects.into_iter().enumerate() {
        if rect.straddles(line) {
            return Some(i);
        }
        let distance = rect.distance_to(line);
        match nearest {
            Some((_, best)) if distance >= best => {}
            _ => nearest = Some((i, distance)),
        }
    }
    nearest.map(|(i, _)| i)
}

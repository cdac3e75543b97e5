//! Clamped linear mapping from overall scroll progress to per-phase progress.
//!
//! Every animated element on the landing page is driven by the same primitive:
//! a phase window `[start, end]` over the overall progress of a pinned section,
//! re-scaled to a local `0..=1` value. Windows are independent and may overlap
//! or leave gaps.

/// A sub-range of scroll progress during which one visual transition runs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhaseWindow {
    pub start: f64,
    pub end: f64,
}

impl PhaseWindow {
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Same window moved by `delta` along the progress axis.
    pub fn shifted(self, delta: f64) -> Self {
        Self::new(self.start + delta, self.end + delta)
    }

    pub fn progress(&self, p: f64) -> f64 {
        phase_progress(p, self.start, self.end)
    }
}

/// 0 when `p <= start`, 1 when `p >= end`, linear in between.
///
/// NaN progress maps to 0. A window with `start >= end` acts as a step at
/// `start`.
pub fn phase_progress(p: f64, start: f64, end: f64) -> f64 {
    if p.is_nan() {
        return 0.0;
    }
    if !(start < end) {
        return if p < start { 0.0 } else { 1.0 };
    }
    if p <= start {
        return 0.0;
    }
    if p >= end {
        return 1.0;
    }
    ((p - start) / (end - start)).clamp(0.0, 1.0)
}

/// Progress through a pinned section whose content sticks while the page
/// scrolls `section_height - viewport_height` pixels. A section that does not
/// overflow the viewport jumps straight to 1 once reached.
pub fn section_progress(
    scroll_y: f64,
    section_top: f64,
    section_height: f64,
    viewport_height: f64,
) -> f64 {
    let travel = section_height - viewport_height;
    if !(travel > 0.0) {
        return if scroll_y >= section_top { 1.0 } else { 0.0 };
    }
    phase_progress(scroll_y, section_top, section_top + travel)
}

/// Vertical translation for a parallax layer; `depth` is the total distance
/// in pixels the layer drifts over the whole section.
pub fn parallax_offset(p: f64, depth: f64) -> f64 {
    phase_progress(p, 0.0, 1.0) * depth
}

/// Interpolates between `from` and `to` with `t` clamped to `0..=1`.
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    let t = phase_progress(t, 0.0, 1.0);
    from + (to - from) * t
}

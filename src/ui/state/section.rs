// SPDX-License-Identifier: MPL-2.0
//! Scroll-driven active section tracking.
//!
//! The page is one vertical run of named sections. On every scroll update the
//! tracker probes `scroll_y + SCROLL_LEAD` against the registered section
//! bands in declaration order and highlights the first one that contains the
//! probe. Sections without registered geometry are skipped, and a probe that
//! lands in no band leaves the previous selection in place.

/// Pixel lead added to the raw scroll offset so the highlight flips slightly
/// before a section's top edge reaches the top of the window.
pub const SCROLL_LEAD: f32 = 100.0;

/// The fixed set of page sections, in layout order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Skills,
    Education,
    Projects,
    Contact,
}

impl Section {
    /// All sections in declaration (layout) order. Matching relies on this
    /// order: the first containing section wins.
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Education,
        Section::Projects,
        Section::Contact,
    ];

    /// The i18n key for the navigation label of this section.
    pub fn label_key(self) -> &'static str {
        match self {
            Section::Home => "nav-home",
            Section::About => "nav-about",
            Section::Skills => "nav-skills",
            Section::Education => "nav-education",
            Section::Projects => "nav-projects",
            Section::Contact => "nav-contact",
        }
    }

    fn ordinal(self) -> usize {
        match self {
            Section::Home => 0,
            Section::About => 1,
            Section::Skills => 2,
            Section::Education => 3,
            Section::Projects => 4,
            Section::Contact => 5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Band {
    top: f32,
    height: f32,
}

impl Band {
    fn contains(&self, y: f32) -> bool {
        // Inclusive at the top edge, exclusive at the bottom edge.
        y >= self.top && y < self.top + self.height
    }
}

/// Maps a scroll offset to the currently active section.
#[derive(Debug, Clone)]
pub struct SectionTracker {
    active: Section,
    bands: [Option<Band>; 6],
}

impl SectionTracker {
    /// Creates a tracker with no registered geometry; `Home` starts active.
    pub fn new() -> Self {
        Self {
            active: Section::Home,
            bands: [None; 6],
        }
    }

    /// Builds a tracker from `(section, height)` pairs laid out top to
    /// bottom, computing each section's top edge cumulatively.
    pub fn from_layout(layout: &[(Section, f32)]) -> Self {
        let mut tracker = Self::new();
        let mut top = 0.0;
        for &(section, height) in layout {
            tracker.register(section, top, height);
            top += height;
        }
        tracker
    }

    /// Records the vertical band a section occupies.
    pub fn register(&mut self, section: Section, top: f32, height: f32) {
        self.bands[section.ordinal()] = Some(Band { top, height });
    }

    pub fn active(&self) -> Section {
        self.active
    }

    /// Top edge of a section, if its geometry is known.
    pub fn top_of(&self, section: Section) -> Option<f32> {
        self.bands[section.ordinal()].map(|band| band.top)
    }

    /// Updates the active section from a new scroll offset.
    ///
    /// The first section (in declaration order) whose band contains
    /// `scroll_y + SCROLL_LEAD` becomes active; when none matches the
    /// previous selection is retained.
    pub fn on_scroll(&mut self, scroll_y: f32) {
        let probe = scroll_y + SCROLL_LEAD;
        for section in Section::ALL {
            if let Some(band) = self.bands[section.ordinal()] {
                if band.contains(probe) {
                    self.active = section;
                    break;
                }
            }
        }
    }
}

impl Default for SectionTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker_with_uniform_layout(height: f32) -> SectionTracker {
        let layout: Vec<(Section, f32)> = Section::ALL.iter().map(|&s| (s, height)).collect();
        SectionTracker::from_layout(&layout)
    }

    #[test]
    fn new_tracker_starts_at_home() {
        let tracker = SectionTracker::new();
        assert_eq!(tracker.active(), Section::Home);
    }

    #[test]
    fn from_layout_accumulates_tops() {
        let tracker = tracker_with_uniform_layout(500.0);
        assert_eq!(tracker.top_of(Section::Home), Some(0.0));
        assert_eq!(tracker.top_of(Section::Skills), Some(1000.0));
        assert_eq!(tracker.top_of(Section::Contact), Some(2500.0));
    }

    #[test]
    fn scrolling_into_a_section_activates_it() {
        let mut tracker = tracker_with_uniform_layout(500.0);
        tracker.on_scroll(1200.0); // probe 1300 lands in Skills [1000, 1500)
        assert_eq!(tracker.active(), Section::Skills);
    }

    #[test]
    fn section_top_boundary_is_inclusive() {
        let mut tracker = tracker_with_uniform_layout(500.0);
        // probe = 900 + 100 = 1000, exactly the top of Skills
        tracker.on_scroll(900.0);
        assert_eq!(tracker.active(), Section::Skills);
    }

    #[test]
    fn section_bottom_boundary_is_exclusive() {
        let mut tracker = tracker_with_uniform_layout(500.0);
        // probe = 899.9 + 100 = 999.9, still inside About [500, 1000)
        tracker.on_scroll(899.9);
        assert_eq!(tracker.active(), Section::About);
    }

    #[test]
    fn probe_outside_all_bands_retains_previous_selection() {
        let mut tracker = tracker_with_uniform_layout(500.0);
        tracker.on_scroll(1200.0);
        assert_eq!(tracker.active(), Section::Skills);

        tracker.on_scroll(10_000.0); // past the page bottom
        assert_eq!(tracker.active(), Section::Skills);
    }

    #[test]
    fn unregistered_sections_are_skipped() {
        let mut tracker = SectionTracker::new();
        tracker.register(Section::Projects, 0.0, 500.0);

        tracker.on_scroll(100.0);
        assert_eq!(tracker.active(), Section::Projects);
    }

    #[test]
    fn tracker_without_geometry_never_changes() {
        let mut tracker = SectionTracker::new();
        tracker.on_scroll(2500.0);
        assert_eq!(tracker.active(), Section::Home);
    }

    #[test]
    fn first_matching_section_wins_in_declaration_order() {
        let mut tracker = SectionTracker::new();
        // Overlapping bands: declaration order breaks the tie.
        tracker.register(Section::About, 0.0, 1000.0);
        tracker.register(Section::Skills, 0.0, 1000.0);

        tracker.on_scroll(200.0);
        assert_eq!(tracker.active(), Section::About);
    }
}

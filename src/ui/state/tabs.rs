// SPDX-License-Identifier: MPL-2.0
//! Timeline tab selection.
//!
//! The education section shows one of three mutually exclusive content lists.
//! Selection is a plain last-write-wins assignment with no history.

/// Which timeline list is currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimelineTab {
    #[default]
    Education,
    Experience,
    Internships,
}

impl TimelineTab {
    /// All tabs in display order.
    pub const ALL: [TimelineTab; 3] = [
        TimelineTab::Education,
        TimelineTab::Experience,
        TimelineTab::Internships,
    ];

    /// The i18n key for the tab button label.
    pub fn label_key(self) -> &'static str {
        match self {
            TimelineTab::Education => "tab-education",
            TimelineTab::Experience => "tab-experience",
            TimelineTab::Internships => "tab-internships",
        }
    }

    /// The i18n key for the section heading shown while this tab is active.
    pub fn heading_key(self) -> &'static str {
        match self {
            TimelineTab::Education => "education-heading",
            TimelineTab::Experience => "experience-heading",
            TimelineTab::Internships => "internships-heading",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn education_is_the_default_tab() {
        assert_eq!(TimelineTab::default(), TimelineTab::Education);
    }

    #[test]
    fn selection_is_last_write_wins() {
        let mut active = TimelineTab::default();
        active = TimelineTab::Experience;
        assert_eq!(active, TimelineTab::Experience);
        active = TimelineTab::Education;
        assert_eq!(active, TimelineTab::Education);
    }

    #[test]
    fn every_tab_has_distinct_labels() {
        let labels: Vec<_> = TimelineTab::ALL.iter().map(|t| t.label_key()).collect();
        assert_eq!(labels.len(), 3);
        assert!(labels.windows(2).all(|w| w[0] != w[1]));
    }
}

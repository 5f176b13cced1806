//! Conference profile.
//!
//! Everything that is specific to one edition of the conference lives in
//! [`Conference`]: the year used to qualify dates, block-lists, default
//! category selections and the preference key prefix.

use serde::{Deserialize, Serialize};

/// Separator between parent and sub-event ids in synthesized entry ids.
pub const SUB_EVENT_ID_SEPARATOR: &str = "-";

/// Separator between parent and sub-event titles in display titles.
pub const SUB_EVENT_TITLE_SEPARATOR: &str = " | ";

/// Settings for one edition of the conference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Conference {
    /// Display name.
    pub name: String,
    /// Year prefixed to every `MM-DD` day.
    pub year: i32,
    /// Link used when an event has no detail page.
    pub fallback_link: String,
    /// Event titles that are never scheduled (setup blocks and the like).
    pub excluded_titles: Vec<String>,
    /// Category names never offered for selection.
    pub excluded_categories: Vec<String>,
    /// Categories enabled on first start and after a reset.
    pub default_enabled: Vec<String>,
    /// Categories disabled on first start and after a reset.
    pub default_disabled: Vec<String>,
    /// Prefix of the preference store keys.
    pub storage_prefix: String,
    /// First hour shown in the day view.
    pub day_start_hour: u32,
    /// Last hour shown in the day view.
    pub day_end_hour: u32,
}

impl Default for Conference {
    fn default() -> Self {
        Self {
            name: "SIGGRAPH 2023".to_string(),
            year: 2023,
            fallback_link: "https://s2023.siggraph.org/full-program".to_string(),
            excluded_titles: strings(&[
                "Labs Installations",
                "Labs Demo Schedule for Tuesday",
                "Labs Demo Schedule for Wednesday",
                "Labs Demo Schedule for Thursday",
            ]),
            excluded_categories: strings(&[
                "ACM SIGGRAPH Award Talk",
                "Electronic Theater Retrospective Celebration",
                "Job Fair Roundtable",
            ]),
            default_enabled: strings(&[
                "Course",
                "Keynote",
                "Production Session",
                "Real-Time Live!",
                "Talk",
            ]),
            default_disabled: strings(&[
                "Birds of a Feather",
                "Electronic Theater",
                "Poster",
                "Technical Paper",
                "VR Theater",
            ]),
            storage_prefix: "sane-sg23".to_string(),
            day_start_hour: 7,
            day_end_hour: 23,
        }
    }
}

impl Conference {
    /// Returns true if events with this title are administrative placeholders.
    pub fn is_excluded_title(&self, title: &str) -> bool {
        self.excluded_titles.iter().any(|t| t == title)
    }

    /// Returns true if this category is hidden from the selectable set.
    pub fn is_excluded_category(&self, category: &str) -> bool {
        self.excluded_categories.iter().any(|c| c == category)
    }

    /// Qualifies a `MM-DD` day and `HH:MM` time into `YYYY-MM-DDTHH:MM`.
    ///
    /// Inputs are not validated.
    pub fn date_time(&self, day: &str, time: &str) -> String {
        format!("{}-{}T{}", self.year, day, time)
    }

    /// Qualifies a `MM-DD` day into `YYYY-MM-DD`.
    pub fn full_date(&self, day: &str) -> String {
        format!("{}-{}", self.year, day)
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

use crate::model::{Course, Day, GradeLevel, TimeSlot};

/// Wire sentinel for "match all" on an enum axis.
pub const ALL_SENTINEL: &str = "הכל";

/// The four independent filter axes. `None` on an enum axis means "match
/// all"; an empty search string matches everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    pub day: Option<Day>,
    pub time_slot: Option<TimeSlot>,
    pub grade_level: Option<GradeLevel>,
    pub search: String,
}

impl FilterState {
    pub fn matches(&self, course: &Course) -> bool {
        let day_match = self.day.map_or(true, |d| course.day == d);
        let time_match = self.time_slot.map_or(true, |t| course.time_slot == t);
        let grade_match = self.grade_level.map_or(true, |g| course.grade_level == g);
        let search_match = self.search.is_empty() || {
            let needle = self.search.to_lowercase();
            course.name.to_lowercase().contains(&needle)
                || course.details.to_lowercase().contains(&needle)
        };
        day_match && time_match && grade_match && search_match
    }
}

/// Filtered view of the catalog: the subsequence satisfying every active
/// axis, in catalog order. Pure; recomputed on demand.
pub fn filter_courses<'a>(catalog: &'a [Course], filters: &FilterState) -> Vec<&'a Course> {
    catalog.iter().filter(|c| filters.matches(c)).collect()
}

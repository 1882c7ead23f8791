use crate::model::{Course, Day};
use crate::selection::SelectionSet;

/// One day of the personal schedule: the selected courses for that day in
/// time-slot order.
#[derive(Debug, Clone, PartialEq)]
pub struct DayGroup {
    pub day: Day,
    pub courses: Vec<Course>,
}

/// Resolve the selection against the catalog and group it for display.
/// Ids with no matching course are dropped silently (the catalog may have
/// changed under a remembered selection); days with nothing resolved are
/// omitted rather than emitted empty.
pub fn group_schedule(catalog: &[Course], selection: &SelectionSet) -> Vec<DayGroup> {
    Day::ALL
        .into_iter()
        .filter_map(|day| {
            let mut courses: Vec<Course> = catalog
                .iter()
                .filter(|c| c.day == day && selection.contains(c.id))
                .cloned()
                .collect();
            if courses.is_empty() {
                return None;
            }
            courses.sort_by_key(|c| c.time_slot);
            Some(DayGroup { day, courses })
        })
        .collect()
}

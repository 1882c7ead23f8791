use chrono::Utc;
use serde::{Deserialize, Serialize};

/// School week: Sunday through Thursday. Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    #[serde(rename = "ראשון")]
    Sunday,
    #[serde(rename = "שני")]
    Monday,
    #[serde(rename = "שלישי")]
    Tuesday,
    #[serde(rename = "רביעי")]
    Wednesday,
    #[serde(rename = "חמישי")]
    Thursday,
}

impl Day {
    pub const ALL: [Day; 5] = [
        Day::Sunday,
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Day::Sunday => "ראשון",
            Day::Monday => "שני",
            Day::Tuesday => "שלישי",
            Day::Wednesday => "רביעי",
            Day::Thursday => "חמישי",
        }
    }

    pub fn from_label(s: &str) -> Option<Day> {
        Day::ALL.into_iter().find(|d| d.label() == s)
    }
}

/// Period within a day. Ordering comes from the enum, not from comparing the
/// labels as strings (a "שעה 10" label must still sort after "שעה 2").
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TimeSlot {
    #[serde(rename = "שעה 1")]
    Slot1,
    #[serde(rename = "שעה 2")]
    Slot2,
    #[serde(rename = "שעה 3")]
    Slot3,
    #[serde(rename = "שעה 4")]
    Slot4,
    #[serde(rename = "שעה 5")]
    Slot5,
    #[serde(rename = "שעה 6")]
    Slot6,
}

impl TimeSlot {
    pub const ALL: [TimeSlot; 6] = [
        TimeSlot::Slot1,
        TimeSlot::Slot2,
        TimeSlot::Slot3,
        TimeSlot::Slot4,
        TimeSlot::Slot5,
        TimeSlot::Slot6,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TimeSlot::Slot1 => "שעה 1",
            TimeSlot::Slot2 => "שעה 2",
            TimeSlot::Slot3 => "שעה 3",
            TimeSlot::Slot4 => "שעה 4",
            TimeSlot::Slot5 => "שעה 5",
            TimeSlot::Slot6 => "שעה 6",
        }
    }

    /// Clock hours shown under the slot label in the grid and the personal
    /// schedule.
    pub fn hours(self) -> &'static str {
        match self {
            TimeSlot::Slot1 => "08:00-08:45",
            TimeSlot::Slot2 => "08:50-09:35",
            TimeSlot::Slot3 => "09:50-10:35",
            TimeSlot::Slot4 => "10:40-11:25",
            TimeSlot::Slot5 => "11:40-12:25",
            TimeSlot::Slot6 => "12:30-13:15",
        }
    }

    pub fn from_label(s: &str) -> Option<TimeSlot> {
        TimeSlot::ALL.into_iter().find(|t| t.label() == s)
    }
}

/// Grade band a course is offered to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GradeLevel {
    #[serde(rename = "א-ב")]
    AlefBet,
    #[serde(rename = "ג-ד")]
    GimelDalet,
    #[serde(rename = "ה-ו")]
    HehVav,
    #[serde(rename = "ז-ח")]
    ZayinHet,
}

impl GradeLevel {
    pub const ALL: [GradeLevel; 4] = [
        GradeLevel::AlefBet,
        GradeLevel::GimelDalet,
        GradeLevel::HehVav,
        GradeLevel::ZayinHet,
    ];

    pub fn label(self) -> &'static str {
        match self {
            GradeLevel::AlefBet => "א-ב",
            GradeLevel::GimelDalet => "ג-ד",
            GradeLevel::HehVav => "ה-ו",
            GradeLevel::ZayinHet => "ז-ח",
        }
    }

    pub fn from_label(s: &str) -> Option<GradeLevel> {
        GradeLevel::ALL.into_iter().find(|g| g.label() == s)
    }
}

/// One catalog offering. `id` is unique within the catalog; `(day, timeSlot)`
/// is not — several courses may share a grid cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub details: String,
    pub day: Day,
    pub time_slot: TimeSlot,
    pub grade_level: GradeLevel,
}

/// Catalog used when the workspace has no published catalog yet, or when the
/// persisted blob fails to parse.
pub fn default_catalog() -> Vec<Course> {
    fn c(
        id: i64,
        name: &str,
        details: &str,
        day: Day,
        time_slot: TimeSlot,
        grade_level: GradeLevel,
    ) -> Course {
        Course {
            id,
            name: name.to_string(),
            details: details.to_string(),
            day,
            time_slot,
            grade_level,
        }
    }

    vec![
        c(
            1,
            "אומנות",
            "ציור ופיסול בסטודיו",
            Day::Sunday,
            TimeSlot::Slot1,
            GradeLevel::AlefBet,
        ),
        c(
            2,
            "מתמטיקה",
            "חשיבה מתמטית דרך משחקים",
            Day::Sunday,
            TimeSlot::Slot2,
            GradeLevel::GimelDalet,
        ),
        c(
            3,
            "נגרות",
            "עבודה בעץ בסדנה",
            Day::Monday,
            TimeSlot::Slot1,
            GradeLevel::HehVav,
        ),
        c(
            4,
            "מוזיקה",
            "הרכב כלי ושירה",
            Day::Monday,
            TimeSlot::Slot3,
            GradeLevel::AlefBet,
        ),
        c(
            5,
            "דרמה",
            "משחק ואלתור",
            Day::Tuesday,
            TimeSlot::Slot2,
            GradeLevel::GimelDalet,
        ),
        c(
            6,
            "מדעים",
            "ניסויים במעבדה",
            Day::Tuesday,
            TimeSlot::Slot4,
            GradeLevel::ZayinHet,
        ),
        c(
            7,
            "בישול",
            "מטבח קהילתי",
            Day::Wednesday,
            TimeSlot::Slot2,
            GradeLevel::HehVav,
        ),
        c(
            8,
            "יוגה",
            "תנועה ונשימה",
            Day::Wednesday,
            TimeSlot::Slot5,
            GradeLevel::AlefBet,
        ),
        c(
            9,
            "כדורגל",
            "משחק במגרש",
            Day::Thursday,
            TimeSlot::Slot1,
            GradeLevel::GimelDalet,
        ),
        c(
            10,
            "צילום",
            "צילום בחצר ובסביבה",
            Day::Thursday,
            TimeSlot::Slot6,
            GradeLevel::ZayinHet,
        ),
    ]
}

/// Mint an id for a new course: current time in milliseconds, bumped past
/// any existing id so two saves in the same millisecond stay distinct.
pub fn mint_course_id(catalog: &[Course]) -> i64 {
    let mut id = Utc::now().timestamp_millis();
    while catalog.iter().any(|c| c.id == id) {
        id += 1;
    }
    id
}

//! Row-level types for the two sheets.
//!
//! Both sheets are plain string grids: cell values are carried verbatim and
//! never coerced to numbers or dates, so whatever representation the source
//! sheet uses survives the round trip into the ledger.

/// Column count of the source (intake) sheet.
pub const SOURCE_COLUMNS: usize = 11;

/// Column count of the completed-credits ledger sheet.
pub const LEDGER_COLUMNS: usize = 13;

/// Header row written back to the ledger sheet.
pub const LEDGER_HEADERS: [&str; LEDGER_COLUMNS] = [
    "No.",
    "Student Name",
    "Student ID",
    "Course Name",
    "Course No.",
    "Course Start Date",
    "Course End Date",
    "Course Grade",
    "Teacher of Record",
    "Hours on Course",
    "Completion Letter",
    "LS",
    "Notes",
];

/// Returns true when a checkbox cell marks the row as selected for import.
pub fn is_checked(cell: &str) -> bool {
    let value = cell.trim();
    value.eq_ignore_ascii_case("true") || value == "1"
}

/// One row of the source sheet, positional layout:
/// checkbox, student name ("Last, First"), student id, course name,
/// course number, start date, end date, grade, teacher, hours, letter URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRecord {
    pub selected: bool,
    pub student_name: String,
    pub student_id: String,
    pub course_name: String,
    pub course_number: String,
    pub course_start: String,
    pub course_end: String,
    pub course_grade: String,
    pub teacher_of_record: String,
    pub hours_on_course: String,
    pub completion_url: String,
}

impl SourceRecord {
    /// Build a record from a sheet row. Short rows are padded with empty
    /// cells; completeness is checked separately via [`missing_required`].
    ///
    /// [`missing_required`]: SourceRecord::missing_required
    pub fn from_row(row: &[String]) -> Self {
        let cell = |idx: usize| row.get(idx).cloned().unwrap_or_default();
        Self {
            selected: row.first().is_some_and(|value| is_checked(value)),
            student_name: cell(1),
            student_id: cell(2),
            course_name: cell(3),
            course_number: cell(4),
            course_start: cell(5),
            course_end: cell(6),
            course_grade: cell(7),
            teacher_of_record: cell(8),
            hours_on_course: cell(9),
            completion_url: cell(10),
        }
    }

    /// Name of the first required field that is empty, if any.
    ///
    /// A selected row without a student name, student id, or course name
    /// cannot be imported or routed, and is skipped as malformed.
    pub fn missing_required(&self) -> Option<&'static str> {
        if self.student_name.trim().is_empty() {
            Some("student name")
        } else if self.student_id.trim().is_empty() {
            Some("student id")
        } else if self.course_name.trim().is_empty() {
            Some("course name")
        } else {
            None
        }
    }
}

/// One row of the completed-credits ledger.
///
/// `row_number` is reassigned for every row on every import run, so its
/// stored value is only meaningful directly after a commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedCredit {
    pub row_number: usize,
    pub student_name: String,
    pub student_id: String,
    pub course_name: String,
    pub course_number: String,
    pub course_start: String,
    pub course_end: String,
    pub course_grade: String,
    pub teacher_of_record: String,
    pub hours_on_course: String,
    pub completion_url: String,
    pub ls: String,
    pub notes: String,
}

impl CompletedCredit {
    pub fn from_row(row: &[String]) -> Self {
        let cell = |idx: usize| row.get(idx).cloned().unwrap_or_default();
        Self {
            row_number: row
                .first()
                .and_then(|value| value.trim().parse::<usize>().ok())
                .unwrap_or(0),
            student_name: cell(1),
            student_id: cell(2),
            course_name: cell(3),
            course_number: cell(4),
            course_start: cell(5),
            course_end: cell(6),
            course_grade: cell(7),
            teacher_of_record: cell(8),
            hours_on_course: cell(9),
            completion_url: cell(10),
            ls: cell(11),
            notes: cell(12),
        }
    }

    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.row_number.to_string(),
            self.student_name.clone(),
            self.student_id.clone(),
            self.course_name.clone(),
            self.course_number.clone(),
            self.course_start.clone(),
            self.course_end.clone(),
            self.course_grade.clone(),
            self.teacher_of_record.clone(),
            self.hours_on_course.clone(),
            self.completion_url.clone(),
            self.ls.clone(),
            self.notes.clone(),
        ]
    }

    pub fn key(&self) -> CreditKey {
        CreditKey::new(&self.student_id, &self.course_name)
    }
}

/// Identity key for deduplication: student id compared by its stored string
/// representation, course name compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CreditKey {
    student_id: String,
    course_folded: String,
}

impl CreditKey {
    pub fn new(student_id: &str, course_name: &str) -> Self {
        Self {
            student_id: student_id.to_string(),
            course_folded: course_name.to_lowercase(),
        }
    }
}

/// One counselor notification to send for a newly imported row.
///
/// `student_name` keeps the source-sheet casing so the email greeting reads
/// naturally; `course_name` is the upper-cased ledger form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRequest {
    pub student_name: String,
    pub student_id: String,
    pub course_name: String,
}

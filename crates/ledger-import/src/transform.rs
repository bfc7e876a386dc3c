use ledger_model::{CompletedCredit, SourceRecord};

/// Convert one source record into the ledger's column layout.
///
/// Student and course names are stored upper-cased; every other field is
/// copied verbatim. The reserved `ls` and `notes` columns start empty and
/// `row_number` stays 0 until [`crate::pipeline::commit`] renumbers the
/// whole ledger.
pub fn to_completed_credit(record: &SourceRecord) -> CompletedCredit {
    CompletedCredit {
        row_number: 0,
        student_name: record.student_name.to_uppercase(),
        student_id: record.student_id.clone(),
        course_name: record.course_name.to_uppercase(),
        course_number: record.course_number.clone(),
        course_start: record.course_start.clone(),
        course_end: record.course_end.clone(),
        course_grade: record.course_grade.clone(),
        teacher_of_record: record.teacher_of_record.clone(),
        hours_on_course: record.hours_on_course.clone(),
        completion_url: record.completion_url.clone(),
        ls: String::new(),
        notes: String::new(),
    }
}

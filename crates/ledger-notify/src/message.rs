//! The fixed notification template.

use ledger_model::{NotificationRequest, Recipient, SenderBlock};

use crate::transport::EmailMessage;

pub const SUBJECT: &str = "Student Completed CR/CA";

/// Render one counselor notification. The body structure is fixed:
/// greeting, one sentence naming student, id and course, a closing
/// question, and the two-sender signature block.
pub fn render_message(
    request: &NotificationRequest,
    recipient: Recipient<'_>,
    sender: &SenderBlock,
) -> EmailMessage {
    let body = format!(
        "Dear Counselor,\n\n\
         We are happy to report {student} ({id}), has completed: {course}\n\n\
         What should they work on next or are they all done?\n\n\
         Thank you,\n{signature}",
        student = request.student_name,
        id = request.student_id,
        course = request.course_name,
        signature = sender.signature,
    );
    EmailMessage {
        to: recipient.email.to_string(),
        from: sender.from_header(),
        subject: SUBJECT.to_string(),
        body,
    }
}

//! One notification per newly imported row.

use tracing::{debug, warn};

use ledger_model::{NotificationRequest, RoutingTable};

use crate::message::render_message;
use crate::router::Router;
use crate::transport::MailTransport;

/// Outcome of a dispatch pass.
#[derive(Debug, Default)]
pub struct DispatchReport {
    pub sent: usize,
    /// One message per failed send; failures never stop the pass.
    pub failures: Vec<String>,
}

/// Route, render and send one message per request, in the given order.
///
/// A send failure is recorded and logged, and the remaining requests still
/// go out; the ledger rows behind these requests are already committed and
/// are not affected either way.
pub fn dispatch(
    table: &RoutingTable,
    transport: &mut dyn MailTransport,
    requests: &[NotificationRequest],
) -> DispatchReport {
    let router = Router::new(table);
    let mut report = DispatchReport::default();
    for request in requests {
        let recipient = router.route(&request.student_name);
        let message = render_message(request, recipient, &table.sender);
        match transport.send(&message) {
            Ok(()) => {
                debug!(
                    student_id = %request.student_id,
                    course = %request.course_name,
                    group = recipient.group,
                    "notification sent"
                );
                report.sent += 1;
            }
            Err(error) => {
                warn!(
                    student_id = %request.student_id,
                    course = %request.course_name,
                    group = recipient.group,
                    %error,
                    "notification failed"
                );
                report
                    .failures
                    .push(format!("notify {} ({}): {error}", recipient.group, request.student_id));
            }
        }
    }
    report
}

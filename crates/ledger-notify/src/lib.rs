pub mod config;
pub mod dispatcher;
pub mod message;
pub mod router;
pub mod transport;

pub use config::{ROUTING_ENV, default_routing_table, load_routing_table};
pub use dispatcher::{DispatchReport, dispatch};
pub use message::{SUBJECT, render_message};
pub use router::Router;
pub use transport::{EmailMessage, FileOutbox, MailTransport, MemoryOutbox};

//! The mail-delivery seam.
//!
//! Actual delivery belongs to the host mail system; this crate only hands
//! messages across the seam. The production implementation drops each
//! message as an RFC-822-style file into an outbox directory the host
//! mailer drains; tests capture messages in memory.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub to: String,
    pub from: String,
    pub subject: String,
    pub body: String,
}

pub trait MailTransport {
    fn send(&mut self, message: &EmailMessage) -> Result<()>;
}

/// Writes one `.eml` file per message into a directory.
#[derive(Debug)]
pub struct FileOutbox {
    dir: PathBuf,
    sequence: usize,
}

impl FileOutbox {
    pub fn new(dir: &Path) -> Result<Self> {
        fs::create_dir_all(dir)
            .with_context(|| format!("create outbox directory: {}", dir.display()))?;
        // Numbering resumes after any messages the host mailer has not
        // drained yet; restarting at 0001 would overwrite them.
        let mut sequence = 0;
        for entry in
            fs::read_dir(dir).with_context(|| format!("scan outbox: {}", dir.display()))?
        {
            let entry = entry.with_context(|| format!("scan outbox: {}", dir.display()))?;
            if let Some(number) = file_sequence(&entry.file_name()) {
                sequence = sequence.max(number);
            }
        }
        Ok(Self {
            dir: dir.to_path_buf(),
            sequence,
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl MailTransport for FileOutbox {
    fn send(&mut self, message: &EmailMessage) -> Result<()> {
        self.sequence += 1;
        let name = format!(
            "{:04}-{}.eml",
            self.sequence,
            mailbox_slug(&message.to)
        );
        let path = self.dir.join(name);
        let text = format!(
            "Date: {date}\r\nFrom: {from}\r\nTo: {to}\r\nSubject: {subject}\r\n\r\n{body}\r\n",
            date = Utc::now().to_rfc2822(),
            from = message.from,
            to = message.to,
            subject = message.subject,
            body = message.body,
        );
        fs::write(&path, text).with_context(|| format!("write message: {}", path.display()))?;
        Ok(())
    }
}

/// Sequence number of an outbox file name like `0012-jane-doe.eml`.
fn file_sequence(name: &OsStr) -> Option<usize> {
    let (digits, _) = name.to_str()?.split_once('-')?;
    digits.parse().ok()
}

/// Local part of the recipient address, reduced to filename-safe characters.
fn mailbox_slug(address: &str) -> String {
    let local = address.split('@').next().unwrap_or(address);
    let slug: String = local
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() {
                ch.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect();
    if slug.is_empty() { "message".to_string() } else { slug }
}

/// Captures messages for tests; optionally fails for one recipient to
/// exercise the continue-on-failure path.
#[derive(Debug, Default)]
pub struct MemoryOutbox {
    pub messages: Vec<EmailMessage>,
    pub fail_to: Option<String>,
}

impl MemoryOutbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_for(address: &str) -> Self {
        Self {
            messages: Vec::new(),
            fail_to: Some(address.to_string()),
        }
    }
}

impl MailTransport for MemoryOutbox {
    fn send(&mut self, message: &EmailMessage) -> Result<()> {
        if self.fail_to.as_deref() == Some(message.to.as_str()) {
            anyhow::bail!("transport refused {}", message.to);
        }
        self.messages.push(message.clone());
        Ok(())
    }
}

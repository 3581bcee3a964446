//! Email delivery
//!
//! Builds a multipart message (plain-text body plus one attachment) and sends
//! it through an SMTP relay.

use anyhow::{Context, Result};
use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use std::fs;
use std::path::Path;

use crate::config::SmtpSettings;

/// MIME type for an attachment, guessed from its extension
fn guess_content_type(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("pdf") => "application/pdf",
        Some("txt") => "text/plain",
        Some("json") => "application/json",
        Some("html") | Some("htm") => "text/html",
        Some("csv") => "text/csv",
        _ => "application/octet-stream",
    }
}

/// Build an email with a plain-text body and `attachment_path` attached
pub fn generate(
    sender: &str,
    recipient: &str,
    subject: &str,
    body: &str,
    attachment_path: &Path,
) -> Result<Message> {
    let from: Mailbox = sender
        .parse()
        .with_context(|| format!("Invalid sender address: {:?}", sender))?;
    let to: Mailbox = recipient
        .parse()
        .with_context(|| format!("Invalid recipient address: {:?}", recipient))?;

    let filename = attachment_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .with_context(|| format!("Attachment path has no file name: {:?}", attachment_path))?;
    let content = fs::read(attachment_path)
        .with_context(|| format!("Failed to read attachment: {:?}", attachment_path))?;
    let content_type = ContentType::parse(guess_content_type(attachment_path))
        .context("Invalid attachment content type")?;

    log::debug!(
        "Attaching {} ({} bytes, {:?})",
        filename,
        content.len(),
        content_type
    );

    let message = Message::builder()
        .from(from)
        .to(to)
        .subject(subject)
        .multipart(
            MultiPart::mixed()
                .singlepart(SinglePart::plain(body.to_string()))
                .singlepart(Attachment::new(filename).body(content, content_type)),
        )
        .context("Failed to build email message")?;

    Ok(message)
}

/// Send a message through the configured SMTP relay
pub fn send(message: &Message, settings: &SmtpSettings) -> Result<()> {
    let mut builder = SmtpTransport::builder_dangerous(settings.host.as_str()).port(settings.port);
    if let (Some(username), Some(password)) = (&settings.username, &settings.password) {
        builder = builder.credentials(Credentials::new(username.clone(), password.clone()));
    }
    let mailer = builder.build();

    log::info!("Sending email via {}:{}", settings.host, settings.port);
    mailer
        .send(message)
        .with_context(|| format!("Failed to send email via {}:{}", settings.host, settings.port))?;

    Ok(())
}

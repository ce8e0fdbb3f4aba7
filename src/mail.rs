use anyhow::Context;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

use crate::config::MailConfig;

/// Deliver the finished report as one HTML mail. STARTTLS submission with
/// LOGIN auth; the relay settings come straight from the config file.
/// Delivery is best-effort from the caller's point of view: the report was
/// already produced, so a failure here is logged upstream, not retried.
pub(crate) fn send(subject: &str, body: &str, conf: &MailConfig) -> Result<(), anyhow::Error> {
    let sender: Mailbox = conf
        .sender
        .parse()
        .with_context(|| format!("invalid sender address {}", conf.sender))?;
    let mut builder = Message::builder()
        .from(sender)
        .subject(subject)
        .header(ContentType::TEXT_HTML);
    for recipient in &conf.recipients {
        let to: Mailbox = recipient
            .parse()
            .with_context(|| format!("invalid recipient address {recipient}"))?;
        builder = builder.to(to);
    }
    let message = builder.body(body.to_string())?;

    let mailer = SmtpTransport::starttls_relay(&conf.host)
        .with_context(|| format!("cannot set up SMTP relay {}", conf.host))?
        .port(conf.port)
        .credentials(Credentials::new(conf.login.clone(), conf.password.clone()))
        .build();
    mailer
        .send(&message)
        .with_context(|| format!("SMTP delivery via {}:{} failed", conf.host, conf.port))?;
    Ok(())
}

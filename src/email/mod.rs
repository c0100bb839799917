pub mod templates;

use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::SmtpConfig;
use crate::submission::ContactForm;

/// Notification gateway. One transport, one statically configured sender
/// and one statically configured admin recipient; every email this service
/// sends goes to the admin.
pub struct Mailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: String,
    admin: String,
}

impl Mailer {
    pub fn new(config: &SmtpConfig, admin: String) -> Result<Self, String> {
        let transport = build_smtp_transport(config)?;

        Ok(Self {
            transport,
            from: config.from.clone(),
            admin,
        })
    }

    /// Connection + credential check, used by the startup self-check only.
    pub async fn verify(&self) -> Result<(), String> {
        match self.transport.test_connection().await {
            Ok(true) => Ok(()),
            Ok(false) => Err("SMTP server did not accept the connection test".to_string()),
            Err(e) => Err(format!("SMTP connection test failed: {e}")),
        }
    }

    pub async fn send_submission_notice(&self, form: &ContactForm) -> Result<String, String> {
        let html = templates::render_submission_notice(form);
        self.send("New Contact Form Submission", &html).await
    }

    pub async fn send_smtp_test(&self) -> Result<String, String> {
        let html = templates::render_smtp_test();
        self.send("Test Email", &html).await
    }

    async fn send(&self, subject: &str, html_body: &str) -> Result<String, String> {
        let message = Message::builder()
            .from(
                self.from
                    .parse()
                    .map_err(|e| format!("Invalid from address: {e}"))?,
            )
            .to(self
                .admin
                .parse()
                .map_err(|e| format!("Invalid admin address: {e}"))?)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(html_body.to_string())
            .map_err(|e| format!("Failed to build email: {e}"))?;

        let response = self
            .transport
            .send(message)
            .await
            .map_err(|e| format!("Failed to send email: {e}"))?;

        let detail = response.message().collect::<Vec<_>>().join(" ");
        Ok(format!("{} {detail}", response.code()))
    }
}

fn build_smtp_transport(
    config: &SmtpConfig,
) -> Result<AsyncSmtpTransport<Tokio1Executor>, String> {
    let creds = Credentials::new(config.user.clone(), config.pass.clone());

    let transport = match config.tls_mode.as_str() {
        "tls" => AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
            .map_err(|e| format!("SMTP relay error: {e}"))?
            .port(config.port)
            .credentials(creds)
            .build(),
        "none" => AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.host)
            .port(config.port)
            .credentials(creds)
            .build(),
        _ => AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .map_err(|e| format!("SMTP starttls error: {e}"))?
            .port(config.port)
            .credentials(creds)
            .build(),
    };

    Ok(transport)
}

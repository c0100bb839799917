use crate::db;
use crate::models::ContactSubmission;
use crate::state::SharedState;

use super::ContactForm;

/// Outcome of a submission that made it past the insert. The email step is
/// recoverable: a stored-but-unnotified submission is still a success from
/// the caller's point of view.
pub enum SubmitOutcome {
    Delivered(ContactSubmission),
    Stored {
        submission: ContactSubmission,
        email_error: String,
    },
}

/// Store the submission, then attempt the admin notification. The insert is
/// the only fatal step; once the row is durable it is never rolled back,
/// whatever happens to the email.
pub async fn run(state: &SharedState, form: &ContactForm) -> Result<SubmitOutcome, sqlx::Error> {
    let submission = db::submissions::create(&state.pool, form).await?;
    tracing::info!(id = submission.id, "Contact submission stored");

    match state.mailer.send_submission_notice(form).await {
        Ok(ack) => {
            tracing::info!("Notification email sent: {ack}");
            Ok(SubmitOutcome::Delivered(submission))
        }
        Err(e) => {
            tracing::error!("Notification email failed: {e}");
            Ok(SubmitOutcome::Stored {
                submission,
                email_error: e,
            })
        }
    }
}

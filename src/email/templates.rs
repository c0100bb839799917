use crate::submission::ContactForm;

pub fn render_submission_notice(form: &ContactForm) -> String {
    // Phone gets a placeholder in the email only; storage keeps whatever
    // the client sent, empty string included.
    let phone = match form.phone.as_deref() {
        Some(p) if !p.is_empty() => p,
        _ => "Not provided",
    };

    let name = form.full_name.as_deref().unwrap_or_default();
    let email = form.email.as_deref().unwrap_or_default();
    let contact_method = form.contact_method.as_deref().unwrap_or_default();
    let plan = form.plan.as_deref().unwrap_or_default();
    let description = form.description.as_deref().unwrap_or_default();
    let deadline = form.deadline.as_deref().unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"></head>
<body style="font-family: sans-serif; max-width: 600px; margin: 0 auto; padding: 20px;">
    <h2>New Project Request</h2>
    <p><strong>Name:</strong> {name}</p>
    <p><strong>Email:</strong> {email}</p>
    <p><strong>Phone:</strong> {phone}</p>
    <p><strong>Preferred Contact:</strong> {contact_method}</p>
    <p><strong>Selected Plan:</strong> {plan}</p>
    <p><strong>Project Description:</strong> {description}</p>
    <p><strong>Deadline:</strong> {deadline}</p>
</body>
</html>"#
    )
}

pub fn render_smtp_test() -> String {
    r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"></head>
<body style="font-family: sans-serif; max-width: 600px; margin: 0 auto; padding: 20px;">
    <h1>This is a test email</h1>
    <p>If you receive this, the email configuration is working.</p>
</body>
</html>"#
        .to_string()
}

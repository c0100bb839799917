pub mod submission;

pub use submission::ContactSubmission;

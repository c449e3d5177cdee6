mod budget_range;
mod contact_submission;
mod lead_email;
mod lead_name;
mod newsletter_submission;
mod project_message;

pub use budget_range::BudgetRange;
pub use contact_submission::ContactSubmission;
pub use lead_email::LeadEmail;
pub use lead_name::LeadName;
pub use newsletter_submission::NewsletterSubmission;
pub use project_message::ProjectMessage;

use crate::domain::LeadEmail;
use crate::forms::NewsletterFormData;

#[derive(Debug)]
pub struct NewsletterSubmission {
    pub email: LeadEmail,
}

impl TryFrom<NewsletterFormData> for NewsletterSubmission {
    type Error = String;

    fn try_from(value: NewsletterFormData) -> Result<Self, Self::Error> {
        let email = LeadEmail::parse(value.email)?;
        Ok(Self { email })
    }
}

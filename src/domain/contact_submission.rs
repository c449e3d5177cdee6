use crate::domain::{BudgetRange, LeadEmail, LeadName, ProjectMessage};
use crate::forms::ContactFormData;

#[derive(Debug)]
pub struct ContactSubmission {
    pub name: LeadName,
    pub email: LeadEmail,
    pub phone: String,
    pub budget: BudgetRange,
    pub message: ProjectMessage,
}

impl TryFrom<ContactFormData> for ContactSubmission {
    type Error = String;

    fn try_from(value: ContactFormData) -> Result<Self, Self::Error> {
        let name = LeadName::parse(value.name)?;
        let email = LeadEmail::parse(value.email)?;
        let budget = BudgetRange::parse(&value.budget)?;
        let message = ProjectMessage::parse(value.message)?;
        Ok(Self {
            name,
            email,
            phone: value.phone.trim().to_string(),
            budget,
            message,
        })
    }
}

#[derive(Debug, Clone)]
pub struct LeadName(String);

impl LeadName {
    /// Any non-blank name is accepted as typed, minus surrounding whitespace.
    pub fn parse(s: String) -> Result<LeadName, String> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            Err("The name is empty or whitespace".to_string())
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }

    /// Splits on the first whitespace character.
    /// "Jane Doe Smith" becomes ("Jane", "Doe Smith"), "Jane" becomes ("Jane", "").
    pub fn first_and_last(&self) -> (&str, &str) {
        match self.0.split_once(char::is_whitespace) {
            Some((first, rest)) => (first, rest.trim_start()),
            None => (self.0.as_str(), ""),
        }
    }
}

impl AsRef<str> for LeadName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LeadName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

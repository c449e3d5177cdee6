#[derive(Debug, Clone)]
pub struct ProjectMessage(String);

impl ProjectMessage {
    pub fn parse(s: String) -> Result<ProjectMessage, String> {
        if s.trim().is_empty() {
            Err("The project message is empty".to_string())
        } else {
            Ok(Self(s))
        }
    }
}

impl AsRef<str> for ProjectMessage {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

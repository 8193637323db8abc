//! Contact form: field state, validation and the outgoing mailto link

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interest {
    #[default]
    Products,
    Services,
    Collaboration,
    Other,
}

impl Interest {
    pub const ALL: [Interest; 4] = [
        Interest::Products,
        Interest::Services,
        Interest::Collaboration,
        Interest::Other,
    ];

    /// Short key used in the mail subject
    pub fn key(self) -> &'static str {
        match self {
            Interest::Products => "products",
            Interest::Services => "services",
            Interest::Collaboration => "collaboration",
            Interest::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Interest::Products => "I'm interested in your Products",
            Interest::Services => "I want to hire the Lab (Services)",
            Interest::Collaboration => "Collaboration / Partnership",
            Interest::Other => "Other Inquiry",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("please fill in the {0} field")]
    MissingField(&'static str),
}

/// Result of the last submission, shown as a notice under the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Sent,
    Failed(String),
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub interest: Interest,
    pub message: String,
    pub notice: Option<Notice>,
}

impl ContactForm {
    /// Validate the fields and build the `mailto:` link that carries them
    pub fn mailto(&self, recipient: &str) -> Result<String, ContactError> {
        let name = self.name.trim();
        let message = self.message.trim();

        if name.is_empty() {
            return Err(ContactError::MissingField("name"));
        }
        if message.is_empty() {
            return Err(ContactError::MissingField("message"));
        }

        let subject = format!("Inquiry regarding {}", self.interest.key());
        let body = format!("Hi, my name is {name}.\n\n{message}");

        Ok(format!(
            "mailto:{recipient}?subject={}&body={}",
            urlencoding::encode(&subject),
            urlencoding::encode(&body)
        ))
    }

    /// Hand the message to `send` and record the outcome
    pub fn submit(&mut self, recipient: &str, send: impl FnOnce(String)) {
        match self.mailto(recipient) {
            Ok(url) => {
                log::info!("Contact form submitted ({})", self.interest.key());
                send(url);
                self.notice = Some(Notice::Sent);
            }
            Err(e) => {
                log::debug!("Contact form rejected: {}", e);
                self.notice = Some(Notice::Failed(e.to_string()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            interest: Interest::Services,
            message: "Need a driver & a UI".to_string(),
            notice: None,
        }
    }

    #[test]
    fn test_mailto_is_encoded() {
        let url = filled().mailto("studio@example.com").unwrap();

        assert!(url.starts_with("mailto:studio@example.com?subject="));
        assert!(url.contains("subject=Inquiry%20regarding%20services"));
        assert!(url.contains("body=Hi%2C%20my%20name%20is%20Ada.%0A%0ANeed%20a%20driver%20%26%20a%20UI"));
    }

    #[test]
    fn test_missing_fields() {
        let mut form = filled();
        form.name = "   ".to_string();
        assert_eq!(form.mailto("x@y.z"), Err(ContactError::MissingField("name")));

        let mut form = filled();
        form.message.clear();
        assert_eq!(form.mailto("x@y.z"), Err(ContactError::MissingField("message")));
    }

    #[test]
    fn test_submit_reports_outcome() {
        let mut form = filled();
        let mut sent = None;
        form.submit("x@y.z", |url| sent = Some(url));
        assert!(sent.is_some());
        assert_eq!(form.notice, Some(Notice::Sent));

        let mut form = ContactForm::default();
        let mut called = false;
        form.submit("x@y.z", |_| called = true);
        assert!(!called);
        assert!(matches!(form.notice, Some(Notice::Failed(_))));
    }
}

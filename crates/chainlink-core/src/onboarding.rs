//! Helpers behind the sign-up and company verification forms.
//!
//! Nothing here is submitted anywhere; documents are tracked by name only.

use serde::Serialize;

/// Maximum number of verification documents a company can attach.
pub const MAX_VERIFICATION_DOCUMENTS: usize = 4;

/// Accepted document extensions, compared case-insensitively.
pub const ACCEPTED_DOCUMENT_EXTENSIONS: [&str; 6] = ["pdf", "jpg", "jpeg", "png", "doc", "docx"];

/// Strength band shown under the password field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordStrength {
    Weak,
    Fair,
    Strong,
}

impl PasswordStrength {
    #[must_use]
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=2 => PasswordStrength::Weak,
            3 => PasswordStrength::Fair,
            _ => PasswordStrength::Strong,
        }
    }
}

impl std::fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PasswordStrength::Weak => write!(f, "weak"),
            PasswordStrength::Fair => write!(f, "fair"),
            PasswordStrength::Strong => write!(f, "strong"),
        }
    }
}

/// Score a password from 0 to 5: one point each for length of at least 8,
/// an uppercase letter, a lowercase letter, a digit, and a symbol (anything
/// outside ASCII letters and digits).
#[must_use]
pub fn password_strength(password: &str) -> u8 {
    let checks = [
        password.chars().count() >= 8,
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ];
    checks.into_iter().map(u8::from).sum()
}

/// Returns `true` when a confirmation has been typed and differs from
/// `password`. An empty confirmation is not reported as a mismatch.
#[must_use]
pub fn passwords_mismatch(password: &str, confirmation: &str) -> bool {
    !confirmation.is_empty() && password != confirmation
}

/// Locally selected verification documents, capped at
/// [`MAX_VERIFICATION_DOCUMENTS`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VerificationDocuments {
    files: Vec<String>,
}

impl VerificationDocuments {
    #[must_use]
    pub fn files(&self) -> &[String] {
        &self.files
    }

    /// Append `names`, keeping at most [`MAX_VERIFICATION_DOCUMENTS`] in total.
    ///
    /// Returns the names that were rejected for an unsupported extension.
    /// Accepted names past the cap are dropped silently.
    pub fn add<I, S>(&mut self, names: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut rejected = Vec::new();
        for name in names.into_iter().map(Into::into) {
            if !is_accepted_document(&name) {
                rejected.push(name);
            } else if self.files.len() < MAX_VERIFICATION_DOCUMENTS {
                self.files.push(name);
            }
        }
        rejected
    }

    /// Remove the document at `index`; out-of-range indexes are ignored.
    pub fn remove(&mut self, index: usize) -> Option<String> {
        (index < self.files.len()).then(|| self.files.remove(index))
    }
}

fn is_accepted_document(name: &str) -> bool {
    name.rsplit_once('.').is_some_and(|(_, ext)| {
        ACCEPTED_DOCUMENT_EXTENSIONS
            .iter()
            .any(|accepted| ext.eq_ignore_ascii_case(accepted))
    })
}

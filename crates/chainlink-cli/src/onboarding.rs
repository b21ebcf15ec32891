//! Sign-up form helpers exposed as commands.

use chainlink_core::{
    password_strength, passwords_mismatch, PasswordStrength, VerificationDocuments,
};

pub(crate) fn run_password_strength(password: &str, confirm: Option<&str>) {
    let score = password_strength(password);
    println!("{score}/5 ({})", PasswordStrength::from_score(score));
    if confirm.is_some_and(|c| passwords_mismatch(password, c)) {
        println!("passwords do not match");
    }
}

/// Run `files` through the verification upload rules and print the outcome.
pub(crate) fn run_check_documents(files: Vec<String>) {
    let mut documents = VerificationDocuments::default();
    let submitted = files.len();
    let rejected = documents.add(files);

    for name in documents.files() {
        println!("accepted  {name}");
    }
    for name in &rejected {
        println!("rejected  {name} (unsupported file type)");
    }

    let dropped = submitted - documents.files().len() - rejected.len();
    if dropped > 0 {
        println!(
            "{dropped} file(s) ignored; at most {} documents can be attached",
            chainlink_core::onboarding::MAX_VERIFICATION_DOCUMENTS
        );
    }
}

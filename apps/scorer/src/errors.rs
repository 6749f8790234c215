use thiserror::Error;

/// Application-level error type.
///
/// The `Display` impl is the user-facing message, verbatim. Anything the user
/// should not see (transport detail, server bodies) travels in `RemoteScoring`'s
/// `detail` field and is logged at the call site, never displayed.
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("Please upload both resume and job description files.")]
    MissingFiles,

    #[error("Each file must be less than 5MB.")]
    FileTooLarge,

    #[error("Allowed file types: PDF, DOC, DOCX, TXT")]
    UnsupportedType,

    #[error("Failed to score resume. Please try again.")]
    RemoteScoring { detail: String },
}

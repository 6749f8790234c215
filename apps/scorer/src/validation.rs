//! Pre-flight upload validation. These checks are the only gate between the
//! form and the network: a request goes out if and only if both slots pass.

use crate::errors::ScoreError;
use crate::files::SelectedFile;

/// Per-file size ceiling: 5 MiB.
pub const MAX_FILE_BYTES: u64 = 5 * 1024 * 1024;

/// MIME types the scoring backend accepts.
pub const ALLOWED_MIME_TYPES: [&str; 4] = [
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "text/plain",
];

/// Validates both slots, first failing check wins:
/// presence, then size, then MIME type. On success, returns the two files so
/// the caller never re-unwraps the slots it just proved present.
pub fn validate_pair<'a>(
    resume: Option<&'a SelectedFile>,
    job_desc: Option<&'a SelectedFile>,
) -> Result<(&'a SelectedFile, &'a SelectedFile), ScoreError> {
    let (Some(resume), Some(job_desc)) = (resume, job_desc) else {
        return Err(ScoreError::MissingFiles);
    };

    if resume.size() > MAX_FILE_BYTES || job_desc.size() > MAX_FILE_BYTES {
        return Err(ScoreError::FileTooLarge);
    }

    if !is_allowed_type(resume.content_type()) || !is_allowed_type(job_desc.content_type()) {
        return Err(ScoreError::UnsupportedType);
    }

    Ok((resume, job_desc))
}

fn is_allowed_type(content_type: &str) -> bool {
    ALLOWED_MIME_TYPES.contains(&content_type)
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use super::*;

    fn pdf(size: usize) -> SelectedFile {
        SelectedFile::new("resume.pdf", "application/pdf", Bytes::from(vec![0u8; size]))
    }

    fn txt(size: usize) -> SelectedFile {
        SelectedFile::new("jd.txt", "text/plain", Bytes::from(vec![0u8; size]))
    }

    #[test]
    fn test_both_present_and_valid_passes() {
        let resume = pdf(1024);
        let jd = txt(1024);
        let (r, j) = validate_pair(Some(&resume), Some(&jd)).unwrap();
        assert_eq!(r.name(), "resume.pdf");
        assert_eq!(j.name(), "jd.txt");
    }

    #[test]
    fn test_missing_resume_fails() {
        let jd = txt(1024);
        let err = validate_pair(None, Some(&jd)).unwrap_err();
        assert!(matches!(err, ScoreError::MissingFiles));
    }

    #[test]
    fn test_missing_job_description_fails() {
        let resume = pdf(1024);
        let err = validate_pair(Some(&resume), None).unwrap_err();
        assert!(matches!(err, ScoreError::MissingFiles));
    }

    #[test]
    fn test_both_missing_fails() {
        let err = validate_pair(None, None).unwrap_err();
        assert!(matches!(err, ScoreError::MissingFiles));
    }

    #[test]
    fn test_exactly_five_mib_passes() {
        let resume = pdf(MAX_FILE_BYTES as usize);
        let jd = txt(1024);
        assert!(validate_pair(Some(&resume), Some(&jd)).is_ok());
    }

    #[test]
    fn test_one_byte_over_fails() {
        let resume = pdf(MAX_FILE_BYTES as usize + 1);
        let jd = txt(1024);
        let err = validate_pair(Some(&resume), Some(&jd)).unwrap_err();
        assert!(matches!(err, ScoreError::FileTooLarge));
    }

    #[test]
    fn test_oversized_job_description_fails() {
        let resume = pdf(1024);
        let jd = txt(6 * 1024 * 1024);
        let err = validate_pair(Some(&resume), Some(&jd)).unwrap_err();
        assert!(matches!(err, ScoreError::FileTooLarge));
    }

    #[test]
    fn test_size_checked_before_type() {
        // Oversized AND wrong type: the size error wins.
        let resume = SelectedFile::new(
            "photo.png",
            "image/png",
            Bytes::from(vec![0u8; 6 * 1024 * 1024]),
        );
        let jd = txt(1024);
        let err = validate_pair(Some(&resume), Some(&jd)).unwrap_err();
        assert!(matches!(err, ScoreError::FileTooLarge));
    }

    #[test]
    fn test_presence_checked_before_size() {
        let jd = txt(6 * 1024 * 1024);
        let err = validate_pair(None, Some(&jd)).unwrap_err();
        assert!(matches!(err, ScoreError::MissingFiles));
    }

    #[test]
    fn test_unsupported_type_fails() {
        let resume = SelectedFile::new("photo.png", "image/png", Bytes::from_static(b"png"));
        let jd = txt(1024);
        let err = validate_pair(Some(&resume), Some(&jd)).unwrap_err();
        assert!(matches!(err, ScoreError::UnsupportedType));
    }

    #[test]
    fn test_all_four_allowed_types_pass() {
        for content_type in ALLOWED_MIME_TYPES {
            let resume = SelectedFile::new("resume", content_type, Bytes::from_static(b"x"));
            let jd = txt(16);
            assert!(
                validate_pair(Some(&resume), Some(&jd)).is_ok(),
                "rejected {content_type}"
            );
        }
    }

    #[test]
    fn test_mime_match_is_exact() {
        // No parameter handling, no prefix matching.
        let resume = SelectedFile::new(
            "resume.pdf",
            "application/pdf; charset=binary",
            Bytes::from_static(b"x"),
        );
        let jd = txt(16);
        let err = validate_pair(Some(&resume), Some(&jd)).unwrap_err();
        assert!(matches!(err, ScoreError::UnsupportedType));
    }
}

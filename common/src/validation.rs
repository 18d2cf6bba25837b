//! Form checks that run before any request is sent.

use std::sync::LazyLock;

use regex::Regex;

use crate::{course::CreateCourseRequest, user::{LoginRequest, Role, SignupRequest}};


pub const MIN_PASSWORD_LEN: usize = 6;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    EmptySelection,
    MissingFields,
    PasswordMismatch,
    PasswordTooShort { min: usize },
    InvalidEmail,
    ProfessorSignupRequiresApproval,
    MissingUploadFile,
    NotAPdf,
    MissingDeadline,
    MissingCourseName,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptySelection => write!(f, "Select at least one page first."),
            Self::MissingFields => write!(f, "Please fill in every field."),
            Self::PasswordMismatch => write!(f, "Passwords do not match."),
            Self::PasswordTooShort { min } => write!(f, "Password must be at least {min} characters."),
            Self::InvalidEmail => write!(f, "Email address is not valid."),
            Self::ProfessorSignupRequiresApproval => write!(f, "Professor accounts require prior approval."),
            Self::MissingUploadFile => write!(f, "Choose a file to upload."),
            Self::NotAPdf => write!(f, "Only PDF files can be uploaded."),
            Self::MissingDeadline => write!(f, "Pick a deadline first."),
            Self::MissingCourseName => write!(f, "Course name is required."),
        }
    }
}

impl std::error::Error for ValidationError {}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn validate_login(email: &str, password: &str) -> Result<LoginRequest, ValidationError> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(ValidationError::MissingFields);
    }
    Ok(LoginRequest { email: email.trim().to_string(), password: password.to_string() })
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SignupForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub name: String,
    pub role: Role,
}

/// Checks run in the same order the user reads the form.
pub fn validate_signup(form: &SignupForm) -> Result<SignupRequest, ValidationError> {
    if form.role == Role::Professor {
        return Err(ValidationError::ProfessorSignupRequiresApproval);
    }
    if form.email.trim().is_empty() || form.password.is_empty() || form.name.trim().is_empty() {
        return Err(ValidationError::MissingFields);
    }
    if form.password != form.confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }
    if form.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort { min: MIN_PASSWORD_LEN });
    }
    if !is_valid_email(form.email.trim()) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(SignupRequest {
        email: form.email.trim().to_string(),
        password: form.password.clone(),
        name: form.name.trim().to_string(),
        role: form.role,
    })
}

pub fn validate_course_form(course_name: &str, year: u32, semester: u32) -> Result<CreateCourseRequest, ValidationError> {
    let course_name = course_name.trim();
    if course_name.is_empty() {
        return Err(ValidationError::MissingCourseName);
    }
    Ok(CreateCourseRequest { course_name: course_name.to_string(), year, semester })
}

pub fn validate_upload_file_name(file_name: Option<&str>) -> Result<(), ValidationError> {
    let Some(file_name) = file_name else {
        return Err(ValidationError::MissingUploadFile);
    };
    if !file_name.to_ascii_lowercase().ends_with(".pdf") {
        return Err(ValidationError::NotAPdf);
    }
    Ok(())
}

pub fn validate_deadline(deadline: &str) -> Result<String, ValidationError> {
    let deadline = deadline.trim();
    if deadline.is_empty() {
        return Err(ValidationError::MissingDeadline);
    }
    Ok(deadline.to_string())
}


#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> SignupForm {
        SignupForm {
            email: "hong@student.ac.kr".to_string(),
            password: "student1".to_string(),
            confirm_password: "student1".to_string(),
            name: "Hong".to_string(),
            role: Role::Student,
        }
    }

    #[test]
    fn valid_signup_passes() {
        let request = validate_signup(&form()).unwrap();
        assert_eq!(request.role, Role::Student);
        assert_eq!(request.email, "hong@student.ac.kr");
    }

    #[test]
    fn mismatched_passwords_are_caught() {
        let mut f = form();
        f.confirm_password = "student2".to_string();
        assert_eq!(validate_signup(&f), Err(ValidationError::PasswordMismatch));
    }

    #[test]
    fn short_password_is_caught() {
        let mut f = form();
        f.password = "abc".to_string();
        f.confirm_password = "abc".to_string();
        assert_eq!(validate_signup(&f), Err(ValidationError::PasswordTooShort { min: 6 }));
    }

    #[test]
    fn malformed_email_is_caught() {
        for email in ["hong", "hong@", "hong@student", "ho ng@student.ac.kr", "@student.ac.kr"] {
            let mut f = form();
            f.email = email.to_string();
            assert_eq!(validate_signup(&f), Err(ValidationError::InvalidEmail), "{email}");
        }
    }

    #[test]
    fn professor_signup_is_blocked_before_other_checks() {
        let f = SignupForm { role: Role::Professor, ..Default::default() };
        assert_eq!(validate_signup(&f), Err(ValidationError::ProfessorSignupRequiresApproval));
    }

    #[test]
    fn upload_requires_a_pdf() {
        assert_eq!(validate_upload_file_name(None), Err(ValidationError::MissingUploadFile));
        assert_eq!(validate_upload_file_name(Some("notes.docx")), Err(ValidationError::NotAPdf));
        assert_eq!(validate_upload_file_name(Some("Notes.PDF")), Ok(()));
    }

    #[test]
    fn blank_course_name_is_rejected() {
        assert_eq!(validate_course_form("   ", 2025, 1), Err(ValidationError::MissingCourseName));
        assert_eq!(validate_course_form(" Databases ", 2025, 2).unwrap().course_name, "Databases");
    }
}

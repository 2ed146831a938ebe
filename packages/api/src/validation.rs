//! Client-side form validation.
//!
//! Each form keeps the raw text of its inputs. `validate()` trims a copy,
//! runs the `validator` rules on it, and either produces the payload the
//! matching server function expects or a [`FieldErrors`] map for inline
//! messages.

use std::collections::BTreeMap;

use validator::{Validate, ValidationErrors};

use crate::blob::ExternalBlob;
use crate::models::{
    AnnouncementCreateData, AnnouncementPriority, BookCreateData, DigitalResourceCreateData,
    Time, UserProfile, UserRole,
};

/// First error message per field, keyed by the form's field name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Record `message` unless the field already has one.
    pub fn insert(&mut self, field: &str, message: &str) {
        self.0
            .entry(field.to_string())
            .or_insert_with(|| message.to_string());
    }

    fn into_result<T>(self, ok: impl FnOnce() -> T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(ok())
        } else {
            Err(self)
        }
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut out = FieldErrors::default();
        for (field, errs) in errors.field_errors() {
            // A blank input trips both `length` and the format check; the
            // "required" message wins.
            let first = errs
                .iter()
                .find(|e| e.code == "length")
                .or_else(|| errs.first());
            if let Some(err) = first {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string());
                out.insert(&field.to_string(), &message);
            }
        }
        out
    }
}

fn check(form: &impl Validate) -> FieldErrors {
    form.validate().err().map(FieldErrors::from).unwrap_or_default()
}

#[derive(Clone, Debug, Default, PartialEq, Validate)]
pub struct BookForm {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Author is required"))]
    pub author: String,
    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,
    #[validate(length(min = 1, message = "ISBN is required"))]
    pub isbn: String,
    pub description: String,
    pub total_copies: String,
    pub file: Option<ExternalBlob>,
}

impl BookForm {
    pub fn from_book(book: &crate::models::Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            category: book.category.clone(),
            isbn: book.isbn.clone(),
            description: book.description.clone(),
            total_copies: book.total_copies.to_string(),
            file: book.file.clone(),
        }
    }

    fn trimmed(&self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            author: self.author.trim().to_string(),
            category: self.category.trim().to_string(),
            isbn: self.isbn.trim().to_string(),
            description: self.description.trim().to_string(),
            total_copies: self.total_copies.trim().to_string(),
            file: self.file.clone(),
        }
    }

    pub fn validate_input(&self) -> Result<BookCreateData, FieldErrors> {
        let form = self.trimmed();
        let mut errors = check(&form);
        let copies = form.total_copies.parse::<u64>().ok().filter(|n| *n >= 1);
        if copies.is_none() {
            errors.insert("total_copies", "Must be at least 1");
        }
        errors.into_result(|| BookCreateData {
            title: form.title,
            author: form.author,
            isbn: form.isbn,
            category: form.category,
            description: form.description,
            total_copies: copies.unwrap_or(1),
            file: form.file,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Validate)]
pub struct ResourceForm {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[validate(
        length(min = 1, message = "URL is required"),
        url(message = "Enter a valid URL")
    )]
    pub url: String,
    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,
}

impl ResourceForm {
    pub fn from_resource(resource: &crate::models::DigitalResource) -> Self {
        Self {
            title: resource.title.clone(),
            description: resource.description.clone(),
            url: resource.url.clone(),
            category: resource.category.clone(),
        }
    }

    pub fn validate_input(&self) -> Result<DigitalResourceCreateData, FieldErrors> {
        let form = Self {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            url: self.url.trim().to_string(),
            category: self.category.trim().to_string(),
        };
        check(&form).into_result(|| DigitalResourceCreateData {
            title: form.title,
            description: form.description,
            url: form.url,
            category: form.category,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Validate)]
pub struct AnnouncementForm {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Body is required"))]
    pub body: String,
    pub priority: AnnouncementPriority,
    /// Raw `<input type="date">` value.
    #[validate(length(min = 1, message = "Publish date is required"))]
    pub publish_date: String,
}

impl AnnouncementForm {
    pub fn from_announcement(a: &crate::models::Announcement) -> Self {
        Self {
            title: a.title.clone(),
            body: a.body.clone(),
            priority: a.priority,
            publish_date: a.publish_date.to_date_input(),
        }
    }

    pub fn validate_input(&self) -> Result<AnnouncementCreateData, FieldErrors> {
        let form = Self {
            title: self.title.trim().to_string(),
            body: self.body.trim().to_string(),
            priority: self.priority,
            publish_date: self.publish_date.trim().to_string(),
        };
        let mut errors = check(&form);
        let publish_date = Time::from_date_input(&form.publish_date);
        if publish_date.is_none() {
            errors.insert("publish_date", "Enter a valid date");
        }
        errors.into_result(|| AnnouncementCreateData {
            title: form.title,
            body: form.body,
            priority: form.priority,
            publish_date: publish_date.unwrap_or_default(),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Validate)]
pub struct ProfileForm {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Invalid email address")
    )]
    pub email: String,
}

impl ProfileForm {
    /// New profiles always start as regular members; only an admin can
    /// promote them afterwards.
    pub fn validate_input(&self, now: Time) -> Result<UserProfile, FieldErrors> {
        let form = Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
        };
        check(&form).into_result(|| UserProfile {
            name: form.name,
            email: form.email,
            role: UserRole::User,
            joined_at: now,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book_form() -> BookForm {
        BookForm {
            title: "  Dune ".to_string(),
            author: "Frank Herbert".to_string(),
            category: "Fiction".to_string(),
            isbn: "9780441013593".to_string(),
            description: String::new(),
            total_copies: "3".to_string(),
            file: None,
        }
    }

    #[test]
    fn test_book_form_trims_and_parses() {
        let data = book_form().validate_input().unwrap();
        assert_eq!(data.title, "Dune");
        assert_eq!(data.total_copies, 3);
        assert_eq!(data.description, "");
    }

    #[test]
    fn test_book_form_required_fields() {
        let form = BookForm {
            title: "   ".to_string(),
            author: String::new(),
            ..book_form()
        };
        let errors = form.validate_input().unwrap_err();
        assert_eq!(errors.get("title"), Some("Title is required"));
        assert_eq!(errors.get("author"), Some("Author is required"));
        assert_eq!(errors.get("isbn"), None);
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_book_form_copies_at_least_one() {
        for bad in ["0", "", "-2", "two"] {
            let form = BookForm {
                total_copies: bad.to_string(),
                ..book_form()
            };
            let errors = form.validate_input().unwrap_err();
            assert_eq!(errors.get("total_copies"), Some("Must be at least 1"), "{bad}");
        }
    }

    #[test]
    fn test_resource_form_url() {
        let mut form = ResourceForm {
            title: "JSTOR".to_string(),
            description: "Journal archive".to_string(),
            url: "jstor dot org".to_string(),
            category: "Journals".to_string(),
        };
        assert_eq!(
            form.validate_input().unwrap_err().get("url"),
            Some("Enter a valid URL")
        );

        form.url = String::new();
        assert_eq!(
            form.validate_input().unwrap_err().get("url"),
            Some("URL is required")
        );

        form.url = " https://www.jstor.org ".to_string();
        let data = form.validate_input().unwrap();
        assert_eq!(data.url, "https://www.jstor.org");
    }

    #[test]
    fn test_announcement_form() {
        let form = AnnouncementForm {
            title: "Closed Friday".to_string(),
            body: "Library closed for maintenance.".to_string(),
            priority: AnnouncementPriority::Urgent,
            publish_date: "2026-10-16".to_string(),
        };
        let data = form.validate_input().unwrap();
        assert_eq!(data.publish_date.to_date_input(), "2026-10-16");
        assert_eq!(data.priority, AnnouncementPriority::Urgent);

        let missing = AnnouncementForm {
            publish_date: String::new(),
            ..form
        };
        let errors = missing.validate_input().unwrap_err();
        assert_eq!(errors.get("publish_date"), Some("Publish date is required"));
    }

    #[test]
    fn test_profile_form() {
        let form = ProfileForm {
            name: "Asha".to_string(),
            email: "not-an-email".to_string(),
        };
        assert_eq!(
            form.validate_input(Time(1)).unwrap_err().get("email"),
            Some("Invalid email address")
        );

        let blank = ProfileForm::default();
        let errors = blank.validate_input(Time(1)).unwrap_err();
        assert_eq!(errors.get("name"), Some("Name is required"));
        assert_eq!(errors.get("email"), Some("Email is required"));

        let ok = ProfileForm {
            name: " Asha ".to_string(),
            email: "asha@vemu.ac.in".to_string(),
        };
        let profile = ok.validate_input(Time(7)).unwrap();
        assert_eq!(profile.name, "Asha");
        assert_eq!(profile.role, UserRole::User);
        assert_eq!(profile.joined_at, Time(7));
    }
}

use crate::errors::{DirectoryError, FieldError, Result};
use crate::profile::{Company, Profile, ProfileId};

/// A transient, per-record editing context.
///
/// The session snapshots the record at `begin_edit` time and exposes
/// the five editable fields pre-populated with its current values.
/// It is not itself part of the collection: the snapshot can go stale
/// if the record is deleted while the session is open, which the
/// state manager absorbs at commit time.
#[derive(Debug, Clone)]
pub struct EditSession {
    original: Profile,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub company_name: String,
}

impl EditSession {
    pub fn new(profile: &Profile) -> Self {
        Self {
            original: profile.clone(),
            name: profile.name.clone(),
            email: profile.email.clone(),
            phone: profile.phone.clone(),
            website: profile.website.clone(),
            company_name: profile.company.name.clone(),
        }
    }

    /// Id of the record this session was opened for.
    pub fn id(&self) -> ProfileId {
        self.original.id
    }

    /// Check every editable field, reporting all failures at once.
    pub fn validate(&self) -> std::result::Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(FieldError::new("name", "Please enter the full name"));
        }
        if self.email.trim().is_empty() {
            errors.push(FieldError::new("email", "Please enter the email"));
        } else if !valid_email(self.email.trim()) {
            errors.push(FieldError::new("email", "Please enter a valid email"));
        }
        if self.phone.trim().is_empty() {
            errors.push(FieldError::new(
                "phone",
                "Please enter the phone number",
            ));
        }
        if self.website.trim().is_empty() {
            errors.push(FieldError::new("website", "Please enter the website"));
        }
        if self.company_name.trim().is_empty() {
            errors.push(FieldError::new(
                "company_name",
                "Please enter the company name",
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Produce the merged record: the editable fields replaced with
    /// their validated (trimmed) values, everything else carried over
    /// from the snapshot unchanged.
    ///
    /// On validation failure the session stays usable; fields can be
    /// corrected and submitted again.
    pub fn submit(&self) -> Result<Profile> {
        self.validate().map_err(DirectoryError::Validation)?;

        let mut updated = self.original.clone();
        updated.name = self.name.trim().to_string();
        updated.email = self.email.trim().to_string();
        updated.phone = self.phone.trim().to_string();
        updated.website = self.website.trim().to_string();
        updated.company = Company {
            name: self.company_name.trim().to_string(),
        };
        Ok(updated)
    }
}

/// Local-part "@" domain, with at least one interior dot in the domain.
fn valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

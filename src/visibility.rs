//! Access-control contracts expressed with module privacy.
//!
//! - [`PrivateUser`]: fields visible only inside this module.
//! - [`ReadonlyUser`]: readable through getters, never writable after construction.
//! - [`ProtectedUser`]: fields `pub(crate)`, so records built on top of it in this
//!   crate (like [`StaffUser`]) can read them while other crates cannot.
//!
//! ```compile_fail
//! use class_patterns::PrivateUser;
//!
//! let user = PrivateUser::new("Nathan", "123", "test@mail.com");
//! let _ = user.name;
//! ```
//!
//! ```compile_fail
//! use class_patterns::ReadonlyUser;
//!
//! let mut user = ReadonlyUser::new("Nathan", "123", "test@mail.com");
//! user.name = "Jardel".to_string();
//! ```
//!
//! ```compile_fail
//! use class_patterns::ProtectedUser;
//!
//! let user = ProtectedUser::new("Nathan", "123", "test@mail.com");
//! let _ = user.name;
//! ```

use crate::capability::{name_email_line, LogInfo};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrivateUser {
    name: String,
    password: String,
    email: String,
}

impl PrivateUser {
    pub fn new(
        name: impl Into<String>,
        password: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        PrivateUser {
            name: name.into(),
            password: password.into(),
            email: email.into(),
        }
    }

    /// Checks a candidate password without exposing the stored one.
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password == candidate
    }
}

impl LogInfo for PrivateUser {
    fn info_line(&self) -> String {
        name_email_line(&self.name, &self.email)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadonlyUser {
    name: String,
    password: String,
    email: String,
}

impl ReadonlyUser {
    pub fn new(
        name: impl Into<String>,
        password: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        ReadonlyUser {
            name: name.into(),
            password: password.into(),
            email: email.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtectedUser {
    pub(crate) name: String,
    pub(crate) password: String,
    pub(crate) email: String,
}

impl ProtectedUser {
    pub fn new(
        name: impl Into<String>,
        password: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        ProtectedUser {
            name: name.into(),
            password: password.into(),
            email: email.into(),
        }
    }
}

impl LogInfo for ProtectedUser {
    fn info_line(&self) -> String {
        name_email_line(&self.name, &self.email)
    }
}

/// Builds on [`ProtectedUser`] and reads its crate-visible fields directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaffUser {
    base: ProtectedUser,
    role: String,
}

impl StaffUser {
    pub fn new(base: ProtectedUser, role: impl Into<String>) -> Self {
        StaffUser {
            base,
            role: role.into(),
        }
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    /// Email domain, taken from the protected `email` field.
    pub fn email_domain(&self) -> Option<&str> {
        self.base.email.split_once('@').map(|(_, domain)| domain)
    }
}

impl LogInfo for StaffUser {
    fn info_line(&self) -> String {
        format!("{} - Role: {}", self.base.info_line(), self.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_private_user_logs_private_fields() {
        let user = PrivateUser::new("Nathan", "123", "test@mail.com");
        assert_eq!(user.log_info(), "Name: Nathan - Email: test@mail.com");
        assert!(user.password_matches("123"));
        assert!(!user.password_matches("1234"));
    }

    #[test]
    fn test_readonly_getters() {
        let user = ReadonlyUser::new("Nathan", "123", "test@mail.com");
        assert_eq!(user.name(), "Nathan");
        assert_eq!(user.password(), "123");
        assert_eq!(user.email(), "test@mail.com");
    }

    #[test]
    fn test_protected_fields_visible_in_crate() {
        let user = ProtectedUser::new("Nathan", "123", "test@mail.com");
        assert_eq!(user.name, "Nathan");
        assert_eq!(user.password, "123");
        assert_eq!(user.log_info(), "Name: Nathan - Email: test@mail.com");
    }

    #[test]
    fn test_staff_user_reads_protected_base() {
        let staff = StaffUser::new(
            ProtectedUser::new("Nathan", "123", "test@mail.com"),
            "admin",
        );
        assert_eq!(staff.role(), "admin");
        assert_eq!(staff.email_domain(), Some("mail.com"));
        assert_eq!(
            staff.log_info(),
            "Name: Nathan - Email: test@mail.com - Role: admin"
        );
    }

    #[test]
    fn test_staff_user_without_domain() {
        let staff = StaffUser::new(ProtectedUser::new("n", "p", "no-at-sign"), "guest");
        assert_eq!(staff.email_domain(), None);
    }
}

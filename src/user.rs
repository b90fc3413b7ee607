//! Plain user records: public fields, a copying constructor, and an info method.

use crate::capability::{name_email_line, LogInfo};

/// Property bag with public fields. Unassigned fields read as empty strings.
///
/// ```rust
/// use class_patterns::User;
///
/// let mut client = User::default();
/// client.name = "Nathan".into();
/// client.password = "123".into();
/// client.email = "test@mail.com".into();
///
/// assert_eq!(client.name, "Nathan");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub password: String,
    pub email: String,
}

/// Same fields, filled by the constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserWithConstructor {
    pub name: String,
    pub password: String,
    pub email: String,
}

impl UserWithConstructor {
    pub fn new(
        name: impl Into<String>,
        password: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        UserWithConstructor {
            name: name.into(),
            password: password.into(),
            email: email.into(),
        }
    }
}

/// Constructor plus [`LogInfo`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserWithMethods {
    pub name: String,
    pub password: String,
    pub email: String,
}

impl UserWithMethods {
    pub fn new(
        name: impl Into<String>,
        password: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        UserWithMethods {
            name: name.into(),
            password: password.into(),
            email: email.into(),
        }
    }
}

impl From<UserWithConstructor> for UserWithMethods {
    fn from(user: UserWithConstructor) -> Self {
        UserWithMethods {
            name: user.name,
            password: user.password,
            email: user.email,
        }
    }
}

impl LogInfo for UserWithMethods {
    fn info_line(&self) -> String {
        name_email_line(&self.name, &self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_user_is_empty() {
        let user = User::default();
        assert_eq!(user.name, "");
        assert_eq!(user.password, "");
        assert_eq!(user.email, "");
    }

    #[test]
    fn test_fields_are_assignable() {
        let mut client = User::default();
        client.name = "Nathan".to_string();
        client.password = "123".to_string();
        client.email = "test@mail.com".to_string();

        assert_eq!(
            client,
            User {
                name: "Nathan".to_string(),
                password: "123".to_string(),
                email: "test@mail.com".to_string(),
            }
        );
    }

    #[test]
    fn test_constructor_copies_arguments() {
        let client = UserWithConstructor::new("Nathan", "123", "test@mail.com");
        assert_eq!(client.name, "Nathan");
        assert_eq!(client.password, "123");
        assert_eq!(client.email, "test@mail.com");
    }

    #[test]
    fn test_log_info_line() {
        let client = UserWithMethods::new("Nathan", "123", "test@mail.com");
        assert_eq!(client.log_info(), "Name: Nathan - Email: test@mail.com");
    }

    #[test]
    fn test_from_constructor_user() {
        let client: UserWithMethods =
            UserWithConstructor::new("Nathan", "123", "test@mail.com").into();
        assert_eq!(client.info_line(), "Name: Nathan - Email: test@mail.com");
    }
}

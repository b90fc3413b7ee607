//! A user record parameterized over its field type.

use std::fmt::Display;

use crate::{Error, Result};

/// Fields of any type `T`, each unset until assigned.
///
/// Reading an unset field is an error rather than a default value, since `T`
/// need not have one.
///
/// ```rust
/// use class_patterns::{Error, GenericUser};
///
/// let mut client = GenericUser::<String>::default();
/// assert_eq!(client.name(), Err(Error::UninitializedField { field: "name" }));
///
/// client.set_name("Nathan".to_string());
/// client.set_email("test@mail.com".to_string());
/// assert_eq!(client.log_info().unwrap(), "Name: Nathan - Email: test@mail.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericUser<T> {
    name: Option<T>,
    password: Option<T>,
    email: Option<T>,
}

impl<T> Default for GenericUser<T> {
    fn default() -> Self {
        GenericUser {
            name: None,
            password: None,
            email: None,
        }
    }
}

fn assigned<'a, T>(slot: &'a Option<T>, field: &'static str) -> Result<&'a T> {
    slot.as_ref().ok_or(Error::UninitializedField { field })
}

impl<T> GenericUser<T> {
    pub fn new(name: T, password: T, email: T) -> Self {
        GenericUser {
            name: Some(name),
            password: Some(password),
            email: Some(email),
        }
    }

    pub fn name(&self) -> Result<&T> {
        assigned(&self.name, "name")
    }

    pub fn password(&self) -> Result<&T> {
        assigned(&self.password, "password")
    }

    pub fn email(&self) -> Result<&T> {
        assigned(&self.email, "email")
    }

    pub fn set_name(&mut self, name: T) {
        self.name = Some(name);
    }

    pub fn set_password(&mut self, password: T) {
        self.password = Some(password);
    }

    pub fn set_email(&mut self, email: T) {
        self.email = Some(email);
    }

    /// Convert every assigned field, keeping unset ones unset.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> GenericUser<U> {
        GenericUser {
            name: self.name.map(&mut f),
            password: self.password.map(&mut f),
            email: self.email.map(&mut f),
        }
    }
}

impl<T: Display> GenericUser<T> {
    /// Emits `Name: .. - Email: ..`.
    ///
    /// # Errors
    ///
    /// `UninitializedField` if `name` or `email` is unset.
    pub fn log_info(&self) -> Result<String> {
        let line = format!("Name: {} - Email: {}", self.name()?, self.email()?);
        tracing::info!(target: "class_patterns::info", "{line}");
        Ok(line)
    }
}

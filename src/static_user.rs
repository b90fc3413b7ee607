//! Fields that belong to the type rather than to any instance.
//!
//! [`StaticUser`] has no instances. Its fields live in one process-wide store,
//! start unassigned, and are read and written through associated functions.

use std::sync::RwLock;

use crate::capability::name_email_line;
use crate::{Error, Result};

#[derive(Debug, Default)]
struct StaticFields {
    name: Option<String>,
    password: Option<String>,
    email: Option<String>,
}

static FIELDS: RwLock<StaticFields> = RwLock::new(StaticFields {
    name: None,
    password: None,
    email: None,
});

/// Namespace for the process-wide user fields.
///
/// ```rust
/// use class_patterns::StaticUser;
///
/// StaticUser::set_name("Nathan");
/// StaticUser::set_email("test@mail.com");
///
/// assert_eq!(StaticUser::log_info().unwrap(), "Name: Nathan - Email: test@mail.com");
/// ```
#[derive(Debug)]
pub enum StaticUser {}

fn read_field(
    field: &'static str,
    pick: impl FnOnce(&StaticFields) -> &Option<String>,
) -> Result<String> {
    let guard = FIELDS.read().unwrap_or_else(|p| p.into_inner());
    pick(&*guard)
        .clone()
        .ok_or(Error::UninitializedField { field })
}

fn write_field(assign: impl FnOnce(&mut StaticFields)) {
    let mut guard = FIELDS.write().unwrap_or_else(|p| p.into_inner());
    assign(&mut *guard);
}

impl StaticUser {
    pub fn name() -> Result<String> {
        read_field("name", |f| &f.name)
    }

    pub fn password() -> Result<String> {
        read_field("password", |f| &f.password)
    }

    pub fn email() -> Result<String> {
        read_field("email", |f| &f.email)
    }

    pub fn set_name(name: impl Into<String>) {
        let name = name.into();
        write_field(|f| f.name = Some(name));
    }

    pub fn set_password(password: impl Into<String>) {
        let password = password.into();
        write_field(|f| f.password = Some(password));
    }

    pub fn set_email(email: impl Into<String>) {
        let email = email.into();
        write_field(|f| f.email = Some(email));
    }

    /// Emits `Name: .. - Email: ..` for the static fields.
    ///
    /// # Errors
    ///
    /// `UninitializedField` if `name` or `email` has not been assigned.
    pub fn log_info() -> Result<String> {
        let line = name_email_line(&Self::name()?, &Self::email()?);
        tracing::info!(target: "class_patterns::info", "{line}");
        Ok(line)
    }

    /// Forget every assigned value.
    #[cfg(test)]
    fn unset_all() {
        write_field(|f| *f = StaticFields::default());
    }
}

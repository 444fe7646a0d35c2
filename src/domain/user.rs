//! User: an account known to the console. Only the public projection
//! (identifier and login) is modelled here.

use serde::{Deserialize, Serialize};

use super::{Entity, ValidationError, merge_present, require_text};

pub const LOGIN_MAX_LEN: usize = 50;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,
}

impl Entity for User {
    type Id = i64;

    const NAME: &'static str = "user";
    const REQUIRED_FIELDS: &'static [&'static str] = &["login"];
    const FIELDS: &'static [&'static str] = &["login"];

    fn id(&self) -> Option<&i64> {
        self.id.as_ref()
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_text(Self::NAME, "login", self.login.as_deref())?;
        let login = self.login.as_deref().unwrap_or_default();
        if login.chars().count() > LOGIN_MAX_LEN {
            return Err(ValidationError::TooLong { entity: Self::NAME, field: "login", max: LOGIN_MAX_LEN });
        }
        if !is_valid_login(login) {
            return Err(ValidationError::InvalidLogin(login.to_owned()));
        }
        Ok(())
    }

    fn merge(&mut self, patch: Self) {
        merge_present!(self, patch; login);
    }
}

fn is_local_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || "!$&*+=?^_`{|}~.-".contains(c)
}

fn is_domain_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-'
}

fn is_plain_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || "_.@-".contains(c)
}

/// Login rule of the account service: the login either starts with an
/// e-mail-like `local@domain` head, or ends with a plain login character.
/// Only one end of the login is anchored by each alternative.
#[must_use]
pub fn is_valid_login(login: &str) -> bool {
    if login.chars().last().is_some_and(is_plain_char) {
        return true;
    }

    let local_len = login.chars().take_while(|c| is_local_char(*c)).count();
    if local_len == 0 {
        return false;
    }
    let mut rest = login.chars().skip(local_len);
    rest.next() == Some('@') && rest.next().is_some_and(is_domain_char)
}

#[cfg(test)]
#[path = "user_test.rs"]
mod tests;

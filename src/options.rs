#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(unused_must_use)]
#![deny(unused_mut)]

//! options holds the policy that accompanies a seed when deriving keys. None of it is stored in
//! the recovery phrase, so the same options have to be supplied again when recovering.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

use crate::keyset::SubkeyType;

/// KeyOptions configures the user ID, expiry, and subkeys of a derived key set.
///
/// The user ID is mixed into the key's self-certification, so recovering with a different name
/// or email produces a key that does not match the original.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyOptions {
    /// name is the user's name, or the whole user ID if it is not in `NAME <EMAIL>` form.
    pub name: String,
    /// email is the user's email address. May be empty.
    pub email: String,
    /// expiry is when the keys stop being valid. None means they never expire.
    pub expiry: Option<DateTime<Utc>>,
    /// subkeys are the subkey types to derive alongside the master key.
    pub subkeys: BTreeSet<SubkeyType>,
}

impl Default for KeyOptions {
    fn default() -> Self {
        KeyOptions {
            name: String::new(),
            email: String::new(),
            expiry: None,
            subkeys: SubkeyType::ALL.into_iter().collect(),
        }
    }
}

impl KeyOptions {
    /// new returns options with no user ID, no expiry, and all three subkeys.
    pub fn new() -> Self {
        Self::default()
    }

    /// with_name sets the user name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// with_email sets the user email.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// with_expiry sets the key expiry time.
    pub fn with_expiry(mut self, expiry: DateTime<Utc>) -> Self {
        self.expiry = Some(expiry);
        self
    }

    /// with_subkeys replaces the set of subkeys to derive.
    pub fn with_subkeys(mut self, subkeys: impl IntoIterator<Item = SubkeyType>) -> Self {
        self.subkeys = subkeys.into_iter().collect();
        self
    }

    /// wants_subkey reports whether the given subkey type should be derived.
    pub fn wants_subkey(&self, subkey: SubkeyType) -> bool {
        self.subkeys.contains(&subkey)
    }

    /// user_id formats the user ID string: `NAME <EMAIL>` when both are set, otherwise whichever
    /// one is present.
    pub fn user_id(&self) -> String {
        match (self.name.is_empty(), self.email.is_empty()) {
            (false, false) => format!("{} <{}>", self.name, self.email),
            (false, true) => self.name.clone(),
            (true, false) => format!("<{}>", self.email),
            (true, true) => String::new(),
        }
    }
}

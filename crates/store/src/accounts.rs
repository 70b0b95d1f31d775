//! Player accounts backed by `users.json`.
//!
//! Passwords are never stored; each account keeps a random salt and the
//! SHA-256 digest of salt followed by password, both hex encoded.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use rand::RngCore;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::{Result, StoreError};
use crate::json::{load_or_default, save_atomic};

pub const USERS_FILE: &str = "users.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct Account {
    salt: String,
    hash: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct UserFile {
    #[serde(default)]
    users: BTreeMap<String, Account>,
}

#[derive(Debug, Clone)]
pub struct AccountStore {
    path: PathBuf,
}

impl AccountStore {
    /// Store at `<dir>/users.json`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::at(dir.as_ref().join(USERS_FILE))
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn register(&self, user: &str, password: &str) -> Result<()> {
        if user.is_empty() || password.is_empty() {
            return Err(StoreError::EmptyCredentials);
        }

        let mut file: UserFile = load_or_default(&self.path)?;
        if file.users.contains_key(user) {
            return Err(StoreError::UserExists(user.to_string()));
        }

        let mut salt = [0u8; 16];
        rand::thread_rng().fill_bytes(&mut salt);
        let account = Account {
            salt: hex::encode(salt),
            hash: digest(&salt, password),
        };
        file.users.insert(user.to_string(), account);
        save_atomic(&self.path, &file)?;

        log::info!("registered user {}", user);
        Ok(())
    }

    /// True if `user` exists and `password` matches.
    pub fn login(&self, user: &str, password: &str) -> Result<bool> {
        let file: UserFile = load_or_default(&self.path)?;
        let Some(account) = file.users.get(user) else {
            log::debug!("login for unknown user {}", user);
            return Ok(false);
        };
        let Ok(salt) = hex::decode(&account.salt) else {
            log::warn!("account {} has a malformed salt", user);
            return Ok(false);
        };
        Ok(digest(&salt, password) == account.hash)
    }

    pub fn exists(&self, user: &str) -> Result<bool> {
        let file: UserFile = load_or_default(&self.path)?;
        Ok(file.users.contains_key(user))
    }
}

fn digest(salt: &[u8], password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

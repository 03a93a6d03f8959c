use std::fmt;

const DECOY_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$c29tZXNhbHRzb21lc2FsdA$AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

/// One-way salted derivation of a password, in PHC string format.
///
/// No `Display` or `Serialize`; `Debug` is redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct CredentialHash(String);

impl CredentialHash {
    /// Wrap a hash previously produced by [`PasswordHasher::hash`] and read
    /// back from storage.
    ///
    /// [`PasswordHasher::hash`]: super::PasswordHasher::hash
    pub fn from_stored(hash: String) -> Self {
        Self(hash)
    }

    /// Well-formed hash that no password is known to match.
    ///
    /// Verifying against it costs the same as a real verification with default
    /// parameters.
    pub fn decoy() -> Self {
        Self(DECOY_HASH.to_string())
    }

    /// PHC string for persistence.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for CredentialHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CredentialHash(<redacted>)")
    }
}

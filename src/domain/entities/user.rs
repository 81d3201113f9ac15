//! User entity representing a registered account.

/// A user record that has been persisted and assigned an id.
///
/// A `User` can only be built from a [`NewUser`] plus the id the store
/// returned, so the unpersisted-to-persisted transition happens exactly once
/// and "no id yet" never needs a sentinel value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub hashed_password: String,
}

impl User {
    /// Promotes an unpersisted record to a persisted one with its assigned id.
    pub fn persisted(id: i64, new_user: NewUser) -> Self {
        Self {
            id,
            name: new_user.name,
            surname: new_user.surname,
            email: new_user.email,
            hashed_password: new_user.hashed_password,
        }
    }
}

/// Input data for creating a new user, before the store has assigned an id.
///
/// `hashed_password` holds the hasher's output, never the plaintext.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub hashed_password: String,
}

impl NewUser {
    /// Creates a new unpersisted user record.
    pub fn new(name: String, surname: String, email: String, hashed_password: String) -> Self {
        Self {
            name,
            surname,
            email,
            hashed_password,
        }
    }
}

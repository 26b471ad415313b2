use serde::{Deserialize, Serialize};

/// Unique, stable identifier of a profile within a collection.
pub type ProfileId = u64;

/// Postal address attached to a profile.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Company {
    pub name: String,
}

/// The canonical user entity held by the directory collection.
///
/// Matches the wire shape of the remote directory endpoint. The remote
/// records carry no `liked` flag, so it deserializes to `false` and is
/// only ever flipped locally.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Profile {
    pub id: ProfileId,
    pub name: String,
    pub username: String,
    pub email: String,
    pub address: Address,
    pub phone: String,
    pub website: String,
    pub company: Company,
    #[serde(default)]
    pub liked: bool,
}

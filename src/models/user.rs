use mongodb::bson::oid::ObjectId;
use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

/// A registered voter account. Stored in the `users` collection with the
/// camelCase keys of the wire format; `aadharCard` and `phoneNumber` carry
/// unique indexes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub official_email: String,
    pub aadhar_card: String,
    pub name: String,
    pub course: String,
    pub phone_number: String,
    /// bcrypt hash. The field keeps the collection's historical name; the
    /// plaintext never reaches storage.
    pub password: String,

    pub created_at: DateTime,
}

/// Registration input after DTO validation, password still plaintext.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub official_email: String,
    pub aadhar_card: String,
    pub name: String,
    pub course: String,
    pub phone_number: String,
    pub password: String,
}

/// Full projection returned by the admin lookup. Never carries the hash.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub official_email: String,
    pub aadhar_card: String,
    pub course: String,
    pub phone_number: String,
}

/// Projection returned on login (the original contract omits `course` here).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub official_email: String,
    pub name: String,
    pub aadhar_card: String,
    pub phone_number: String,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        UserProfile {
            name: user.name,
            official_email: user.official_email,
            aadhar_card: user.aadhar_card,
            course: user.course,
            phone_number: user.phone_number,
        }
    }
}

impl From<User> for UserSummary {
    fn from(user: User) -> Self {
        UserSummary {
            official_email: user.official_email,
            name: user.name,
            aadhar_card: user.aadhar_card,
            phone_number: user.phone_number,
        }
    }
}

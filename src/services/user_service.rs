use bcrypt::{hash, verify, DEFAULT_COST};
use mongodb::bson::{doc, DateTime};
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::{Collection, Database};

use crate::errors::{AppError, Result};
use crate::models::user::{NewUser, User, UserProfile, UserSummary};

pub const AADHAR_TAKEN: &str = "Aadhaar card already registered";
pub const PHONE_TAKEN: &str = "Phone number already registered";

/// Registration and authentication over the `users` collection.
#[derive(Clone)]
pub struct UserService {
    db: Database,
}

impl UserService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<User> {
        self.db.collection("users")
    }

    /// Creates the account after checking both uniqueness keys. The checks
    /// are advisory; the unique indexes settle a concurrent insert by failing
    /// it with a duplicate-key error, which we translate back to the same
    /// conflict message.
    pub async fn register(&self, new_user: NewUser) -> Result<()> {
        let users = self.collection();

        let aadhar_card = new_user.aadhar_card.trim().to_string();
        let phone_number = new_user.phone_number.trim().to_string();

        let existing = users.find_one(doc! { "aadharCard": &aadhar_card }).await?;
        if existing.is_some() {
            return Err(AppError::conflict(AADHAR_TAKEN));
        }

        let existing = users.find_one(doc! { "phoneNumber": &phone_number }).await?;
        if existing.is_some() {
            return Err(AppError::conflict(PHONE_TAKEN));
        }

        let password_hash = hash(&new_user.password, DEFAULT_COST)
            .map_err(|e| AppError::Internal(format!("password hashing failed: {}", e)))?;

        let user = User {
            id: None,
            official_email: new_user.official_email,
            aadhar_card,
            name: new_user.name,
            course: new_user.course,
            phone_number,
            password: password_hash,
            created_at: DateTime::now(),
        };

        match users.insert_one(&user).await {
            Ok(_) => Ok(()),
            Err(e) => Err(duplicate_key_conflict(&e).unwrap_or(AppError::Database(e))),
        }
    }

    /// A missing account and a wrong password produce the same error so the
    /// endpoint cannot be used to enumerate registered emails.
    pub async fn login(&self, official_email: &str, password: &str) -> Result<UserSummary> {
        let user = self
            .collection()
            .find_one(doc! { "officialEmail": official_email })
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        let valid = verify(password, &user.password).map_err(|_| AppError::InvalidCredentials)?;
        if !valid {
            return Err(AppError::InvalidCredentials);
        }

        Ok(UserSummary::from(user))
    }

    pub async fn find_by_email(&self, official_email: &str) -> Result<UserProfile> {
        let user = self
            .collection()
            .find_one(doc! { "officialEmail": official_email })
            .await?
            .ok_or_else(|| AppError::NotFound("Admin not found".to_string()))?;

        Ok(UserProfile::from(user))
    }

    pub async fn phone_registered(&self, phone_number: &str) -> Result<bool> {
        let existing = self
            .collection()
            .find_one(doc! { "phoneNumber": phone_number })
            .await?;

        Ok(existing.is_some())
    }
}

/// Maps a Mongo duplicate-key failure (code 11000) to the conflict message of
/// whichever unique index collided.
fn duplicate_key_conflict(err: &mongodb::error::Error) -> Option<AppError> {
    if let ErrorKind::Write(WriteFailure::WriteError(write_error)) = &*err.kind {
        return conflict_for_write_error(write_error.code, &write_error.message);
    }
    None
}

fn conflict_for_write_error(code: i32, message: &str) -> Option<AppError> {
    if code != 11000 {
        return None;
    }
    if message.contains("aadharCard") {
        return Some(AppError::conflict(AADHAR_TAKEN));
    }
    if message.contains("phoneNumber") {
        return Some(AppError::conflict(PHONE_TAKEN));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_password_is_a_salted_hash() {
        // Low cost keeps the test fast; the service itself uses DEFAULT_COST.
        let hashed = hash("Abc123!@", 4).unwrap();
        assert_ne!(hashed, "Abc123!@");
        assert!(hashed.starts_with("$2"));
        assert!(verify("Abc123!@", &hashed).unwrap());
        assert!(!verify("abc123!@", &hashed).unwrap());
    }

    #[test]
    fn conflict_messages_disambiguate_the_field() {
        assert_ne!(AADHAR_TAKEN, PHONE_TAKEN);
        assert!(AADHAR_TAKEN.contains("Aadhaar"));
        assert!(PHONE_TAKEN.contains("Phone"));
    }

    #[test]
    fn duplicate_key_write_errors_map_to_the_colliding_field() {
        // Message shape of a server-side E11000, as when two racing inserts
        // slip past the advisory find_one checks.
        let aadhar = conflict_for_write_error(
            11000,
            "E11000 duplicate key error collection: voterauth.users \
             index: aadharCard_1 dup key: { aadharCard: \"123456789012\" }",
        );
        assert!(matches!(aadhar, Some(AppError::Conflict(m)) if m == AADHAR_TAKEN));

        let phone = conflict_for_write_error(
            11000,
            "E11000 duplicate key error collection: voterauth.users \
             index: phoneNumber_1 dup key: { phoneNumber: \"9876543210\" }",
        );
        assert!(matches!(phone, Some(AppError::Conflict(m)) if m == PHONE_TAKEN));
    }

    #[test]
    fn other_write_errors_stay_untranslated() {
        // Unrecognized index on an 11000, and a non-duplicate write error.
        assert!(conflict_for_write_error(
            11000,
            "E11000 duplicate key error index: officialEmail_1"
        )
        .is_none());
        assert!(conflict_for_write_error(121, "Document failed validation").is_none());
    }
}

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Audit metadata as it travels over the wire. `id` is absent for records
/// that have not been persisted yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistentDto {
    pub id: Option<Uuid>,
    pub created_by: String,
    pub time_of_creation: DateTime<Utc>,
    pub modified_by: String,
    pub time_of_modification: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserType {
    Active,
    Inactive,
    Admin,
}

impl std::fmt::Display for UserType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserType::Active => write!(f, "Active"),
            UserType::Inactive => write!(f, "Inactive"),
            UserType::Admin => write!(f, "Admin"),
        }
    }
}

/// Raised when a stored or transported user type holds an unknown value.
#[derive(Error, Debug)]
#[error("unknown user type: {0}")]
pub struct UnknownUserType(pub String);

impl FromStr for UserType {
    type Err = UnknownUserType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(UserType::Active),
            "Inactive" => Ok(UserType::Inactive),
            "Admin" => Ok(UserType::Admin),
            _ => Err(UnknownUserType(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressDto {
    pub persistent: PersistentDto,
    pub address_line_1: String,
    pub address_line_2: Option<String>,
    pub address_line_3: Option<String>,
    pub city: String,
    pub country: Option<String>,
    pub zip_code: String,
}

/// The nested `address` is only populated when a collaborator explicitly
/// resolved the relation; plain conversion leaves it empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonDto {
    pub persistent: PersistentDto,
    pub address_id: Option<Uuid>,
    pub address: Option<AddressDto>,
    pub locale: Option<String>,
    pub first_name: Option<String>,
    pub surname: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDto {
    pub persistent: PersistentDto,
    pub person_id: Option<Uuid>,
    pub person: Option<PersonDto>,
    pub email_address: Option<String>,
    pub username: String,
    pub user_type: UserType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogDto {
    pub persistent: PersistentDto,
    pub created: NaiveDate,
    pub title: String,
    pub user_id: Option<Uuid>,
    pub user: Option<UserDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogEntryDto {
    pub persistent: PersistentDto,
    pub blog_id: Option<Uuid>,
    pub creator_name: String,
    pub entry: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuestBookDto {
    pub persistent: PersistentDto,
    pub title: String,
    pub user_id: Option<Uuid>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuestBookEntryDto {
    pub persistent: PersistentDto,
    pub guest_book_id: Option<Uuid>,
    pub guest_name: String,
    pub entry: String,
}

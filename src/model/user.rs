use serde::{Deserialize, Serialize};

use super::Country;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub address: String,
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub ref_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firstname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub house_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<Country>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub used_ref: Option<String>,
}

/// Profile of the signed-in account.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct User {
    pub address: String,
    /// Referral code handed out by this user.
    pub ref_code: Option<String>,
    pub mail: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub street: Option<String>,
    pub house_number: Option<String>,
    pub zip: Option<String>,
    pub location: Option<String>,
    pub country: Option<Country>,
    pub phone_number: Option<String>,
    /// Referral code this user signed up with.
    pub used_ref: Option<String>,
}

pub fn from_user_dto(dto: UserDto) -> User {
    User {
        address: dto.address,
        ref_code: dto.ref_code,
        mail: dto.mail,
        first_name: dto.firstname,
        last_name: dto.surname,
        street: dto.street,
        house_number: dto.house_number,
        zip: dto.zip,
        location: dto.location,
        country: dto.country,
        phone_number: dto.phone,
        used_ref: dto.used_ref,
    }
}

pub fn to_user_dto(user: &User) -> UserDto {
    UserDto {
        address: user.address.clone(),
        ref_code: user.ref_code.clone(),
        mail: user.mail.clone(),
        firstname: user.first_name.clone(),
        surname: user.last_name.clone(),
        street: user.street.clone(),
        house_number: user.house_number.clone(),
        zip: user.zip.clone(),
        location: user.location.clone(),
        country: user.country.clone(),
        phone: user.phone_number.clone(),
        used_ref: user.used_ref.clone(),
    }
}

/// Account registration data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub address: String,
    pub signature: String,
    pub wallet_id: Option<u32>,
    pub used_ref: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUserDto {
    pub address: String,
    pub signature: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub used_ref: Option<String>,
}

pub fn to_new_user_dto(user: &NewUser) -> NewUserDto {
    NewUserDto {
        address: user.address.clone(),
        signature: user.signature.clone(),
        wallet_id: user.wallet_id,
        used_ref: user.used_ref.clone(),
    }
}

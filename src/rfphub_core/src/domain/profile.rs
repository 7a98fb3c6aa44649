use serde::{Deserialize, Serialize};

use crate::domain::role::Role;
use crate::domain::user::UserId;

/// Application-owned record extending an identity with business attributes.
///
/// One row per onboarded user, keyed by the provider's user id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: UserId,
    pub email: String,
    pub role: Role,
    pub first_name: String,
    pub last_name: String,
    pub company_name: String,
    pub contact_phone: String,
}

/// Partial profile update restricted to the owner-editable fields.
///
/// `email` and `role` deliberately have no representation here: a patch
/// carrying them deserializes without them, so they can never be mutated
/// through the profile-update path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfilePatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub company_name: Option<String>,
    pub contact_phone: Option<String>,
}

impl ProfilePatch {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.company_name.is_none()
            && self.contact_phone.is_none()
    }

    /// Apply the patch to a profile, touching only the four mutable fields.
    pub fn apply_to(&self, profile: &mut Profile) {
        if let Some(first_name) = &self.first_name {
            profile.first_name = first_name.clone();
        }
        if let Some(last_name) = &self.last_name {
            profile.last_name = last_name.clone();
        }
        if let Some(company_name) = &self.company_name {
            profile.company_name = company_name.clone();
        }
        if let Some(contact_phone) = &self.contact_phone {
            profile.contact_phone = contact_phone.clone();
        }
    }
}

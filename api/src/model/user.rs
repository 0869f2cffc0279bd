use garde::Validate;
use kernel::model::{
    id::UserId,
    role::Role,
    user::{event::CreateUser, User},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RoleName {
    Admin,
    Volunteer,
    Senior,
}

impl From<Role> for RoleName {
    fn from(value: Role) -> Self {
        match value {
            Role::Admin => Self::Admin,
            Role::Volunteer => Self::Volunteer,
            Role::Senior => Self::Senior,
        }
    }
}

impl From<RoleName> for Role {
    fn from(value: RoleName) -> Self {
        match value {
            RoleName::Admin => Self::Admin,
            RoleName::Volunteer => Self::Volunteer,
            RoleName::Senior => Self::Senior,
        }
    }
}

fn default_role() -> RoleName {
    RoleName::Volunteer
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[garde(length(min = 1))]
    pub user_name: String,
    #[garde(email)]
    pub email: String,
    #[garde(length(min = 8))]
    pub password: String,
    #[garde(skip)]
    #[serde(default = "default_role")]
    pub role: RoleName,
}

impl From<CreateUserRequest> for CreateUser {
    fn from(value: CreateUserRequest) -> Self {
        let CreateUserRequest {
            user_name,
            email,
            password,
            role,
        } = value;
        Self {
            user_name,
            email,
            password,
            role: role.into(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub user_id: UserId,
    pub user_name: String,
    pub email: String,
    pub role: RoleName,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        let User {
            user_id,
            user_name,
            email,
            role,
        } = value;
        Self {
            user_id,
            user_name,
            email,
            role: role.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_defaults_to_the_volunteer_role() {
        let req: CreateUserRequest = serde_json::from_str(
            r#"{"userName":"Sam","email":"sam@example.com","password":"longenough"}"#,
        )
        .unwrap();
        assert_eq!(req.role, RoleName::Volunteer);
    }

    #[test]
    fn short_passwords_fail_validation() {
        let req: CreateUserRequest = serde_json::from_str(
            r#"{"userName":"Sam","email":"sam@example.com","password":"short"}"#,
        )
        .unwrap();
        assert!(req.validate(&()).is_err());
    }
}

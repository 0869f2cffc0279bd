use kernel::model::{id::UserId, role::Role, user::User};

#[derive(sqlx::FromRow)]
pub struct UserRow {
    pub user_id: UserId,
    pub user_name: String,
    pub email: String,
    pub role: Role,
}

impl From<UserRow> for User {
    fn from(value: UserRow) -> Self {
        let UserRow {
            user_id,
            user_name,
            email,
            role,
        } = value;
        User {
            user_id,
            user_name,
            email,
            role,
        }
    }
}

/// Credential row used only by token issuing.
#[derive(sqlx::FromRow)]
pub struct UserCredentialRow {
    pub user_id: UserId,
    pub password_hash: String,
}

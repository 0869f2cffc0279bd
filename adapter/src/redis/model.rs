use kernel::model::{auth::AccessToken, id::UserId};
use shared::error::AppResult;
use std::str::FromStr;

pub trait RedisKey {
    type Value: RedisValue;
    fn inner(&self) -> String;
}

pub trait RedisValue: Sized {
    fn serialize_value(&self) -> String;
    fn deserialize_value(s: String) -> AppResult<Self>;
}

/// `token:<access token>` -> user id, with the auth TTL.
pub struct AuthorizationKey(pub AccessToken);

impl RedisKey for AuthorizationKey {
    type Value = AuthorizedUserId;

    fn inner(&self) -> String {
        format!("token:{}", self.0 .0)
    }
}

pub struct AuthorizedUserId(pub UserId);

impl RedisValue for AuthorizedUserId {
    fn serialize_value(&self) -> String {
        self.0.to_string()
    }

    fn deserialize_value(s: String) -> AppResult<Self> {
        UserId::from_str(&s).map(Self)
    }
}

/// `ideas:<user id>` -> the raw numbered-list text the generation service
/// answered with, kept for the idea-cache TTL so repeated visits do not
/// trigger a new generation.
pub struct IdeaCacheKey(pub UserId);

impl RedisKey for IdeaCacheKey {
    type Value = CachedIdeaText;

    fn inner(&self) -> String {
        format!("ideas:{}", self.0)
    }
}

pub struct CachedIdeaText(pub String);

impl RedisValue for CachedIdeaText {
    fn serialize_value(&self) -> String {
        self.0.clone()
    }

    fn deserialize_value(s: String) -> AppResult<Self> {
        Ok(Self(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authorization_key_is_prefixed_with_token() {
        let key = AuthorizationKey(AccessToken("abc123".into()));
        assert_eq!(key.inner(), "token:abc123");
    }

    #[test]
    fn authorized_user_id_round_trips_through_string() {
        let user_id = UserId::new();
        let serialized = AuthorizedUserId(user_id).serialize_value();
        let restored = AuthorizedUserId::deserialize_value(serialized).unwrap();
        assert_eq!(restored.0, user_id);
    }

    #[test]
    fn idea_cache_key_is_scoped_per_user() {
        let user_id = UserId::new();
        assert_eq!(IdeaCacheKey(user_id).inner(), format!("ideas:{user_id}"));
    }
}

use redis::{aio::MultiplexedConnection, AsyncCommands};
use shared::{config::RedisConfig, error::AppResult};

use self::model::{RedisKey, RedisValue};

pub mod model;

pub struct RedisClient {
    client: redis::Client,
}

impl RedisClient {
    pub fn new(config: &RedisConfig) -> AppResult<Self> {
        let client = redis::Client::open(format!("redis://{}:{}", config.host, config.port))?;
        Ok(Self { client })
    }

    pub async fn set_ex<T: RedisKey>(&self, key: &T, value: &T::Value, ttl: u64) -> AppResult<()> {
        let mut conn = self.try_connect().await?;
        let _: () = conn
            .set_ex(key.inner(), value.serialize_value(), ttl)
            .await?;
        Ok(())
    }

    pub async fn get<T: RedisKey>(&self, key: &T) -> AppResult<Option<T::Value>> {
        let mut conn = self.try_connect().await?;
        let result: Option<String> = conn.get(key.inner()).await?;
        result.map(T::Value::deserialize_value).transpose()
    }

    pub async fn delete<T: RedisKey>(&self, key: &T) -> AppResult<()> {
        let mut conn = self.try_connect().await?;
        let _: () = conn.del(key.inner()).await?;
        Ok(())
    }

    async fn try_connect(&self) -> AppResult<MultiplexedConnection> {
        Ok(self.client.get_multiplexed_async_connection().await?)
    }
}

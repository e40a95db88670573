use std::sync::atomic::{AtomicI64, Ordering};

use log::info;
use redis::aio::{ConnectionManager, ConnectionManagerConfig};
use redis::{AsyncCommands, Client, RedisError};
use tokio::sync::OnceCell;

use crate::error::AppError;

const HITS_KEY: &str = "hits";

/// Counts views of the home page.
///
/// The Redis backend keeps the count in the `hits` key, so it survives
/// restarts of this process and is shared by every instance pointed at the
/// same server. It connects on the first hit; until a connection succeeds
/// every increment fails and the next one tries again.
pub enum HitCounter {
    Memory(AtomicI64),
    Redis {
        client: Client,
        manager: OnceCell<ConnectionManager>,
    },
}

impl HitCounter {
    pub fn in_memory() -> Self {
        HitCounter::Memory(AtomicI64::new(0))
    }

    /// Only validates the address, no connection is made here.
    pub fn redis(host: &str, port: u16) -> Result<Self, RedisError> {
        let client = Client::open(format!("redis://{host}:{port}/"))?;
        Ok(HitCounter::Redis { client, manager: OnceCell::new() })
    }

    pub fn backend_name(&self) -> &str {
        match self {
            HitCounter::Memory(_) => "memory",
            HitCounter::Redis { .. } => "redis",
        }
    }

    /// Increments the counter and returns the new value. The first hit is 1.
    pub async fn increment(&self) -> Result<i64, AppError> {
        match self {
            HitCounter::Memory(count) => Ok(count.fetch_add(1, Ordering::SeqCst) + 1),
            HitCounter::Redis { client, manager } => {
                let manager = manager.get_or_try_init(|| connect(client)).await?;
                // the manager is a cheap handle onto one multiplexed connection
                let mut connection = manager.clone();
                let count: i64 = connection.incr(HITS_KEY, 1).await?;
                Ok(count)
            }
        }
    }
}

async fn connect(client: &Client) -> Result<ConnectionManager, RedisError> {
    let config = ConnectionManagerConfig::new().set_number_of_retries(1);
    let manager = client.get_connection_manager_with_config(config).await?;
    info!("Connected to redis, counting hits under `{}`", HITS_KEY);
    Ok(manager)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn memory_counter_counts_from_one() {
        let counter = HitCounter::in_memory();
        assert_eq!(counter.backend_name(), "memory");
        assert_eq!(counter.increment().await.unwrap(), 1);
        assert_eq!(counter.increment().await.unwrap(), 2);
        assert_eq!(counter.increment().await.unwrap(), 3);
    }

    #[actix_web::test]
    async fn unreachable_redis_fails_each_hit_without_connecting_up_front() {
        // nothing listens on port 1
        let counter = HitCounter::redis("127.0.0.1", 1).unwrap();
        assert_eq!(counter.backend_name(), "redis");

        for _ in 0..2 {
            assert!(matches!(counter.increment().await, Err(AppError::HitCounter(_))));
        }
    }
}

use std::time::Duration;

use async_trait::async_trait;

use crate::errors::RagResult;

/// Optional persistent key/value store, used solely for best-effort
/// cache durability. Failures are logged and swallowed by callers.
#[async_trait]
pub trait IKeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> RagResult<Option<String>>;

    /// Store `value` under `key`, expiring after `ttl` when given.
    async fn put(&self, key: &str, value: &str, ttl: Option<Duration>) -> RagResult<()>;
}

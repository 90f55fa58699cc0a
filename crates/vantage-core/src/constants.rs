/// Vantage system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum number of matches returned in a single context.
pub const MAX_CONTEXT_MATCHES: usize = 8;

/// Number of leading content characters used as a deduplication
/// fingerprint when a document has no id.
pub const FINGERPRINT_PREFIX_CHARS: usize = 100;

/// Prefix for cache keys, both in-memory and in the key/value store.
pub const CACHE_KEY_PREFIX: &str = "rag-cache-";

/// Platform name recognized for query-context augmentation.
pub const PLATFORM_NAME: &str = "vantage";

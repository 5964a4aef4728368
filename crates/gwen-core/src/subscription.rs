//! Persisted "has this visitor subscribed" flag.
//!
//! The flag lives under [`SUBSCRIPTION_KEY`] as the literal `"true"`; an
//! absent key means not subscribed. Storage failures never reach the
//! caller: reads fall back to locked and failed writes are logged and
//! dropped.

use serde::Serialize;

use crate::store::KvStore;

/// Storage key for the flag.
pub const SUBSCRIPTION_KEY: &str = "jessie_subscribed";

/// Channel page with the subscribe confirmation prompt.
pub const SUBSCRIBE_URL: &str = "https://www.youtube.com/@JessieGwen?sub_confirmation=1";

const SUBSCRIBED_VALUE: &str = "true";

/// Whether direct video links are available to this visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GateStatus {
    Locked,
    Unlocked,
}

impl GateStatus {
    pub fn from_subscribed(subscribed: bool) -> Self {
        if subscribed {
            Self::Unlocked
        } else {
            Self::Locked
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Locked => "locked",
            Self::Unlocked => "unlocked",
        }
    }
}

impl std::fmt::Display for GateStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Destination for the subscribe button. No I/O.
pub fn subscribe_url() -> &'static str {
    SUBSCRIBE_URL
}

/// Gate state over an injected store.
pub struct SubscriptionState<S> {
    store: S,
}

impl<S: KvStore> SubscriptionState<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Read the persisted flag. Any storage failure reads as `false`.
    pub fn is_subscribed(&self) -> bool {
        match self.store.get(SUBSCRIPTION_KEY) {
            Ok(value) => value.as_deref() == Some(SUBSCRIBED_VALUE),
            Err(e) => {
                tracing::warn!(key = SUBSCRIPTION_KEY, error = %e, "Subscription flag unreadable, treating as locked");
                false
            }
        }
    }

    /// Persist the flag. `false` removes the key rather than storing "false".
    ///
    /// Write failures are logged and swallowed.
    pub fn set_subscribed(&self, value: bool) {
        let result = if value {
            self.store.set(SUBSCRIPTION_KEY, SUBSCRIBED_VALUE)
        } else {
            self.store.delete(SUBSCRIPTION_KEY)
        };

        match result {
            Ok(()) => tracing::info!(subscribed = value, "Subscription flag updated"),
            Err(e) => {
                tracing::warn!(key = SUBSCRIPTION_KEY, subscribed = value, error = %e, "Failed to persist subscription flag")
            }
        }
    }

    /// Remove the flag. Not reachable from the gate prompt.
    pub fn clear(&self) {
        self.set_subscribed(false);
    }

    pub fn status(&self) -> GateStatus {
        GateStatus::from_subscribed(self.is_subscribed())
    }

    pub fn subscribe_url(&self) -> &'static str {
        subscribe_url()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

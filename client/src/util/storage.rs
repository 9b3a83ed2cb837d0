//! Browser localStorage helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! These helpers centralize hydrate-only read/write behavior so token and
//! preference modules do not repeat web-sys glue. On the server every read is
//! `None` and every write is a no-op.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read the raw string stored under `key`.
pub fn get_item(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        local_storage()?.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Store a raw string under `key`.
pub fn set_item(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, value);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

pub fn remove_item(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}

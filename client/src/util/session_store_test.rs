use super::*;

/// Backend that fails writes to one key and otherwise behaves like memory.
struct RejectingStorage {
    inner: MemoryStorage,
    reject_key: &'static str,
}

impl KeyValueStore for RejectingStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if key == self.reject_key {
            return Err(StorageError::Backend("QuotaExceededError".to_owned()));
        }
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.inner.remove(key)
    }
}

/// Backend with no storage at all.
struct UnavailableStorage;

impl KeyValueStore for UnavailableStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

fn raw(storage: &MemoryStorage, key: &str) -> Option<String> {
    storage.get(key).unwrap()
}

// =============================================================
// decode_session
// =============================================================

#[test]
fn decode_accepts_exact_pair() {
    assert_eq!(decode_session(Some("true"), Some("citizen")), AuthState::Authenticated(Role::Citizen));
    assert_eq!(
        decode_session(Some("true"), Some("government")),
        AuthState::Authenticated(Role::Government)
    );
}

#[test]
fn decode_rejects_missing_keys() {
    assert_eq!(decode_session(None, None), AuthState::Unauthenticated);
    assert_eq!(decode_session(Some("true"), None), AuthState::Unauthenticated);
    assert_eq!(decode_session(None, Some("citizen")), AuthState::Unauthenticated);
}

#[test]
fn decode_rejects_malformed_values() {
    assert_eq!(decode_session(Some("TRUE"), Some("citizen")), AuthState::Unauthenticated);
    assert_eq!(decode_session(Some("1"), Some("citizen")), AuthState::Unauthenticated);
    assert_eq!(decode_session(Some("false"), Some("citizen")), AuthState::Unauthenticated);
    assert_eq!(decode_session(Some("true"), Some("admin")), AuthState::Unauthenticated);
    assert_eq!(decode_session(Some("true"), Some("")), AuthState::Unauthenticated);
}

// =============================================================
// load / save / clear
// =============================================================

#[test]
fn empty_storage_loads_unauthenticated() {
    let mut store = SessionStore::new(MemoryStorage::new());
    assert_eq!(store.load(), AuthState::Unauthenticated);
}

#[test]
fn save_writes_both_keys_as_strings() {
    let storage = MemoryStorage::new();
    let mut store = SessionStore::new(storage.clone());
    store.save(Role::Government);

    assert_eq!(raw(&storage, AUTH_FLAG_KEY).as_deref(), Some("true"));
    assert_eq!(raw(&storage, ROLE_KEY).as_deref(), Some("government"));
}

#[test]
fn save_then_reload_restores_last_role() {
    let storage = MemoryStorage::new();
    let mut store = SessionStore::new(storage.clone());
    store.save(Role::Citizen);
    store.save(Role::Government);

    let mut reloaded = SessionStore::new(storage);
    assert_eq!(reloaded.load(), AuthState::Authenticated(Role::Government));
}

#[test]
fn clear_removes_both_keys() {
    let storage = MemoryStorage::new();
    let mut store = SessionStore::new(storage.clone());
    store.save(Role::Citizen);
    store.clear();

    assert_eq!(raw(&storage, AUTH_FLAG_KEY), None);
    assert_eq!(raw(&storage, ROLE_KEY), None);
    assert_eq!(SessionStore::new(storage).load(), AuthState::Unauthenticated);
}

#[test]
fn clear_on_empty_storage_is_harmless() {
    let mut store = SessionStore::new(MemoryStorage::new());
    store.clear();
    assert_eq!(store.load(), AuthState::Unauthenticated);
    assert!(!store.is_degraded());
}

#[test]
fn half_written_session_from_elsewhere_loads_unauthenticated() {
    let storage = MemoryStorage::new();
    storage.set(ROLE_KEY, "citizen").unwrap();
    assert_eq!(SessionStore::new(storage).load(), AuthState::Unauthenticated);
}

// =============================================================
// Degradation
// =============================================================

fn stored_session(role: Role) -> MemoryStorage {
    let storage = MemoryStorage::new();
    storage.set(AUTH_FLAG_KEY, "true").unwrap();
    storage.set(ROLE_KEY, role.as_str()).unwrap();
    storage
}

#[test]
fn failed_flag_write_rolls_back_role() {
    let inner = MemoryStorage::new();
    let mut store = SessionStore::new(RejectingStorage { inner: inner.clone(), reject_key: AUTH_FLAG_KEY });
    store.save(Role::Citizen);

    assert_eq!(raw(&inner, ROLE_KEY), None);
    assert_eq!(raw(&inner, AUTH_FLAG_KEY), None);
    assert!(store.is_degraded());
}

#[test]
fn failed_flag_write_over_existing_session_leaves_no_partial_pair() {
    let inner = stored_session(Role::Government);
    let mut store = SessionStore::new(RejectingStorage { inner: inner.clone(), reject_key: AUTH_FLAG_KEY });
    assert_eq!(store.load(), AuthState::Authenticated(Role::Government));

    store.save(Role::Citizen);

    assert_eq!(raw(&inner, ROLE_KEY), None);
    assert_eq!(raw(&inner, AUTH_FLAG_KEY), None);
    assert_eq!(store.load(), AuthState::Authenticated(Role::Citizen));
}

#[test]
fn failed_role_write_drops_older_stored_session() {
    let inner = stored_session(Role::Citizen);
    let mut store = SessionStore::new(RejectingStorage { inner: inner.clone(), reject_key: ROLE_KEY });
    assert_eq!(store.load(), AuthState::Authenticated(Role::Citizen));

    store.save(Role::Government);
    assert!(store.is_degraded());
    assert_eq!(store.load(), AuthState::Authenticated(Role::Government));

    let mut reloaded = SessionStore::new(inner);
    assert_eq!(reloaded.load(), AuthState::Unauthenticated);
}

#[test]
fn logout_after_degrading_clears_restored_session() {
    let inner = stored_session(Role::Citizen);
    let backend = RejectingStorage { inner: inner.clone(), reject_key: ROLE_KEY };
    let mut store = SessionStore::new(backend);
    assert_eq!(store.load(), AuthState::Authenticated(Role::Citizen));

    store.save(Role::Government);
    store.clear();
    assert_eq!(store.load(), AuthState::Unauthenticated);

    // A pair written by another tab while degraded is removed too.
    inner.set(AUTH_FLAG_KEY, "true").unwrap();
    inner.set(ROLE_KEY, "citizen").unwrap();
    store.clear();

    let mut reloaded = SessionStore::new(inner);
    assert_eq!(reloaded.load(), AuthState::Unauthenticated);
}

#[test]
fn failed_write_keeps_session_in_memory() {
    let inner = MemoryStorage::new();
    let mut store = SessionStore::new(RejectingStorage { inner, reject_key: ROLE_KEY });
    store.save(Role::Government);

    assert!(store.is_degraded());
    assert_eq!(store.load(), AuthState::Authenticated(Role::Government));

    store.clear();
    assert_eq!(store.load(), AuthState::Unauthenticated);
}

#[test]
fn unavailable_storage_loads_unauthenticated_and_degrades() {
    let mut store = SessionStore::new(UnavailableStorage);
    assert_eq!(store.load(), AuthState::Unauthenticated);
    assert!(store.is_degraded());

    store.save(Role::Citizen);
    assert_eq!(store.load(), AuthState::Authenticated(Role::Citizen));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_outside_browser_reads_nothing() {
    let mut store = SessionStore::browser();
    assert_eq!(store.load(), AuthState::Unauthenticated);
    assert!(!store.is_degraded());
}

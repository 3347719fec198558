use dexduel_game::ScoreStore;
use thiserror::Error;
use web_sys::Storage;

#[derive(Debug, Error)]
pub enum LocalStoreError {
    #[error("localStorage is unavailable")]
    Unavailable,
    #[error("localStorage rejected the operation")]
    Rejected,
}

/// `ScoreStore` over the browser's localStorage. The core treats read
/// failures as an empty table, so a blocked or missing store degrades to
/// session-only high scores.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

impl LocalStore {
    fn storage() -> Result<Storage, LocalStoreError> {
        web_sys::window()
            .ok_or(LocalStoreError::Unavailable)?
            .local_storage()
            .map_err(|_| LocalStoreError::Unavailable)?
            .ok_or(LocalStoreError::Unavailable)
    }
}

impl ScoreStore for LocalStore {
    type Error = LocalStoreError;

    fn read(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Self::storage()?
            .get_item(key)
            .map_err(|_| LocalStoreError::Rejected)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|_| LocalStoreError::Rejected)
    }
}

use gloo::storage::{LocalStorage, Storage};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Key under which a value is kept in `localStorage`.
pub(crate) trait StorageKey {
    const KEY: &'static str;
}

pub(crate) trait LocalStore: StorageKey + Serialize + DeserializeOwned + Sized {
    fn local_load() -> Option<Self> {
        match LocalStorage::get(Self::KEY) {
            Ok(value) => Some(value),
            Err(err) => {
                log::debug!("nothing usable stored under {}: {}", Self::KEY, err);
                None
            }
        }
    }

    fn local_save(&self) {
        if let Err(err) = LocalStorage::set(Self::KEY, self) {
            log::error!("failed to save {}: {}", Self::KEY, err);
        }
    }

    fn local_clear() {
        LocalStorage::delete(Self::KEY);
    }
}

impl<T: StorageKey + Serialize + DeserializeOwned> LocalStore for T {}

pub(crate) trait LocalOrDefault: LocalStore + Default {
    fn local_or_default() -> Self {
        Self::local_load().unwrap_or_default()
    }
}

impl<T: LocalStore + Default> LocalOrDefault for T {}

/// Helper function to use JavaScript's Math.random
pub(crate) fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    u64::from_be_bytes([
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
    ])
}

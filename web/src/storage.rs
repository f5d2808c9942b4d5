use gloo::storage::{LocalStorage, Storage};
use slotgate_core as game;

/// The attempt counter, kept as a raw string item in `window.localStorage`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub(crate) struct LocalStorageSlot;

impl LocalStorageSlot {
    pub(crate) const KEY: &'static str = game::ATTEMPTS_KEY;
}

impl game::AttemptSlot for LocalStorageSlot {
    fn get(&self) -> Option<String> {
        match LocalStorage::raw().get_item(Self::KEY) {
            Ok(value) => value,
            Err(err) => {
                log::error!("failed to read {}: {:?}", Self::KEY, err);
                None
            }
        }
    }

    fn set(&mut self, value: &str) -> game::Result<()> {
        LocalStorage::raw()
            .set_item(Self::KEY, value)
            .map_err(|err| game::GameError::Storage(format!("{:?}", err)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_key_matches_existing_saves() {
        assert_eq!(LocalStorageSlot::KEY, "slotAttempts");
    }
}

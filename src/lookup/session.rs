//! Hero lookup session state.
//!
//! Tracks what the hero overlay shows: the active record, whether the
//! overlay is open, whether a request is in flight and the last error.

use super::hero::{fetch_hero, HeroRecord};
use crate::store::HeroStore;
use log::{debug, info};

/// Sets a flag on creation and clears it on drop
struct LoadingGuard<'a> {
    flag: &'a mut bool,
}

impl<'a> LoadingGuard<'a> {
    fn acquire(flag: &'a mut bool) -> Self {
        *flag = true;
        Self { flag }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        *self.flag = false;
    }
}

/// Lookup state for one viewer session
pub struct LookupSession<'s, S: HeroStore + ?Sized> {
    store: &'s S,
    active: Option<HeroRecord>,
    modal_open: bool,
    loading: bool,
    error: Option<String>,
}

impl<'s, S: HeroStore + ?Sized> LookupSession<'s, S> {
    pub fn new(store: &'s S) -> Self {
        Self {
            store,
            active: None,
            modal_open: false,
            loading: false,
            error: None,
        }
    }

    /// Handle a submitted hero id
    ///
    /// Blank input is ignored. Otherwise the previous error is cleared and
    /// the hero is fetched.
    pub fn submit(&mut self, input: &str) {
        let input = input.trim();
        if input.is_empty() {
            return;
        }
        self.fetch_hero_data(input);
    }

    /// Fetch a hero and update the session
    ///
    /// On success the record becomes active and the overlay opens. On
    /// failure the active record is cleared and the error message kept.
    /// `loading` is held by a guard for the duration of the request, so a
    /// caller only sees it set while `fetch_hero` is running.
    pub fn fetch_hero_data(&mut self, input: &str) {
        let _loading = LoadingGuard::acquire(&mut self.loading);
        self.error = None;

        match fetch_hero(self.store, input) {
            Ok(hero) => {
                info!("Loaded hero #{} ({})", hero.id, hero.name);
                self.active = Some(hero);
                self.modal_open = true;
            }
            Err(e) => {
                debug!("Hero lookup failed for {:?}: {}", input, e);
                self.active = None;
                self.error = Some(e.message());
            }
        }
    }

    /// Close the hero overlay, keeping the last record
    pub fn close(&mut self) {
        self.modal_open = false;
    }

    pub fn active(&self) -> Option<&HeroRecord> {
        self.active.as_ref()
    }

    /// Record shown in the overlay, if it is open
    pub fn visible(&self) -> Option<&HeroRecord> {
        self.active.as_ref().filter(|_| self.modal_open)
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

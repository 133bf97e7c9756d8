use axum::extract::FromRef;

use crate::Store;

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub store: Store,
}

impl AppState {
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

impl FromRef<AppState> for Store {
    fn from_ref(state: &AppState) -> Self {
        // store uses an Arc internally so clone is cheap
        state.store.clone()
    }
}

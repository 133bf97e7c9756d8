use std::sync::Arc;

use dashmap::DashMap;
use shared::{
    api::error::ServerError,
    model::{Exercise, LogFilter, NewUser, User},
    types::UserId,
};
use tokio::sync::RwLock;

/// A user together with everything they've logged
#[derive(Debug, Clone)]
struct Account {
    user: User,
    exercises: Vec<Exercise>,
}

/// Users and their exercises, kept for the lifetime of the process
///
/// Accounts are looked up by id. The ids are also kept in creation order so
/// users can be listed the way they were added. An account is inserted while
/// the order lock is held, so a listed id always has an account.
#[derive(Debug, Clone, Default)]
pub struct Store {
    order: Arc<RwLock<Vec<UserId>>>,
    accounts: Arc<DashMap<UserId, Account>>,
}

impl Store {
    pub async fn create_user(&self, new_user: NewUser) -> User {
        let user = User::new(UserId::generate(), new_user.username);

        let mut order = self.order.write().await;
        self.accounts.insert(
            user.id,
            Account {
                user: user.clone(),
                exercises: Vec::new(),
            },
        );
        order.push(user.id);

        user
    }

    /// All users in the order they were created
    pub async fn users(&self) -> Vec<User> {
        self.order
            .read()
            .await
            .iter()
            .filter_map(|id| self.accounts.get(id).map(|a| a.user.clone()))
            .collect()
    }

    pub fn user(&self, id: &UserId) -> Option<User> {
        self.accounts.get(id).map(|a| a.user.clone())
    }

    /// Appends to the user's exercises, returning the owner
    pub fn add_exercise(&self, id: &UserId, exercise: Exercise) -> Result<User, ServerError> {
        let mut account = self
            .accounts
            .get_mut(id)
            .ok_or_else(ServerError::unknown_user)?;
        account.exercises.push(exercise);

        Ok(account.user.clone())
    }

    /// The owner and the exercises that pass `filter`, in insertion order
    pub fn log(
        &self,
        id: &UserId,
        filter: &LogFilter,
    ) -> Result<(User, Vec<Exercise>), ServerError> {
        let account = self.accounts.get(id).ok_or_else(ServerError::unknown_user)?;

        Ok((account.user.clone(), filter.apply(&account.exercises)))
    }
}

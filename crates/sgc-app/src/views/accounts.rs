//! Account list page

use sgc_core::{Account, AccountStatus};

use super::RecordList;

/// Accounts as last fetched, reconciled locally after tests and deletes
#[derive(Debug, Clone, Default)]
pub struct AccountListState {
    pub list: RecordList<Account>,
}

impl AccountListState {
    pub fn accounts(&self) -> &[Account] {
        &self.list.items
    }

    pub fn get(&self, id: u64) -> Option<&Account> {
        self.list.find(|a| a.id == id)
    }

    /// Set one row's status; `false` if the row is gone
    pub fn set_status(&mut self, id: u64, status: AccountStatus) -> bool {
        match self.list.find_mut(|a| a.id == id) {
            Some(account) => {
                account.status = status;
                true
            }
            None => false,
        }
    }

    /// Remove exactly the account with `id`, keeping the others in order
    pub fn remove(&mut self, id: u64) -> bool {
        self.list.remove_where(|a| a.id == id) > 0
    }
}

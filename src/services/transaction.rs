//! Transaction service
//!
//! CRUD over a single user's transactions. Every call takes the acting
//! user's identity explicitly and only ever touches that user's rows.

use crate::error::{TrackerError, TrackerResult};
use crate::models::{StoredTransaction, Transaction, TransactionId, UserIdentity};
use crate::storage::Storage;

use super::outcome::Notice;

/// Raw form input for a new or edited transaction
#[derive(Debug, Clone, Default)]
pub struct TransactionInput {
    pub transaction_type: String,
    pub amount: String,
    pub currency: String,
    pub category: String,
    pub date: String,
}

impl TransactionInput {
    /// Validate into a [`Transaction`]
    pub fn validate(&self) -> TrackerResult<Transaction> {
        Ok(Transaction::create(
            &self.transaction_type,
            &self.amount,
            &self.currency,
            &self.category,
            &self.date,
        )?)
    }
}

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a transaction for `user`
    pub fn add(
        &self,
        user: &UserIdentity,
        txn: &Transaction,
    ) -> TrackerResult<(TransactionId, Notice)> {
        let id = self.storage.transactions().insert(txn, user.id)?;
        tracing::info!(user = %user.id, transaction = %id, "transaction added");
        Ok((id, Notice::success("Transaction added.")))
    }

    /// Validate raw input and record it
    pub fn add_from_input(
        &self,
        user: &UserIdentity,
        input: &TransactionInput,
    ) -> TrackerResult<(TransactionId, Notice)> {
        let txn = input.validate()?;
        self.add(user, &txn)
    }

    /// All of `user`'s transactions, oldest id first
    pub fn list(&self, user: &UserIdentity) -> TrackerResult<Vec<StoredTransaction>> {
        let transactions = self.storage.transactions().list(user.id)?;
        tracing::debug!(user = %user.id, count = transactions.len(), "listed transactions");
        Ok(transactions)
    }

    /// One of `user`'s transactions
    pub fn get(&self, user: &UserIdentity, id: TransactionId) -> TrackerResult<StoredTransaction> {
        self.storage
            .transactions()
            .get(id, user.id)?
            .ok_or_else(|| TrackerError::transaction_not_found(id.to_string()))
    }

    /// Overwrite every field of one of `user`'s transactions
    ///
    /// An id that is missing or owned by someone else yields an error notice,
    /// not an `Err`.
    pub fn replace(
        &self,
        user: &UserIdentity,
        id: TransactionId,
        txn: &Transaction,
    ) -> TrackerResult<Notice> {
        if self.storage.transactions().replace(id, txn, user.id)? {
            tracing::info!(user = %user.id, transaction = %id, "transaction updated");
            Ok(Notice::success("Transaction updated."))
        } else {
            tracing::warn!(user = %user.id, transaction = %id, "update matched no row");
            Ok(Notice::error("Update failed."))
        }
    }

    /// Delete one of `user`'s transactions
    pub fn delete(&self, user: &UserIdentity, id: TransactionId) -> TrackerResult<Notice> {
        if self.storage.transactions().delete(id, user.id)? {
            tracing::info!(user = %user.id, transaction = %id, "transaction deleted");
            Ok(Notice::success("Transaction deleted."))
        } else {
            tracing::warn!(user = %user.id, transaction = %id, "delete matched no row");
            Ok(Notice::error("Delete failed."))
        }
    }

    /// Number of transactions `user` has recorded
    pub fn count(&self, user: &UserIdentity) -> TrackerResult<usize> {
        self.storage.transactions().count(user.id)
    }
}

//! Transaction repository
//!
//! Every query is scoped by owner: a row belonging to another user is
//! invisible and cannot be replaced or deleted.

use std::str::FromStr;

use rusqlite::{params, Connection, OptionalExtension, Row};
use rust_decimal::Decimal;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{
    parse_date, Currency, Money, StoredTransaction, Transaction, TransactionId, TransactionType,
    UserId, DATE_FORMAT,
};

const SELECT_COLUMNS: &str = "SELECT id, t_type, amount, currency, category, date, user_id
                              FROM transactions";

/// Repository for transaction persistence
pub struct TransactionRepository<'a> {
    conn: &'a Connection,
}

/// Raw column values before domain conversion
struct TransactionRow {
    id: i64,
    t_type: String,
    amount: String,
    currency: String,
    category: String,
    date: String,
    user_id: i64,
}

impl TransactionRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            t_type: row.get(1)?,
            amount: row.get(2)?,
            currency: row.get(3)?,
            category: row.get(4)?,
            date: row.get(5)?,
            user_id: row.get(6)?,
        })
    }

    fn into_stored(self) -> TrackerResult<StoredTransaction> {
        let id = TransactionId::new(self.id);
        let corrupt = |what: &str| TrackerError::Database(format!("corrupt {} in {}", what, id));

        let transaction_type =
            TransactionType::from_str(&self.t_type).map_err(|_| corrupt("type"))?;
        let amount = Decimal::from_str(&self.amount).map_err(|_| corrupt("amount"))?;
        let currency = Currency::from_str(&self.currency).map_err(|_| corrupt("currency"))?;
        let date = parse_date(&self.date).map_err(|_| corrupt("date"))?;

        Ok(StoredTransaction {
            id,
            owner: UserId::new(self.user_id),
            transaction: Transaction {
                transaction_type,
                amount: Money::new(amount),
                currency,
                category: self.category,
                date,
            },
        })
    }
}

impl<'a> TransactionRepository<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// All transactions for an owner, in insertion order
    pub fn list(&self, owner: UserId) -> TrackerResult<Vec<StoredTransaction>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{} WHERE user_id = ?1 ORDER BY id", SELECT_COLUMNS))?;

        let rows = stmt
            .query_map([owner.get()], TransactionRow::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        rows.into_iter().map(TransactionRow::into_stored).collect()
    }

    /// A single transaction, if it exists and belongs to `owner`
    pub fn get(
        &self,
        id: TransactionId,
        owner: UserId,
    ) -> TrackerResult<Option<StoredTransaction>> {
        let row = self
            .conn
            .query_row(
                &format!("{} WHERE id = ?1 AND user_id = ?2", SELECT_COLUMNS),
                params![id.get(), owner.get()],
                TransactionRow::from_row,
            )
            .optional()?;

        row.map(TransactionRow::into_stored).transpose()
    }

    /// Insert a transaction for `owner`
    pub fn insert(&self, txn: &Transaction, owner: UserId) -> TrackerResult<TransactionId> {
        self.conn.execute(
            "INSERT INTO transactions (t_type, amount, currency, category, date, user_id)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                txn.transaction_type.as_str(),
                txn.amount.value().to_string(),
                txn.currency.code(),
                txn.category,
                txn.date.format(DATE_FORMAT).to_string(),
                owner.get()
            ],
        )?;
        Ok(TransactionId::new(self.conn.last_insert_rowid()))
    }

    /// Overwrite every field of an owned transaction
    ///
    /// Returns `false` when no row matched the id and owner.
    pub fn replace(
        &self,
        id: TransactionId,
        txn: &Transaction,
        owner: UserId,
    ) -> TrackerResult<bool> {
        let changed = self.conn.execute(
            "UPDATE transactions
             SET t_type = ?1, amount = ?2, currency = ?3, category = ?4, date = ?5
             WHERE id = ?6 AND user_id = ?7",
            params![
                txn.transaction_type.as_str(),
                txn.amount.value().to_string(),
                txn.currency.code(),
                txn.category,
                txn.date.format(DATE_FORMAT).to_string(),
                id.get(),
                owner.get()
            ],
        )?;
        Ok(changed == 1)
    }

    /// Delete an owned transaction
    ///
    /// Returns `false` when no row matched the id and owner.
    pub fn delete(&self, id: TransactionId, owner: UserId) -> TrackerResult<bool> {
        let changed = self.conn.execute(
            "DELETE FROM transactions WHERE id = ?1 AND user_id = ?2",
            params![id.get(), owner.get()],
        )?;
        Ok(changed == 1)
    }

    /// Number of transactions for an owner
    pub fn count(&self, owner: UserId) -> TrackerResult<usize> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM transactions WHERE user_id = ?1",
            [owner.get()],
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }
}

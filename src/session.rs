// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::models::{
    Account, Category, CategoryKind, LedgerError, Transaction, TxKind,
};
use crate::store::KvStore;

pub const KEY_ACCOUNTS: &str = "accounts";
pub const KEY_CATEGORIES: &str = "categories";
pub const KEY_TRANSACTIONS: &str = "transactions";

/// Owns the three ledger collections for the lifetime of one process. All
/// mutation goes through here; engine functions only ever see immutable
/// borrows of the collections.
pub struct Session {
    pub accounts: Vec<Account>,
    pub categories: Vec<Category>,
    pub transactions: Vec<Transaction>,
    store: Box<dyn KvStore>,
}

impl Session {
    /// Reads the persisted blobs. A missing or undecodable blob degrades to
    /// an empty collection; reconciliation re-seeds the registries after.
    pub fn load(store: Box<dyn KvStore>) -> Self {
        let accounts = read_blob(store.as_ref(), KEY_ACCOUNTS);
        let categories = read_blob(store.as_ref(), KEY_CATEGORIES);
        let transactions = read_blob(store.as_ref(), KEY_TRANSACTIONS);
        Self {
            accounts,
            categories,
            transactions,
            store,
        }
    }

    /// Additive merge of seed registry entries: anything already persisted
    /// wins, even if the seed definition has since changed. Safe to re-run.
    pub fn reconcile(&mut self, seed_accounts: &[Account], seed_categories: &[Category]) {
        let mut changed = false;
        for seed in seed_accounts {
            if !self.accounts.iter().any(|a| a.id == seed.id) {
                self.accounts.push(seed.clone());
                changed = true;
            }
        }
        for seed in seed_categories {
            if !self.categories.iter().any(|c| c.id == seed.id) {
                self.categories.push(seed.clone());
                changed = true;
            }
        }
        if changed {
            self.persist();
        }
    }

    pub fn account(&self, id: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id == id)
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Validates and records a new transaction at the front of the log.
    pub fn add_transaction(
        &mut self,
        date: NaiveDate,
        amount_cents: i64,
        kind: TxKind,
        note: Option<String>,
    ) -> Result<Uuid, LedgerError> {
        match &kind {
            TxKind::Income { category, .. } => {
                self.check_category(category.as_deref(), CategoryKind::Income)?
            }
            TxKind::Expense { category, .. } => {
                self.check_category(category.as_deref(), CategoryKind::Expense)?
            }
            TxKind::Transfer { .. } => {}
        }
        let tx = Transaction::new(date, amount_cents, kind, note)?;
        let id = tx.id;
        self.transactions.insert(0, tx);
        self.persist();
        Ok(id)
    }

    /// Hard delete by id. Returns whether anything was removed.
    pub fn delete_transaction(&mut self, id: Uuid) -> bool {
        let before = self.transactions.len();
        self.transactions.retain(|t| t.id != id);
        let removed = self.transactions.len() != before;
        if removed {
            self.persist();
        }
        removed
    }

    /// Prepends already-decoded records without validation or deduplication.
    /// Rows with dangling references are inert for balance computation.
    pub fn import_transactions(&mut self, parsed: Vec<Transaction>) {
        self.transactions.splice(0..0, parsed);
        self.persist();
    }

    fn check_category(
        &self,
        category: Option<&str>,
        expected: CategoryKind,
    ) -> Result<(), LedgerError> {
        let Some(id) = category else { return Ok(()) };
        let cat = self
            .category(id)
            .ok_or_else(|| LedgerError::UnknownCategory(id.to_string()))?;
        if cat.kind != expected {
            return Err(LedgerError::CategoryKindMismatch {
                id: id.to_string(),
                expected,
                actual: cat.kind,
            });
        }
        Ok(())
    }

    /// Rewrites all three blobs. Fire-and-forget: a failed write leaves the
    /// in-memory state authoritative for the rest of the session.
    fn persist(&mut self) {
        if let Err(e) = self.try_persist() {
            tracing::warn!("State not saved: {e:#}");
        }
    }

    fn try_persist(&mut self) -> anyhow::Result<()> {
        let accounts = serde_json::to_vec(&self.accounts)?;
        let categories = serde_json::to_vec(&self.categories)?;
        let transactions = serde_json::to_vec(&self.transactions)?;
        self.store.set(KEY_ACCOUNTS, &accounts)?;
        self.store.set(KEY_CATEGORIES, &categories)?;
        self.store.set(KEY_TRANSACTIONS, &transactions)?;
        Ok(())
    }
}

fn read_blob<T: DeserializeOwned>(store: &dyn KvStore, key: &str) -> Vec<T> {
    match store.get(key) {
        Ok(Some(bytes)) => match serde_json::from_slice(&bytes) {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!("Undecodable '{key}' blob, starting empty: {e}");
                Vec::new()
            }
        },
        Ok(None) => Vec::new(),
        Err(e) => {
            tracing::warn!("Could not read '{key}': {e:#}");
            Vec::new()
        }
    }
}

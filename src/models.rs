// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Amount must be positive, got {0} cents")]
    NonPositiveAmount(i64),
    #[error("Transfer source and destination are both '{0}'")]
    SelfTransfer(String),
    #[error("Category '{0}' not found")]
    UnknownCategory(String),
    #[error("Category '{id}' is {actual:?}, expected {expected:?}")]
    CategoryKindMismatch {
        id: String,
        expected: CategoryKind,
        actual: CategoryKind,
    },
    #[error("Payment method '{0}' is not mapped to an account")]
    UnknownPaymentMethod(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub kind: AccountKind,
}

/// Account kind is immutable once created; a cash account carries a signed
/// opening balance, a credit account a limit and an opening debt (owed).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AccountKind {
    Cash {
        opening_cents: i64,
    },
    Credit {
        limit_cents: i64,
        opening_debt_cents: i64,
    },
}

impl Account {
    pub fn cash(id: impl Into<String>, name: impl Into<String>, opening_cents: i64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: AccountKind::Cash { opening_cents },
        }
    }

    pub fn credit(
        id: impl Into<String>,
        name: impl Into<String>,
        limit_cents: i64,
        opening_debt_cents: i64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: AccountKind::Credit {
                limit_cents,
                opening_debt_cents,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub kind: CategoryKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryKind {
    Expense,
    Income,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: CategoryKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
        }
    }
}

/// A single ledger event. The kind discriminant carries the per-variant
/// account references so that an income can never name a source account and
/// a transfer can never name a category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub date: NaiveDate,
    pub amount_cents: i64,
    #[serde(flatten)]
    pub kind: TxKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TxKind {
    Income {
        account_to: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        category: Option<String>,
    },
    Expense {
        account_from: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        category: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        payment_method: Option<String>,
    },
    Transfer {
        account_from: String,
        account_to: String,
    },
}

impl Transaction {
    /// Validates amount positivity and transfer endpoints; reference checks
    /// against the registries happen in the session, and not at all on
    /// import.
    pub fn new(
        date: NaiveDate,
        amount_cents: i64,
        kind: TxKind,
        note: Option<String>,
    ) -> Result<Self, LedgerError> {
        if amount_cents <= 0 {
            return Err(LedgerError::NonPositiveAmount(amount_cents));
        }
        if let TxKind::Transfer {
            account_from,
            account_to,
        } = &kind
        {
            if account_from == account_to {
                return Err(LedgerError::SelfTransfer(account_from.clone()));
            }
        }
        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            date,
            amount_cents,
            kind,
            note,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn account_from(&self) -> Option<&str> {
        match &self.kind {
            TxKind::Income { .. } => None,
            TxKind::Expense { account_from, .. } | TxKind::Transfer { account_from, .. } => {
                Some(account_from)
            }
        }
    }

    pub fn account_to(&self) -> Option<&str> {
        match &self.kind {
            TxKind::Income { account_to, .. } | TxKind::Transfer { account_to, .. } => {
                Some(account_to)
            }
            TxKind::Expense { .. } => None,
        }
    }

    pub fn category(&self) -> Option<&str> {
        match &self.kind {
            TxKind::Income { category, .. } | TxKind::Expense { category, .. } => {
                category.as_deref()
            }
            TxKind::Transfer { .. } => None,
        }
    }

    pub fn payment_method(&self) -> Option<&str> {
        match &self.kind {
            TxKind::Expense { payment_method, .. } => payment_method.as_deref(),
            _ => None,
        }
    }

    pub fn is_expense(&self) -> bool {
        matches!(self.kind, TxKind::Expense { .. })
    }
}

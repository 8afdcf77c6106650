// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use csv::{QuoteStyle, ReaderBuilder, WriterBuilder};
use std::io::{Read, Write};
use uuid::Uuid;

use crate::models::{Transaction, TxKind};

pub const HEADER: [&str; 9] = [
    "id",
    "type",
    "date",
    "amountCents",
    "accountFromId",
    "accountToId",
    "categoryId",
    "paymentMethod",
    "note",
];

const TAG_INCOME: &str = "INGRESO";
const TAG_EXPENSE: &str = "GASTO";
const TAG_TRANSFER: &str = "TRANSFERENCIA";

/// One record per line, comma-delimited, never quoted; embedded commas in
/// free-text fields are rewritten to semicolons before serialization. Empty
/// string denotes an absent optional field.
pub fn write_transactions<W: Write>(out: W, transactions: &[Transaction]) -> Result<()> {
    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .from_writer(out);
    wtr.write_record(HEADER)?;
    for tx in transactions {
        let tag = match tx.kind {
            TxKind::Income { .. } => TAG_INCOME,
            TxKind::Expense { .. } => TAG_EXPENSE,
            TxKind::Transfer { .. } => TAG_TRANSFER,
        };
        wtr.write_record([
            tx.id.to_string(),
            tag.to_string(),
            tx.date.to_string(),
            tx.amount_cents.to_string(),
            sanitize(tx.account_from().unwrap_or_default()),
            sanitize(tx.account_to().unwrap_or_default()),
            sanitize(tx.category().unwrap_or_default()),
            sanitize(tx.payment_method().unwrap_or_default()),
            sanitize(tx.note.as_deref().unwrap_or_default()),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Best-effort decode, favoring data preservation over strictness: a missing
/// id gets a fresh one, an unparseable amount coerces to zero (inert in the
/// balance fold), an unparseable date falls back to `today`. Only a row
/// whose type tag matches no variant is dropped, with a warning.
pub fn read_transactions<R: Read>(input: R, today: NaiveDate) -> Result<Vec<Transaction>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input);

    let mut parsed = Vec::new();
    for result in rdr.records() {
        let rec = result.context("Unreadable row")?;
        let field = |i: usize| rec.get(i).unwrap_or("").trim().to_string();
        let opt = |i: usize| Some(field(i)).filter(|s| !s.is_empty());

        let kind = match field(1).as_str() {
            TAG_INCOME => TxKind::Income {
                account_to: field(5),
                category: opt(6),
            },
            TAG_EXPENSE => TxKind::Expense {
                account_from: field(4),
                category: opt(6),
                payment_method: opt(7),
            },
            TAG_TRANSFER => TxKind::Transfer {
                account_from: field(4),
                account_to: field(5),
            },
            other => {
                tracing::warn!("Skipping row with unknown type tag '{other}'");
                continue;
            }
        };

        let id = field(0).parse::<Uuid>().unwrap_or_else(|_| Uuid::new_v4());
        let date = field(2).parse::<NaiveDate>().unwrap_or_else(|_| {
            tracing::warn!("Row {id} has no usable date, using {today}");
            today
        });
        let amount_cents = field(3).parse::<i64>().unwrap_or(0);
        let now = Utc::now();
        parsed.push(Transaction {
            id,
            date,
            amount_cents,
            kind,
            note: opt(8),
            created_at: now,
            updated_at: now,
        });
    }
    Ok(parsed)
}

fn sanitize(field: &str) -> String {
    field.replace(',', ";").replace(['\r', '\n'], " ")
}

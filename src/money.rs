// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result, anyhow};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Parse free-form decimal input ("123.45", "7", "0.5") into integer cents.
/// More than two fractional digits is rejected rather than rounded.
pub fn parse_cents(s: &str) -> Result<i64> {
    let d = s
        .trim()
        .parse::<Decimal>()
        .with_context(|| format!("Invalid amount '{}'", s))?;
    let scaled = d * Decimal::ONE_HUNDRED;
    if !scaled.fract().is_zero() {
        return Err(anyhow!("Amount '{}' has sub-cent precision", s));
    }
    scaled
        .trunc()
        .to_i64()
        .ok_or_else(|| anyhow!("Amount '{}' out of range", s))
}

pub fn fmt_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{}{}.{:02}", sign, abs / 100, abs % 100)
}

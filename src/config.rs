// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use crate::models::{Account, Category, CategoryKind};

/// Seed registries and engine wiring. Loaded from the platform config dir
/// when present, otherwise the compiled defaults apply. The payment-method
/// map is an explicit tag -> account-id table; no name matching happens at
/// transaction time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_seed_accounts")]
    pub seed_accounts: Vec<Account>,
    #[serde(default = "default_seed_categories")]
    pub seed_categories: Vec<Category>,
    #[serde(default = "default_liquid_ids")]
    pub liquid_account_ids: Vec<String>,
    #[serde(default = "default_payment_methods")]
    pub payment_methods: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed_accounts: default_seed_accounts(),
            seed_categories: default_seed_categories(),
            liquid_account_ids: default_liquid_ids(),
            payment_methods: default_payment_methods(),
        }
    }
}

impl Config {
    /// Every liquid id and every payment-method target must name a seed
    /// account. Checked once at load so nothing is fuzzy at runtime.
    pub fn validate(&self) -> Result<()> {
        let known = |id: &str| self.seed_accounts.iter().any(|a| a.id == id);
        for id in &self.liquid_account_ids {
            if !known(id) {
                return Err(anyhow!("Liquid account '{}' is not a seed account", id));
            }
        }
        for (method, id) in &self.payment_methods {
            if !known(id) {
                return Err(anyhow!(
                    "Payment method '{}' maps to unknown account '{}'",
                    method,
                    id
                ));
            }
        }
        Ok(())
    }

    pub fn account_for_method(&self, method: &str) -> Option<&str> {
        self.payment_methods.get(method).map(String::as_str)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from("com.alphavelocity", "Billfold", "billfold")
        .context("Could not determine platform-specific config dir")?;
    Ok(proj.config_dir().join("config.json"))
}

pub fn load_or_default() -> Result<Config> {
    let path = config_path()?;
    let cfg = if path.exists() {
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("Read config {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Parse config {}", path.display()))?
    } else {
        Config::default()
    };
    cfg.validate()?;
    Ok(cfg)
}

fn default_seed_accounts() -> Vec<Account> {
    vec![
        Account::cash("wallet", "Wallet", 0),
        Account::cash("checking", "Checking", 0),
        Account::cash("savings", "Savings", 0),
        Account::credit("card", "Credit Card", 0, 0),
    ]
}

fn default_seed_categories() -> Vec<Category> {
    vec![
        Category::new("groceries", "Groceries", CategoryKind::Expense),
        Category::new("transport", "Transport", CategoryKind::Expense),
        Category::new("housing", "Housing", CategoryKind::Expense),
        Category::new("leisure", "Leisure", CategoryKind::Expense),
        Category::new("health", "Health", CategoryKind::Expense),
        Category::new("salary", "Salary", CategoryKind::Income),
        Category::new("other-income", "Other Income", CategoryKind::Income),
    ]
}

fn default_liquid_ids() -> Vec<String> {
    vec!["wallet".into(), "checking".into()]
}

fn default_payment_methods() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("cash".to_string(), "wallet".to_string()),
        ("debit".to_string(), "checking".to_string()),
        ("credit".to_string(), "card".to_string()),
    ])
}

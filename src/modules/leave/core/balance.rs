// Balance ledger: remaining and used days per employee and category.
//
// Invariants
// - remaining + used stays constant for an account.
// - A debit never drives remaining below zero; a failed debit or credit
//   leaves the account untouched.

use crate::modules::leave::core::policy::Policy;
use crate::modules::leave::core::request::LeaveCategory;
use crate::shared::core::primitives::EmployeeId;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("no balance account for {employee_id}")]
    UnknownAccount { employee_id: EmployeeId },

    #[error("Insufficient {category} balance (Available: {available}, Requested: {requested})")]
    InsufficientBalance {
        category: LeaveCategory,
        available: u32,
        requested: u32,
    },

    #[error("cannot restore {requested} {category} days, only {used} used")]
    CreditExceedsUsed {
        category: LeaveCategory,
        used: u32,
        requested: u32,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    pub remaining: u32,
    pub used: u32,
}

pub type BalanceSheet = BTreeMap<LeaveCategory, Balance>;

#[derive(Debug, Clone, Default)]
pub struct BalanceLedger {
    accounts: HashMap<EmployeeId, BalanceSheet>,
}

impl BalanceLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens (or resets) the employee's account at full policy entitlement.
    pub fn open(&mut self, employee_id: impl Into<EmployeeId>, policy: &Policy) {
        let sheet = LeaveCategory::ALL
            .into_iter()
            .map(|category| {
                (
                    category,
                    Balance {
                        remaining: policy.entitlement(category),
                        used: 0,
                    },
                )
            })
            .collect();
        self.accounts.insert(employee_id.into(), sheet);
    }

    pub fn sheet(&self, employee_id: &str) -> Option<&BalanceSheet> {
        self.accounts.get(employee_id)
    }

    pub fn balance(&self, employee_id: &str, category: LeaveCategory) -> Option<Balance> {
        self.sheet(employee_id)
            .and_then(|sheet| sheet.get(&category))
            .copied()
    }

    /// Remaining days, zero when the account does not exist.
    pub fn remaining(&self, employee_id: &str, category: LeaveCategory) -> u32 {
        self.balance(employee_id, category)
            .map(|b| b.remaining)
            .unwrap_or(0)
    }

    pub fn debit(
        &mut self,
        employee_id: &str,
        category: LeaveCategory,
        days: u32,
    ) -> Result<Balance, LedgerError> {
        let balance = self.account_mut(employee_id, category)?;
        let remaining = balance
            .remaining
            .checked_sub(days)
            .ok_or(LedgerError::InsufficientBalance {
                category,
                available: balance.remaining,
                requested: days,
            })?;
        balance.remaining = remaining;
        balance.used += days;
        Ok(*balance)
    }

    pub fn credit(
        &mut self,
        employee_id: &str,
        category: LeaveCategory,
        days: u32,
    ) -> Result<Balance, LedgerError> {
        let balance = self.account_mut(employee_id, category)?;
        let used = balance
            .used
            .checked_sub(days)
            .ok_or(LedgerError::CreditExceedsUsed {
                category,
                used: balance.used,
                requested: days,
            })?;
        balance.used = used;
        balance.remaining += days;
        Ok(*balance)
    }

    fn account_mut(
        &mut self,
        employee_id: &str,
        category: LeaveCategory,
    ) -> Result<&mut Balance, LedgerError> {
        self.accounts
            .get_mut(employee_id)
            .and_then(|sheet| sheet.get_mut(&category))
            .ok_or_else(|| LedgerError::UnknownAccount {
                employee_id: employee_id.to_string(),
            })
    }
}

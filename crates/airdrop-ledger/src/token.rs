//! # Token Collaborator
//!
//! The ledger does no token accounting of its own. It reads its vault
//! balance and asks a [`TokenLedger`] to move funds; that trait is the
//! whole surface it depends on.
//!
//! [`InMemoryToken`] is the reference collaborator: a fixed-supply,
//! ERC-20-style balance table minted to a deployer at construction. All
//! balance changes go through one `parking_lot::Mutex`, so a transfer is
//! atomic with respect to every other transfer and balance read.

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use airdrop_core::{Address, Amount};

use crate::error::TokenError;

/// The two token operations the claim ledger consumes.
pub trait TokenLedger: Send + Sync {
    /// Current balance of `holder` (zero for unknown accounts).
    fn balance_of(&self, holder: &Address) -> Amount;

    /// Move `amount` from `from` to `to`. Either the whole transfer
    /// happens or nothing does.
    fn transfer(&self, from: &Address, to: &Address, amount: Amount) -> Result<(), TokenError>;
}

impl<T: TokenLedger + ?Sized> TokenLedger for Arc<T> {
    fn balance_of(&self, holder: &Address) -> Amount {
        (**self).balance_of(holder)
    }

    fn transfer(&self, from: &Address, to: &Address, amount: Amount) -> Result<(), TokenError> {
        (**self).transfer(from, to, amount)
    }
}

/// Serializable state of an [`InMemoryToken`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSnapshot {
    pub name: String,
    pub symbol: String,
    pub total_supply: Amount,
    /// Non-zero balances only, keyed by holder.
    pub balances: BTreeMap<Address, Amount>,
}

/// Fixed-supply in-memory token.
#[derive(Debug)]
pub struct InMemoryToken {
    name: String,
    symbol: String,
    total_supply: Amount,
    balances: Mutex<BTreeMap<Address, Amount>>,
}

impl InMemoryToken {
    /// Mint `supply` to `deployer`.
    pub fn new(
        name: impl Into<String>,
        symbol: impl Into<String>,
        deployer: Address,
        supply: Amount,
    ) -> Self {
        let mut balances = BTreeMap::new();
        if !supply.is_zero() {
            balances.insert(deployer, supply);
        }
        Self {
            name: name.into(),
            symbol: symbol.into(),
            total_supply: supply,
            balances: Mutex::new(balances),
        }
    }

    /// Rebuild from a snapshot. The supply is recomputed from the balances
    /// and must match the recorded total.
    pub fn from_snapshot(snapshot: TokenSnapshot) -> Result<Self, TokenError> {
        let sum = snapshot
            .balances
            .values()
            .try_fold(Amount::ZERO, |acc, b| acc.checked_add(*b))
            .ok_or_else(|| TokenError::Rejected("balance sum overflows".into()))?;
        if sum != snapshot.total_supply {
            return Err(TokenError::Rejected(format!(
                "balances sum to {sum}, snapshot records supply {}",
                snapshot.total_supply
            )));
        }
        Ok(Self {
            name: snapshot.name,
            symbol: snapshot.symbol,
            total_supply: snapshot.total_supply,
            balances: Mutex::new(snapshot.balances),
        })
    }

    pub fn snapshot(&self) -> TokenSnapshot {
        TokenSnapshot {
            name: self.name.clone(),
            symbol: self.symbol.clone(),
            total_supply: self.total_supply,
            balances: self.balances.lock().clone(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn total_supply(&self) -> Amount {
        self.total_supply
    }
}

impl TokenLedger for InMemoryToken {
    fn balance_of(&self, holder: &Address) -> Amount {
        self.balances
            .lock()
            .get(holder)
            .copied()
            .unwrap_or(Amount::ZERO)
    }

    fn transfer(&self, from: &Address, to: &Address, amount: Amount) -> Result<(), TokenError> {
        let mut balances = self.balances.lock();

        let available = balances.get(from).copied().unwrap_or(Amount::ZERO);
        let remaining = available
            .checked_sub(amount)
            .ok_or(TokenError::InsufficientBalance {
                holder: *from,
                requested: amount,
                available,
            })?;
        if from == to || amount.is_zero() {
            return Ok(());
        }
        let credited = balances
            .get(to)
            .copied()
            .unwrap_or(Amount::ZERO)
            .checked_add(amount)
            .ok_or(TokenError::Overflow(*to))?;

        if remaining.is_zero() {
            balances.remove(from);
        } else {
            balances.insert(*from, remaining);
        }
        balances.insert(*to, credited);
        Ok(())
    }
}

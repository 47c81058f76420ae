//! Linear-refill rate limit for bridge mints and burns.
//!
//! A bucket holds up to `max_limit` units. Spending lowers `current_limit`;
//! it refills at `max_limit / DURATION` units per second and is full again
//! at most `DURATION` seconds after the last update.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Uint128;

use crate::error::ContractError;

/// Refill window in seconds (24 hours).
pub const DURATION: u64 = 86_400;

#[cw_serde]
#[derive(Default)]
pub struct RateLimit {
    pub max_limit: Uint128,
    pub current_limit: Uint128,
    pub rate_per_second: Uint128,
    /// Block time in seconds of the last spend or limit change.
    pub last_update: u64,
}

impl RateLimit {
    /// Budget available at `now`.
    pub fn effective_limit(&self, now: u64) -> Uint128 {
        if self.current_limit == self.max_limit {
            return self.max_limit;
        }
        let elapsed = now.saturating_sub(self.last_update);
        if elapsed >= DURATION {
            return self.max_limit;
        }
        let refilled = self
            .current_limit
            .saturating_add(self.rate_per_second.saturating_mul(Uint128::from(elapsed)));
        refilled.min(self.max_limit)
    }

    /// Moves the bucket to a new maximum, shifting the available budget by
    /// the same difference.
    pub fn set_max(&mut self, new_max: Uint128, now: u64) {
        let old_max = self.max_limit;
        let current = self.effective_limit(now);

        self.current_limit = if new_max < old_max {
            current.saturating_sub(old_max - new_max)
        } else {
            // current <= old_max, so this never exceeds new_max
            current.saturating_add(new_max - old_max)
        };
        self.max_limit = new_max;
        self.rate_per_second = new_max / Uint128::from(DURATION);
        self.last_update = now;
    }

    /// Spends `amount` from the budget available at `now`.
    pub fn consume(
        &mut self,
        amount: Uint128,
        now: u64,
        direction: &str,
    ) -> Result<(), ContractError> {
        let available = self.effective_limit(now);
        if amount > available {
            return Err(ContractError::LimitExceeded {
                direction: direction.to_string(),
                available,
                requested: amount,
            });
        }
        self.current_limit = available - amount;
        self.last_update = now;
        Ok(())
    }
}

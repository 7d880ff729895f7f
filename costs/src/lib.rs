#![deny(missing_docs)]
//! Interface crate to unify how verification costs are passed and retrieved.
//!
//! Every hashing step of an MMR inclusion check is counted here, so callers
//! can bound and meter work per request without instrumenting the verifier.

pub mod context;

use std::ops::{Add, AddAssign};

pub use context::{CostContext, CostResult, CostsExt};

/// Hash invocations performed by an operation.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct OperationCost {
    /// How many times two digests were combined into one.
    pub hash_pair_calls: u32,
    /// How many times a sequence of digests was folded into one.
    pub hash_many_calls: u32,
    /// Total number of digests absorbed by sequence hashing.
    pub hash_many_inputs: u32,
}

impl OperationCost {
    /// Helper function to build default `OperationCost` with different
    /// `hash_pair_calls`.
    pub fn with_hash_pair_calls(hash_pair_calls: u32) -> Self {
        OperationCost {
            hash_pair_calls,
            ..Default::default()
        }
    }

    /// Cost of a single sequence hash over `inputs` digests.
    pub fn with_hash_many(inputs: u32) -> Self {
        OperationCost {
            hash_many_calls: 1,
            hash_many_inputs: inputs,
            ..Default::default()
        }
    }

    /// Returns `true` if no hashing happened at all.
    pub fn is_nothing(&self) -> bool {
        self == &Self::default()
    }

    /// Total number of hash invocations of either kind.
    pub fn hash_calls(&self) -> u32 {
        self.hash_pair_calls + self.hash_many_calls
    }
}

impl Add for OperationCost {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        OperationCost {
            hash_pair_calls: self.hash_pair_calls + rhs.hash_pair_calls,
            hash_many_calls: self.hash_many_calls + rhs.hash_many_calls,
            hash_many_inputs: self.hash_many_inputs + rhs.hash_many_inputs,
        }
    }
}

impl AddAssign for OperationCost {
    fn add_assign(&mut self, rhs: Self) {
        self.hash_pair_calls += rhs.hash_pair_calls;
        self.hash_many_calls += rhs.hash_many_calls;
        self.hash_many_inputs += rhs.hash_many_inputs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map() {
        let initial = CostContext {
            value: 75,
            cost: OperationCost::with_hash_pair_calls(3),
        };

        let mapped = initial.map(|x| x + 25);
        assert_eq!(
            mapped,
            CostContext {
                value: 100,
                cost: OperationCost::with_hash_pair_calls(3),
            }
        );
    }

    #[test]
    fn test_flat_map() {
        let initial = CostContext {
            value: 75,
            cost: OperationCost::with_hash_pair_calls(3),
        };

        let mapped = initial.flat_map(|x| CostContext {
            value: x + 25,
            cost: OperationCost::with_hash_many(4),
        });
        assert_eq!(
            mapped,
            CostContext {
                value: 100,
                cost: OperationCost {
                    hash_pair_calls: 3,
                    hash_many_calls: 1,
                    hash_many_inputs: 4,
                },
            }
        );
    }

    #[test]
    fn test_no_add_early_return_keeps_cost() {
        fn run(fail: bool) -> CostResult<u8, &'static str> {
            let mut cost = OperationCost::with_hash_pair_calls(2);
            let step = if fail { Err("boom") } else { Ok(1u8) };
            let value = crate::cost_return_on_error_no_add!(&cost, step);
            cost += OperationCost::with_hash_many(1);
            Ok(value).wrap_with_cost(cost)
        }

        assert_eq!(run(false).value, Ok(1));
        assert_eq!(run(false).cost.hash_calls(), 3);
        let failed = run(true);
        assert_eq!(failed.value, Err("boom"));
        assert_eq!(failed.cost, OperationCost::with_hash_pair_calls(2));
    }

    #[test]
    fn test_is_nothing() {
        assert!(OperationCost::default().is_nothing());
        assert!(!OperationCost::with_hash_many(0).is_nothing());
    }
}

//! Values tagged with the hashing spent on them.

use crate::OperationCost;

/// A result together with the hash invocations it took to reach.
#[must_use]
#[derive(Debug, Eq, PartialEq)]
pub struct CostContext<T> {
    /// The computed value.
    pub value: T,
    /// Hashing spent computing it.
    pub cost: OperationCost,
}

impl<T> CostContext<T> {
    /// Move the cost into `acc` and return the bare value.
    pub fn unwrap_add_cost(self, acc: &mut OperationCost) -> T {
        *acc += self.cost;
        self.value
    }

    /// Transform the value; the cost is unchanged.
    pub fn map<B>(self, f: impl FnOnce(T) -> B) -> CostContext<B> {
        CostContext {
            value: f(self.value),
            cost: self.cost,
        }
    }

    /// Chain a costed step; the result carries both costs.
    pub fn flat_map<B>(self, f: impl FnOnce(T) -> CostContext<B>) -> CostContext<B> {
        let mut cost = self.cost;
        let value = f(self.value).unwrap_add_cost(&mut cost);
        CostContext { value, cost }
    }
}

/// A fallible costed computation.
pub type CostResult<T, E> = CostContext<Result<T, E>>;

/// Tag any value with a cost.
pub trait CostsExt: Sized {
    /// Pair `self` with `cost`.
    fn wrap_with_cost(self, cost: OperationCost) -> CostContext<Self> {
        CostContext { value: self, cost }
    }
}

impl<T> CostsExt for T {}

/// `?` for a plain `Result` inside a cost-tracked function: on `Err`,
/// return it tagged with the cost accumulated so far.
#[macro_export]
macro_rules! cost_return_on_error_no_add {
    ( &$cost:ident, $($body:tt)+ ) => {
        {
            use $crate::CostsExt;
            let result = { $($body)+ };
            match result {
                Ok(x) => x,
                Err(e) => return Err(e).wrap_with_cost($cost),
            }
        }
    };
}

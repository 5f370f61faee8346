/*!
# Weight Operations

Weighted algorithms do not rely on operator overloading of the weight type. Instead they
receive an explicit capability implementing [`WeightOps`], which provides the neutral values
and *checked* arithmetic they need. Overflow is reported as [`GraphError::Overflow`] instead of
wrapping silently.

Two capabilities are provided:
- [`CheckedWeights`] for primitive integers (and everything implementing the `num` checked traits),
- [`FloatWeights`] for `f32`/`f64`, where a non-finite result of finite operands counts as overflow.

```
use wgraphs::prelude::*;

let ops = CheckedWeights;
assert_eq!(WeightOps::<u8>::checked_add(&ops, &200, &50), Ok(250));
assert_eq!(WeightOps::<u8>::checked_add(&ops, &200, &60), Err(GraphError::Overflow));
```
*/

use num::traits::{Bounded, CheckedAdd, CheckedSub, Float, One, Zero};

use crate::error::{GraphError, Result};

/// Numeric capability required by weighted algorithms.
///
/// The trait is object safe; algorithms take it as `&dyn WeightOps<W>`.
pub trait WeightOps<W> {
    /// Neutral element of addition
    fn zero(&self) -> W;

    /// Weight assumed for edges that were inserted without a weight
    fn one(&self) -> W;

    /// Sentinel used as "infinite" capacity
    fn max_value(&self) -> W;

    /// Returns `a + b` or [`GraphError::Overflow`]
    fn checked_add(&self, a: &W, b: &W) -> Result<W>;

    /// Returns `a - b` or [`GraphError::Overflow`]
    fn checked_sub(&self, a: &W, b: &W) -> Result<W>;
}

/// Checked arithmetic for integer weights
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckedWeights;

impl<W> WeightOps<W> for CheckedWeights
where
    W: Zero + One + Bounded + CheckedAdd + CheckedSub,
{
    fn zero(&self) -> W {
        W::zero()
    }

    fn one(&self) -> W {
        W::one()
    }

    fn max_value(&self) -> W {
        W::max_value()
    }

    fn checked_add(&self, a: &W, b: &W) -> Result<W> {
        a.checked_add(b).ok_or(GraphError::Overflow)
    }

    fn checked_sub(&self, a: &W, b: &W) -> Result<W> {
        a.checked_sub(b).ok_or(GraphError::Overflow)
    }
}

/// Arithmetic for floating point weights; infinity is the max-sentinel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FloatWeights;

impl FloatWeights {
    fn check<W: Float>(a: W, b: W, result: W) -> Result<W> {
        if result.is_nan() || (result.is_infinite() && a.is_finite() && b.is_finite()) {
            Err(GraphError::Overflow)
        } else {
            Ok(result)
        }
    }
}

impl<W> WeightOps<W> for FloatWeights
where
    W: Float,
{
    fn zero(&self) -> W {
        W::zero()
    }

    fn one(&self) -> W {
        W::one()
    }

    fn max_value(&self) -> W {
        W::infinity()
    }

    fn checked_add(&self, a: &W, b: &W) -> Result<W> {
        Self::check(*a, *b, *a + *b)
    }

    fn checked_sub(&self, a: &W, b: &W) -> Result<W> {
        Self::check(*a, *b, *a - *b)
    }
}

//! Binary arithmetic (`add`, `sub`, `mul`), division and fixed-exponent power.
//!
//! Division has no rule of its own: `div(a, b)` is built as `mul(a, pow(b, -1))`,
//! so its gradients come from the product and power rules.

pub mod add;
pub mod div;
pub mod mul;
pub mod pow;
pub mod sub;

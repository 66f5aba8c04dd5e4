//! The norm parameter `p` that shapes circles and vision.

use std::fmt;

use crate::{GridError, GridResult};

/// Shape of a grid "circle".
///
/// `p = 0` is not a norm mathematically; it is kept as the named
/// [`Norm::Cross`] case: orthogonal-only reach along the four cardinals.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Norm {
    /// Centre plus straight lines along N, E, S, W.
    Cross,
    /// `|Δx|^p + |Δy|^p ≤ r^p` for a finite `p > 0`.
    Lp(f64),
    /// `max(|Δx|, |Δy|) ≤ r`: a square.
    Chebyshev,
}

impl Norm {
    pub const MANHATTAN: Norm = Norm::Lp(1.0);
    pub const EUCLIDEAN: Norm = Norm::Lp(2.0);

    /// Map a raw `p` onto its regime: `0` → cross, `+∞` → Chebyshev,
    /// finite positive → Lp.  Negative and NaN values are rejected.
    pub fn from_p(p: f64) -> GridResult<Norm> {
        if p == 0.0 {
            Ok(Norm::Cross)
        } else if p == f64::INFINITY {
            Ok(Norm::Chebyshev)
        } else if p.is_finite() && p > 0.0 {
            Ok(Norm::Lp(p))
        } else {
            Err(GridError::InvalidNorm(p))
        }
    }

    /// The raw `p` this norm stands for.
    pub fn p(self) -> f64 {
        match self {
            Norm::Cross     => 0.0,
            Norm::Lp(p)     => p,
            Norm::Chebyshev => f64::INFINITY,
        }
    }

    /// Does the offset `(dx, dy)` lie inside the radius-`radius` ball?
    ///
    /// Only meaningful for the box-enumerated regimes; for [`Norm::Cross`]
    /// it answers "is the offset on an axis within reach".
    pub fn contains(self, dx: i32, dy: i32, radius: i32) -> bool {
        let (ax, ay) = (dx.unsigned_abs(), dy.unsigned_abs());
        let r = radius.unsigned_abs();
        if radius < 0 || ax > r || ay > r {
            return false;
        }
        match self {
            Norm::Cross     => ax == 0 || ay == 0,
            Norm::Chebyshev => true,
            Norm::Lp(p)     => {
                f64::from(ax).powf(p) + f64::from(ay).powf(p) <= f64::from(r).powf(p)
            }
        }
    }
}

impl fmt::Display for Norm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Norm::Cross     => write!(f, "cross"),
            Norm::Lp(p)     => write!(f, "L{p}"),
            Norm::Chebyshev => write!(f, "L∞"),
        }
    }
}

//! The fixed function catalog.
//!
//! A closed enum rather than string dispatch: adding a function means adding
//! a variant and one arm per lookup table, and the compiler points at every
//! site that needs updating. String keys survive only at the serialization
//! boundary (`key`/`from_key`).

use std::f64::consts::PI;

/// Declared domain interval of a catalog function.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    #[inline]
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn contains(&self, x: f64) -> bool {
        self.min <= x && x <= self.max
    }

    #[inline]
    pub fn clamp(&self, x: f64) -> f64 {
        x.clamp(self.min, self.max)
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max - self.min
    }
}

/// Catalog entry: display name, declared domain, convexity tag.
///
/// The convexity tag is informational only; nothing verifies it.
#[derive(Clone, Copy, Debug)]
pub struct FunctionSpec {
    pub name: &'static str,
    pub domain: Interval,
    pub convex: bool,
}

/// The catalog of scalar functions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FunctionId {
    /// x²
    X2,
    /// e^x
    Exp,
    /// -ln(x), x > 0
    NegLog,
    /// |x|
    Abs,
    /// max(0, x)
    Relu,
    /// -x²
    NegX2,
    /// x³
    X3,
    /// sin(x)
    Sin,
    /// sign(x)·|x|^(2/3)
    X23,
    /// √|x|
    SqrtAbs,
    /// x²·sin(1/x), 0 at x = 0
    X2Sin1X,
    /// ln(x), x > 0
    LogX,
    /// √x, x ≥ 0
    SqrtX,
}

impl FunctionId {
    pub const ALL: [FunctionId; 13] = [
        FunctionId::X2,
        FunctionId::Exp,
        FunctionId::NegLog,
        FunctionId::Abs,
        FunctionId::Relu,
        FunctionId::NegX2,
        FunctionId::X3,
        FunctionId::Sin,
        FunctionId::X23,
        FunctionId::SqrtAbs,
        FunctionId::X2Sin1X,
        FunctionId::LogX,
        FunctionId::SqrtX,
    ];

    /// Stable string key used at the serialization boundary.
    pub fn key(self) -> &'static str {
        match self {
            FunctionId::X2 => "x2",
            FunctionId::Exp => "exp",
            FunctionId::NegLog => "neglog",
            FunctionId::Abs => "abs",
            FunctionId::Relu => "relu",
            FunctionId::NegX2 => "negx2",
            FunctionId::X3 => "x3",
            FunctionId::Sin => "sin",
            FunctionId::X23 => "x23",
            FunctionId::SqrtAbs => "sqrtabs",
            FunctionId::X2Sin1X => "x2sin1x",
            FunctionId::LogX => "logx",
            FunctionId::SqrtX => "sqrtx",
        }
    }

    pub fn from_key(key: &str) -> Option<FunctionId> {
        FunctionId::ALL.into_iter().find(|id| id.key() == key)
    }

    pub fn spec(self) -> FunctionSpec {
        match self {
            FunctionId::X2 => FunctionSpec {
                name: "x²",
                domain: Interval::new(-3.0, 3.0),
                convex: true,
            },
            FunctionId::Exp => FunctionSpec {
                name: "e^x",
                domain: Interval::new(-2.0, 2.0),
                convex: true,
            },
            FunctionId::NegLog => FunctionSpec {
                name: "-log(x)",
                domain: Interval::new(0.1, 3.0),
                convex: true,
            },
            FunctionId::Abs => FunctionSpec {
                name: "|x|",
                domain: Interval::new(-3.0, 3.0),
                convex: true,
            },
            FunctionId::Relu => FunctionSpec {
                name: "max(0,x)",
                domain: Interval::new(-2.0, 3.0),
                convex: true,
            },
            FunctionId::NegX2 => FunctionSpec {
                name: "-x²",
                domain: Interval::new(-2.0, 2.0),
                convex: false,
            },
            FunctionId::X3 => FunctionSpec {
                name: "x³",
                domain: Interval::new(-2.0, 2.0),
                convex: false,
            },
            FunctionId::Sin => FunctionSpec {
                name: "sin(x)",
                domain: Interval::new(-PI, PI),
                convex: false,
            },
            FunctionId::X23 => FunctionSpec {
                name: "x^(2/3)",
                domain: Interval::new(-2.0, 2.0),
                convex: false,
            },
            FunctionId::SqrtAbs => FunctionSpec {
                name: "√|x|",
                domain: Interval::new(-2.0, 2.0),
                convex: true,
            },
            FunctionId::X2Sin1X => FunctionSpec {
                name: "x²sin(1/x)",
                domain: Interval::new(-0.5, 0.5),
                convex: false,
            },
            FunctionId::LogX => FunctionSpec {
                name: "log(x)",
                domain: Interval::new(0.1, 3.0),
                convex: true,
            },
            FunctionId::SqrtX => FunctionSpec {
                name: "√x",
                domain: Interval::new(0.0, 3.0),
                convex: true,
            },
        }
    }

    /// Evaluate at `x`.
    ///
    /// `None` marks a point where the formula itself is undefined (log at
    /// non-positive argument, square root of a negative); callers drop such
    /// samples. The declared plot domain is not enforced here.
    pub fn evaluate(self, x: f64) -> Option<f64> {
        match self {
            FunctionId::X2 => Some(x * x),
            FunctionId::Exp => Some(x.exp()),
            FunctionId::NegLog => (x > 0.0).then(|| -x.ln()),
            FunctionId::Abs => Some(x.abs()),
            FunctionId::Relu => Some(x.max(0.0)),
            FunctionId::NegX2 => Some(-(x * x)),
            FunctionId::X3 => Some(x * x * x),
            FunctionId::Sin => Some(x.sin()),
            FunctionId::X23 => Some(x.signum() * x.abs().powf(2.0 / 3.0)),
            FunctionId::SqrtAbs => Some(x.abs().sqrt()),
            FunctionId::X2Sin1X => {
                if x == 0.0 {
                    Some(0.0)
                } else {
                    Some(x * x * (1.0 / x).sin())
                }
            }
            FunctionId::LogX => (x > 0.0).then(|| x.ln()),
            FunctionId::SqrtX => (x >= 0.0).then(|| x.sqrt()),
        }
    }
}

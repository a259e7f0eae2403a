pub mod collinear;
pub mod cramer;
pub mod flags;
pub mod gauss;
pub mod hypot;
mod relations;
pub mod stabilized;

use std::fmt;

pub use collinear::{analyze_collinear_segments, representative_point};
pub use cramer::{CramerBaseline, CramerTolerant};
pub use flags::FlagClassifier;
pub use gauss::GaussElimination;
pub use hypot::CrossHypot;
pub use relations::{IntersectionType, Relation, SegmentRelations};
pub use stabilized::CramerStabilized;

use crate::geometry::Segment;
use crate::math::{binary_exponent, scale_by_power_of_two, Point2, Vector2};

/// Common interface of every segment intersection solver.
pub trait SegmentSolver {
    /// Stable identifier used in reports.
    fn name(&self) -> &'static str;

    /// Classifies the pair `(s1, s2)`.
    ///
    /// `point` is written only when it is supplied and the relation carries
    /// a point (see [`Relation::has_point`]). Never panics; invalid input maps
    /// to a "no relation" value.
    fn classify(&self, s1: &Segment, s2: &Segment, point: Option<&mut Point2>) -> Relation;
}

/// Identifier of each available solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SolverKind {
    CrossHypot,
    CramerBaseline,
    CramerStabilized,
    CramerTolerant,
    FlagClassifier,
    GaussElimination,
}

impl SolverKind {
    /// Every solver, in report order.
    pub const ALL: [Self; 6] = [
        Self::CrossHypot,
        Self::CramerBaseline,
        Self::CramerStabilized,
        Self::CramerTolerant,
        Self::FlagClassifier,
        Self::GaussElimination,
    ];

    /// The solver whose output the accuracy harness treats as ground truth.
    pub const REFERENCE: Self = Self::GaussElimination;

    /// Implementation behind this identifier.
    #[must_use]
    pub fn solver(self) -> &'static dyn SegmentSolver {
        match self {
            Self::CrossHypot => &CrossHypot,
            Self::CramerBaseline => &CramerBaseline,
            Self::CramerStabilized => &CramerStabilized,
            Self::CramerTolerant => &CramerTolerant,
            Self::FlagClassifier => &FlagClassifier,
            Self::GaussElimination => &GaussElimination,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        self.solver().name()
    }

    /// Shorthand for `self.solver().classify(..)`.
    pub fn classify(self, s1: &Segment, s2: &Segment, point: Option<&mut Point2>) -> Relation {
        self.solver().classify(s1, s2, point)
    }
}

impl fmt::Display for SolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether `numerator / denominator` falls outside `[0, 1]`, decided
/// without dividing.
pub(crate) fn outside_unit_interval(numerator: f64, denominator: f64) -> bool {
    if denominator > 0.0 {
        numerator < 0.0 || numerator > denominator
    } else {
        numerator > 0.0 || numerator < denominator
    }
}

/// The vectors every solver works with, `a = s1.p2 - s1.p1`,
/// `b = s2.p1 - s2.p2` and `c = s1.p1 - s2.p1`, multiplied by one power of
/// two so that their largest component lies in `[1, 2)`.
///
/// Segment parameters are ratios of products of these components. The
/// common factor cancels from every ratio, while the products stay clear
/// of underflow at tiny coordinates and of overflow at huge ones.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ScaledSystem {
    pub(crate) a: Vector2,
    pub(crate) b: Vector2,
    pub(crate) c: Vector2,
    exponent: i32,
}

impl ScaledSystem {
    /// Returns `None` if any of the three vectors is not finite, which
    /// covers every non-finite coordinate as well as differences of finite
    /// coordinates that overflow.
    pub(crate) fn new(s1: &Segment, s2: &Segment) -> Option<Self> {
        let a = s1.direction();
        let b = s2.p1 - s2.p2;
        let c = s1.p1 - s2.p1;
        if [a, b, c].iter().flatten().any(|x| !x.is_finite()) {
            return None;
        }

        let exponent = binary_exponent(a.amax().max(b.amax()).max(c.amax()));
        let scale = |v: Vector2| v.map(|x| scale_by_power_of_two(x, -exponent));
        Some(Self {
            a: scale(a),
            b: scale(b),
            c: scale(c),
            exponent,
        })
    }

    /// Applies the system's scale factor to `x`.
    pub(crate) fn rescale(&self, x: f64) -> f64 {
        scale_by_power_of_two(x, -self.exponent)
    }

    pub(crate) fn rescale_vector(&self, v: &Vector2) -> Vector2 {
        v.map(|x| self.rescale(x))
    }

    /// The system of the pair with its operands exchanged.
    pub(crate) fn swapped(self) -> Self {
        Self {
            a: -self.b,
            b: -self.a,
            c: -self.c,
            exponent: self.exponent,
        }
    }
}

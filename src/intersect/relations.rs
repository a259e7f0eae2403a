use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign};

/// Legacy three-state classification of a segment pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntersectionType {
    /// Parallel lines, or invalid input.
    NoIntersection,
    /// The lines meet at a point lying within both segments.
    BoundedIntersection,
    /// The lines meet, but outside at least one of the segments.
    UnboundedIntersection,
}

impl fmt::Display for IntersectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NoIntersection => "NoIntersection",
            Self::BoundedIntersection => "BoundedIntersection",
            Self::UnboundedIntersection => "UnboundedIntersection",
        };
        f.write_str(name)
    }
}

/// Set of independent relation flags between two segments.
///
/// - `LINES_INTERSECT`: the infinite extensions share at least one point.
/// - `SEGMENTS_INTERSECT`: the finite segments share at least one point.
/// - `PARALLEL`: the directions are parallel. Combined with
///   `LINES_INTERSECT` it marks collinear segments.
///
/// Non-parallel lines always meet, so the empty set only ever signals
/// invalid input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SegmentRelations(u8);

impl SegmentRelations {
    pub const NO_RELATION: Self = Self(0);
    pub const LINES_INTERSECT: Self = Self(0x1);
    pub const SEGMENTS_INTERSECT: Self = Self(0x2);
    pub const PARALLEL: Self = Self(0x4);

    const NAMES: [(Self, &'static str); 3] = [
        (Self::LINES_INTERSECT, "LinesIntersect"),
        (Self::SEGMENTS_INTERSECT, "SegmentsIntersect"),
        (Self::PARALLEL, "Parallel"),
    ];

    /// Raw bit representation.
    #[must_use]
    pub fn bits(self) -> u8 {
        self.0
    }

    /// Returns `true` if every flag of `other` is also set in `self`.
    #[must_use]
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub fn lines_intersect(self) -> bool {
        self.contains(Self::LINES_INTERSECT)
    }

    #[must_use]
    pub fn segments_intersect(self) -> bool {
        self.contains(Self::SEGMENTS_INTERSECT)
    }

    #[must_use]
    pub fn is_parallel(self) -> bool {
        self.contains(Self::PARALLEL)
    }

    /// Parallel segments lying on the same line.
    #[must_use]
    pub fn is_collinear(self) -> bool {
        self.contains(Self::PARALLEL | Self::LINES_INTERSECT)
    }

    /// Reduces the flags to the legacy three-state model.
    ///
    /// The empty set and `PARALLEL` alone map to `NoIntersection`; any set
    /// with `SEGMENTS_INTERSECT` is bounded; the rest is unbounded.
    #[must_use]
    pub fn to_intersection_type(self) -> IntersectionType {
        if self.segments_intersect() {
            IntersectionType::BoundedIntersection
        } else if self.lines_intersect() {
            IntersectionType::UnboundedIntersection
        } else {
            IntersectionType::NoIntersection
        }
    }
}

impl BitOr for SegmentRelations {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for SegmentRelations {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for SegmentRelations {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl BitAndAssign for SegmentRelations {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl fmt::Display for SegmentRelations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("NoRelation");
        }
        let mut first = true;
        for (flag, name) in Self::NAMES {
            if self.contains(flag) {
                if !first {
                    f.write_str(" | ")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}

/// Result of any solver, whichever classification family it reports in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    Legacy(IntersectionType),
    Flags(SegmentRelations),
}

impl Relation {
    /// The legacy three-state view of this relation.
    #[must_use]
    pub fn outcome(self) -> IntersectionType {
        match self {
            Self::Legacy(kind) => kind,
            Self::Flags(flags) => flags.to_intersection_type(),
        }
    }

    /// Whether the solver writes an output point for this relation.
    ///
    /// Flag-based solvers write a representative point for every non-empty
    /// set, including parallel pairs. Legacy solvers only write one when the
    /// lines meet.
    #[must_use]
    pub fn has_point(self) -> bool {
        match self {
            Self::Legacy(kind) => kind != IntersectionType::NoIntersection,
            Self::Flags(flags) => !flags.is_empty(),
        }
    }

    /// Whether two relations classify the pair the same way.
    ///
    /// Two flag sets must match exactly; any other combination is compared
    /// on the three-state reduction.
    #[must_use]
    pub fn agrees_with(self, other: Self) -> bool {
        match (self, other) {
            (Self::Flags(a), Self::Flags(b)) => a == b,
            _ => self.outcome() == other.outcome(),
        }
    }
}

impl From<IntersectionType> for Relation {
    fn from(kind: IntersectionType) -> Self {
        Self::Legacy(kind)
    }
}

impl From<SegmentRelations> for Relation {
    fn from(flags: SegmentRelations) -> Self {
        Self::Flags(flags)
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Legacy(kind) => kind.fmt(f),
            Self::Flags(flags) => flags.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINES: SegmentRelations = SegmentRelations::LINES_INTERSECT;
    const SEGMENTS: SegmentRelations = SegmentRelations::SEGMENTS_INTERSECT;
    const PARALLEL: SegmentRelations = SegmentRelations::PARALLEL;

    #[test]
    fn flag_algebra() {
        let both = LINES | SEGMENTS;
        assert!(both.contains(LINES));
        assert!(both.contains(SEGMENTS));
        assert!(!both.contains(PARALLEL));
        assert_eq!(both & LINES, LINES);
        assert_eq!(both.bits(), 0x3);

        let mut flags = SegmentRelations::NO_RELATION;
        assert!(flags.is_empty());
        flags |= PARALLEL;
        flags |= LINES;
        assert!(flags.is_collinear());
        flags &= PARALLEL;
        assert!(!flags.is_collinear());
        assert!(flags.is_parallel());
    }

    #[test]
    fn reduction_to_three_states() {
        use IntersectionType::*;
        assert_eq!(SegmentRelations::NO_RELATION.to_intersection_type(), NoIntersection);
        assert_eq!(PARALLEL.to_intersection_type(), NoIntersection);
        assert_eq!(LINES.to_intersection_type(), UnboundedIntersection);
        assert_eq!((PARALLEL | LINES).to_intersection_type(), UnboundedIntersection);
        assert_eq!((LINES | SEGMENTS).to_intersection_type(), BoundedIntersection);
        assert_eq!(
            (PARALLEL | LINES | SEGMENTS).to_intersection_type(),
            BoundedIntersection
        );
    }

    #[test]
    fn agreement_rules() {
        let collinear = Relation::from(PARALLEL | LINES);
        let crossing = Relation::from(LINES);
        assert!(!collinear.agrees_with(crossing));
        assert!(collinear.agrees_with(Relation::from(
            IntersectionType::UnboundedIntersection
        )));
        assert!(Relation::from(PARALLEL).agrees_with(Relation::from(
            IntersectionType::NoIntersection
        )));
        assert!(!Relation::from(PARALLEL).agrees_with(Relation::from(
            SegmentRelations::NO_RELATION
        )));
    }

    #[test]
    fn point_availability() {
        assert!(Relation::from(PARALLEL).has_point());
        assert!(!Relation::from(SegmentRelations::NO_RELATION).has_point());
        assert!(!Relation::from(IntersectionType::NoIntersection).has_point());
        assert!(Relation::from(IntersectionType::UnboundedIntersection).has_point());
    }

    #[test]
    fn display_names() {
        assert_eq!(SegmentRelations::NO_RELATION.to_string(), "NoRelation");
        assert_eq!(
            (PARALLEL | LINES | SEGMENTS).to_string(),
            "LinesIntersect | SegmentsIntersect | Parallel"
        );
        assert_eq!(
            Relation::from(IntersectionType::BoundedIntersection).to_string(),
            "BoundedIntersection"
        );
    }
}

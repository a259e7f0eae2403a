use crate::geometry::Segment;

/// Which preset subset a curated case belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PresetKind {
    /// Parallel or collinear pairs, plus cases that are nearly so.
    Parallel,
    NonParallel,
}

/// A named, curated segment pair.
#[derive(Debug, Clone, PartialEq)]
pub struct PresetCase {
    pub label: String,
    /// `[x1, y1, x2, y2]` of the first segment followed by the second.
    pub coords: [f64; 8],
    pub kind: PresetKind,
}

impl PresetCase {
    #[must_use]
    pub fn new(label: impl Into<String>, coords: [f64; 8], kind: PresetKind) -> Self {
        Self {
            label: label.into(),
            coords,
            kind,
        }
    }

    /// The two segments described by `coords`.
    #[must_use]
    pub fn segments(&self) -> (Segment, Segment) {
        let [x1, y1, x2, y2, x3, y3, x4, y4] = self.coords;
        (
            Segment::from_coords(x1, y1, x2, y2),
            Segment::from_coords(x3, y3, x4, y4),
        )
    }
}

/// The built-in curated cases.
///
/// Covers textbook bounded/unbounded/parallel pairs, nearly vertical and
/// nearly horizontal crossings, a long vertical segment, collinear pairs
/// (disjoint, touching, nested), a near-parallel pair known to break naive
/// solvers, and crossings at the 1e-10 and 1e-18 scales.
#[must_use]
#[allow(clippy::excessive_precision, clippy::unreadable_literal)]
pub fn default_presets() -> Vec<PresetCase> {
    use PresetKind::{NonParallel, Parallel};

    vec![
        PresetCase::new(
            "01. Textbook: Parallel",
            [1.0, 1.0, 3.0, 4.0, 5.0, 6.0, 7.0, 9.0],
            Parallel,
        ),
        PresetCase::new(
            "02. Textbook: Unbounded",
            [1.0, 1.0, 5.0, 5.0, 0.0, 4.0, 3.0, 4.0],
            NonParallel,
        ),
        PresetCase::new(
            "03. Textbook: Bounded",
            [1.0, 1.0, 5.0, 5.0, 0.0, 4.0, 5.0, 4.0],
            NonParallel,
        ),
        PresetCase::new(
            "04. Almost vertical",
            [0.0, 10.0, 20.0000000000001, 10.0, 10.0, 0.0, 10.0, 20.0],
            NonParallel,
        ),
        PresetCase::new(
            "05. Almost horizontal",
            [0.0, 10.0, 20.0, 10.0, 10.0000000000001, 0.0, 10.0, 20.0],
            NonParallel,
        ),
        PresetCase::new(
            "06. Long vertical",
            [
                100.1599256468623,
                100.7861905065196,
                100.1599256468604,
                -9999.78619050651,
                10.0,
                50.0,
                190.0,
                50.0,
            ],
            NonParallel,
        ),
        PresetCase::new(
            "07. Near-parallel regression",
            [
                494.70272621399579,
                -3419.3150119034844,
                484.87413636440681,
                -3439.7415553154151,
                1553.8915715961471,
                -1218.0259905149323,
                589.08872351030004,
                -3223.1546571877006,
            ],
            Parallel,
        ),
        PresetCase::new(
            "08. Collinear disjoint",
            [0.0, 0.0, 4.0, 3.0, 8.0, 6.0, 10.0, 7.5],
            Parallel,
        ),
        PresetCase::new(
            "09. Collinear touching",
            [0.0, 0.0, 4.0, 3.0, 4.0, 3.0, 10.0, 7.5],
            Parallel,
        ),
        PresetCase::new(
            "10. Collinear nested",
            [2.0, 1.0, 1.0, 1.0, -1.0, 1.0, 4.0, 1.0],
            Parallel,
        ),
        PresetCase::new(
            "11. Unit vectors",
            [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0],
            NonParallel,
        ),
        PresetCase::new(
            "12. Tiny vectors near origin",
            [1e-10, 1e-10, 0.0, 1e-10, 1e-10, 1e-10, 1e-10, 0.0],
            NonParallel,
        ),
        PresetCase::new(
            "13. Sub-epsilon vectors near origin",
            [1e-18, 1e-18, 0.0, 1e-18, 1e-18, 1e-18, 1e-18, 0.0],
            NonParallel,
        ),
    ]
}

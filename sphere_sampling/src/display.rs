use glam::DVec3;
use itertools::Itertools as _;

use crate::SamplingMethod;

/// Packed `0xRRGGBBAA` color used for all point sets unless configured otherwise (opaque cyan).
pub const DEFAULT_POINT_COLOR: u32 = 0x00FF_FFFF;

/// A labelled batch of points, the unit of data handed to a [`PointCloudSink`].
#[derive(Clone, Debug, PartialEq)]
pub struct PointSet {
    pub label: String,
    pub positions: Vec<DVec3>,

    /// Packed `0xRRGGBBAA`.
    pub color: u32,
}

/// Grid of views, each showing the point set with the given label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewLayout {
    pub rows: Vec<Vec<String>>,

    /// Whether side panels of the viewer should start out collapsed.
    pub collapse_panels: bool,
}

impl ViewLayout {
    /// One row per distinct sample count (first occurrence wins), one column per method.
    pub fn grid(sample_counts: &[usize], methods: &[SamplingMethod]) -> Self {
        Self {
            rows: sample_counts
                .iter()
                .unique()
                .map(|&num_samples| {
                    methods
                        .iter()
                        .map(|method| method.label(num_samples))
                        .collect()
                })
                .collect(),
            collapse_panels: true,
        }
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn num_columns(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Row & column of the view showing `label`.
    pub fn cell_of(&self, label: &str) -> Option<(usize, usize)> {
        self.rows.iter().enumerate().find_map(|(row, labels)| {
            labels
                .iter()
                .position(|l| l == label)
                .map(|column| (row, column))
        })
    }
}

/// Receiver of generated point clouds.
pub trait PointCloudSink {
    /// Called once before any points are logged.
    fn send_layout(&mut self, layout: &ViewLayout);

    fn log_points(&mut self, points: PointSet);
}

/// Keeps everything in memory.
#[derive(Default)]
pub struct RecordingSink {
    pub layouts: Vec<ViewLayout>,
    pub point_sets: Vec<PointSet>,
}

impl RecordingSink {
    pub fn point_set(&self, label: &str) -> Option<&PointSet> {
        self.point_sets.iter().find(|set| set.label == label)
    }
}

impl PointCloudSink for RecordingSink {
    fn send_layout(&mut self, layout: &ViewLayout) {
        self.layouts.push(layout.clone());
    }

    fn log_points(&mut self, points: PointSet) {
        self.point_sets.push(points);
    }
}

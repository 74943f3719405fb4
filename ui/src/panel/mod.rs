//! The panel pipeline: grouping, layout packing and per-bucket aggregation.
//!
//! [`build_panel`] is a pure function of `(series, width, height, options)`;
//! the components only render the [`PanelView`] it returns.

use tracing::debug;

use crate::core::config::PanelOptions;
use crate::core::series::Series;

pub mod aggregate;
pub mod grouping;
pub mod layout;

pub use aggregate::{RowValue, TileFill, TileView, TooltipRow};
pub use grouping::{group_series, Bucket, Grouping};
pub use layout::{pack, GridLayout, SizeClass, TileSize, TILE_SIZES};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReason {
    /// The host handed over no series at all.
    NoSeries,
    /// Series exist but none of them resolves to a name.
    NoNamedSeries,
}

/// Series left out of the grid because they have no usable name.
#[derive(Debug, Clone, PartialEq)]
pub struct UnnamedSummary {
    pub ref_ids: Vec<String>,
}

impl UnnamedSummary {
    pub fn count(&self) -> usize {
        self.ref_ids.len()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PanelView {
    Empty(EmptyReason),
    Grid {
        layout: GridLayout,
        tiles: Vec<TileView>,
        unnamed: Option<UnnamedSummary>,
    },
}

pub fn build_panel(
    series: &[Series],
    width: f64,
    height: f64,
    options: &PanelOptions,
) -> PanelView {
    let grouping = group_series(series);

    if grouping.is_empty() {
        let reason = if series.is_empty() {
            EmptyReason::NoSeries
        } else {
            EmptyReason::NoNamedSeries
        };
        debug!(series = series.len(), ?reason, "nothing to lay out");
        return PanelView::Empty(reason);
    }

    let layout = pack(grouping.buckets.len(), width, height);
    debug!(
        buckets = grouping.buckets.len(),
        unnamed = grouping.unnamed.len(),
        size = ?layout.size.class,
        columns = layout.columns,
        rows = layout.rows,
        overflow = layout.overflow,
        "packed status grid"
    );

    let tiles = grouping
        .buckets
        .iter()
        .enumerate()
        .map(|(index, bucket)| aggregate::summarize_bucket(bucket, index))
        .collect();

    let unnamed = (options.show_unnamed_badge && !grouping.unnamed.is_empty()).then(|| {
        UnnamedSummary {
            ref_ids: grouping.unnamed.iter().map(|s| s.ref_id.clone()).collect(),
        }
    });

    PanelView::Grid {
        layout,
        tiles,
        unnamed,
    }
}

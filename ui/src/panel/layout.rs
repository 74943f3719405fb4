//! Responsive packing of square tiles into the panel area.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeClass {
    Xl,
    Lg,
    Md,
    Sm,
    Xs,
}

impl SizeClass {
    pub fn css_class(self) -> &'static str {
        match self {
            SizeClass::Xl => "host-tile--xl",
            SizeClass::Lg => "host-tile--lg",
            SizeClass::Md => "host-tile--md",
            SizeClass::Sm => "host-tile--sm",
            SizeClass::Xs => "host-tile--xs",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileSize {
    pub class: SizeClass,
    /// Edge length in pixels, tiles are square.
    pub width: f64,
    pub radius: f64,
}

/// Presets ordered from largest to smallest.
pub const TILE_SIZES: [TileSize; 5] = [
    TileSize {
        class: SizeClass::Xl,
        width: 96.0,
        radius: 8.0,
    },
    TileSize {
        class: SizeClass::Lg,
        width: 72.0,
        radius: 6.0,
    },
    TileSize {
        class: SizeClass::Md,
        width: 56.0,
        radius: 4.0,
    },
    TileSize {
        class: SizeClass::Sm,
        width: 44.0,
        radius: 3.0,
    },
    TileSize {
        class: SizeClass::Xs,
        width: 32.0,
        radius: 2.0,
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    pub size: TileSize,
    pub columns: usize,
    pub rows: usize,
    /// `None` in overflow mode, the container scrolls instead.
    pub grid_width: Option<f64>,
    pub grid_height: Option<f64>,
    pub overflow: bool,
}

/// Picks the largest preset that fits `count` tiles into `width` x `height`
/// and a column count that keeps the grid square or slightly wide.
pub fn pack(count: usize, width: f64, height: f64) -> GridLayout {
    pack_with(&TILE_SIZES, count, width, height)
}

fn pack_with(presets: &[TileSize], count: usize, width: f64, height: f64) -> GridLayout {
    let width = sanitize(width);
    let height = sanitize(height);
    let largest = presets.first().copied().unwrap_or(TILE_SIZES[0]);
    let smallest = presets.last().copied().unwrap_or(TILE_SIZES[TILE_SIZES.len() - 1]);

    if count == 0 {
        return GridLayout {
            size: largest,
            columns: 0,
            rows: 0,
            grid_width: Some(0.0),
            grid_height: Some(0.0),
            overflow: false,
        };
    }

    for &size in presets {
        let max_cols = (width / size.width).floor() as usize;
        let max_rows = (height / size.width).floor() as usize;
        if max_cols.saturating_mul(max_rows) < count {
            continue;
        }

        let mut columns = max_cols.min(count.div_ceil(max_rows));
        let mut rows = count.div_ceil(columns);
        while columns <= rows && (columns + 1) as f64 * size.width < width {
            columns += 1;
            rows = count.div_ceil(columns);
        }

        return GridLayout {
            size,
            columns,
            rows,
            grid_width: Some(columns as f64 * size.width),
            grid_height: Some(rows as f64 * size.width),
            overflow: false,
        };
    }

    let columns = ((width / smallest.width).floor() as usize).max(1);
    GridLayout {
        size: smallest,
        columns,
        rows: count.div_ceil(columns),
        grid_width: None,
        grid_height: None,
        overflow: true,
    }
}

fn sanitize(extent: f64) -> f64 {
    if extent.is_finite() {
        extent.max(0.0)
    } else {
        0.0
    }
}

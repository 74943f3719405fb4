//! Per-bucket aggregation: representative scalars, tile color and tooltip rows.

use crate::core::display::{DisplayValue, LinkModel};
use crate::core::format;
use crate::core::series::{Field, Series};

use super::grouping::Bucket;

#[derive(Debug, Clone, PartialEq)]
pub enum RowValue {
    Value(DisplayValue),
    NoData,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TooltipRow {
    pub ref_id: String,
    pub value: RowValue,
}

impl TooltipRow {
    /// Formatted value, `None` for the "No Data" row.
    pub fn formatted(&self) -> Option<String> {
        match &self.value {
            RowValue::Value(display) => Some(format::format_display_value(display)),
            RowValue::NoData => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TileFill {
    /// Display value of the highest-ranked series.
    Value(DisplayValue),
    NoData,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TileView {
    pub name: String,
    pub index: usize,
    pub fill: TileFill,
    pub rows: Vec<TooltipRow>,
    pub link: Option<LinkModel>,
}

impl TileView {
    pub fn color(&self) -> Option<&str> {
        match &self.fill {
            TileFill::Value(display) => display.color.as_deref(),
            TileFill::NoData => None,
        }
    }

    pub fn has_data(&self) -> bool {
        matches!(self.fill, TileFill::Value(_))
    }
}

/// Arithmetic mean, NaN when there is nothing to average.
pub fn mean(values: impl IntoIterator<Item = f64>) -> f64 {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), value| (sum + value, count + 1));
    if count == 0 {
        f64::NAN
    } else {
        sum / count as f64
    }
}

/// Precomputed mean when the host supplied one, otherwise the mean of the
/// field's numeric values.
pub fn representative_scalar(field: &Field) -> f64 {
    field
        .precomputed_mean()
        .unwrap_or_else(|| mean(field.numeric_values()))
}

/// Index of the largest scalar. Missing and NaN entries never win; ties keep
/// the first occurrence.
pub fn select_max(scalars: &[Option<f64>]) -> Option<usize> {
    scalars
        .iter()
        .enumerate()
        .filter_map(|(index, scalar)| scalar.filter(|v| !v.is_nan()).map(|v| (index, v)))
        .fold(None, |best: Option<(usize, f64)>, (index, value)| match best {
            Some((_, top)) if top >= value => best,
            _ => Some((index, value)),
        })
        .map(|(index, _)| index)
}

pub fn summarize_bucket(bucket: &Bucket, index: usize) -> TileView {
    let value_fields: Vec<Option<&Field>> =
        bucket.series.iter().map(Series::value_field).collect();
    let scalars: Vec<Option<f64>> = value_fields
        .iter()
        .map(|field| field.map(representative_scalar))
        .collect();

    let rows = bucket
        .series
        .iter()
        .zip(value_fields.iter().zip(&scalars))
        .map(|(series, (field, scalar))| TooltipRow {
            ref_id: series.ref_id.clone(),
            value: match (field, scalar) {
                (Some(field), Some(scalar)) => {
                    RowValue::Value(field.display_processor().apply(*scalar))
                }
                _ => RowValue::NoData,
            },
        })
        .collect();

    let fill = select_max(&scalars)
        .and_then(|top| Some((value_fields[top]?, scalars[top]?)))
        .map(|(field, scalar)| TileFill::Value(field.display_processor().apply(scalar)))
        .unwrap_or(TileFill::NoData);

    TileView {
        name: bucket.name.clone(),
        index,
        fill,
        rows,
        link: resolve_link(bucket, index),
    }
}

/// First link produced by the first series' value field, if any.
fn resolve_link(bucket: &Bucket, index: usize) -> Option<LinkModel> {
    let field = bucket.series.first()?.value_field()?;
    field.link_resolver()?.resolve(index).into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::display::LinkTarget;
    use crate::core::series::{DisplayProcessor, FieldType, LinkResolver};
    use serde_json::json;

    fn tagged(tag: &'static str) -> DisplayProcessor {
        DisplayProcessor::new(move |value| {
            DisplayValue::new(format::format_adaptive(value))
                .with_suffix(" u")
                .with_color(tag)
        })
    }

    fn numeric(ref_id: &str, values: &[f64], tag: &'static str) -> Series {
        let field = Field::number("value", values.iter().copied()).with_display(tagged(tag));
        Series::new(ref_id, vec![Field::time("time", [0]), field])
    }

    fn textual(ref_id: &str) -> Series {
        Series::new(
            ref_id,
            vec![Field::new("msg", FieldType::String, vec![json!("down")])],
        )
    }

    fn bucket(series: Vec<Series>) -> Bucket {
        Bucket {
            name: "host".into(),
            series,
        }
    }

    #[test]
    fn max_series_colors_the_tile() {
        let tile = summarize_bucket(
            &bucket(vec![
                numeric("A", &[2.0, 4.0], "blue"),
                numeric("B", &[6.0, 8.0], "red"),
                textual("C"),
            ]),
            0,
        );

        assert_eq!(tile.color(), Some("red"));
        match &tile.fill {
            TileFill::Value(display) => assert_eq!(display.text, "7"),
            TileFill::NoData => panic!("expected a value"),
        }

        assert_eq!(tile.rows.len(), 3);
        assert_eq!(tile.rows[0].formatted().as_deref(), Some("3 u"));
        assert_eq!(tile.rows[1].formatted().as_deref(), Some("7 u"));
        assert_eq!(tile.rows[2].ref_id, "C");
        assert_eq!(tile.rows[2].value, RowValue::NoData);
    }

    #[test]
    fn precomputed_mean_is_preferred() {
        let field = Field::number("value", [100.0, 200.0]).with_mean(1.5);
        assert_eq!(representative_scalar(&field), 1.5);
        assert_eq!(representative_scalar(&Field::number("v", [1.0, 2.0])), 1.5);
    }

    #[test]
    fn nulls_are_skipped_by_the_mean() {
        let field = Field::new(
            "value",
            FieldType::Number,
            vec![json!(1.0), json!(null), json!(5.0)],
        );
        assert_eq!(representative_scalar(&field), 3.0);
        assert!(representative_scalar(&Field::number("v", [])).is_nan());
    }

    #[test]
    fn nan_and_missing_never_win() {
        assert_eq!(select_max(&[None, Some(f64::NAN), Some(-1.0)]), Some(2));
        assert_eq!(select_max(&[Some(2.0), Some(2.0)]), Some(0));
        assert_eq!(select_max(&[None, Some(f64::NAN)]), None);
        assert_eq!(select_max(&[]), None);
    }

    #[test]
    fn empty_numeric_field_loses_to_real_values() {
        let tile = summarize_bucket(
            &bucket(vec![numeric("A", &[], "grey"), numeric("B", &[0.5], "green")]),
            0,
        );
        assert_eq!(tile.color(), Some("green"));
        assert_eq!(tile.rows[0].formatted().as_deref(), Some("NaN u"));
    }

    #[test]
    fn bucket_without_numbers_has_no_data() {
        let tile = summarize_bucket(&bucket(vec![textual("A"), textual("B")]), 4);
        assert_eq!(tile.fill, TileFill::NoData);
        assert_eq!(tile.color(), None);
        assert!(!tile.has_data());
        assert!(tile.rows.iter().all(|row| row.value == RowValue::NoData));
    }

    #[test]
    fn uncolored_display_still_counts_as_data() {
        let field = Field::number("value", [3.0])
            .with_display(DisplayProcessor::new(|v| DisplayValue::new(v.to_string())));
        let tile = summarize_bucket(&bucket(vec![Series::new("A", vec![field])]), 0);
        assert!(tile.has_data());
        assert_eq!(tile.color(), None);
    }

    #[test]
    fn link_comes_from_first_series_with_bucket_index() {
        let resolver = LinkResolver::new(|index| {
            vec![
                LinkModel::new(format!("https://example.com/{index}"), LinkTarget::Blank),
                LinkModel::new("/ignored", LinkTarget::Same),
            ]
        });
        let linked = Series::new(
            "A",
            vec![Field::number("value", [1.0]).with_links(resolver)],
        );

        let tile = summarize_bucket(&bucket(vec![linked, numeric("B", &[9.0], "red")]), 5);
        let link = tile.link.expect("tile is linked");
        assert_eq!(link.href, "https://example.com/5");
        assert_eq!(link.rel(), Some("noopener noreferrer"));
    }

    #[test]
    fn empty_link_list_leaves_tile_plain() {
        let series = Series::new(
            "A",
            vec![Field::number("value", [1.0]).with_links(LinkResolver::new(|_| Vec::new()))],
        );
        let tile = summarize_bucket(&bucket(vec![series]), 0);
        assert_eq!(tile.link, None);
    }
}

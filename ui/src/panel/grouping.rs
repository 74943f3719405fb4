//! Partitioning of series into named buckets, one bucket per tile.

use std::collections::HashMap;

use crate::core::series::Series;

#[derive(Debug, Clone, PartialEq)]
pub struct Bucket {
    pub name: String,
    pub series: Vec<Series>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grouping {
    /// Named buckets in first-occurrence order.
    pub buckets: Vec<Bucket>,
    /// Series without any usable name; never laid out as a tile.
    pub unnamed: Vec<Series>,
}

impl Grouping {
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn series_count(&self) -> usize {
        self.unnamed.len() + self.buckets.iter().map(|b| b.series.len()).sum::<usize>()
    }
}

/// Name a series is grouped under: explicit name, then the display-name
/// override of its naming field. `None` means the fallback bucket.
pub fn bucket_name(series: &Series) -> Option<&str> {
    series.explicit_name().or_else(|| {
        series
            .naming_field()
            .and_then(|field| field.display_name_override())
    })
}

pub fn group_series(series: &[Series]) -> Grouping {
    let mut grouping = Grouping::default();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for item in series {
        let Some(name) = bucket_name(item) else {
            grouping.unnamed.push(item.clone());
            continue;
        };

        match positions.get(name) {
            Some(&index) => grouping.buckets[index].series.push(item.clone()),
            None => {
                positions.insert(name, grouping.buckets.len());
                grouping.buckets.push(Bucket {
                    name: name.to_string(),
                    series: vec![item.clone()],
                });
            }
        }
    }

    grouping
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::series::{Field, FieldConfig, FieldType};
    use serde_json::json;

    fn frame(ref_id: &str, ds_name: Option<&str>) -> Series {
        let value = Field::number("value", [1.0]).with_config(FieldConfig {
            display_name_from_ds: ds_name.map(str::to_string),
            ..FieldConfig::default()
        });
        Series::new(ref_id, vec![Field::time("time", [0]), value])
    }

    fn ref_ids(series: &[Series]) -> Vec<&str> {
        series.iter().map(|s| s.ref_id.as_str()).collect()
    }

    #[test]
    fn empty_input_groups_to_nothing() {
        let grouping = group_series(&[]);
        assert!(grouping.is_empty());
        assert!(grouping.unnamed.is_empty());
    }

    #[test]
    fn buckets_follow_first_occurrence() {
        let input = vec![
            frame("A", Some("web-02")),
            frame("B", Some("web-01")),
            frame("C", Some("web-02")),
            frame("D", None),
        ];
        let grouping = group_series(&input);

        let names: Vec<_> = grouping.buckets.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["web-02", "web-01"]);
        assert_eq!(ref_ids(&grouping.buckets[0].series), vec!["A", "C"]);
        assert_eq!(ref_ids(&grouping.unnamed), vec!["D"]);
    }

    #[test]
    fn partition_is_exact() {
        let input: Vec<Series> = (0..25)
            .map(|i| {
                let name = match i % 4 {
                    0 => None,
                    n => Some(format!("host-{n}")),
                };
                frame(&format!("Q{i}"), name.as_deref())
            })
            .collect();
        let grouping = group_series(&input);

        assert_eq!(grouping.series_count(), input.len());

        let mut seen: Vec<&str> = grouping
            .buckets
            .iter()
            .flat_map(|b| ref_ids(&b.series))
            .chain(ref_ids(&grouping.unnamed))
            .collect();
        seen.sort_unstable();
        let mut expected = ref_ids(&input);
        expected.sort_unstable();
        assert_eq!(seen, expected);
    }

    #[test]
    fn explicit_name_wins_over_override() {
        let series = frame("A", Some("from-ds")).with_name("explicit");
        let grouping = group_series(&[series]);
        assert_eq!(grouping.buckets[0].name, "explicit");
    }

    #[test]
    fn display_name_beats_name_from_datasource() {
        let value = Field::number("value", [1.0]).with_config(FieldConfig {
            display_name: Some("override".into()),
            display_name_from_ds: Some("from-ds".into()),
            ..FieldConfig::default()
        });
        let series = Series::new("A", vec![value]);
        assert_eq!(bucket_name(&series), Some("override"));
    }

    #[test]
    fn legacy_second_column_names_non_numeric_frames() {
        let label = Field::new("state", FieldType::String, vec![json!("up")]).with_config(
            FieldConfig {
                display_name_from_ds: Some("db-01".into()),
                ..FieldConfig::default()
            },
        );
        let series = Series::new("A", vec![Field::time("time", [0]), label]);
        assert_eq!(bucket_name(&series), Some("db-01"));
    }

    #[test]
    fn first_numeric_field_is_preferred_over_second_column() {
        let label = Field::new("state", FieldType::String, vec![json!("up")]).with_config(
            FieldConfig {
                display_name_from_ds: Some("label".into()),
                ..FieldConfig::default()
            },
        );
        let value = Field::number("value", [2.0]).with_config(FieldConfig {
            display_name_from_ds: Some("numeric".into()),
            ..FieldConfig::default()
        });
        let series = Series::new("A", vec![Field::time("time", [0]), label, value]);
        assert_eq!(bucket_name(&series), Some("numeric"));
    }
}

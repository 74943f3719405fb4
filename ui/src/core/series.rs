//! Tabular query results as handed over by the hosting dashboard.
//!
//! A [`Series`] is one result table. Its [`Field`]s carry raw values plus the
//! host-supplied callables used to format values ([`DisplayProcessor`]) and to
//! build drill-down links ([`LinkResolver`]). Callables are not serialized; when
//! absent they are derived from [`FieldConfig`].

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::display::{DisplayValue, LinkModel};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Number,
    Time,
    String,
    Boolean,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub ref_id: String,
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl Series {
    pub fn new(ref_id: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            name: None,
            ref_id: ref_id.into(),
            fields,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Explicit series name, ignoring blank strings.
    pub fn explicit_name(&self) -> Option<&str> {
        non_blank(self.name.as_deref())
    }

    /// First field of numeric type.
    pub fn value_field(&self) -> Option<&Field> {
        self.fields.iter().find(|field| field.is_numeric())
    }

    /// Field whose config names the series: the first numeric field, or the
    /// second column of a `[time, value]` table when nothing is numeric.
    pub fn naming_field(&self) -> Option<&Field> {
        self.value_field().or_else(|| self.fields.get(1))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default)]
    pub values: Vec<Value>,
    #[serde(default)]
    pub config: FieldConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<FieldState>,
    #[serde(skip)]
    pub display: Option<DisplayProcessor>,
    #[serde(skip)]
    pub links: Option<LinkResolver>,
}

impl Field {
    pub fn new(name: impl Into<String>, field_type: FieldType, values: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            field_type,
            values,
            config: FieldConfig::default(),
            state: None,
            display: None,
            links: None,
        }
    }

    pub fn number(name: impl Into<String>, values: impl IntoIterator<Item = f64>) -> Self {
        Self::new(
            name,
            FieldType::Number,
            values.into_iter().map(Value::from).collect(),
        )
    }

    pub fn time(name: impl Into<String>, values: impl IntoIterator<Item = i64>) -> Self {
        Self::new(
            name,
            FieldType::Time,
            values.into_iter().map(Value::from).collect(),
        )
    }

    pub fn with_config(mut self, config: FieldConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_mean(mut self, mean: f64) -> Self {
        self.state = Some(FieldState {
            calcs: Some(FieldCalcs { mean: Some(mean) }),
        });
        self
    }

    pub fn with_display(mut self, display: DisplayProcessor) -> Self {
        self.display = Some(display);
        self
    }

    pub fn with_links(mut self, links: LinkResolver) -> Self {
        self.links = Some(links);
        self
    }

    pub fn is_numeric(&self) -> bool {
        self.field_type == FieldType::Number
    }

    pub fn precomputed_mean(&self) -> Option<f64> {
        self.state.as_ref()?.calcs.as_ref()?.mean
    }

    /// Display-name override, `displayName` first, then `displayNameFromDS`.
    pub fn display_name_override(&self) -> Option<&str> {
        non_blank(self.config.display_name.as_deref())
            .or_else(|| non_blank(self.config.display_name_from_ds.as_deref()))
    }

    /// Numeric values in column order; nulls and non-numbers are skipped.
    pub fn numeric_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().filter_map(Value::as_f64)
    }

    /// Host processor, or one derived from the field config.
    pub fn display_processor(&self) -> DisplayProcessor {
        self.display
            .clone()
            .unwrap_or_else(|| DisplayProcessor::from_config(&self.config))
    }

    /// Host resolver, or one derived from `config.links` when any are configured.
    pub fn link_resolver(&self) -> Option<LinkResolver> {
        self.links.clone().or_else(|| {
            if self.config.links.is_empty() {
                None
            } else {
                Some(LinkResolver::from_config(&self.config))
            }
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(
        default,
        rename = "displayNameFromDS",
        skip_serializing_if = "Option::is_none"
    )]
    pub display_name_from_ds: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decimals: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thresholds: Option<Thresholds>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<DataLink>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calcs: Option<FieldCalcs>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldCalcs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mean: Option<f64>,
}

/// Ordered color steps. A step applies from its `value` upwards; the step with
/// no value is the base color.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    #[serde(default)]
    pub steps: Vec<ThresholdStep>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdStep {
    #[serde(default)]
    pub value: Option<f64>,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataLink {
    #[serde(default)]
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub target_blank: bool,
}

/// Host callable turning a raw aggregate into formatted text and color.
#[derive(Clone)]
pub struct DisplayProcessor(Rc<dyn Fn(f64) -> DisplayValue>);

impl DisplayProcessor {
    pub fn new(func: impl Fn(f64) -> DisplayValue + 'static) -> Self {
        Self(Rc::new(func))
    }

    pub fn from_config(config: &FieldConfig) -> Self {
        let config = config.clone();
        Self::new(move |value| super::display::process_value(&config, value))
    }

    pub fn apply(&self, value: f64) -> DisplayValue {
        (self.0)(value)
    }
}

impl PartialEq for DisplayProcessor {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for DisplayProcessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DisplayProcessor(..)")
    }
}

/// Host callable producing drill-down links for a tile index.
#[derive(Clone)]
pub struct LinkResolver(Rc<dyn Fn(usize) -> Vec<LinkModel>>);

impl LinkResolver {
    pub fn new(func: impl Fn(usize) -> Vec<LinkModel> + 'static) -> Self {
        Self(Rc::new(func))
    }

    pub fn from_config(config: &FieldConfig) -> Self {
        let links = config.links.clone();
        Self::new(move |index| super::display::interpolate_links(&links, index))
    }

    pub fn resolve(&self, index: usize) -> Vec<LinkModel> {
        (self.0)(index)
    }
}

impl PartialEq for LinkResolver {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for LinkResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LinkResolver(..)")
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_host_frame_shape() {
        let raw = json!({
            "refId": "A",
            "fields": [
                { "name": "time", "type": "time", "values": [1, 2] },
                {
                    "name": "cpu",
                    "type": "number",
                    "values": [0.5, null],
                    "config": { "displayNameFromDS": "web-01", "unit": "%" },
                    "state": { "calcs": { "mean": 0.5 } }
                }
            ]
        });

        let series: Series = serde_json::from_value(raw).expect("valid frame");
        assert_eq!(series.ref_id, "A");
        assert_eq!(series.name, None);

        let value = series.value_field().expect("numeric field");
        assert_eq!(value.name, "cpu");
        assert_eq!(value.display_name_override(), Some("web-01"));
        assert_eq!(value.precomputed_mean(), Some(0.5));
        assert_eq!(value.numeric_values().collect::<Vec<_>>(), vec![0.5]);
    }

    #[test]
    fn unknown_field_types_map_to_other() {
        let field: Field =
            serde_json::from_value(json!({ "name": "blob", "type": "frame" })).unwrap();
        assert_eq!(field.field_type, FieldType::Other);
        assert!(field.values.is_empty());
    }

    #[test]
    fn naming_field_falls_back_to_second_column() {
        let label = Field::new("host", FieldType::String, vec![json!("db-01")]).with_config(
            FieldConfig {
                display_name_from_ds: Some("db-01".into()),
                ..FieldConfig::default()
            },
        );
        let series = Series::new("B", vec![Field::time("time", [1]), label]);

        assert!(series.value_field().is_none());
        assert_eq!(
            series.naming_field().and_then(Field::display_name_override),
            Some("db-01")
        );
    }

    #[test]
    fn blank_names_are_ignored() {
        let series = Series::new("A", vec![]).with_name("   ");
        assert_eq!(series.explicit_name(), None);

        let field = Field::number("v", [1.0]).with_config(FieldConfig {
            display_name: Some(String::new()),
            display_name_from_ds: Some("fallback".into()),
            ..FieldConfig::default()
        });
        assert_eq!(field.display_name_override(), Some("fallback"));
    }

    #[test]
    fn config_links_produce_a_resolver() {
        let plain = Field::number("v", [1.0]);
        assert!(plain.link_resolver().is_none());

        let linked = Field::number("v", [1.0]).with_config(FieldConfig {
            links: vec![DataLink {
                title: "Details".into(),
                url: "/hosts/${__index}".into(),
                target_blank: false,
            }],
            ..FieldConfig::default()
        });
        let links = linked.link_resolver().expect("resolver").resolve(3);
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].href, "/hosts/3");
    }
}

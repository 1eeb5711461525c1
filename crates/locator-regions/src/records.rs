// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Session record sets: the contact-pair table and the localization document.

## Pair table JSON

Either records (one object per pair, columns are the union of keys):

```json
[
  {"label": "LA1-LA2", "stein.region": "CA1", "das.region": null},
  {"label": "LA2-LA3", "das.region": "insula"}
]
```

or columns (every column the same length):

```json
{"label": ["LA1-LA2", "LA2-LA3"], "stein.region": ["CA1", null]}
```

## Localization JSON

```json
{"contacts": {"atlases.whole_brain": {"LA1": "Left CA1", "LA2": "Left CA1"}}}
```
*/

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};

use crate::types::{ColocalizationSkip, ReaderError, ReaderResult};

/// Column holding `"contactA-contactB"` pair labels
pub const LABEL_COLUMN: &str = "label";

/// Atlas key under `contacts` in the localization document
pub const WHOLE_BRAIN_ATLAS: &str = "atlases.whole_brain";

/// One cell of a record set
///
/// Only `Text` can carry a region name; everything else reads as "no
/// information".
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Bool(bool),
    #[default]
    Missing,
}

impl CellValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }
}

impl From<&Value> for CellValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::String(text) => CellValue::Text(text.clone()),
            Value::Number(number) => number
                .as_f64()
                .map(CellValue::Number)
                .unwrap_or(CellValue::Missing),
            Value::Bool(flag) => CellValue::Bool(*flag),
            Value::Null | Value::Array(_) | Value::Object(_) => CellValue::Missing,
        }
    }
}

impl From<&str> for CellValue {
    fn from(text: &str) -> Self {
        CellValue::Text(text.to_string())
    }
}

impl From<String> for CellValue {
    fn from(text: String) -> Self {
        CellValue::Text(text)
    }
}

impl From<f64> for CellValue {
    fn from(number: f64) -> Self {
        CellValue::Number(number)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(CellValue::Missing)
    }
}

impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CellValue::Text(text) => serializer.serialize_str(text),
            CellValue::Number(number) => serializer.serialize_f64(*number),
            CellValue::Bool(flag) => serializer.serialize_bool(*flag),
            CellValue::Missing => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for CellValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(CellValue::from(&value))
    }
}

/// Contact-pair table: `len()` rows, named columns of equal length
///
/// Row `i` is the `i`-th pair of the session; row order is never changed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PairTable {
    row_count: usize,
    columns: BTreeMap<String, Vec<CellValue>>,
}

impl PairTable {
    /// Table with `row_count` rows and no columns yet
    pub fn new(row_count: usize) -> Self {
        Self {
            row_count,
            columns: BTreeMap::new(),
        }
    }

    /// Build from named columns
    ///
    /// # Errors
    ///
    /// `ReaderError::Parse` if the columns differ in length
    pub fn from_columns<I, S>(columns: I) -> ReaderResult<Self>
    where
        I: IntoIterator<Item = (S, Vec<CellValue>)>,
        S: Into<String>,
    {
        let mut table: Option<PairTable> = None;
        for (name, values) in columns {
            let current = table.take().unwrap_or_else(|| PairTable::new(values.len()));
            table = Some(current.with_column(name, values)?);
        }
        Ok(table.unwrap_or_default())
    }

    /// Add or replace a column
    ///
    /// # Errors
    ///
    /// `ReaderError::Parse` if the column length differs from `len()`
    pub fn with_column<S, I, V>(mut self, name: S, values: I) -> ReaderResult<Self>
    where
        S: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        let name = name.into();
        let values: Vec<CellValue> = values.into_iter().map(Into::into).collect();
        if values.len() != self.row_count {
            return Err(ReaderError::Parse(format!(
                "column '{}' has {} rows, expected {}",
                name,
                values.len(),
                self.row_count
            )));
        }
        self.columns.insert(name, values);
        Ok(self)
    }

    /// Build from one JSON object per pair
    ///
    /// Keys missing from a record read as `Missing`.
    pub fn from_records(records: &[Value]) -> ReaderResult<Self> {
        let mut objects: Vec<&Map<String, Value>> = Vec::with_capacity(records.len());
        for (row, record) in records.iter().enumerate() {
            let object = record.as_object().ok_or_else(|| {
                ReaderError::Parse(format!("pair record {} is not an object", row))
            })?;
            objects.push(object);
        }

        let mut columns: BTreeMap<String, Vec<CellValue>> = BTreeMap::new();
        for name in objects.iter().flat_map(|object| object.keys()) {
            if columns.contains_key(name) {
                continue;
            }
            let values = objects
                .iter()
                .map(|object| object.get(name).map(CellValue::from).unwrap_or_default())
                .collect();
            columns.insert(name.clone(), values);
        }

        Ok(Self {
            row_count: objects.len(),
            columns,
        })
    }

    /// Parse a records array or a column object
    pub fn from_json_value(value: &Value) -> ReaderResult<Self> {
        match value {
            Value::Array(records) => Self::from_records(records),
            Value::Object(columns) => {
                let mut parsed: Vec<(String, Vec<CellValue>)> = Vec::with_capacity(columns.len());
                for (name, column) in columns {
                    let cells = column.as_array().ok_or_else(|| {
                        ReaderError::Parse(format!("column '{}' is not an array", name))
                    })?;
                    parsed.push((name.clone(), cells.iter().map(CellValue::from).collect()));
                }
                Self::from_columns(parsed)
            }
            _ => Err(ReaderError::Parse(
                "pair table must be an array of records or an object of columns".to_string(),
            )),
        }
    }

    pub fn from_json_str(json: &str) -> ReaderResult<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_json_value(&value)
    }

    /// Number of contact pairs
    pub fn len(&self) -> usize {
        self.row_count
    }

    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    pub fn column(&self, name: &str) -> Option<&[CellValue]> {
        self.columns.get(name).map(Vec::as_slice)
    }

    pub fn cell(&self, name: &str, row: usize) -> Option<&CellValue> {
        self.columns.get(name).and_then(|values| values.get(row))
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.columns.keys().map(String::as_str)
    }
}

/// Nested localization document for a session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Localization {
    document: Value,
}

impl Localization {
    pub fn from_json_value(document: Value) -> Self {
        Self { document }
    }

    pub fn from_json_str(json: &str) -> ReaderResult<Self> {
        Ok(Self::from_json_value(serde_json::from_str(json)?))
    }

    /// Document holding only a whole-brain atlas
    pub fn from_whole_brain<I, K, V>(contacts: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let atlas: Map<String, Value> = contacts
            .into_iter()
            .map(|(name, region)| (name.into(), region.into()))
            .collect();
        let mut section = Map::new();
        section.insert(WHOLE_BRAIN_ATLAS.to_string(), Value::Object(atlas));
        let mut document = Map::new();
        document.insert("contacts".to_string(), Value::Object(section));
        Self::from_json_value(Value::Object(document))
    }

    pub fn document(&self) -> &Value {
        &self.document
    }

    /// Walk `contacts -> atlases.whole_brain`
    ///
    /// # Errors
    ///
    /// A [`ColocalizationSkip`] naming the first step of the path that is
    /// missing or has the wrong shape
    pub fn whole_brain(&self) -> Result<WholeBrainAtlas, ColocalizationSkip> {
        let contacts = self
            .document
            .get("contacts")
            .ok_or(ColocalizationSkip::MissingContacts)?;
        let atlas = contacts
            .get(WHOLE_BRAIN_ATLAS)
            .ok_or(ColocalizationSkip::MissingAtlas(WHOLE_BRAIN_ATLAS))?
            .as_object()
            .ok_or(ColocalizationSkip::AtlasNotAMapping)?;

        Ok(WholeBrainAtlas {
            regions: atlas
                .iter()
                .map(|(name, region)| (name.clone(), CellValue::from(region)))
                .collect(),
        })
    }
}

/// Contact name -> region, as assigned by the whole-brain atlas
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WholeBrainAtlas {
    regions: HashMap<String, CellValue>,
}

impl WholeBrainAtlas {
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn region(&self, contact: &str) -> Option<&CellValue> {
        self.regions.get(contact)
    }

    /// Region shared by both contacts, if both are mapped to equal values
    pub fn shared_region(&self, first: &str, second: &str) -> Option<&CellValue> {
        let a = self.regions.get(first)?;
        let b = self.regions.get(second)?;
        (a == b).then_some(a)
    }
}

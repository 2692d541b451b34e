//! Firestore typed values and documents.
//!
//! Firestore encodes every field as an object with a single type key
//! (`{"stringValue": "..."}`). Documents are flattened into plain JSON before
//! they are deserialized into [`Article`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use travthru_store::Article;

/// A single typed Firestore value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) enum Value {
    NullValue(()),
    BooleanValue(bool),
    /// 64-bit integer, transmitted as a decimal string.
    IntegerValue(String),
    DoubleValue(f64),
    /// RFC 3339 timestamp.
    TimestampValue(String),
    StringValue(String),
    /// Base64-encoded bytes.
    BytesValue(String),
    ReferenceValue(String),
    GeoPointValue(serde_json::Value),
    ArrayValue(ArrayValue),
    MapValue(MapValue),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub(crate) struct ArrayValue {
    #[serde(default)]
    pub values: Vec<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub(crate) struct MapValue {
    #[serde(default)]
    pub fields: BTreeMap<String, Value>,
}

impl Value {
    /// Convert to plain JSON, dropping Firestore type tags.
    pub(crate) fn into_json(self) -> serde_json::Value {
        use serde_json::Value as Json;

        match self {
            Self::NullValue(()) => Json::Null,
            Self::BooleanValue(b) => Json::Bool(b),
            Self::IntegerValue(raw) => raw
                .parse::<i64>()
                .map_or(Json::String(raw), |n| Json::Number(n.into())),
            Self::DoubleValue(f) => serde_json::Number::from_f64(f).map_or(Json::Null, Json::Number),
            Self::TimestampValue(s)
            | Self::StringValue(s)
            | Self::BytesValue(s)
            | Self::ReferenceValue(s) => Json::String(s),
            Self::GeoPointValue(point) => point,
            Self::ArrayValue(array) => {
                Json::Array(array.values.into_iter().map(Self::into_json).collect())
            }
            Self::MapValue(map) => fields_to_json(map.fields),
        }
    }
}

/// Null fields are dropped so they decode as absent.
fn fields_to_json(fields: BTreeMap<String, Value>) -> serde_json::Value {
    serde_json::Value::Object(
        fields
            .into_iter()
            .filter(|(_, value)| !matches!(value, Value::NullValue(())))
            .map(|(key, value)| (key, value.into_json()))
            .collect(),
    )
}

/// Stored document as returned by `runQuery`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Document {
    /// Full resource name: `projects/{p}/databases/{d}/documents/{collection}/{id}`.
    pub name: String,
    #[serde(default)]
    pub fields: BTreeMap<String, Value>,
}

impl Document {
    /// Document ID (last segment of the resource name).
    pub(crate) fn id(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or_default()
    }

    /// Decode into an [`Article`], taking the ID from the resource name.
    pub(crate) fn into_article(self) -> Result<Article, serde_json::Error> {
        let id = self.id().to_owned();
        let mut article: Article = serde_json::from_value(fields_to_json(self.fields))?;
        article.id = id;
        Ok(article)
    }
}

/// One element of the `runQuery` response stream.
///
/// Entries without a document only carry progress information (`readTime`,
/// `skippedResults`) and are ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct RunQueryResponse {
    #[serde(default)]
    pub document: Option<Document>,
}

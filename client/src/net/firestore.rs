//! Firestore REST wire schema and the post <-> document mapping.
//!
//! SYSTEM CONTEXT
//! ==============
//! `net::store` builds URLs and drives requests; this module owns the JSON
//! shapes only. Typed values use Firestore's externally tagged encoding
//! (`{"stringValue": "..."}`), which maps directly onto a serde enum.
//!
//! Decoding is lenient: documents written by older clients may lack `id`,
//! `tags`, or `createdAt`, and still render.

#[cfg(test)]
#[path = "firestore_test.rs"]
mod firestore_test;

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::post::{NewPost, Post};

pub const FIELD_ID: &str = "id";
pub const FIELD_TITLE: &str = "title";
pub const FIELD_DESCRIPTION: &str = "description";
pub const FIELD_TAGS: &str = "tags";
pub const FIELD_IMAGE: &str = "image";
pub const FIELD_CREATED_AT: &str = "createdAt";

/// Page size used when listing the collection.
pub const LIST_PAGE_SIZE: u32 = 300;

pub type Fields = BTreeMap<String, Value>;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Value {
    NullValue(()),
    BooleanValue(bool),
    /// int64 travels as a decimal string.
    IntegerValue(String),
    DoubleValue(#[serde(with = "double")] f64),
    /// RFC 3339 with up to nanosecond precision.
    TimestampValue(String),
    StringValue(String),
    /// Base64.
    BytesValue(String),
    ReferenceValue(String),
    GeoPointValue(LatLng),
    ArrayValue(ArrayValue),
    MapValue(MapValue),
}

/// Finite doubles travel as JSON numbers; `NaN` and the infinities as the
/// strings `"NaN"`, `"Infinity"` and `"-Infinity"`.
mod double {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Wire {
        Number(f64),
        Text(String),
    }

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_nan() {
            serializer.serialize_str("NaN")
        } else if value.is_infinite() {
            serializer.serialize_str(if value.is_sign_positive() { "Infinity" } else { "-Infinity" })
        } else {
            serializer.serialize_f64(*value)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Wire::deserialize(deserializer)? {
            Wire::Number(n) => Ok(n),
            Wire::Text(text) => match text.as_str() {
                "NaN" => Ok(f64::NAN),
                "Infinity" => Ok(f64::INFINITY),
                "-Infinity" => Ok(f64::NEG_INFINITY),
                other => other.parse().map_err(D::Error::custom),
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ArrayValue {
    #[serde(default)]
    pub values: Vec<Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MapValue {
    #[serde(default)]
    pub fields: Fields,
}

impl Value {
    #[must_use]
    pub fn string(s: impl Into<String>) -> Self {
        Self::StringValue(s.into())
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::StringValue(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::TimestampValue(raw) => DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|ts| ts.with_timezone(&Utc)),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Full resource name, `projects/{p}/databases/{d}/documents/{collection}/{id}`.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub fields: Fields,
}

impl Document {
    /// Last path segment of the resource name.
    #[must_use]
    pub fn short_name(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or_default()
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListDocumentsResponse {
    #[serde(default)]
    pub documents: Vec<Document>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitResponse {
    #[serde(default)]
    pub write_results: Vec<WriteResult>,
    #[serde(default)]
    pub commit_time: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WriteResult {
    /// One entry per field transform, in request order.
    #[serde(default)]
    pub transform_results: Vec<Value>,
}

impl CommitResponse {
    /// Server-assigned `createdAt`: the first transform result, falling back
    /// to the commit time.
    #[must_use]
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.write_results
            .first()
            .and_then(|w| w.transform_results.first())
            .and_then(Value::as_timestamp)
            .or_else(|| {
                let raw = self.commit_time.as_deref()?;
                Value::TimestampValue(raw.to_owned()).as_timestamp()
            })
    }
}

/// One element of a `:runQuery` response stream. Items without `document`
/// only report progress.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunQueryItem {
    #[serde(default)]
    pub document: Option<Document>,
}

#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub code: u16,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: String,
}

/// Extract the provider's error message from a failed response body, falling
/// back to the raw text.
#[must_use]
pub fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) if !envelope.error.message.is_empty() => envelope.error.message,
        Ok(envelope) if !envelope.error.status.is_empty() => envelope.error.status,
        _ => body.trim().to_owned(),
    }
}

/// Document fields for a new post. `createdAt` is left to the server transform.
#[must_use]
pub fn encode_post(post: &NewPost) -> Fields {
    let mut fields = Fields::new();
    fields.insert(FIELD_ID.to_owned(), Value::string(&post.id));
    fields.insert(FIELD_TITLE.to_owned(), Value::string(&post.title));
    fields.insert(FIELD_DESCRIPTION.to_owned(), Value::string(&post.description));
    fields.insert(
        FIELD_TAGS.to_owned(),
        Value::ArrayValue(ArrayValue { values: post.tags.iter().map(Value::string).collect() }),
    );
    if let Some(image) = &post.image {
        fields.insert(FIELD_IMAGE.to_owned(), Value::string(image));
    }
    fields
}

/// Map a stored document onto a [`Post`].
#[must_use]
pub fn decode_post(doc: &Document) -> Post {
    let text = |key: &str| {
        doc.fields.get(key).and_then(Value::as_str).unwrap_or_default().to_owned()
    };

    let id = match doc.fields.get(FIELD_ID).and_then(Value::as_str) {
        Some(id) if !id.is_empty() => id.to_owned(),
        _ => doc.short_name().to_owned(),
    };
    let tags = match doc.fields.get(FIELD_TAGS) {
        Some(Value::ArrayValue(array)) => {
            array.values.iter().filter_map(Value::as_str).map(str::to_owned).collect()
        }
        _ => Vec::new(),
    };
    let image = doc
        .fields
        .get(FIELD_IMAGE)
        .and_then(Value::as_str)
        .filter(|url| !url.is_empty())
        .map(str::to_owned);
    let created_at = doc.fields.get(FIELD_CREATED_AT).and_then(Value::as_timestamp);

    Post {
        id,
        title: text(FIELD_TITLE),
        description: text(FIELD_DESCRIPTION),
        tags,
        image,
        created_at,
    }
}

/// `documents:commit` body creating `document_name`, failing if it already
/// exists, with `createdAt` set to the server's request time.
#[must_use]
pub fn commit_body(document_name: &str, post: &NewPost) -> serde_json::Value {
    serde_json::json!({
        "writes": [{
            "update": {
                "name": document_name,
                "fields": encode_post(post),
            },
            "updateTransforms": [{
                "fieldPath": FIELD_CREATED_AT,
                "setToServerValue": "REQUEST_TIME",
            }],
            "currentDocument": { "exists": false },
        }]
    })
}

/// `:runQuery` body matching documents whose `id` field equals `id`.
#[must_use]
pub fn run_query_body(collection: &str, id: &str) -> serde_json::Value {
    serde_json::json!({
        "structuredQuery": {
            "from": [{ "collectionId": collection }],
            "where": {
                "fieldFilter": {
                    "field": { "fieldPath": FIELD_ID },
                    "op": "EQUAL",
                    "value": Value::string(id),
                }
            },
            "limit": 1,
        }
    })
}

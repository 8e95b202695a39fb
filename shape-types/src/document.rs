/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::Number;
use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// Document Type
///
/// Document types represent protocol-agnostic open content that is accessed like JSON data.
/// Open content is useful for modeling unstructured data that has no schema, data that can't be
/// modeled using rigid types, or data that has a schema that evolves outside of the purview of a model.
/// The serialization format of a document is an implementation detail of a protocol.
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    /// JSON object
    Object(HashMap<String, Document>),
    /// JSON array
    Array(Vec<Document>),
    /// JSON number
    Number(Number),
    /// JSON string
    String(String),
    /// JSON boolean
    Bool(bool),
    /// JSON null
    Null,
}

impl From<bool> for Document {
    fn from(value: bool) -> Self {
        Document::Bool(value)
    }
}

impl From<String> for Document {
    fn from(value: String) -> Self {
        Document::String(value)
    }
}

impl From<&str> for Document {
    fn from(value: &str) -> Self {
        Document::String(value.to_owned())
    }
}

impl From<Vec<Document>> for Document {
    fn from(values: Vec<Document>) -> Self {
        Document::Array(values)
    }
}

impl From<HashMap<String, Document>> for Document {
    fn from(values: HashMap<String, Document>) -> Self {
        Document::Object(values)
    }
}

impl From<u64> for Document {
    fn from(value: u64) -> Self {
        Document::Number(Number::PosInt(value))
    }
}

impl From<i64> for Document {
    fn from(value: i64) -> Self {
        Document::Number(Number::NegInt(value))
    }
}

impl From<i32> for Document {
    fn from(value: i32) -> Self {
        Document::Number(Number::NegInt(value as i64))
    }
}

impl Serialize for Document {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Document::Object(obj) => serializer.collect_map(obj.iter()),
            Document::Array(arr) => serializer.collect_seq(arr.iter()),
            Document::Number(number) => number.serialize(serializer),
            Document::String(string) => serializer.serialize_str(string),
            Document::Bool(bool) => serializer.serialize_bool(*bool),
            Document::Null => serializer.serialize_none(),
        }
    }
}

struct DocVisitor;

impl<'de> Visitor<'de> for DocVisitor {
    type Value = Document;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "a JSON-like document")
    }

    fn visit_bool<E>(self, v: bool) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Document::Bool(v))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        if v >= 0 {
            Ok(Document::Number(Number::PosInt(v as u64)))
        } else {
            Ok(Document::Number(Number::NegInt(v)))
        }
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Document::Number(Number::PosInt(v)))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Document::Number(Number::Float(v)))
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Document::String(v.to_owned()))
    }

    fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Document::String(v))
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Document::Null)
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Document::Null)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut out: Vec<Document> = Vec::new();
        while let Some(next) = seq.next_element::<Document>()? {
            out.push(next);
        }
        Ok(Document::Array(out))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut out: HashMap<String, Document> = HashMap::new();
        while let Some((k, v)) = map.next_entry::<String, Document>()? {
            out.insert(k, v);
        }
        Ok(Document::Object(out))
    }
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(DocVisitor)
    }
}

#[cfg(test)]
mod test {
    use super::Document;
    use crate::Number;
    use std::collections::HashMap;

    #[test]
    fn document_agrees_with_serde_json() {
        let mut map: HashMap<String, Document> = HashMap::new();
        map.insert("hello".into(), "world".into());
        map.insert("pos_int".into(), Document::Number(Number::PosInt(1)));
        map.insert("neg_int".into(), Document::Number(Number::NegInt(-1)));
        map.insert("float".into(), Document::Number(Number::Float(0.5)));
        map.insert("true".into(), true.into());
        map.insert("null".into(), Document::Null);
        map.insert(
            "array".into(),
            vec!["a".into(), true.into(), Document::Null].into(),
        );
        let doc = Document::Object(map);

        let value = serde_json::to_value(&doc).expect("serializable");
        let expected: serde_json::Value = serde_json::from_str(
            r#"{
                "hello": "world",
                "pos_int": 1,
                "neg_int": -1,
                "float": 0.5,
                "true": true,
                "null": null,
                "array": ["a", true, null]
            }"#,
        )
        .unwrap();
        assert_eq!(value, expected);

        let back: Document = serde_json::from_value(value).expect("deserializable");
        // NegInt(-1) deserializes back through the i64 visitor; PosInt(1) stays PosInt
        assert_eq!(doc, back);
    }
}

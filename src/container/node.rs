use std::io::Read;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Number, ser::PrettyFormatter};

use crate::error::{DumpError, LoadError};

#[derive(Debug, Clone)]
#[cfg_attr(test, derive(PartialEq))]
pub enum Node {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Node>),
    Object(IndexMap<String, Node>),
}

impl Node {
    /// Parses a whole document. Numbers keep the exact text they were written
    /// with, so integers wider than 64 bits and exponents survive a rewrite.
    pub fn load(mut reader: impl Read) -> Result<Self, LoadError> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        let value: serde_json::Value = serde_json::from_str(&content)?;
        Ok(Self::from_serde_json(value))
    }

    /// Formats the document with `indent` spaces per level. Non-ASCII text is
    /// written as is and no trailing newline is added.
    pub fn to_string_pretty(&self, indent: usize) -> Result<String, DumpError> {
        let indent = vec![b' '; indent];
        let mut buffer = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(
            &mut buffer,
            PrettyFormatter::with_indent(&indent),
        );
        self.serialize(&mut serializer)?;
        String::from_utf8(buffer).map_err(Into::into)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Node::Null => "null",
            Node::Bool(_) => "a boolean",
            Node::Number(_) => "a number",
            Node::String(_) => "a string",
            Node::Array(_) => "an array",
            Node::Object(_) => "an object",
        }
    }

    pub fn object() -> Self {
        Node::Object(IndexMap::new())
    }

    fn from_serde_json(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Node::Null,
            serde_json::Value::Bool(value) => Node::Bool(value),
            serde_json::Value::Number(number) => Node::Number(number),
            serde_json::Value::String(value) => Node::String(value),
            serde_json::Value::Array(values) => {
                Node::Array(values.into_iter().map(Self::from_serde_json).collect())
            }
            serde_json::Value::Object(map) => Node::Object(
                map.into_iter()
                    .map(|(key, value)| (key, Self::from_serde_json(value)))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
impl Node {
    pub fn get(&self, key: &str) -> Option<&Node> {
        match self {
            Node::Object(index_map) => index_map.get(key),
            Node::Null | Node::Bool(_) | Node::Number(_) | Node::String(_) | Node::Array(_) => {
                None
            }
        }
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::String(value)
    }
}

impl Serialize for Node {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Node::Null => serializer.serialize_unit(),
            Node::Bool(value) => value.serialize(serializer),
            Node::Number(number) => number.serialize(serializer),
            Node::String(value) => value.serialize(serializer),
            Node::Array(nodes) => nodes.serialize(serializer),
            Node::Object(index_map) => index_map.serialize(serializer),
        }
    }
}

#[cfg(test)]
const RAW_JSON: &str = r#"{
    "string": "something",
    "int": 123,
    "big": 18446744073709551615,
    "negative": -42,
    "float": 100.3,
    "whole_float": 3.0,
    "bool": true,
    "other_bool": false,
    "null": null,
    "array": [
        1,
        2,
        3.5
    ],
    "empty_array": [],
    "empty_object": {},
    "nested_object": {
        "key": "value"
    }
}"#;

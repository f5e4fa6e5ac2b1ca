//! Parameterized Cypher statements.
//!
//! Values never get spliced into the text: a statement is its template plus a
//! map from parameter name to typed value, checked before it is sent.

use std::collections::{BTreeMap, BTreeSet};

use neo4rs::{query, BoltType, Query};

use crate::client::GraphError;

/// A typed parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
    List(Vec<ParamValue>),
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl<T: Into<ParamValue>> From<Vec<T>> for ParamValue {
    fn from(v: Vec<T>) -> Self {
        Self::List(v.into_iter().map(Into::into).collect())
    }
}

impl From<ParamValue> for BoltType {
    fn from(v: ParamValue) -> Self {
        match v {
            ParamValue::Boolean(b) => b.into(),
            ParamValue::Integer(i) => i.into(),
            ParamValue::Float(f) => f.into(),
            ParamValue::String(s) => s.into(),
            ParamValue::List(items) => items
                .into_iter()
                .map(BoltType::from)
                .collect::<Vec<BoltType>>()
                .into(),
        }
    }
}

/// Statement text plus its named parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    text: String,
    params: BTreeMap<String, ParamValue>,
}

impl Statement {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            params: BTreeMap::new(),
        }
    }

    /// Bind `$name`. Binding the same name again replaces the value.
    pub fn param(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn params(&self) -> &BTreeMap<String, ParamValue> {
        &self.params
    }

    /// Names referenced as `$name` in the text, ignoring quoted literals,
    /// backtick identifiers, and `//` / `/* */` comments.
    pub fn placeholders(&self) -> BTreeSet<&str> {
        let text = self.text.as_str();
        let bytes = text.as_bytes();
        let mut found = BTreeSet::new();
        let mut quote: Option<u8> = None;
        let mut i = 0;

        while i < bytes.len() {
            let b = bytes[i];
            match quote {
                Some(_) if b == b'\\' => {
                    i += 2;
                    continue;
                }
                Some(q) if b == q => quote = None,
                Some(_) => {}
                None if b == b'\'' || b == b'"' || b == b'`' => quote = Some(b),
                None if bytes[i..].starts_with(b"//") => {
                    i = bytes[i..]
                        .iter()
                        .position(|&c| c == b'\n')
                        .map_or(bytes.len(), |off| i + off);
                    continue;
                }
                None if bytes[i..].starts_with(b"/*") => {
                    i = bytes[i + 2..]
                        .windows(2)
                        .position(|w| w == b"*/")
                        .map_or(bytes.len(), |off| i + 2 + off + 2);
                    continue;
                }
                None if b == b'$' => {
                    let start = i + 1;
                    let end = text[start..]
                        .find(|c: char| !(c.is_alphanumeric() || c == '_'))
                        .map_or(text.len(), |off| start + off);
                    if end > start {
                        found.insert(&text[start..end]);
                    }
                    i = end;
                    continue;
                }
                None => {}
            }
            i += 1;
        }
        found
    }

    /// Names used in the text with no bound value.
    pub fn missing_params(&self) -> Vec<&str> {
        self.placeholders()
            .into_iter()
            .filter(|name| !self.params.contains_key(*name))
            .collect()
    }

    /// Convert into a driver query, refusing unbound placeholders.
    pub fn into_query(self) -> Result<Query, GraphError> {
        let missing = self.missing_params();
        if !missing.is_empty() {
            return Err(GraphError::InvalidStatement(format!(
                "unbound parameter(s) {} in: {}",
                missing
                    .iter()
                    .map(|m| format!("${m}"))
                    .collect::<Vec<_>>()
                    .join(", "),
                self.text.trim()
            )));
        }

        let mut q = query(&self.text);
        for (name, value) in self.params {
            q = q.param(&name, BoltType::from(value));
        }
        Ok(q)
    }
}

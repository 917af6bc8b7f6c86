//! Capability traits and match record types

use serde::Serialize;
use serde_json::{Map, Value, json};

use crate::error::JlibResult;

/// A pattern capability that produces matches lazily
///
/// `find` starts a new enumeration over `subject`. It returns `None` when the
/// subject holds no match, or the first match together with a continuation.
pub trait Matcher {
    fn find(&self, subject: &str) -> JlibResult<Option<MatchCandidate>>;
}

/// Single-use continuation of a match enumeration
///
/// Position state lives inside the continuation, so `advance` takes no
/// subject. Consuming `self` makes a continuation impossible to replay.
pub trait Continuation {
    fn advance(self: Box<Self>) -> JlibResult<Option<MatchCandidate>>;
}

/// A replacement capability
///
/// Receives a match object `{match, index, groups}` and is expected to return
/// a JSON string.
pub trait Replacer {
    fn call(&self, record: &Value) -> JlibResult<Value>;
}

impl<F> Matcher for F
where
    F: Fn(&str) -> JlibResult<Option<MatchCandidate>>,
{
    fn find(&self, subject: &str) -> JlibResult<Option<MatchCandidate>> {
        self(subject)
    }
}

impl<F> Continuation for F
where
    F: FnOnce() -> JlibResult<Option<MatchCandidate>>,
{
    fn advance(self: Box<Self>) -> JlibResult<Option<MatchCandidate>> {
        (*self)()
    }
}

impl<F> Replacer for F
where
    F: Fn(&Value) -> JlibResult<Value>,
{
    fn call(&self, record: &Value) -> JlibResult<Value> {
        self(record)
    }
}

/// Unvalidated result of a matcher call, shaped like the host object
/// `{match, start, end, groups, next}`
///
/// Matchers written by the host may produce anything here; the driver checks
/// field presence and types before trusting it.
pub struct MatchCandidate {
    pub fields: Map<String, Value>,
    pub next: Option<Box<dyn Continuation>>,
}

impl MatchCandidate {
    #[must_use]
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields, next: None }
    }

    /// Well-formed candidate without a continuation
    #[must_use]
    pub fn from_parts(value: &str, start: usize, end: usize, groups: Vec<String>) -> Self {
        let mut fields = Map::new();
        fields.insert("match".to_string(), Value::String(value.to_string()));
        fields.insert("start".to_string(), Value::from(start));
        fields.insert("end".to_string(), Value::from(end));
        fields.insert(
            "groups".to_string(),
            Value::Array(groups.into_iter().map(Value::String).collect()),
        );
        Self::new(fields)
    }

    #[must_use]
    pub fn with_next(mut self, next: impl Continuation + 'static) -> Self {
        self.next = Some(Box::new(next));
        self
    }

    #[must_use]
    pub fn with_field(mut self, name: &str, value: Value) -> Self {
        self.fields.insert(name.to_string(), value);
        self
    }

    #[must_use]
    pub fn without_field(mut self, name: &str) -> Self {
        self.fields.remove(name);
        self
    }
}

/// One validated occurrence of a pattern
///
/// `start` and `end` are character offsets into the subject, `end` exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRecord {
    #[serde(rename = "match")]
    pub value: String,
    pub start: usize,
    pub end: usize,
    pub groups: Vec<String>,
}

impl MatchRecord {
    /// The match object handed to scripts: `{match, index, groups}`
    #[must_use]
    pub fn to_value(&self) -> Value {
        json!({
            "match": self.value,
            "index": self.start,
            "groups": self.groups,
        })
    }
}

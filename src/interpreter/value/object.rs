use crate::interpreter::value::core::Value;

/// An insertion-ordered mapping from property keys to values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectValue {
    entries: Vec<(String, Value)>,
}

impl ObjectValue {
    /// Creates an empty object.
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Sets `key` to `value`.
    ///
    /// A new key is appended. An existing key is overwritten and keeps its
    /// position.
    ///
    /// # Example
    /// ```
    /// use kestrel::interpreter::value::{core::Value, object::ObjectValue};
    ///
    /// let mut object = ObjectValue::new();
    /// object.insert("a", Value::Number(1.0));
    /// object.insert("b", Value::Number(2.0));
    /// object.insert("a", Value::Number(3.0));
    ///
    /// let keys: Vec<_> = object.keys().collect();
    /// assert_eq!(keys, ["a", "b"]);
    /// assert_eq!(object.get("a"), Some(&Value::Number(3.0)));
    /// ```
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        let key = key.into();
        if let Some((_, slot)) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            *slot = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Returns `true` if the object has no properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Property keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Key/value pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for ObjectValue {
    fn from_iter<T: IntoIterator<Item = (K, Value)>>(iter: T) -> Self {
        let mut object = Self::new();
        for (key, value) in iter {
            object.insert(key, value);
        }
        object
    }
}

impl std::fmt::Display for ObjectValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "{{}}");
        }
        write!(f, "{{ ")?;
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match value {
                Value::String(s) => write!(f, "{key}: \"{s}\"")?,
                _ => write!(f, "{key}: {value}")?,
            }
        }
        write!(f, " }}")
    }
}

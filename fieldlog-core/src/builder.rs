use std::collections::HashMap;

use crate::field::{Field, Fields, Value};

/// Order-preserving accumulator of log fields.
///
/// Fields are kept in the order their key was first set. Setting a key again
/// replaces the value in place, so the position of a key never moves and the
/// built sequence never holds the same key twice.
///
/// ```rust
/// use fieldlog_core::{FieldBuilder, Value};
///
/// let fields = FieldBuilder::new()
///     .set("status", 200u16)
///     .set("duration", 15i64)
///     .set("status", 404u16)
///     .build();
///
/// assert_eq!(fields.keys().collect::<Vec<_>>(), ["status", "duration"]);
/// assert_eq!(fields.value("status"), Some(&Value::U64(404)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct FieldBuilder {
    fields: Vec<Field>,
    index: HashMap<&'static str, usize>,
}

impl FieldBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value`, appending it if the key is new.
    pub fn set(mut self, key: &'static str, value: impl Into<Value>) -> Self {
        self.insert(Field::new(key, value));
        self
    }

    /// Sets every field of `fields` in turn.
    pub fn merge<I: IntoIterator<Item = Field>>(mut self, fields: I) -> Self {
        Extend::extend(&mut self, fields);
        self
    }

    /// Adds `field`, or replaces the value of the field with the same key.
    pub fn insert(&mut self, field: Field) {
        debug_assert!(!field.key.is_empty(), "log field keys must not be empty");
        match self.index.get(field.key) {
            Some(&pos) => self.fields[pos] = field,
            None => {
                self.index.insert(field.key, self.fields.len());
                self.fields.push(field);
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.index.get(key).map(|&pos| &self.fields[pos].value)
    }

    /// The fields set so far, in first-insertion order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Yields a snapshot of the current fields.
    ///
    /// The builder stays usable: later calls keep extending the same
    /// sequence, which is how request fields grow into response fields.
    pub fn build(&self) -> Fields {
        Fields(self.fields.clone())
    }
}

impl Extend<Field> for FieldBuilder {
    fn extend<T: IntoIterator<Item = Field>>(&mut self, iter: T) {
        for field in iter {
            self.insert(field);
        }
    }
}

impl From<Fields> for FieldBuilder {
    fn from(fields: Fields) -> Self {
        Self::new().merge(fields)
    }
}

impl FromIterator<Field> for FieldBuilder {
    fn from_iter<T: IntoIterator<Item = Field>>(iter: T) -> Self {
        Self::new().merge(iter)
    }
}

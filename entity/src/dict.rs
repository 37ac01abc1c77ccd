use chrono::{SecondsFormat, Utc};
use sea_orm::prelude::{DateTimeWithTimeZone, Time, Uuid};
use serde_json::{Map, Value};

use crate::Fetched;

/// Plain key-value rendering of a row and whatever relationships were fetched with it.
pub type Dict = Map<String, Value>;

pub trait ToDict {
    fn to_dict(&self) -> Dict;
}

impl<T: ToDict + ?Sized> ToDict for Box<T> {
    fn to_dict(&self) -> Dict {
        (**self).to_dict()
    }
}

pub(crate) fn object(value: Value) -> Dict {
    match value {
        Value::Object(map) => map,
        _ => Dict::new(),
    }
}

/// Inserts a to-one relationship. Unloaded leaves the key out, a loaded but
/// missing target becomes `null`.
pub(crate) fn put_one<T: ToDict>(dict: &mut Dict, key: &str, relation: &Fetched<Option<T>>) {
    if let Fetched::Loaded(target) = relation {
        let value = match target {
            Some(target) => Value::Object(target.to_dict()),
            None => Value::Null,
        };
        dict.insert(key.to_owned(), value);
    }
}

pub(crate) fn put_many<T: ToDict>(dict: &mut Dict, key: &str, relation: &Fetched<Vec<T>>) {
    if let Fetched::Loaded(items) = relation {
        let values = items
            .iter()
            .map(|item| Value::Object(item.to_dict()))
            .collect();
        dict.insert(key.to_owned(), Value::Array(values));
    }
}

pub fn id(id: &Uuid) -> String {
    id.to_string()
}

pub fn optional_id(id: &Option<Uuid>) -> Option<String> {
    id.as_ref().map(Uuid::to_string)
}

/// ISO-8601 in UTC with millisecond precision, e.g. `2024-05-01T18:30:00.000Z`.
pub fn timestamp(at: &DateTimeWithTimeZone) -> String {
    at.with_timezone(&Utc)
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn optional_timestamp(at: &Option<DateTimeWithTimeZone>) -> Option<String> {
    at.as_ref().map(timestamp)
}

/// `HH:MM:SS`, fractional seconds only when present.
pub fn time_of_day(time: &Time) -> String {
    time.format("%H:%M:%S%.f").to_string()
}

pub(crate) fn now() -> DateTimeWithTimeZone {
    Utc::now().into()
}

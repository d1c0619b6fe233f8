use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Response body of every content store endpoint: `{ "data": ... }`
///
/// `data` is a record, a list of records, or `null` when nothing matched.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct Envelope {
    #[serde(default)]
    data: Value,
}

impl Envelope {
    /// All records, decoding each on its own so one bad record does not
    /// hide the rest.
    pub(crate) fn into_records<T: DeserializeOwned>(self, kind: &'static str) -> Vec<T> {
        let items = match self.data {
            Value::Array(items) => items,
            Value::Null => Vec::new(),
            record => vec![record],
        };

        items
            .into_iter()
            .enumerate()
            .filter_map(|(index, item)| match decode_record(item) {
                Ok(record) => Some(record),
                Err(err) => {
                    tracing::warn!(kind, index, %err, "skipping unreadable record");
                    None
                }
            })
            .collect()
    }

    /// The single record of a single-type endpoint
    pub(crate) fn into_record<T: DeserializeOwned>(self, kind: &'static str) -> Option<T> {
        self.into_records(kind).into_iter().next()
    }
}

fn decode_record<T: DeserializeOwned>(item: Value) -> site_kit_core::Result<T> {
    Ok(serde_json::from_value(item)?)
}

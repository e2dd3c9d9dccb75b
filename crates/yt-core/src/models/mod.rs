pub mod board;
pub mod custom_field;
pub mod field_object;
pub mod field_value;
pub mod issue;
pub mod issue_header;
pub mod sprint;
pub mod work_item;

use serde::{Deserialize, Deserializer};

/// Tracker timestamps arrive as epoch milliseconds or `null`; `null` maps to 0 ("unset")
pub(crate) fn epoch_millis_or_zero<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<i64>::deserialize(deserializer)?.unwrap_or(0))
}

use serde_json::{Map, Value};

/// Field spellings different sources use for an experience quantity.
const EXPERIENCE_KEYS: [&str; 3] = ["xp", "XP", "experience"];

/// Sums the experience of every skill entry except the aggregate `overall`
/// entry. Entries without an experience field contribute nothing.
pub fn total_experience(skills: &Map<String, Value>) -> i64 {
    skills
        .iter()
        .filter(|(name, _)| !name.eq_ignore_ascii_case("overall"))
        .filter_map(|(_, entry)| entry.as_object())
        .map(entry_experience)
        .sum()
}

fn entry_experience(entry: &Map<String, Value>) -> i64 {
    EXPERIENCE_KEYS
        .iter()
        .filter_map(|key| entry.get(*key))
        .find_map(as_integer)
        .unwrap_or_default()
        .max(0)
}

fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|f| f as i64)),
        Value::String(text) => text.trim().parse::<i64>().ok(),
        _ => None,
    }
}

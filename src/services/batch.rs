use crate::domain::models::{ApplyReport, StatUpdate};
use serde_json::{json, Map, Value};

fn name_matches(record: &Map<String, Value>, name: &str) -> bool {
    record.get("name").and_then(Value::as_str) == Some(name)
}

/// Applies verified career stats by exact name match. The first record with
/// that name gets the five stat keys (steals/blocks only when the batch has
/// them) and `careerStatsVerified`; every other key keeps its value and
/// position. The input is left untouched and the updated collection returned.
pub fn apply_stat_batch(records: &[Value], updates: &[StatUpdate]) -> (Vec<Value>, ApplyReport) {
    let mut out = records.to_vec();
    let mut applied = 0;
    let mut not_found = Vec::new();

    for u in updates {
        let hit = out
            .iter_mut()
            .filter_map(Value::as_object_mut)
            .find(|r| name_matches(r, &u.name));
        match hit {
            Some(r) => {
                r.insert("ppgCareer".to_string(), json!(u.ppg));
                r.insert("rpgCareer".to_string(), json!(u.rpg));
                r.insert("apgCareer".to_string(), json!(u.apg));
                if let Some(spg) = u.spg {
                    r.insert("spgCareer".to_string(), json!(spg));
                }
                if let Some(bpg) = u.bpg {
                    r.insert("bpgCareer".to_string(), json!(bpg));
                }
                r.insert("careerStatsVerified".to_string(), Value::Bool(true));
                applied += 1;
            }
            None => not_found.push(u.name.clone()),
        }
    }

    (out, ApplyReport { applied, not_found })
}

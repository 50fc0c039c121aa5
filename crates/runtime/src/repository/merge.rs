//! Schema-drift tolerant decoding of persisted documents.

use game_core::GameState;
use serde_json::Value;

/// Merges `source` into `target` in place.
///
/// Objects merge key by key, recursively. Arrays and scalars from `source`
/// replace the target value wholesale. `null` in `source` never overwrites.
pub fn deep_merge(target: &mut Value, source: Value) {
    match (target, source) {
        (_, Value::Null) => {}
        (Value::Object(target), Value::Object(source)) => {
            for (key, value) in source {
                match target.get_mut(&key) {
                    Some(existing) => deep_merge(existing, value),
                    None if value.is_null() => {}
                    None => {
                        target.insert(key, value);
                    }
                }
            }
        }
        (target, source) => *target = source,
    }
}

/// Deep-merges a persisted document onto the default template and decodes it.
///
/// Returns `None` for anything that is not an object or that still fails to
/// decode after the merge; the caller falls through to the next source.
pub fn decode_onto_default(document: Value) -> Option<GameState> {
    if !document.is_object() {
        tracing::warn!("Ignoring persisted state that is not a JSON object");
        return None;
    }

    let mut merged = match serde_json::to_value(GameState::new()) {
        Ok(template) => template,
        Err(err) => {
            tracing::error!("Failed to encode default state template: {}", err);
            return None;
        }
    };
    deep_merge(&mut merged, document);

    match serde_json::from_value(merged) {
        Ok(state) => Some(state),
        Err(err) => {
            tracing::warn!("Persisted state does not decode: {}", err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use game_core::{GameConfig, GameState, Half, ResultCode};
    use serde_json::json;

    use super::*;

    #[test]
    fn test_objects_merge_key_by_key() {
        let mut target = json!({"a": {"x": 0, "y": 2}});
        deep_merge(&mut target, json!({"a": {"x": 1}}));
        assert_eq!(target, json!({"a": {"x": 1, "y": 2}}));
    }

    #[test]
    fn test_arrays_and_scalars_replace() {
        let mut target = json!({"list": [1, 2, 3], "name": "old", "nested": {"n": 1}});
        deep_merge(
            &mut target,
            json!({"list": [9], "name": "new", "nested": 5, "extra": true}),
        );
        assert_eq!(
            target,
            json!({"list": [9], "name": "new", "nested": 5, "extra": true})
        );
    }

    #[test]
    fn test_null_never_overwrites() {
        let mut target = json!({"pitcher": {"home": "Ito"}, "count": 2});
        deep_merge(&mut target, json!({"pitcher": {"home": null}, "count": null, "gone": null}));
        assert_eq!(target, json!({"pitcher": {"home": "Ito"}, "count": 2}));
    }

    #[test]
    fn test_legacy_document_fills_missing_fields() {
        let legacy = json!({
            "teams": {"home": "Tigers", "away": "Giants"},
            "inning": {"number": 4, "half": "bottom"},
            "scores": {"home": [0,1,0,0,0,0,0,0,0,0,0], "away": [2,0,0,0,0,0,0,0,0,0,0]}
        });

        let state = decode_onto_default(legacy).unwrap();

        assert_eq!(state.teams.home, "Tigers");
        assert_eq!(state.inning.number, 4);
        assert_eq!(state.inning.half, Half::Bottom);
        assert_eq!(state.scores.home.len(), 11);
        assert_eq!(state.total_runs(game_core::Team::Away), 2);
        assert_eq!(state.lineup.home.len(), GameConfig::LINEUP_SIZE);
        assert!(state.result_history.is_empty());
        assert!(state.last_result.is_none());
    }

    #[test]
    fn test_unknown_result_code_fails_decoding() {
        let doc = json!({
            "atBatResults": {"home": [["single"]], "away": [["triple_play"]]}
        });
        assert!(decode_onto_default(doc).is_none());

        let doc = json!({"atBatResults": {"home": [["sac_fly"]], "away": []}});
        let state = decode_onto_default(doc).unwrap();
        assert_eq!(state.at_bat_results.home[0], vec![ResultCode::SacFly]);
    }

    #[test]
    fn test_non_object_is_rejected() {
        assert!(decode_onto_default(json!([1, 2, 3])).is_none());
        assert!(decode_onto_default(json!("state")).is_none());
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(decode_onto_default(json!({})), Some(GameState::new()));
    }
}

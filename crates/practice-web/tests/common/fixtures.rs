//! Backend payloads used across integration tests

use serde_json::{Value, json};

/// Violin and Cello
pub fn instruments() -> Value {
    json!([
        {"id": 1, "name": "Violin", "description": "Four strings"},
        {"id": 2, "name": "Cello", "description": null}
    ])
}

/// Template summaries: Violin has an active template, Cello only an inactive one
pub fn template_summaries() -> Value {
    json!([
        {"id": 5, "instrument_id": 1, "name": "Old Violin Rotation", "description": null, "days_count": 2, "is_active": false},
        {"id": 3, "instrument_id": 1, "name": "Violin Rotation", "description": "Three days of everything", "days_count": 3, "is_active": true},
        {"id": 11, "instrument_id": 2, "name": "Cello Basics", "description": null, "days_count": 2, "is_active": false}
    ])
}

fn exercise(id: i64, text: &str, display_order: i32) -> Value {
    json!({"id": id, "exercise_text": text, "display_order": display_order})
}

fn block(id: i64, block_type: &str, exercises: Vec<Value>) -> Value {
    json!({"id": id, "block_type": block_type, "display_order": id, "exercises": exercises})
}

/// Template 3 with its full day tree, days listed out of order
pub fn violin_template() -> Value {
    json!({
        "id": 3,
        "instrument_id": 1,
        "name": "Violin Rotation",
        "description": "Three days of everything",
        "days_count": 3,
        "is_active": true,
        "practice_days": [
            {
                "id": 22,
                "day_number": 2,
                "title": "Left hand agility",
                "warmup": "Finger taps",
                "scales": "D major, three octaves",
                "repertoire": "Bach Partita No. 2",
                "exercise_blocks": [
                    block(4, "blockB", vec![exercise(6, "Trills", 2), exercise(5, "Double stops", 1)]),
                    block(3, "blockA", vec![exercise(4, "Shifting", 1)])
                ]
            },
            {
                "id": 21,
                "day_number": 1,
                "title": "Bow control",
                "warmup": "Open strings",
                "scales": "G major, two octaves",
                "repertoire": "Bruch Concerto, first movement",
                "exercise_blocks": [
                    block(1, "blockA", vec![exercise(1, "Scales in thirds", 2), exercise(2, "Long tones", 1)]),
                    block(2, "blockB", vec![exercise(3, "Vibrato", 1)])
                ]
            },
            {
                "id": 23,
                "day_number": 3,
                "title": "Sight reading",
                "warmup": null,
                "scales": null,
                "repertoire": "New etude",
                "exercise_blocks": []
            }
        ]
    })
}

/// A stored log as the backend returns it
pub fn practice_log(id: i64, day_number: u32, date: &str, notes: &str) -> Value {
    json!({
        "id": id,
        "template_id": 3,
        "day_number": day_number,
        "practice_date": date,
        "duration_minutes": 45,
        "notes": notes,
        "log_details": [
            {"id": id * 10, "log_id": id, "section_type": "techA", "content": "Shifting"},
            {"id": id * 10 + 1, "log_id": id, "section_type": "warmup", "content": ""}
        ]
    })
}

/// Analytics for two sessions
pub fn analytics() -> Value {
    json!({
        "total_sessions": 2,
        "total_minutes": 90,
        "average_duration": 45.0,
        "sessions_by_day": {"1": 1, "2": 1}
    })
}

/// Analytics with nothing logged
pub fn empty_analytics() -> Value {
    json!({
        "total_sessions": 0,
        "total_minutes": 0,
        "average_duration": 0.0,
        "sessions_by_day": {}
    })
}

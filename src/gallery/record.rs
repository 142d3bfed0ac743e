//! Snippet record data model and the first-run seed set

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named, described block of user-authored code plus timestamps
///
/// Serialized field names match the persisted JSON layout: camelCase keys,
/// timestamps as integer epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnippetRecord {
    /// Opaque unique identifier, assigned at creation, immutable
    pub id: String,

    /// Display name
    pub name: String,

    /// Short description
    pub description: String,

    /// Raw HTML/CSS/script source; unvalidated beyond an emptiness check
    pub code: String,

    /// Creation time in epoch milliseconds, set once
    pub created_at: i64,

    /// Last modification time in epoch milliseconds
    pub updated_at: i64,
}

impl SnippetRecord {
    /// Create a fresh record with a new UUID and `created_at == updated_at`
    pub fn new(name: String, description: String, code: String) -> Self {
        let now = now_millis();
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            description,
            code,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Current time as epoch milliseconds
pub(crate) fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// The default records used to populate an empty gallery on first run
pub fn seed_records() -> Vec<SnippetRecord> {
    vec![
        SnippetRecord::new(
            "Counter Button".to_string(),
            "A tiny counter that increments on click.".to_string(),
            COUNTER_BUTTON_CODE.to_string(),
        ),
        SnippetRecord::new(
            "Toast Notification".to_string(),
            "Show a transient toast message.".to_string(),
            TOAST_NOTIFICATION_CODE.to_string(),
        ),
    ]
}

const COUNTER_BUTTON_CODE: &str = r##"<button id="btn" style="padding:.6rem 1rem;border-radius:10px;border:1px solid #333;background:#0a84ff;color:white">Count: <span id="count">0</span></button>
<script>
  const btn = document.getElementById('btn');
  const count = document.getElementById('count');
  let n = 0; btn.addEventListener('click', ()=>{ n++; count.textContent = n; });
</script>"##;

const TOAST_NOTIFICATION_CODE: &str = r##"<style>
  .toast{position:fixed;inset:auto 1rem 1rem auto;background:#111;border:1px solid #333;color:#e6e6e9;padding:.6rem .8rem;border-radius:10px;opacity:0;transform:translateY(8px);transition:.25s}
  .toast.show{opacity:1;transform:translateY(0)}
</style>
<button id="show">Show Toast</button>
<div id="toast" class="toast">Hello from the toast!</div>
<script>
  const t=document.getElementById('toast');
  const s=document.getElementById('show');
  s.addEventListener('click',()=>{t.classList.add('show');setTimeout(()=>t.classList.remove('show'),1500);});
</script>"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_timestamps_match() {
        let record = SnippetRecord::new(
            "Counter".to_string(),
            "desc".to_string(),
            "<button></button>".to_string(),
        );
        assert_eq!(record.created_at, record.updated_at);
        assert!(!record.id.is_empty());
    }

    #[test]
    fn test_new_records_get_unique_ids() {
        let a = SnippetRecord::new("a".into(), "b".into(), "c".into());
        let b = SnippetRecord::new("a".into(), "b".into(), "c".into());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_serialized_field_names_are_camel_case() {
        let record = SnippetRecord::new("n".into(), "d".into(), "c".into());
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"createdAt\""));
        assert!(json.contains("\"updatedAt\""));
        assert!(!json.contains("created_at"));
    }

    #[test]
    fn test_timestamps_serialize_as_integers() {
        let record = SnippetRecord::new("n".into(), "d".into(), "c".into());
        let value = serde_json::to_value(&record).unwrap();
        assert!(value["createdAt"].is_i64());
        assert!(value["updatedAt"].is_i64());
    }

    #[test]
    fn test_seed_records_are_complete() {
        let seeds = seed_records();
        assert!(!seeds.is_empty());
        for seed in &seeds {
            assert!(!seed.name.is_empty());
            assert!(!seed.description.is_empty());
            assert!(!seed.code.is_empty());
        }
    }
}

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

// pub struct for individual audit results
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "RawAudit")]
pub struct Audit {
    pub id: String,
    pub title: String,
    pub description: String,
    pub score: Option<f64>,
    pub display_value: Option<String>,
    pub detail_items: Vec<DetailItem>,
    pub score_display_mode: Option<String>,
}

impl Audit {
    pub fn is_manual(&self) -> bool {
        self.score_display_mode.as_deref() == Some("manual")
    }
}

// audit as it appears under lighthouseResult.audits
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAudit {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    score: Option<f64>,
    #[serde(default)]
    display_value: Option<String>,
    #[serde(default)]
    details: Option<Value>,
    #[serde(default)]
    score_display_mode: Option<String>,
}

impl From<RawAudit> for Audit {
    fn from(raw: RawAudit) -> Self {
        // `details` has a different shape per audit type; only `items` is read
        let detail_items = raw
            .details
            .as_ref()
            .and_then(|details| details.get("items"))
            .and_then(Value::as_array)
            .map(|items| items.iter().map(DetailItem::from_value).collect())
            .unwrap_or_default();

        Audit {
            id: raw.id.unwrap_or_default(),
            title: raw.title.unwrap_or_default(),
            description: raw.description.unwrap_or_default(),
            score: raw.score,
            display_value: raw.display_value,
            detail_items,
            score_display_mode: raw.score_display_mode,
        }
    }
}

/// One affected resource or element listed in an audit's details table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailItem {
    pub url: Option<String>,
    pub source: Option<String>,
    pub node_snippet: Option<String>,
    pub wasted_bytes: Option<f64>,
}

impl DetailItem {
    pub fn from_value(value: &Value) -> Self {
        let non_empty = |v: Option<&Value>| {
            v.and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        // source is either a plain string or a source-location object
        let source = match value.get("source") {
            Some(Value::Object(location)) => non_empty(location.get("url")),
            other => non_empty(other),
        };

        DetailItem {
            url: non_empty(value.get("url")),
            source,
            node_snippet: non_empty(value.pointer("/node/snippet")),
            wasted_bytes: value.get("wastedBytes").and_then(Value::as_f64),
        }
    }
}

/// Audits in the order the response listed them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderedAudits {
    entries: Vec<Audit>,
    index: HashMap<String, usize>,
}

impl OrderedAudits {
    pub fn get(&self, id: &str) -> Option<&Audit> {
        self.index.get(id).map(|&i| &self.entries[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Audit> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn insert(&mut self, id: String, mut audit: Audit) {
        audit.id = id.clone();
        match self.index.get(&id) {
            Some(&i) => self.entries[i] = audit,
            None => {
                self.index.insert(id, self.entries.len());
                self.entries.push(audit);
            }
        }
    }
}

impl FromIterator<(String, Audit)> for OrderedAudits {
    fn from_iter<I: IntoIterator<Item = (String, Audit)>>(iter: I) -> Self {
        let mut audits = OrderedAudits::default();
        for (id, audit) in iter {
            audits.insert(id, audit);
        }
        audits
    }
}

struct OrderedAuditsVisitor;

impl<'de> Visitor<'de> for OrderedAuditsVisitor {
    type Value = OrderedAudits;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of audit id to audit")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut audits = OrderedAudits::default();
        // null entries carry nothing to show
        while let Some((id, audit)) = map.next_entry::<String, Option<Audit>>()? {
            if let Some(audit) = audit {
                audits.insert(id, audit);
            }
        }
        Ok(audits)
    }
}

impl<'de> Deserialize<'de> for OrderedAudits {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(OrderedAuditsVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn keeps_response_key_order() {
        let audits: OrderedAudits = serde_json::from_str(
            r#"{"zeta": {"score": 1}, "alpha": {"score": 0.5}, "mid": {"score": null}}"#,
        )
        .unwrap();

        let ids: Vec<&str> = audits.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["zeta", "alpha", "mid"]);
        assert_eq!(audits.get("mid").unwrap().score, None);
    }

    #[test]
    fn reads_detail_items_from_any_details_shape() {
        let audit: Audit = serde_json::from_value(json!({
            "title": "Eliminate render-blocking resources",
            "score": 0.3,
            "displayValue": "Potential savings of 1,200 ms",
            "details": {
                "type": "opportunity",
                "items": [
                    {"url": "https://example.com/app.css", "wastedBytes": 4096},
                    {"source": {"type": "source-location", "url": "https://example.com/a.js"}},
                    {"node": {"snippet": "<img src=x>"}},
                    {"url": ""}
                ]
            }
        }))
        .unwrap();

        assert_eq!(audit.detail_items.len(), 4);
        assert_eq!(audit.detail_items[0].wasted_bytes, Some(4096.0));
        assert_eq!(
            audit.detail_items[1].source.as_deref(),
            Some("https://example.com/a.js")
        );
        assert_eq!(
            audit.detail_items[2].node_snippet.as_deref(),
            Some("<img src=x>")
        );
        assert_eq!(audit.detail_items[3], DetailItem::default());
    }

    #[test]
    fn details_without_items_yield_no_detail_items() {
        let audit: Audit = serde_json::from_value(json!({
            "title": "Avoid chaining critical requests",
            "score": null,
            "details": {"type": "criticalrequestchain", "chains": {}}
        }))
        .unwrap();

        assert!(audit.detail_items.is_empty());
        assert!(!audit.is_manual());
    }

    #[test]
    fn duplicate_keys_keep_first_position_and_last_value() {
        let audits: OrderedAudits =
            serde_json::from_str(r#"{"a": {"score": 0}, "b": {"score": 1}, "a": {"score": 1}}"#)
                .unwrap();

        assert_eq!(audits.len(), 2);
        assert_eq!(audits.iter().next().unwrap().score, Some(1.0));
    }
}

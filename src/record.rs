use crate::severity::Severity;
use serde::Serialize;
use serde_json::{Map, Value};

/// Schema generation written into `ecs.version`.
pub const ECS_VERSION: &str = "1.5.0";

/// A fully assembled, nested ECS record.
///
/// Built by the logger from the envelope, the scope, optional error
/// enrichment and the call payload, in that order of precedence.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LogRecord {
    fields: Map<String, Value>,
}

impl LogRecord {
    /// The lowest-precedence layer every record starts from.
    pub fn envelope(severity: Severity, timestamp: String, service_name: &str) -> Self {
        let mut ecs = Map::new();
        ecs.insert("version".to_string(), Value::from(ECS_VERSION));
        let mut log = Map::new();
        log.insert("level".to_string(), Value::from(severity.as_str()));
        let mut service = Map::new();
        service.insert("name".to_string(), Value::from(service_name));

        let mut fields = Map::new();
        fields.insert("ecs".to_string(), Value::Object(ecs));
        fields.insert("log".to_string(), Value::Object(log));
        fields.insert("@timestamp".to_string(), Value::String(timestamp));
        fields.insert("service".to_string(), Value::Object(service));
        Self { fields }
    }

    /// Deep-merge another layer on top of this record.
    pub fn merge_layer(&mut self, layer: &Map<String, Value>) {
        crate::merge::merge_into(&mut self.fields, layer);
    }

    /// Look up a nested field by dotted path, e.g. `"service.name"`.
    pub fn get(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let mut current = self.fields.get(segments.next()?)?;
        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }

    /// Compact single-line JSON, without trailing newline.
    pub fn to_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_serializes_in_ecs_order() {
        let record = LogRecord::envelope(Severity::Info, "2020-05-11T15:01:01.000Z".into(), "petshop");
        assert_eq!(
            record.to_line().unwrap(),
            r#"{"ecs":{"version":"1.5.0"},"log":{"level":"info"},"@timestamp":"2020-05-11T15:01:01.000Z","service":{"name":"petshop"}}"#
        );
    }

    #[test]
    fn get_walks_nested_paths() {
        let mut record = LogRecord::envelope(Severity::Error, "t".into(), "svc");
        record.merge_layer(json!({"http": {"response": {"status_code": 500}}}).as_object().unwrap());

        assert_eq!(record.get("service.name"), Some(&json!("svc")));
        assert_eq!(record.get("http.response.status_code"), Some(&json!(500)));
        assert_eq!(record.get("@timestamp"), Some(&json!("t")));
        assert_eq!(record.get("http.request"), None);
        assert_eq!(record.get("service.name.first"), None);
    }
}

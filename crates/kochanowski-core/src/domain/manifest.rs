//! The `package.json` document.
//!
//! Only `scripts` is interpreted; every other key is carried through
//! untouched and in its original order.

use serde_json::{Map, Value};

use crate::domain::error::DomainError;

/// File name the package manager writes the manifest to.
pub const MANIFEST_FILE_NAME: &str = "package.json";

const SCRIPTS_KEY: &str = "scripts";

/// A parsed package manifest.
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    root: Map<String, Value>,
}

impl Manifest {
    /// Parse manifest text. The top level must be a JSON object.
    pub fn parse(text: &str) -> Result<Self, DomainError> {
        let value: Value = serde_json::from_str(text).map_err(|e| DomainError::InvalidManifest {
            reason: e.to_string(),
        })?;

        match value {
            Value::Object(root) => Ok(Self { root }),
            other => Err(DomainError::InvalidManifest {
                reason: format!(
                    "expected an object at the top level, found {}",
                    kind_of(&other)
                ),
            }),
        }
    }

    /// The package name, if the manifest has one.
    pub fn name(&self) -> Option<&str> {
        self.root.get("name").and_then(Value::as_str)
    }

    /// Look up a script command by name.
    pub fn script(&self, name: &str) -> Option<&str> {
        self.root
            .get(SCRIPTS_KEY)
            .and_then(Value::as_object)
            .and_then(|scripts| scripts.get(name))
            .and_then(Value::as_str)
    }

    /// Set `scripts.<name>`, creating `scripts` when it is missing or falsy.
    ///
    /// Existing entries are overwritten; the previous value is returned.
    pub fn set_script(
        &mut self,
        name: &str,
        command: impl Into<String>,
    ) -> Result<Option<Value>, DomainError> {
        let scripts = self
            .root
            .entry(SCRIPTS_KEY)
            .or_insert_with(|| Value::Object(Map::new()));

        if is_falsy(scripts) {
            *scripts = Value::Object(Map::new());
        }

        match scripts {
            Value::Object(map) => Ok(map.insert(name.to_owned(), Value::String(command.into()))),
            other => Err(DomainError::InvalidManifest {
                reason: format!("\"scripts\" must be an object, found {}", kind_of(other)),
            }),
        }
    }

    /// Serialize with two-space indentation and no trailing newline, the
    /// same shape `JSON.stringify(manifest, null, 2)` produces.
    pub fn to_pretty_string(&self) -> Result<String, DomainError> {
        serde_json::to_string_pretty(&self.root).map_err(|e| DomainError::InvalidManifest {
            reason: e.to_string(),
        })
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NPM_INIT_OUTPUT: &str = r#"{
  "name": "demo",
  "version": "1.0.0",
  "main": "index.js",
  "scripts": {
    "test": "echo \"Error: no test specified\" && exit 1"
  },
  "keywords": [],
  "author": "",
  "license": "ISC"
}"#;

    #[test]
    fn adds_start_next_to_existing_scripts() {
        let mut manifest = Manifest::parse(NPM_INIT_OUTPUT).unwrap();
        let previous = manifest
            .set_script("start", "kochanowski indeks.kpl")
            .unwrap();

        assert_eq!(previous, None);
        assert_eq!(manifest.script("start"), Some("kochanowski indeks.kpl"));
        assert!(manifest.script("test").is_some());
    }

    #[test]
    fn key_order_survives_a_rewrite() {
        let mut manifest = Manifest::parse(NPM_INIT_OUTPUT).unwrap();
        manifest.set_script("start", "kochanowski indeks.kpl").unwrap();
        let text = manifest.to_pretty_string().unwrap();

        let name = text.find("\"name\"").unwrap();
        let scripts = text.find("\"scripts\"").unwrap();
        let license = text.find("\"license\"").unwrap();
        assert!(name < scripts && scripts < license);
    }

    #[test]
    fn output_uses_two_space_indent_without_trailing_newline() {
        let mut manifest = Manifest::parse(r#"{"name":"demo"}"#).unwrap();
        manifest.set_script("start", "kochanowski indeks.kpl").unwrap();

        assert_eq!(
            manifest.to_pretty_string().unwrap(),
            "{\n  \"name\": \"demo\",\n  \"scripts\": {\n    \"start\": \"kochanowski indeks.kpl\"\n  }\n}"
        );
    }

    #[test]
    fn missing_or_falsy_scripts_are_replaced() {
        for text in [
            r#"{"name":"demo"}"#,
            r#"{"name":"demo","scripts":null}"#,
            r#"{"name":"demo","scripts":false}"#,
            r#"{"name":"demo","scripts":""}"#,
            r#"{"name":"demo","scripts":0}"#,
        ] {
            let mut manifest = Manifest::parse(text).unwrap();
            manifest.set_script("start", "kochanowski indeks.kpl").unwrap();
            assert_eq!(
                manifest.script("start"),
                Some("kochanowski indeks.kpl"),
                "for {text}"
            );
        }
    }

    #[test]
    fn truthy_non_object_scripts_is_an_error() {
        let mut manifest = Manifest::parse(r#"{"scripts":"npm test"}"#).unwrap();
        assert!(matches!(
            manifest.set_script("start", "kochanowski indeks.kpl"),
            Err(DomainError::InvalidManifest { .. })
        ));
    }

    #[test]
    fn setting_twice_keeps_the_last_value() {
        let mut manifest = Manifest::parse(NPM_INIT_OUTPUT).unwrap();
        manifest.set_script("start", "node index.js").unwrap();
        let previous = manifest
            .set_script("start", "kochanowski indeks.kpl")
            .unwrap();

        assert_eq!(previous, Some(Value::String("node index.js".into())));
        assert_eq!(manifest.script("start"), Some("kochanowski indeks.kpl"));
    }

    #[test]
    fn non_object_root_is_rejected() {
        assert!(Manifest::parse("[]").is_err());
        assert!(Manifest::parse("\"demo\"").is_err());
        assert!(Manifest::parse("not json").is_err());
    }

    #[test]
    fn name_is_read_from_the_document() {
        assert_eq!(Manifest::parse(NPM_INIT_OUTPUT).unwrap().name(), Some("demo"));
    }
}

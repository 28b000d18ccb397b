//! Tool declarations offered to the model.
//!
//! A declaration is the static description of a tool: its name, what it
//! does, and the parameters it accepts. Declarations are built once at
//! startup and sent verbatim with every completion request that allows
//! tool calls.

use serde_json::{json, Map, Value};

/// Primitive type of a tool parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterKind {
    String,
    Integer,
    /// A string restricted to one of the listed values.
    Enum(Vec<String>),
}

/// A single named parameter of a tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterSpec {
    pub name: String,
    pub description: Option<String>,
    pub kind: ParameterKind,
    pub required: bool,
}

impl ParameterSpec {
    /// An optional string parameter.
    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, ParameterKind::String)
    }

    /// An optional integer parameter.
    pub fn integer(name: impl Into<String>) -> Self {
        Self::new(name, ParameterKind::Integer)
    }

    /// An optional enum parameter.
    pub fn one_of<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            name,
            ParameterKind::Enum(values.into_iter().map(Into::into).collect()),
        )
    }

    fn new(name: impl Into<String>, kind: ParameterKind) -> Self {
        Self {
            name: name.into(),
            description: None,
            kind,
            required: false,
        }
    }

    /// Set the description shown to the model.
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Mark the parameter as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    fn schema(&self) -> Value {
        let mut schema = Map::new();
        match &self.kind {
            ParameterKind::String => {
                schema.insert("type".to_string(), json!("string"));
            }
            ParameterKind::Integer => {
                schema.insert("type".to_string(), json!("integer"));
            }
            ParameterKind::Enum(values) => {
                schema.insert("type".to_string(), json!("string"));
                schema.insert("enum".to_string(), json!(values));
            }
        }
        if let Some(ref description) = self.description {
            schema.insert("description".to_string(), json!(description));
        }
        Value::Object(schema)
    }
}

/// Static description of a callable tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolDeclaration {
    /// Unique tool name (the dispatch key).
    pub name: String,
    /// What the tool does, written for the model.
    pub description: String,
    /// Parameters in declaration order.
    pub parameters: Vec<ParameterSpec>,
}

impl ToolDeclaration {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters: Vec::new(),
        }
    }

    /// Add a parameter.
    pub fn param(mut self, spec: ParameterSpec) -> Self {
        self.parameters.push(spec);
        self
    }

    /// Look up a parameter by name.
    pub fn parameter(&self, name: &str) -> Option<&ParameterSpec> {
        self.parameters.iter().find(|p| p.name == name)
    }

    /// Render the parameters as a JSON Schema object.
    pub fn parameters_schema(&self) -> Value {
        let mut properties = Map::new();
        for spec in &self.parameters {
            properties.insert(spec.name.clone(), spec.schema());
        }

        let required: Vec<&str> = self
            .parameters
            .iter()
            .filter(|p| p.required)
            .map(|p| p.name.as_str())
            .collect();

        json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forecast_declaration() -> ToolDeclaration {
        ToolDeclaration::new("get_n_day_weather_forecast", "Get an N-day weather forecast")
            .param(
                ParameterSpec::string("location")
                    .describe("The city and state, e.g., San Francisco, CA")
                    .required(),
            )
            .param(ParameterSpec::one_of("unit", ["celsius", "fahrenheit"]).required())
            .param(ParameterSpec::integer("num_days").required())
    }

    #[test]
    fn test_parameters_schema() {
        let schema = forecast_declaration().parameters_schema();

        assert_eq!(schema["type"], "object");
        assert_eq!(schema["properties"]["location"]["type"], "string");
        assert_eq!(
            schema["properties"]["location"]["description"],
            "The city and state, e.g., San Francisco, CA"
        );
        assert_eq!(
            schema["properties"]["unit"]["enum"],
            json!(["celsius", "fahrenheit"])
        );
        assert_eq!(schema["properties"]["num_days"]["type"], "integer");
        assert_eq!(schema["required"], json!(["location", "unit", "num_days"]));
    }

    #[test]
    fn test_optional_parameters_not_required() {
        let declaration = ToolDeclaration::new("get_current_weather", "Current weather")
            .param(ParameterSpec::string("location").required())
            .param(ParameterSpec::one_of("unit", ["celsius", "fahrenheit"]));

        let schema = declaration.parameters_schema();
        assert_eq!(schema["required"], json!(["location"]));
        assert!(declaration.parameter("unit").is_some());
        assert!(declaration.parameter("days").is_none());
    }
}

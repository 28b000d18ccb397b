//! Tool registry for declaring, validating and executing tools.

use std::collections::HashMap;
use std::sync::Arc;

use chat_core::{ParameterKind, ParameterSpec, ToolDeclaration};
use indexmap::IndexMap;
use serde_json::Value;
use tracing::{debug, info};

use crate::error::ToolError;
use crate::tool::{Tool, ToolArgs, ToolOutput};

/// Registry for managing tools.
///
/// The registry holds tools in registration order, so the declaration list
/// sent to the model is stable across requests.
pub struct ToolRegistry {
    /// Registered tools by name, in registration order.
    tools: IndexMap<String, Arc<dyn Tool>>,
    /// Declarations, parallel to `tools`.
    declarations: Vec<ToolDeclaration>,
}

impl ToolRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            tools: IndexMap::new(),
            declarations: Vec::new(),
        }
    }

    /// Register a tool.
    ///
    /// If a tool with the same name already exists, it is replaced in place
    /// and keeps its position.
    pub fn register<T: Tool + 'static>(&mut self, tool: T) {
        self.register_shared(Arc::new(tool));
    }

    /// Register a shared tool.
    pub fn register_shared(&mut self, tool: Arc<dyn Tool>) {
        let name = tool.name().to_string();
        let declaration = tool.declaration();
        info!("Registering tool: {}", name);

        let (index, _) = self.tools.insert_full(name, tool);
        if index < self.declarations.len() {
            self.declarations[index] = declaration;
        } else {
            self.declarations.push(declaration);
        }
    }

    /// Get a list of registered tool names.
    pub fn list_tools(&self) -> Vec<&str> {
        self.tools.keys().map(|s| s.as_str()).collect()
    }

    /// Declarations of all tools, in registration order.
    pub fn declarations(&self) -> &[ToolDeclaration] {
        &self.declarations
    }

    /// Get a tool by name.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.tools.get(name)
    }

    /// Validate a raw JSON argument payload against a tool's declaration.
    ///
    /// Checks that the payload is a JSON object, that every required
    /// parameter is present, and that each declared parameter has the
    /// declared primitive type (or enum membership). Undeclared keys are
    /// dropped; `null` optional values are treated as absent.
    pub fn validate_args(&self, name: &str, args_json: &str) -> Result<ToolArgs, ToolError> {
        let index = self
            .tools
            .get_index_of(name)
            .ok_or_else(|| ToolError::NotFound(name.to_string()))?;
        let declaration = &self.declarations[index];

        let payload: Value = if args_json.trim().is_empty() {
            Value::Object(Default::default())
        } else {
            serde_json::from_str(args_json).map_err(|e| ToolError::InvalidParameter {
                name: "arguments".to_string(),
                reason: format!("not valid JSON: {}", e),
            })?
        };

        let Value::Object(mut object) = payload else {
            return Err(ToolError::InvalidParameter {
                name: "arguments".to_string(),
                reason: "expected a JSON object".to_string(),
            });
        };

        let mut params = HashMap::new();
        for spec in &declaration.parameters {
            match object.remove(&spec.name) {
                None | Some(Value::Null) => {
                    if spec.required {
                        return Err(ToolError::MissingParameter(spec.name.clone()));
                    }
                }
                Some(value) => {
                    check_kind(spec, &value)?;
                    params.insert(spec.name.clone(), value);
                }
            }
        }

        if !object.is_empty() {
            debug!(
                "Ignoring undeclared arguments for '{}': {:?}",
                name,
                object.keys().collect::<Vec<_>>()
            );
        }

        Ok(ToolArgs::new(params))
    }

    /// Execute a tool by name with validated arguments.
    pub async fn execute(&self, name: &str, args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let tool = self
            .tools
            .get(name)
            .ok_or_else(|| ToolError::NotFound(name.to_string()))?;

        debug!("Executing tool '{}' with {} params", name, args.params.len());

        let result = tool.execute(args).await?;

        debug!(
            "Tool '{}' completed: content_len={}",
            name,
            result.content.len()
        );

        Ok(result)
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn check_kind(spec: &ParameterSpec, value: &Value) -> Result<(), ToolError> {
    let invalid = |reason: String| ToolError::InvalidParameter {
        name: spec.name.clone(),
        reason,
    };

    match &spec.kind {
        ParameterKind::String => {
            if !value.is_string() {
                return Err(invalid("expected string".to_string()));
            }
        }
        ParameterKind::Integer => {
            if !(value.is_i64() || value.is_u64()) {
                return Err(invalid("expected integer".to_string()));
            }
        }
        ParameterKind::Enum(allowed) => {
            let Some(text) = value.as_str() else {
                return Err(invalid("expected string".to_string()));
            };
            if !allowed.iter().any(|a| a == text) {
                return Err(invalid(format!(
                    "'{}' is not one of: {}",
                    text,
                    allowed.join(", ")
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct EchoTool;

    #[async_trait]
    impl Tool for EchoTool {
        fn name(&self) -> &str {
            "echo"
        }

        fn declaration(&self) -> ToolDeclaration {
            ToolDeclaration::new("echo", "Echoes back the input")
                .param(ParameterSpec::string("message").required())
                .param(ParameterSpec::integer("times"))
                .param(ParameterSpec::one_of("tone", ["plain", "loud"]))
        }

        async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
            let message = args.get_string("message")?;
            Ok(ToolOutput::new(message))
        }
    }

    struct LabelTool(&'static str, &'static str);

    #[async_trait]
    impl Tool for LabelTool {
        fn name(&self) -> &str {
            self.0
        }

        fn declaration(&self) -> ToolDeclaration {
            ToolDeclaration::new(self.0, self.1)
        }

        async fn execute(&self, _args: ToolArgs) -> Result<ToolOutput, ToolError> {
            Ok(ToolOutput::new(self.1))
        }
    }

    fn echo_registry() -> ToolRegistry {
        let mut registry = ToolRegistry::new();
        registry.register(EchoTool);
        registry
    }

    #[tokio::test]
    async fn test_registry_basic() {
        let registry = echo_registry();

        assert_eq!(registry.get("echo").map(|t| t.name()), Some("echo"));
        assert!(registry.get("nonexistent").is_none());
        assert_eq!(registry.list_tools(), vec!["echo"]);
        assert_eq!(registry.declarations().len(), 1);
        assert_eq!(registry.declarations()[0].name, "echo");
    }

    #[test]
    fn test_declarations_keep_registration_order() {
        let mut registry = ToolRegistry::new();
        registry.register(LabelTool("b_tool", "first"));
        registry.register(LabelTool("a_tool", "second"));
        registry.register(LabelTool("c_tool", "third"));

        let names: Vec<&str> = registry
            .declarations()
            .iter()
            .map(|d| d.name.as_str())
            .collect();
        assert_eq!(names, vec!["b_tool", "a_tool", "c_tool"]);
    }

    #[test]
    fn test_reregister_replaces_in_place() {
        let mut registry = ToolRegistry::new();
        registry.register(LabelTool("a_tool", "old"));
        registry.register(LabelTool("b_tool", "other"));
        registry.register(LabelTool("a_tool", "new"));

        assert_eq!(registry.declarations().len(), 2);
        assert_eq!(registry.declarations()[0].description, "new");
        assert_eq!(registry.list_tools(), vec!["a_tool", "b_tool"]);
    }

    #[tokio::test]
    async fn test_validate_and_execute() {
        let registry = echo_registry();

        let args = registry
            .validate_args("echo", r#"{"message": "world", "times": 2, "tone": "loud"}"#)
            .unwrap();
        assert_eq!(args.params.len(), 3);

        let result = registry.execute("echo", args).await.unwrap();
        assert_eq!(result.content, "world");
    }

    #[test]
    fn test_validate_unknown_tool() {
        let registry = echo_registry();
        let result = registry.validate_args("nonexistent", "{}");
        assert!(matches!(result, Err(ToolError::NotFound(name)) if name == "nonexistent"));
    }

    #[test]
    fn test_validate_missing_required() {
        let registry = echo_registry();
        let result = registry.validate_args("echo", r#"{"times": 1}"#);
        assert!(matches!(result, Err(ToolError::MissingParameter(name)) if name == "message"));

        let result = registry.validate_args("echo", r#"{"message": null}"#);
        assert!(matches!(result, Err(ToolError::MissingParameter(_))));
    }

    #[test]
    fn test_validate_wrong_types() {
        let registry = echo_registry();

        let result = registry.validate_args("echo", r#"{"message": 42}"#);
        assert!(
            matches!(result, Err(ToolError::InvalidParameter { ref name, .. }) if name == "message")
        );

        let result = registry.validate_args("echo", r#"{"message": "hi", "times": "3"}"#);
        assert!(
            matches!(result, Err(ToolError::InvalidParameter { ref name, .. }) if name == "times")
        );

        let result = registry.validate_args("echo", r#"{"message": "hi", "times": 2.5}"#);
        assert!(matches!(result, Err(ToolError::InvalidParameter { .. })));
    }

    #[test]
    fn test_validate_enum_membership() {
        let registry = echo_registry();
        let result = registry.validate_args("echo", r#"{"message": "hi", "tone": "whisper"}"#);
        match result {
            Err(ToolError::InvalidParameter { name, reason }) => {
                assert_eq!(name, "tone");
                assert!(reason.contains("plain, loud"));
            }
            other => panic!("Expected InvalidParameter, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_malformed_payloads() {
        let registry = echo_registry();

        let result = registry.validate_args("echo", "{not json");
        assert!(
            matches!(result, Err(ToolError::InvalidParameter { ref name, .. }) if name == "arguments")
        );

        let result = registry.validate_args("echo", r#"["hi"]"#);
        assert!(
            matches!(result, Err(ToolError::InvalidParameter { ref name, .. }) if name == "arguments")
        );
    }

    #[test]
    fn test_validate_drops_undeclared_and_null_optional() {
        let registry = echo_registry();
        let args = registry
            .validate_args("echo", r#"{"message": "hi", "tone": null, "extra": true}"#)
            .unwrap();
        assert_eq!(args.params.len(), 1);
        assert!(args.params.contains_key("message"));
    }

    #[tokio::test]
    async fn test_execute_not_found() {
        let registry = ToolRegistry::new();
        let result = registry.execute("nonexistent", ToolArgs::default()).await;
        assert!(matches!(result, Err(ToolError::NotFound(_))));
    }
}

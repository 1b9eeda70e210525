use std::path::Path;

use serde::Deserialize;

use crate::error::EngineError;

/// Root configuration — parsed from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Register the builtin editors before any plugin library.
    #[serde(default = "default_builtin_editors")]
    pub builtin_editors: bool,

    /// Editor libraries, registered in the listed order.
    #[serde(default)]
    pub plugins: Vec<PluginConfig>,

    /// Extra class types the type loader knows by qualified name.
    #[serde(default)]
    pub types: Vec<String>,
}

fn default_builtin_editors() -> bool {
    true
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            builtin_editors: default_builtin_editors(),
            plugins: Vec::new(),
            types: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PluginConfig {
    pub name: String,
    /// Path to editor .so library.
    pub path: String,
}

impl EngineConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &str) -> Result<Self, EngineError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| EngineError::Config(format!("{path}: {e}")))?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(toml_str: &str) -> Result<Self, EngineError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| EngineError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Plugin paths must point at .so libraries and plugin names must be unique.
    pub fn validate(&self) -> Result<(), EngineError> {
        for (idx, plugin) in self.plugins.iter().enumerate() {
            if Path::new(&plugin.path).extension().is_none_or(|ext| ext != "so") {
                return Err(EngineError::Config(format!(
                    "plugin '{}': expected path to .so library, got '{}'",
                    plugin.name, plugin.path
                )));
            }
            if self.plugins[..idx].iter().any(|p| p.name == plugin.name) {
                return Err(EngineError::Config(format!(
                    "plugin '{}' defined more than once",
                    plugin.name
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = EngineConfig::parse("").unwrap();
        assert!(config.builtin_editors);
        assert!(config.plugins.is_empty());
        assert!(config.types.is_empty());
    }

    #[test]
    fn parses_plugins_in_order() {
        let config = EngineConfig::parse(
            r#"
            builtin_editors = false
            types = ["app.Money", "app.Currency"]

            [[plugins]]
            name = "money"
            path = "/opt/editors/libmoney_editors.so"

            [[plugins]]
            name = "geo"
            path = "/opt/editors/libgeo_editors.so"
            "#,
        )
        .unwrap();

        assert!(!config.builtin_editors);
        assert_eq!(config.types, vec!["app.Money", "app.Currency"]);
        let names: Vec<&str> = config.plugins.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["money", "geo"]);
    }

    #[test]
    fn rejects_non_so_plugin() {
        let err = EngineConfig::parse(
            r#"
            [[plugins]]
            name = "money"
            path = "/opt/editors/money.dll"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, EngineError::Config(msg) if msg.contains("money.dll")));
    }

    #[test]
    fn rejects_duplicate_plugin_names() {
        let err = EngineConfig::parse(
            r#"
            [[plugins]]
            name = "money"
            path = "/a/libmoney.so"

            [[plugins]]
            name = "money"
            path = "/b/libmoney.so"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, EngineError::Config(msg) if msg.contains("more than once")));
    }

    #[test]
    fn missing_file_is_config_error() {
        assert!(matches!(
            EngineConfig::load("/nonexistent/propedit.toml"),
            Err(EngineError::Config(_))
        ));
    }
}

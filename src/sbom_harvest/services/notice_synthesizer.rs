use crate::sbom_harvest::domain::{ArtifactTimestamp, RepositoryName};
use crate::shared::Result;
use serde_json::Value;

const RULE_WIDTH: usize = 80;

/// NoticeSynthesizer service rendering an attribution text from an SBOM
///
/// The SBOM is read schema-tolerantly: a component contributes only the
/// fields it actually has (`name`, `version`, `licenses[].license.id`,
/// `purl`). A component with none of them still yields an empty record.
pub struct NoticeSynthesizer;

impl NoticeSynthesizer {
    /// Renders the NOTICE content
    ///
    /// # Errors
    /// Returns an error if the document is not a JSON object or its
    /// `components` member is present but not an array
    pub fn render(
        repository: &RepositoryName,
        generated_at: &ArtifactTimestamp,
        document: &Value,
    ) -> Result<String> {
        let document = document
            .as_object()
            .ok_or_else(|| anyhow::anyhow!("SBOM document is not a JSON object"))?;

        let components: &[Value] = match document.get("components") {
            None => &[],
            Some(Value::Array(components)) => components,
            Some(_) => anyhow::bail!("SBOM 'components' member is not an array"),
        };

        let heavy_rule = "=".repeat(RULE_WIDTH);
        let light_rule = "-".repeat(RULE_WIDTH);

        let mut lines = vec![
            "NOTICE FILE".to_string(),
            heavy_rule.clone(),
            format!("Generated on: {}", generated_at.display()),
            format!("Repository: {}", repository),
            heavy_rule,
            String::new(),
            "This file contains information about the third-party components used in this project."
                .to_string(),
            "The following components and their licenses are included:".to_string(),
            String::new(),
        ];

        for component in components {
            lines.push(light_rule.clone());
            lines.extend(Self::component_lines(component));
            lines.push(String::new());
        }

        if !components.is_empty() {
            lines.push(light_rule);
        }

        let mut content = lines.join("\n");
        content.push('\n');
        Ok(content)
    }

    fn component_lines(component: &Value) -> Vec<String> {
        let mut lines = Vec::new();

        if let Some(name) = component.get("name") {
            lines.push(format!("Component: {}", Self::text(name)));
        }
        if let Some(version) = component.get("version") {
            lines.push(format!("Version: {}", Self::text(version)));
        }
        if let Some(Value::Array(licenses)) = component.get("licenses") {
            for license_id in licenses
                .iter()
                .filter_map(|entry| entry.get("license"))
                .filter_map(|license| license.get("id"))
            {
                lines.push(format!("License: {}", Self::text(license_id)));
            }
        }
        if let Some(purl) = component.get("purl") {
            lines.push(format!("Package URL: {}", Self::text(purl)));
        }

        lines
    }

    /// Strings are printed raw, anything else as compact JSON
    fn text(value: &Value) -> String {
        match value {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        }
    }
}

// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Output formatting

use serde_json::Value;
use zerion::EndpointRegistry;

/// How payloads are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Indented JSON
    #[default]
    Pretty,
    /// Single-line JSON
    Compact,
}

impl OutputFormat {
    /// Format selected by the `--compact` flag
    pub fn from_compact_flag(compact: bool) -> Self {
        if compact { Self::Compact } else { Self::Pretty }
    }

    /// Render `payload`; key order is kept as received
    pub fn render(self, payload: &Value) -> serde_json::Result<String> {
        match self {
            Self::Pretty => serde_json::to_string_pretty(payload),
            Self::Compact => serde_json::to_string(payload),
        }
    }
}

/// One line per registered endpoint: name, then path template
pub fn render_endpoints() -> String {
    let templates: Vec<_> = EndpointRegistry::templates().collect();
    let width = templates
        .iter()
        .map(|template| template.name.len())
        .max()
        .unwrap_or_default();

    templates
        .iter()
        .map(|template| format!("{:<width$}  {}\n", template.name, template.path))
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn pretty_and_compact() {
        let payload = json!({"data": {"id": "1"}});

        assert_eq!(
            OutputFormat::Compact.render(&payload).unwrap(),
            r#"{"data":{"id":"1"}}"#
        );
        assert_eq!(
            OutputFormat::Pretty.render(&payload).unwrap(),
            "{\n  \"data\": {\n    \"id\": \"1\"\n  }\n}"
        );
    }

    #[test]
    fn key_order_is_preserved() {
        let payload: Value =
            serde_json::from_str(r#"{"type":"token","id":"0x1","attributes":{}}"#).unwrap();
        assert_eq!(
            OutputFormat::Compact.render(&payload).unwrap(),
            r#"{"type":"token","id":"0x1","attributes":{}}"#
        );
    }

    #[test]
    fn compact_flag_selects_format() {
        assert_eq!(OutputFormat::from_compact_flag(true), OutputFormat::Compact);
        assert_eq!(OutputFormat::from_compact_flag(false), OutputFormat::Pretty);
    }

    #[test]
    fn endpoints_are_listed_in_registry_order() {
        let listing = render_endpoints();
        let lines: Vec<_> = listing.lines().collect();

        assert_eq!(lines.len(), 15);
        assert!(lines[0].starts_with("wallet_info "));
        assert!(lines[0].ends_with("/wallets/{address}"));
        assert!(lines[14].ends_with("/protocols/{protocol_id}/stats"));
    }
}

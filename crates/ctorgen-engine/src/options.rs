use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Default message placed on the deprecated zero-argument constructor.
pub const DEFAULT_OBSOLETE_MESSAGE: &str = "Do not call this constructor directly.";

/// Build-property names understood by [`GeneratorOptions::from_properties`].
pub const PROP_GENERATE_DOCUMENTATION: &str = "ctorgen_generate_documentation";
pub const PROP_EMIT_NULL_CHECKS: &str = "ctorgen_emit_null_checks";
pub const PROP_CHAIN_THIS_CALL: &str = "ctorgen_chain_this_call";
pub const PROP_OBSOLETE_MESSAGE: &str = "ctorgen_obsolete_message";
pub const PROP_MATCH_BASE_ON_NAME: &str = "ctorgen_match_base_on_name";

/// Pass-wide generation switches, read once per pass and constant for its
/// duration. The options participate in the incrementality-cache key.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorOptions {
    /// Emit XML documentation comments on generated constructors.
    pub generate_documentation: bool,
    /// Guard nullable-unsafe parameters with a coalescing throw.
    pub emit_null_checks: bool,
    /// Forward to a declared parameterless constructor via `: this()` when no
    /// base call is required.
    pub chain_this_call: bool,
    /// Message placed on the deprecated zero-argument constructor.
    pub obsolete_message: String,
    /// Pass-wide default for unifying same-named base parameters; a type-level
    /// marker value overrides it.
    pub match_base_on_name: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            generate_documentation: true,
            emit_null_checks: false,
            chain_this_call: false,
            obsolete_message: DEFAULT_OBSOLETE_MESSAGE.to_string(),
            match_base_on_name: false,
        }
    }
}

impl GeneratorOptions {
    /// Map the host's string build properties into typed options.
    ///
    /// This is the only place raw property values are inspected. Unknown keys
    /// are ignored, unparsable booleans keep their defaults.
    pub fn from_properties(properties: &BTreeMap<String, String>) -> Self {
        let mut options = Self::default();
        let mut read_bool = |key: &str, slot: &mut bool| {
            if let Some(value) = properties.get(key).and_then(|v| parse_bool(v)) {
                *slot = value;
            }
        };
        read_bool(
            PROP_GENERATE_DOCUMENTATION,
            &mut options.generate_documentation,
        );
        read_bool(PROP_EMIT_NULL_CHECKS, &mut options.emit_null_checks);
        read_bool(PROP_CHAIN_THIS_CALL, &mut options.chain_this_call);
        read_bool(PROP_MATCH_BASE_ON_NAME, &mut options.match_base_on_name);

        if let Some(message) = properties.get(PROP_OBSOLETE_MESSAGE) {
            let message = message.trim();
            if !message.is_empty() {
                options.obsolete_message = message.to_string();
            }
        }
        options
    }
}

fn parse_bool(text: &str) -> Option<bool> {
    match text.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "enable" => Some(true),
        "false" | "0" | "no" | "disable" => Some(false),
        _ => None,
    }
}

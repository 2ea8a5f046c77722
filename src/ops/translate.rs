//! Pairwise translation between surface syntaxes.

use serde_json::Value;
use tracing::debug;

use crate::annotation::ResponseEnvelope;
use crate::error::OpsError;
use crate::syntax::SyntaxTag;

/// Supported `(source, destination)` pairs.
pub const SUPPORTED_PAIRS: &[(SyntaxTag, SyntaxTag)] = &[
    (SyntaxTag::Dummy, SyntaxTag::Yaml),
    (SyntaxTag::Dummy, SyntaxTag::Json),
    (SyntaxTag::Json, SyntaxTag::Yaml),
    (SyntaxTag::Json, SyntaxTag::Dummy),
    (SyntaxTag::Yaml, SyntaxTag::Dummy),
    (SyntaxTag::Yaml, SyntaxTag::Json),
];

pub fn is_supported(source: SyntaxTag, destination: SyntaxTag) -> bool {
    SUPPORTED_PAIRS.contains(&(source, destination))
}

/// Translate `content` from `source` to `destination` syntax tags.
pub fn translate(source: &str, destination: &str, content: &str) -> ResponseEnvelope {
    if content.is_empty() {
        return ResponseEnvelope::ok_with("Nothing to translate", None);
    }

    let Ok(source_tag) = source.parse::<SyntaxTag>() else {
        return ResponseEnvelope::error(format!(
            "It is not possible to translate from {source} to {destination}"
        ));
    };
    let destination_tag = match destination.parse::<SyntaxTag>() {
        Ok(tag) if is_supported(source_tag, tag) => tag,
        // The message names "yaml" whatever the source; clients match on it.
        _ => {
            return ResponseEnvelope::error(format!(
                "It is not possible to translate from yaml to {destination}"
            ));
        }
    };

    debug!("translating {source_tag} -> {destination_tag}");
    match convert(source_tag, destination_tag, content) {
        Ok(text) => ResponseEnvelope::ok_with(
            "The content has been translated",
            Some(Value::String(text)),
        ),
        Err(e) => ResponseEnvelope::error(format!("Error while translating: {e}")),
    }
}

/// Parse with the source adapter, serialize with the destination adapter.
pub fn convert(
    source: SyntaxTag,
    destination: SyntaxTag,
    content: &str,
) -> Result<String, OpsError> {
    let value = source.adapter().parse(content)?;
    destination.adapter().serialize(&value)
}

//! Template content used when text generation is unavailable.

use tubegen_models::ScriptContent;

/// Deterministic title, description and script for a topic.
pub fn fallback_script(topic: &str) -> ScriptContent {
    ScriptContent {
        title: format!("{} - जानिए रोचक जानकारी", topic),
        description: format!("इस वीडियो में हम {} के बारे में दिलचस्प जानकारी देंगे।", topic),
        script: format!(
            "नमस्कार दोस्तों! आज हम बात करेंगे {} के बारे में। यह एक बहुत ही रोचक विषय है। इस वीडियो में हम इसके बारे में विस्तार से जानेंगे। तो चलिए शुरू करते हैं!",
            topic
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_embeds_topic() {
        let content = fallback_script("ताजमहल");
        assert_eq!(content.title, "ताजमहल - जानिए रोचक जानकारी");
        assert!(content.description.contains("ताजमहल"));
        assert!(content.script.starts_with("नमस्कार दोस्तों! आज हम बात करेंगे ताजमहल के बारे में।"));
    }

    #[test]
    fn test_fallback_is_deterministic() {
        assert_eq!(fallback_script("Rust"), fallback_script("Rust"));
    }
}

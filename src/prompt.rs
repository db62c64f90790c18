use crate::completion::{ChatMessage, CompletionRequest, CompletionSettings};

pub const SYSTEM_INSTRUCTION: &str = "You generate HTML and CSS code from UI image descriptions.";

pub const TRUNCATION_MARKER: &str = "... (truncated)";

/// Builds the user prompt, embedding only the first `prefix_chars` characters of the payload.
pub fn build_user_prompt(image_base64: &str, prefix_chars: usize) -> String {
    let prefix: String = image_base64.chars().take(prefix_chars).collect();
    format!(
        "You are an expert front-end developer. Given the description of a UI image, generate HTML and CSS code.\n\
         The image is base64 encoded: {prefix}{TRUNCATION_MARKER}\n\
         Generate a simple responsive webpage with HTML and CSS."
    )
}

pub fn conversion_request(image_base64: &str, settings: &CompletionSettings) -> CompletionRequest {
    CompletionRequest {
        model: settings.model.clone(),
        messages: vec![
            ChatMessage::system(SYSTEM_INSTRUCTION),
            ChatMessage::user(build_user_prompt(image_base64, settings.prompt_prefix_chars)),
        ],
        max_tokens: settings.max_tokens,
        temperature: settings.temperature,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn embedded_fragment(prompt: &str) -> &str {
        let start = prompt.find("encoded: ").unwrap() + "encoded: ".len();
        let end = prompt.find(TRUNCATION_MARKER).unwrap();
        &prompt[start..end]
    }

    #[test]
    fn long_payload_is_cut_to_prefix() {
        let payload = "A".repeat(250);
        let prompt = build_user_prompt(&payload, 100);

        assert_eq!(embedded_fragment(&prompt), "A".repeat(100));
        assert!(prompt.contains("AAAA... (truncated)"));
    }

    #[test]
    fn short_payload_still_gets_marker() {
        let prompt = build_user_prompt("iVBOR", 100);
        assert_eq!(embedded_fragment(&prompt), "iVBOR");
        assert!(prompt.contains("iVBOR... (truncated)"));
    }

    #[test]
    fn truncation_never_splits_a_character() {
        let payload = "é".repeat(10);
        let prompt = build_user_prompt(&payload, 3);
        assert_eq!(embedded_fragment(&prompt), "ééé");
    }

    #[test]
    fn conversion_request_uses_settings() {
        let settings = CompletionSettings {
            model: "gpt-4".to_string(),
            max_tokens: 500,
            temperature: 0.2,
            prompt_prefix_chars: 100,
        };

        let request = conversion_request("iVBORw0KGgo", &settings);

        assert_eq!(request.model, "gpt-4");
        assert_eq!(request.max_tokens, 500);
        assert_eq!(request.temperature, 0.2);
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, "system");
        assert_eq!(request.messages[0].content, SYSTEM_INSTRUCTION);
        assert_eq!(request.messages[1].role, "user");
        assert!(request.messages[1].content.contains("iVBORw0KGgo"));
    }
}

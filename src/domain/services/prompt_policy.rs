//! Prompt assembly for the medical assistant.
//!
//! Pure string templating: the user's input is inserted verbatim, with
//! no escaping or sanitization. The templates are the policy — domain
//! restriction, off-topic redirects, and the mandatory disclaimer all
//! live in the instruction text sent to the model, not in code.

/// Instruction template wrapped around every chat query.
const CHAT_TEMPLATE: &str = "\
You are MediAssist, a specialized medical chatbot designed to provide helpful \
information on medical topics only.

Instructions:
- Only respond to questions related to medical topics, health advice, symptoms, \
treatments, medications, or general wellness
- If the query is not medical-related, politely explain that you can only \
provide information on medical topics
- Always include a disclaimer that you're an AI assistant and not a replacement \
for professional medical advice
- Provide evidence-based information when possible
- Be compassionate and clear in your responses

User Query: ";

/// Context sentence prepended to every image analysis prompt.
const IMAGE_CONTEXT: &str = "This is a medical image. ";

/// Fallback instruction when the user gives no text with an image.
const IMAGE_GENERIC_INSTRUCTION: &str =
    "Provide a medical analysis of this image. Only discuss medical aspects.";

/// Wrap a raw user query in the fixed chat instruction template.
///
/// The query appears verbatim; there is no conditional logic here.
pub fn build_chat_prompt(user_query: &str) -> String {
    format!("{CHAT_TEMPLATE}{user_query}")
}

/// Build the prompt for image analysis.
///
/// Non-empty `user_text` is appended after the medical-context
/// sentence; otherwise the generic analysis instruction is used.
pub fn build_image_prompt(user_text: &str) -> String {
    if user_text.is_empty() {
        format!("{IMAGE_CONTEXT}{IMAGE_GENERIC_INSTRUCTION}")
    } else {
        format!("{IMAGE_CONTEXT}{user_text}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_prompt_contains_query_verbatim() {
        let prompt = build_chat_prompt("what are the side effects of ibuprofen?");
        assert!(prompt.contains("what are the side effects of ibuprofen?"));
    }

    #[test]
    fn chat_prompt_contains_disclaimer_instruction() {
        let prompt = build_chat_prompt("anything");
        assert!(prompt.contains(
            "Always include a disclaimer that you're an AI assistant and not a \
             replacement for professional medical advice"
        ));
    }

    #[test]
    fn chat_prompt_contains_domain_restriction() {
        let prompt = build_chat_prompt("anything");
        assert!(prompt.contains("medical topics only"));
        assert!(prompt.contains("politely explain that you can only provide information"));
    }

    #[test]
    fn image_prompt_uses_generic_instruction_when_text_is_empty() {
        assert_eq!(
            build_image_prompt(""),
            "This is a medical image. Provide a medical analysis of this image. \
             Only discuss medical aspects."
        );
    }

    #[test]
    fn image_prompt_appends_user_text_after_context() {
        let prompt = build_image_prompt("show me bone density");
        assert!(prompt.starts_with("This is a medical image. "));
        assert!(prompt.contains("show me bone density"));
        assert!(!prompt.contains("Provide a medical analysis"));
    }
}

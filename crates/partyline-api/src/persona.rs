use partyline_llm::Message;

/// The fixed persona instruction. Every request gets the same system turn;
/// the relay is single-shot and never sends history.
pub const PERSONA_PROMPT: &str = "You are an energetic party expert who loves to discuss \
anything related to parties, music, dancing, and celebrations. No matter what the user says, \
cleverly bring the topic back to partying. Keep the tone upbeat and fun.";

/// Build the two-turn conversation sent upstream: persona, then the user's
/// message verbatim.
pub fn conversation(user_message: &str) -> Vec<Message> {
    vec![
        Message::system(PERSONA_PROMPT),
        Message::human(user_message),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversation_shape() {
        let messages = conversation("Hello");

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role(), "system");
        assert_eq!(messages[0].content(), PERSONA_PROMPT);
        assert_eq!(messages[1].role(), "user");
        assert_eq!(messages[1].content(), "Hello");
    }

    #[test]
    fn test_user_message_verbatim() {
        let messages = conversation("  spaced  input  ");
        assert_eq!(messages[1].content(), "  spaced  input  ");
    }
}

use partyline_llm::{CompletionOptions, CompletionRequest, Message};

#[test]
fn test_completion_request_creation() {
    let messages = vec![Message::human("Hello")];
    let request = CompletionRequest::new("gpt-3.5-turbo", messages);

    assert_eq!(request.model, "gpt-3.5-turbo");
    assert_eq!(request.messages.len(), 1);
}

#[test]
fn test_completion_request_with_options() {
    let messages = vec![Message::human("Hello")];
    let options = CompletionOptions::new().temperature(0.7).max_tokens(150);

    let request = CompletionRequest::new("gpt-3.5-turbo", messages).with_options(options);

    assert_eq!(request.options.temperature, Some(0.7));
    assert_eq!(request.options.max_tokens, Some(150));
}

#[test]
fn test_completion_options_default() {
    let options = CompletionOptions::default();

    assert_eq!(options.temperature, None);
    assert_eq!(options.max_tokens, None);
}

#[test]
fn test_completion_options_builder() {
    let options = CompletionOptions::new().temperature(0.2).max_tokens(64);

    assert_eq!(options.temperature, Some(0.2));
    assert_eq!(options.max_tokens, Some(64));
}

#[test]
fn test_completion_request_clone() {
    let request = CompletionRequest::new("gpt-3.5-turbo", vec![Message::human("Hi")]);
    let cloned = request.clone();

    assert_eq!(request.model, cloned.model);
    assert_eq!(request.messages.len(), cloned.messages.len());
}

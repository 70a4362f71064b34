use partyline_llm::Message;

#[test]
fn test_message_system() {
    let msg = Message::system("You are a party expert");
    assert_eq!(msg.role(), "system");
    assert_eq!(msg.content(), "You are a party expert");
}

#[test]
fn test_message_human() {
    let msg = Message::human("Hello");
    assert_eq!(msg.role(), "user");
}

#[test]
fn test_message_assistant() {
    let msg = Message::assistant("Let's dance!");
    assert_eq!(msg.role(), "assistant");
}

#[test]
fn test_message_serialization_human() {
    let msg = Message::human("Hello");
    let json = serde_json::to_string(&msg).unwrap();
    assert!(json.contains("\"role\":\"user\""));
    assert!(json.contains("Hello"));
}

#[test]
fn test_message_serialization_system() {
    let msg = Message::system("Stay on theme");
    let json = serde_json::to_string(&msg).unwrap();
    assert!(json.contains("\"role\":\"system\""));
}

#[test]
fn test_message_deserialization() {
    let json = r#"{"role":"user","content":"Test"}"#;
    let msg: Message = serde_json::from_str(json).unwrap();
    assert_eq!(msg.role(), "user");
    assert_eq!(msg.content(), "Test");
}

#[test]
fn test_message_roundtrip() {
    let msg = Message::assistant("Party on");
    let json = serde_json::to_string(&msg).unwrap();
    let back: Message = serde_json::from_str(&json).unwrap();
    assert_eq!(msg, back);
}

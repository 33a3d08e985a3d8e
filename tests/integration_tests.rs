//! Integration tests for MediAssist.
//!
//! These tests drive the use cases through the scripted mock gateway
//! and verify the session, prompt, and error-surfacing contracts
//! end to end.

use std::sync::Arc;

use mediassist::{
    prompt_policy, AnalyzeImageUseCase, ChatTurnUseCase, ConversationSession,
    ImageAnalysisRequest, ImageFormat, MockGateway, Role,
};

const JPEG_MAGIC: [u8; 4] = [0xFF, 0xD8, 0xFF, 0xE0];

fn valid_jpeg_request() -> ImageAnalysisRequest {
    ImageAnalysisRequest::new(JPEG_MAGIC.to_vec(), ImageFormat::Jpeg)
}

#[tokio::test]
async fn successful_chat_turn_records_both_sides() {
    let gateway = Arc::new(MockGateway::returning("Flu symptoms include fever."));
    let use_case = ChatTurnUseCase::new(gateway);
    let mut session = ConversationSession::new();

    use_case
        .execute(&mut session, "flu symptoms?")
        .await
        .expect("chat turn should not fail");

    let messages = session.snapshot();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].role(), Role::User);
    assert_eq!(messages[0].content(), "flu symptoms?");
    assert_eq!(messages[1].role(), Role::Assistant);
    assert_eq!(messages[1].content(), "Flu symptoms include fever.");
}

#[tokio::test]
async fn failed_chat_turn_is_recorded_as_an_assistant_error_message() {
    let gateway = Arc::new(MockGateway::failing("connection refused"));
    let use_case = ChatTurnUseCase::new(gateway);
    let mut session = ConversationSession::new();

    use_case
        .execute(&mut session, "what is flu")
        .await
        .expect("gateway failures must not propagate as errors");

    let messages = session.snapshot();
    assert_eq!(messages.len(), 2, "user turn + error-assistant turn");
    assert_eq!(messages[0].role(), Role::User);
    assert_eq!(messages[1].role(), Role::Assistant);
    assert!(messages[1].content().starts_with("An error occurred:"));
    assert!(messages[1].content().contains("connection refused"));
}

#[tokio::test]
async fn consecutive_turns_stay_in_submission_order() {
    let gateway = Arc::new(MockGateway::returning("ok"));
    let use_case = ChatTurnUseCase::new(gateway);
    let mut session = ConversationSession::new();

    use_case.execute(&mut session, "first").await.unwrap();
    use_case.execute(&mut session, "second").await.unwrap();
    use_case.execute(&mut session, "third").await.unwrap();

    let user_turns: Vec<&str> = session
        .snapshot()
        .iter()
        .filter(|m| m.role() == Role::User)
        .map(|m| m.content())
        .collect();
    assert_eq!(user_turns, vec!["first", "second", "third"]);
}

#[tokio::test]
async fn chat_turns_survive_a_reset_and_reseed_the_welcome() {
    let gateway = Arc::new(MockGateway::returning("ok"));
    let use_case = ChatTurnUseCase::new(gateway);
    let mut session = ConversationSession::with_welcome("Hello!");

    use_case.execute(&mut session, "question").await.unwrap();
    assert_eq!(session.len(), 3);

    session.reset();
    session.reset();

    assert_eq!(session.len(), 1);
    assert_eq!(session.last().unwrap().content(), "Hello!");

    use_case.execute(&mut session, "again").await.unwrap();
    assert_eq!(session.len(), 3);
}

#[tokio::test]
async fn image_analysis_returns_the_gateway_text_verbatim() {
    let gateway = Arc::new(MockGateway::returning("No abnormality detected."));
    let use_case = AnalyzeImageUseCase::new(gateway);

    let result = use_case.execute(&valid_jpeg_request()).await.unwrap();
    assert_eq!(result, "No abnormality detected.");
}

#[tokio::test]
async fn image_analysis_does_not_touch_any_session() {
    let gateway = Arc::new(MockGateway::returning("No abnormality detected."));
    let chat = ChatTurnUseCase::new(gateway.clone());
    let analyze = AnalyzeImageUseCase::new(gateway);
    let mut session = ConversationSession::new();

    chat.execute(&mut session, "hello").await.unwrap();
    let before: Vec<_> = session.snapshot().to_vec();

    analyze.execute(&valid_jpeg_request()).await.unwrap();

    assert_eq!(session.snapshot(), before.as_slice());
}

#[tokio::test]
async fn image_analysis_forwards_user_text_through_the_prompt() {
    let gateway = Arc::new(MockGateway::returning("Bone density looks normal."));
    let use_case = AnalyzeImageUseCase::new(gateway.clone());

    let request = valid_jpeg_request().with_user_text("show me bone density");
    use_case.execute(&request).await.unwrap();

    let prompts = gateway.prompts();
    assert_eq!(prompts.len(), 1);
    assert_eq!(prompts[0], prompt_policy::build_image_prompt("show me bone density"));
    assert!(prompts[0].contains("show me bone density"));
}

#[test]
fn sniffed_format_from_a_written_file_round_trips() {
    use std::io::Write;

    let mut file = tempfile::Builder::new()
        .suffix(".jpg")
        .tempfile()
        .expect("temp file");
    file.write_all(&JPEG_MAGIC).expect("write magic");

    let data = std::fs::read(file.path()).expect("read back");
    assert_eq!(ImageFormat::sniff(&data), Some(ImageFormat::Jpeg));
    assert_eq!(ImageFormat::from_path(file.path()), Some(ImageFormat::Jpeg));
}

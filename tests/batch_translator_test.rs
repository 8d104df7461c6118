use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use subgen::application::ports::{TranslationClient, TranslationError};
use subgen::application::services::BatchTranslator;
use subgen::domain::Segment;

/// Replays scripted responses in order and records every prompt it was sent.
struct ScriptedClient {
    configured: bool,
    responses: Mutex<VecDeque<Result<String, TranslationError>>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedClient {
    fn new(configured: bool, responses: Vec<Result<String, TranslationError>>) -> Self {
        Self {
            configured,
            responses: Mutex::new(responses.into_iter().collect()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl TranslationClient for ScriptedClient {
    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn complete(&self, prompt: &str) -> Result<String, TranslationError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(TranslationError::ApiRequestFailed(
                    "no scripted response left".to_string(),
                ))
            })
    }
}

fn segments(texts: &[&str]) -> Vec<Segment> {
    texts
        .iter()
        .enumerate()
        .map(|(i, t)| Segment::new(i as f64, i as f64 + 1.0, *t))
        .collect()
}

#[tokio::test]
async fn given_no_credential_when_translating_then_input_passes_through_unchanged() {
    let client = Arc::new(ScriptedClient::new(false, vec![]));
    let translator = BatchTranslator::new(Arc::clone(&client), 5);
    let input = segments(&["eins", "zwei", "drei"]);

    let result = translator.translate_all(&input, "English").await.unwrap();

    assert_eq!(result.len(), input.len());
    for (source, translated) in input.iter().zip(&result) {
        assert_eq!(translated.text, source.text);
        assert_eq!(translated.start, source.start);
        assert_eq!(translated.end, source.end);
    }
    assert_eq!(client.call_count(), 0);
}

#[tokio::test]
async fn given_seven_segments_and_batch_size_three_when_translating_then_three_calls_are_made() {
    let client = Arc::new(ScriptedClient::new(
        true,
        vec![
            Ok("[1] one\n[2] two\n[3] three".to_string()),
            Ok("[1] four\n[2] five\n[3] six".to_string()),
            Ok("[1] seven".to_string()),
        ],
    ));
    let translator = BatchTranslator::new(Arc::clone(&client), 3);
    let input = segments(&["a", "b", "c", "d", "e", "f", "g"]);

    let result = translator.translate_all(&input, "English").await.unwrap();

    assert_eq!(client.call_count(), 3);
    assert_eq!(result.len(), 7);
    let texts: Vec<&str> = result.iter().map(|s| s.text.as_str()).collect();
    assert_eq!(
        texts,
        vec!["one", "two", "three", "four", "five", "six", "seven"]
    );
}

#[tokio::test]
async fn given_numbered_and_padded_response_lines_when_parsing_then_markers_are_stripped() {
    let client = Arc::new(ScriptedClient::new(
        true,
        vec![Ok("  [1] Hello  \n\n[2] World".to_string())],
    ));
    let translator = BatchTranslator::new(client, 5);
    let input = segments(&["Hallo", "Welt"]);

    let result = translator.translate_all(&input, "English").await.unwrap();

    assert_eq!(result[0].text, "Hello");
    assert_eq!(result[1].text, "World");
}

#[tokio::test]
async fn given_line_count_mismatch_when_translating_then_batch_falls_back_to_per_segment_calls() {
    let client = Arc::new(ScriptedClient::new(
        true,
        vec![
            // batch response with one line missing
            Ok("[1] one\n[2] two".to_string()),
            Ok("one".to_string()),
            Ok("two".to_string()),
            Ok("three".to_string()),
        ],
    ));
    let translator = BatchTranslator::new(Arc::clone(&client), 3);
    let input = segments(&["a", "b", "c"]);

    let result = translator.translate_all(&input, "English").await.unwrap();

    // one failed batch call plus one fallback call per segment
    assert_eq!(client.call_count(), 4);
    let texts: Vec<&str> = result.iter().map(|s| s.text.as_str()).collect();
    assert_eq!(texts, vec!["one", "two", "three"]);
}

#[tokio::test]
async fn given_batch_call_error_when_translating_then_fallback_absorbs_the_failure() {
    let client = Arc::new(ScriptedClient::new(
        true,
        vec![
            Err(TranslationError::ApiRequestFailed("boom".to_string())),
            Ok("one".to_string()),
            Ok("two".to_string()),
        ],
    ));
    let translator = BatchTranslator::new(Arc::clone(&client), 5);
    let input = segments(&["a", "b"]);

    let result = translator.translate_all(&input, "English").await.unwrap();

    assert_eq!(client.call_count(), 3);
    assert_eq!(result.len(), 2);
    assert_eq!(result[0].text, "one");
    assert_eq!(result[1].text, "two");
}

#[tokio::test]
async fn given_failing_fallback_when_translating_then_error_propagates() {
    let client = Arc::new(ScriptedClient::new(
        true,
        vec![
            Err(TranslationError::ApiRequestFailed("batch down".to_string())),
            Err(TranslationError::ApiRequestFailed("fallback down".to_string())),
        ],
    ));
    let translator = BatchTranslator::new(client, 5);
    let input = segments(&["a", "b"]);

    let result = translator.translate_all(&input, "English").await;

    assert!(matches!(
        result,
        Err(TranslationError::ApiRequestFailed(_))
    ));
}

#[tokio::test]
async fn given_one_batch_when_building_prompt_then_each_segment_carries_up_to_three_context_lines()
{
    let client = Arc::new(ScriptedClient::new(
        true,
        vec![Ok("[1] 1\n[2] 2\n[3] 3\n[4] 4\n[5] 5".to_string())],
    ));
    let translator = BatchTranslator::new(Arc::clone(&client), 5);
    let input = segments(&["s1", "s2", "s3", "s4", "s5"]);

    translator.translate_all(&input, "English").await.unwrap();

    let prompts = client.prompts();
    assert_eq!(prompts.len(), 1);
    let stanzas: Vec<&str> = prompts[0]
        .split("\n\n")
        .skip(1) // instruction block
        .filter(|s| !s.trim().is_empty())
        .collect();
    assert_eq!(stanzas.len(), 5);

    for (i, stanza) in stanzas.iter().enumerate() {
        let context_lines = stanza
            .lines()
            .filter(|l| l.starts_with("Context: "))
            .count();
        assert_eq!(context_lines, i.min(3), "segment index {}", i);
        assert!(stanza.contains(&format!("Segment: [{}] s{}", i + 1, i + 1)));
    }
}

#[tokio::test]
async fn given_two_batches_when_building_prompts_then_context_never_crosses_the_batch_boundary() {
    let client = Arc::new(ScriptedClient::new(
        true,
        vec![
            Ok("[1] 1\n[2] 2\n[3] 3\n[4] 4\n[5] 5".to_string()),
            Ok("[1] 6".to_string()),
        ],
    ));
    let translator = BatchTranslator::new(Arc::clone(&client), 5);
    let input = segments(&["s1", "s2", "s3", "s4", "s5", "s6"]);

    let result = translator.translate_all(&input, "English").await.unwrap();

    assert_eq!(result.len(), 6);
    let prompts = client.prompts();
    assert_eq!(prompts.len(), 2);
    // batch-local numbering restarts and the first segment of the second
    // batch has no context from the first batch
    assert!(prompts[1].contains("Segment: [1] s6"));
    assert!(!prompts[1].contains("Context:"));
    assert!(!prompts[1].contains("s5"));
}

#[tokio::test]
async fn given_empty_segment_list_when_translating_then_no_calls_are_made() {
    let client = Arc::new(ScriptedClient::new(true, vec![]));
    let translator = BatchTranslator::new(Arc::clone(&client), 5);

    let result = translator.translate_all(&[], "English").await.unwrap();

    assert!(result.is_empty());
    assert_eq!(client.call_count(), 0);
}

#[tokio::test]
async fn given_single_text_when_translate_one_then_response_is_trimmed() {
    let client = Arc::new(ScriptedClient::new(
        true,
        vec![Ok("  bonjour \n".to_string())],
    ));
    let translator = BatchTranslator::new(client, 5);

    let result = translator.translate_one("hello", "French").await.unwrap();

    assert_eq!(result, "bonjour");
}

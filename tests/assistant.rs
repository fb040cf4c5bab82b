use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use ecotrail::chat::{ChatService, ItineraryRequest, SessionRegistry};
use ecotrail::db::models::{ChatExchange, Itinerary};
use ecotrail::db::store::Filter;
use ecotrail::db::{DocStore, Repository};
use ecotrail::error::ServiceError;
use ecotrail::llm::models::{ChatOptions, ChatResponse, Message};
use ecotrail::llm::{LlmError, LlmProvider};

const PERSONA: &str = "You are a tourism assistant.";

struct EchoProvider {
    calls: AtomicUsize,
}

impl EchoProvider {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl LlmProvider for EchoProvider {
    fn name(&self) -> &str {
        "echo"
    }

    async fn chat(
        &self,
        messages: &[Message],
        _options: ChatOptions,
    ) -> Result<ChatResponse, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let last = messages.last().map(|m| m.content.as_str()).unwrap_or("");
        Ok(ChatResponse {
            content: format!("echo: {}", last),
            model: "echo".to_string(),
            usage: None,
        })
    }
}

struct FailingProvider;

#[async_trait]
impl LlmProvider for FailingProvider {
    fn name(&self) -> &str {
        "failing"
    }

    async fn chat(
        &self,
        _messages: &[Message],
        _options: ChatOptions,
    ) -> Result<ChatResponse, LlmError> {
        Err(LlmError::Api("upstream unavailable".to_string()))
    }
}

struct SlowProvider;

#[async_trait]
impl LlmProvider for SlowProvider {
    fn name(&self) -> &str {
        "slow"
    }

    async fn chat(
        &self,
        _messages: &[Message],
        _options: ChatOptions,
    ) -> Result<ChatResponse, LlmError> {
        tokio::time::sleep(Duration::from_secs(5)).await;
        Ok(ChatResponse {
            content: "too late".to_string(),
            model: "slow".to_string(),
            usage: None,
        })
    }
}

fn service_with(provider: Option<Arc<dyn LlmProvider>>) -> ChatService {
    let store = DocStore::open_in_memory().unwrap();
    let repo = Repository::new(Arc::new(store));
    ChatService::new(
        SessionRegistry::new(PERSONA.to_string()),
        provider,
        repo,
        Duration::from_millis(200),
    )
}

async fn persisted_exchanges(service: &ChatService, session_id: &str) -> Vec<ChatExchange> {
    service
        .repo()
        .list::<ChatExchange>(Filter::new().eq("session_id", session_id))
        .await
        .unwrap()
}

#[test]
fn new_session_starts_with_persona_and_empty_history() {
    let registry = SessionRegistry::new(PERSONA.to_string());

    let conversation = registry.resolve("fresh");
    assert_eq!(conversation.system_prompt, PERSONA);
    assert!(conversation.history.is_empty());
}

#[test]
fn same_identifier_accumulates_one_conversation() {
    let registry = SessionRegistry::new(PERSONA.to_string());

    registry.commit("shared", "first", "reply one");
    registry.commit("shared", "second", "reply two");

    let conversation = registry.resolve("shared");
    assert_eq!(conversation.history.len(), 4);
    assert_eq!(registry.history_len("other"), 0);
}

#[test]
fn racing_first_uses_converge_on_one_conversation() {
    let registry = Arc::new(SessionRegistry::new(PERSONA.to_string()));
    let threads: usize = 8;
    let commits: usize = 25;

    let handles: Vec<_> = (0..threads)
        .map(|t| {
            let registry = Arc::clone(&registry);
            std::thread::spawn(move || {
                // Every racer, including the winners of the first-use race,
                // must observe the same fresh conversation.
                let conversation = registry.resolve("contested");
                assert_eq!(conversation.system_prompt, PERSONA);
                for i in 0..commits {
                    registry.commit("contested", &format!("q{}-{}", t, i), "reply");
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    // One coherent state, no lost commits: the cumulative history holds
    // every committed pair.
    assert_eq!(registry.history_len("contested"), threads * commits * 2);
}

#[tokio::test]
async fn successful_exchange_persists_once_and_grows_history_by_two() {
    let provider = EchoProvider::new();
    let service = service_with(Some(provider.clone()));

    let reply = service.send("s-1", "what to see in Ranchi?").await.unwrap();
    assert_eq!(reply, "echo: what to see in Ranchi?");

    assert_eq!(service.registry().history_len("s-1"), 2);
    assert_eq!(provider.calls.load(Ordering::SeqCst), 1);

    let exchanges = persisted_exchanges(&service, "s-1").await;
    assert_eq!(exchanges.len(), 1);
    assert_eq!(exchanges[0].user_message, "what to see in Ranchi?");
    assert_eq!(exchanges[0].assistant_reply, reply);
}

#[tokio::test]
async fn provider_failure_persists_nothing_and_leaves_history_untouched() {
    let service = service_with(Some(Arc::new(FailingProvider)));

    let err = service.send("s-1", "hello").await.unwrap_err();
    assert!(matches!(err, ServiceError::Provider(_)));

    assert_eq!(service.registry().history_len("s-1"), 0);
    assert!(persisted_exchanges(&service, "s-1").await.is_empty());
}

#[tokio::test]
async fn missing_credential_is_a_configuration_error() {
    let service = service_with(None);

    let err = service.send("s-1", "hello").await.unwrap_err();
    assert!(matches!(err, ServiceError::Configuration(_)));
    assert!(persisted_exchanges(&service, "s-1").await.is_empty());
}

#[tokio::test]
async fn slow_provider_is_cut_off_by_the_timeout() {
    let service = service_with(Some(Arc::new(SlowProvider)));

    let err = service.send("s-1", "hello").await.unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Provider(LlmError::Timeout)
    ));
    assert_eq!(service.registry().history_len("s-1"), 0);
}

#[tokio::test]
async fn itinerary_request_persists_structured_record() {
    let service = service_with(Some(EchoProvider::new()));

    let itinerary = service
        .generate_itinerary(ItineraryRequest {
            user_name: "Asha".to_string(),
            days: 3,
            interests: vec!["wildlife".to_string()],
            budget: "medium".to_string(),
            special_requirements: None,
        })
        .await
        .unwrap();

    assert_eq!(itinerary.days, 3);
    assert_eq!(itinerary.user_name, "Asha");
    assert!(!itinerary.destinations.is_empty());

    let stored: Itinerary = service.repo().get_by_id(&itinerary.id).await.unwrap();
    assert_eq!(stored, itinerary);

    // Itinerary turns converse under a name-derived session but persist no
    // chat exchange.
    assert_eq!(service.registry().history_len("itinerary_Asha"), 2);
    assert!(persisted_exchanges(&service, "itinerary_Asha").await.is_empty());
}

#[tokio::test]
async fn zero_days_is_rejected_before_any_provider_call() {
    let provider = EchoProvider::new();
    let service = service_with(Some(provider.clone()));

    let err = service
        .generate_itinerary(ItineraryRequest {
            user_name: "Asha".to_string(),
            days: 0,
            interests: vec!["wildlife".to_string()],
            budget: "medium".to_string(),
            special_requirements: None,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::Validation(_)));
    assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    assert!(service
        .repo()
        .list::<Itinerary>(Filter::new())
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn empty_interests_are_rejected() {
    let provider = EchoProvider::new();
    let service = service_with(Some(provider.clone()));

    let err = service
        .generate_itinerary(ItineraryRequest {
            user_name: "Asha".to_string(),
            days: 2,
            interests: vec![],
            budget: "low".to_string(),
            special_requirements: None,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::Validation(_)));
    assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
}

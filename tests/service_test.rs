use async_trait::async_trait;
use combigen::domain::model::{Combination, GenerateResponse};
use combigen::domain::ports::CombinationStore;
use combigen::utils::error::Result;
use combigen::{GenerateRequest, GenerationService};
use std::sync::Mutex;

#[derive(Default)]
struct RecordingStore {
    persisted: Mutex<Vec<Vec<Combination>>>,
}

#[async_trait]
impl CombinationStore for RecordingStore {
    async fn persist(&self, combinations: &[Combination]) -> Result<u64> {
        self.persisted.lock().unwrap().push(combinations.to_vec());
        Ok(42)
    }
}

#[tokio::test]
async fn test_full_result_set_reaches_the_sink() {
    let service = GenerationService::new(RecordingStore::default());

    let response = service
        .process(GenerateRequest {
            items: Some(vec![3, 2]),
            length: Some(2),
        })
        .await
        .unwrap();

    assert_eq!(response.id, 42);
    assert_eq!(response.combination.len(), 6);

    // The sink sees the same ordered result set that goes out on the wire,
    // including every duplicate item occurrence across combinations.
    let persisted = service_store_snapshot(&service);
    assert_eq!(persisted.len(), 1);
    assert_eq!(persisted[0], response.combination);

    let item_occurrences: Vec<&String> = persisted[0].iter().flatten().collect();
    assert_eq!(item_occurrences.len(), 12);
    assert_eq!(
        item_occurrences
            .iter()
            .filter(|item| item.as_str() == "B1")
            .count(),
        3
    );
}

#[tokio::test]
async fn test_invalid_payload_attempts_no_persistence() {
    let service = GenerationService::new(RecordingStore::default());

    let result = service
        .process(GenerateRequest {
            items: Some(vec![2, 1]),
            length: None,
        })
        .await;

    assert!(result.is_err());
    assert!(service_store_snapshot(&service).is_empty());
}

#[tokio::test]
async fn test_envelope_serializes_with_id_and_combination() {
    let envelope = GenerateResponse {
        id: 7,
        combination: vec![vec!["A1".to_string()]],
    };

    let value = serde_json::to_value(&envelope).unwrap();
    assert_eq!(value, serde_json::json!({"id": 7, "combination": [["A1"]]}));
}

fn service_store_snapshot(service: &GenerationService<RecordingStore>) -> Vec<Vec<Combination>> {
    service.store().persisted.lock().unwrap().clone()
}

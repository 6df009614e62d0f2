use crate::core::generator;
use crate::domain::model::{GenerateRequest, GenerateResponse};
use crate::domain::ports::CombinationStore;
use crate::utils::error::{Result, ServiceError};
use crate::utils::validation::{validate_max_length, validate_required_field};

/// Prefixes are single uppercase letters, so at most 26 groups are supported.
pub const MAX_GROUPS: usize = 26;

/// Orchestrates one generation request: validate the payload, run the pure
/// generator, hand the result set to the persistence sink, shape the
/// response envelope.
pub struct GenerationService<S: CombinationStore> {
    store: S,
}

impl<S: CombinationStore> GenerationService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub async fn process(&self, request: GenerateRequest) -> Result<GenerateResponse> {
        let (items, length) = validate_payload(&request)?;

        let combinations = generator::generate(items, length as usize);
        tracing::debug!("Generated {} combinations", combinations.len());

        let id = self.store.persist(&combinations).await?;
        tracing::info!(
            "Stored result set {} ({} combinations)",
            id,
            combinations.len()
        );

        Ok(GenerateResponse {
            id,
            combination: combinations,
        })
    }
}

/// Payload rules: `items` must be present (an empty list is still a valid
/// list and yields an empty result set), `length` must be present and
/// non-zero. The generator itself accepts a length of 0, but the request
/// surface rejects it; that asymmetry is part of the endpoint's contract.
fn validate_payload(request: &GenerateRequest) -> Result<(&[u32], u32)> {
    let items = validate_required_field("items", &request.items)?;
    validate_max_length("items", items.len(), MAX_GROUPS)?;

    match request.length {
        Some(length) if length > 0 => Ok((items.as_slice(), length)),
        _ => Err(ServiceError::MissingFieldError {
            field: "length".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_requires_items() {
        let request = GenerateRequest {
            items: None,
            length: Some(2),
        };
        assert!(validate_payload(&request).is_err());
    }

    #[test]
    fn test_payload_requires_nonzero_length() {
        let request = GenerateRequest {
            items: Some(vec![2, 1]),
            length: Some(0),
        };
        assert!(validate_payload(&request).is_err());

        let request = GenerateRequest {
            items: Some(vec![2, 1]),
            length: None,
        };
        assert!(validate_payload(&request).is_err());
    }

    #[test]
    fn test_payload_accepts_empty_items_list() {
        let request = GenerateRequest {
            items: Some(vec![]),
            length: Some(3),
        };
        assert!(validate_payload(&request).is_ok());
    }

    #[test]
    fn test_payload_rejects_more_than_26_groups() {
        let request = GenerateRequest {
            items: Some(vec![1; 27]),
            length: Some(1),
        };
        assert!(validate_payload(&request).is_err());

        let request = GenerateRequest {
            items: Some(vec![1; 26]),
            length: Some(1),
        };
        assert!(validate_payload(&request).is_ok());
    }
}

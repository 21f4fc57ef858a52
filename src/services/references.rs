#![allow(async_fn_in_trait)]

//! Application-level referential integrity.
//!
//! Storage declares no foreign keys, so every write that introduces or changes
//! a reference goes through [`ReferenceValidator::ensure_exists`] first. The
//! check and the write are separate round-trips; a concurrent delete between
//! them can still leave a dangling reference, which reads then surface through
//! [`ReferenceValidator::resolve`] as a server error.

use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::repository::Repository;

pub trait ReferenceValidator: Repository {
    /// Rejects the write with a 400 when `id` names no document.
    async fn ensure_exists(&self, id: Uuid, entity: &'static str) -> AppResult<()> {
        if self.exists(id).await? {
            Ok(())
        } else {
            tracing::debug!(%id, entity, "rejected write with missing reference");
            Err(AppError::InvalidReference(format!("{entity} does not exist")))
        }
    }

    /// Loads a document another one points at. A missing target is a broken
    /// stored reference, not a client mistake.
    async fn resolve(&self, id: Uuid, entity: &'static str) -> AppResult<Self::Doc> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::DanglingReference {
                entity,
                detail: format!("{entity} {id} is referenced but does not exist"),
            })
    }
}

impl<R: Repository> ReferenceValidator for R {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Provider;

    struct MockProviderRepo {
        provider: Option<Provider>,
        fail: bool,
    }

    impl Repository for MockProviderRepo {
        type Doc = Provider;

        async fn find_by_id(&self, _id: Uuid) -> AppResult<Option<Provider>> {
            if self.fail {
                return Err(sea_orm::DbErr::Custom("connection reset".into()).into());
            }
            Ok(self.provider.clone())
        }
        async fn find_all(&self) -> AppResult<Vec<Provider>> {
            Ok(self.provider.clone().into_iter().collect())
        }
        async fn insert(&self, _doc: &Provider) -> AppResult<()> {
            Ok(())
        }
        async fn replace(&self, _doc: &Provider) -> AppResult<bool> {
            Ok(true)
        }
        async fn delete(&self, _id: Uuid) -> AppResult<bool> {
            Ok(true)
        }
        async fn exists(&self, _id: Uuid) -> AppResult<bool> {
            if self.fail {
                return Err(sea_orm::DbErr::Custom("connection reset".into()).into());
            }
            Ok(self.provider.is_some())
        }
    }

    fn acme() -> Provider {
        Provider {
            id: Uuid::now_v7(),
            name: "Acme".into(),
            address: "1 Main St".into(),
            telephone: "555-0100".into(),
        }
    }

    #[tokio::test]
    async fn existing_reference_passes() {
        let repo = MockProviderRepo {
            provider: Some(acme()),
            fail: false,
        };
        assert!(repo.ensure_exists(Uuid::now_v7(), "Provider").await.is_ok());
    }

    #[tokio::test]
    async fn missing_reference_is_rejected() {
        let repo = MockProviderRepo {
            provider: None,
            fail: false,
        };
        let err = repo
            .ensure_exists(Uuid::now_v7(), "Provider")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidReference(ref msg) if msg == "Provider does not exist"));
    }

    #[tokio::test]
    async fn storage_failure_is_propagated_not_masked() {
        let repo = MockProviderRepo {
            provider: None,
            fail: true,
        };
        let err = repo
            .ensure_exists(Uuid::now_v7(), "Provider")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::OrmError(_)));
    }

    #[tokio::test]
    async fn resolving_a_missing_target_is_a_dangling_reference() {
        let repo = MockProviderRepo {
            provider: None,
            fail: false,
        };
        let err = repo.resolve(Uuid::now_v7(), "provider").await.unwrap_err();
        assert!(matches!(
            err,
            AppError::DanglingReference {
                entity: "provider",
                ..
            }
        ));
    }

    #[tokio::test]
    async fn resolve_returns_the_document() {
        let provider = acme();
        let repo = MockProviderRepo {
            provider: Some(provider.clone()),
            fail: false,
        };
        assert_eq!(repo.resolve(provider.id, "provider").await.unwrap(), provider);
    }
}

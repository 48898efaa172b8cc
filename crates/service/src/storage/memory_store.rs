use std::sync::Arc;

use models::Record;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::ServiceError;

/// Ordered in-memory record store.
///
/// Records keep insertion order. A single lock guards the whole sequence so
/// each operation runs its read/modify/write without interleaving.
#[derive(Clone)]
pub struct MemoryStore<R> {
    inner: Arc<RwLock<Vec<R>>>,
}

impl<R: Record> Default for MemoryStore<R> {
    fn default() -> Self { Self::new() }
}

impl<R: Record> MemoryStore<R> {
    pub fn new() -> Self {
        Self { inner: Arc::new(RwLock::new(Vec::new())) }
    }

    /// Build a store pre-populated with records built from `inputs`, in order.
    pub fn with_inputs<I>(inputs: I) -> Self
    where
        I: IntoIterator<Item = R::Input>,
    {
        let mut records: Vec<R> = Vec::new();
        for input in inputs {
            let id = fresh_id(&records);
            records.push(R::from_input(id, input));
        }
        Self { inner: Arc::new(RwLock::new(records)) }
    }

    /// Full ordered snapshot.
    pub async fn list(&self) -> Vec<R> {
        self.inner.read().await.clone()
    }

    pub async fn get(&self, id: Uuid) -> Option<R> {
        let records = self.inner.read().await;
        records.iter().find(|r| r.id() == id).cloned()
    }

    /// Append a new record with a freshly generated id and return it.
    pub async fn insert(&self, input: R::Input) -> R {
        let mut records = self.inner.write().await;
        let id = fresh_id(&records);
        let record = R::from_input(id, input);
        records.push(record.clone());
        record
    }

    /// Replace the mutable fields of the record matching `id`.
    ///
    /// A body id, when present, must equal `id`.
    pub async fn update(&self, id: Uuid, input: R::Input) -> Result<R, ServiceError> {
        if let Some(body_id) = R::input_id(&input) {
            if body_id != id {
                return Err(ServiceError::Validation(format!(
                    "request path id ({id}) and request body id ({body_id}) must match"
                )));
            }
        }
        let mut records = self.inner.write().await;
        let existing = records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| ServiceError::not_found(R::KIND))?;
        existing.apply(input);
        Ok(existing.clone())
    }

    /// Remove the record matching `id`; returns whether it existed.
    pub async fn remove(&self, id: Uuid) -> bool {
        let mut records = self.inner.write().await;
        match records.iter().position(|r| r.id() == id) {
            Some(idx) => {
                records.remove(idx);
                true
            }
            None => false,
        }
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}

/// UUIDv4 not held by any record in `records`.
fn fresh_id<R: Record>(records: &[R]) -> Uuid {
    loop {
        let id = Uuid::new_v4();
        if !records.iter().any(|r| r.id() == id) {
            return id;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::{Recipe, RecipeInput};

    #[tokio::test]
    async fn memory_store_crud_keeps_order() -> Result<(), anyhow::Error> {
        let store = MemoryStore::<Recipe>::new();
        assert!(store.is_empty().await);

        let a = store.insert(RecipeInput::new("a", "1")).await;
        let b = store.insert(RecipeInput::new("b", "2")).await;
        let c = store.insert(RecipeInput::new("c", "3")).await;
        let ids: Vec<Uuid> = store.list().await.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![a.id, b.id, c.id]);

        // update in place keeps position
        let updated = store.update(b.id, RecipeInput::new("bb", "22")).await?;
        assert_eq!(updated.id, b.id);
        assert_eq!(store.list().await[1], updated);

        // remove middle
        assert!(store.remove(b.id).await);
        assert!(!store.remove(b.id).await);
        let ids: Vec<Uuid> = store.list().await.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![a.id, c.id]);
        assert_eq!(store.len().await, 2);
        Ok(())
    }

    #[tokio::test]
    async fn update_missing_leaves_state() {
        let store = MemoryStore::<Recipe>::with_inputs([RecipeInput::new("a", "1")]);
        let before = store.list().await;
        let err = store.update(Uuid::new_v4(), RecipeInput::new("x", "y")).await.unwrap_err();
        assert_eq!(err, ServiceError::not_found("recipe"));
        assert_eq!(store.list().await, before);
    }

    #[tokio::test]
    async fn update_checks_body_id() -> Result<(), anyhow::Error> {
        let store = MemoryStore::<Recipe>::with_inputs([RecipeInput::new("a", "1")]);
        let rec = store.list().await[0].clone();

        let mismatched = RecipeInput { id: Some(Uuid::new_v4()), ..RecipeInput::new("x", "y") };
        let err = store.update(rec.id, mismatched).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert_eq!(store.get(rec.id).await, Some(rec.clone()));

        // matching body id is accepted
        let matching = RecipeInput { id: Some(rec.id), ..RecipeInput::new("x", "y") };
        let updated = store.update(rec.id, matching).await?;
        assert_eq!(updated.name, "x");
        Ok(())
    }

    #[tokio::test]
    async fn ids_are_unique_after_deletes() {
        let store = MemoryStore::<Recipe>::new();
        let mut seen = std::collections::HashSet::new();
        for i in 0..50 {
            let r = store.insert(RecipeInput::new(format!("r{i}"), "x")).await;
            assert!(seen.insert(r.id));
            if i % 3 == 0 {
                store.remove(r.id).await;
            }
        }
    }

    #[tokio::test]
    async fn concurrent_inserts_are_not_lost() {
        let store = MemoryStore::<Recipe>::new();
        let mut handles = Vec::new();
        for i in 0..32 {
            let s = store.clone();
            handles.push(tokio::spawn(async move {
                s.insert(RecipeInput::new(format!("r{i}"), "x")).await
            }));
        }
        for h in handles {
            h.await.expect("join");
        }
        assert_eq!(store.len().await, 32);
    }
}

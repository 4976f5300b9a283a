//! Generated CRUD and list operations over a prefix-scoped keyspace.

use serde_json::Value;
use tracing::debug;

use crate::error::{EntityError, EntityResult};
use crate::key::Keyspace;
use crate::schema::{Entity, Schema};
use crate::store::Store;

/// Options for the list operations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListOptions {
    /// First id to include (inclusive); entities ordered before it are
    /// skipped. Defaults to the start of the prefix.
    pub start_at_id: Option<String>,
    /// Maximum number of results. Scanning stops once the limit is reached.
    pub limit: Option<usize>,
}

/// A validated operation set bound to one key prefix and one schema.
///
/// Every operation runs inside a caller-supplied store transaction; this
/// type opens nothing, commits nothing, and holds no state across calls
/// beyond the prefix and the schema it closed over at construction.
#[derive(Debug, Clone)]
pub struct EntityAccess<S> {
    keyspace: Keyspace,
    schema: S,
}

impl<S: Schema> EntityAccess<S> {
    /// Binds `schema` to the keyspace rooted at `prefix`.
    pub fn new(prefix: impl Into<String>, schema: S) -> Self {
        Self {
            keyspace: Keyspace::new(prefix),
            schema,
        }
    }

    /// The keyspace this operation set is bound to.
    pub fn keyspace(&self) -> &Keyspace {
        &self.keyspace
    }

    /// Validates `input` against the full schema and stores it, overwriting
    /// any existing entity with the same id. The store is untouched when
    /// validation fails.
    pub fn create(&self, tx: &mut impl Store, input: &Value) -> EntityResult<()> {
        let entity = self.parse_full(Some(input))?;
        let key = self.keyspace.key_for(entity_id(&entity));
        debug!(%key, "create entity");
        tx.put(&key, Value::Object(entity))?;
        Ok(())
    }

    /// Like [`Self::create`], but writes only when no entity with the id
    /// exists yet. Returns whether a write happened.
    pub fn init(&self, tx: &mut impl Store, input: &Value) -> EntityResult<bool> {
        let entity = self.parse_full(Some(input))?;
        let key = self.keyspace.key_for(entity_id(&entity));
        if tx.get(&key)?.is_some() {
            return Ok(false);
        }
        debug!(%key, "init entity");
        tx.put(&key, Value::Object(entity))?;
        Ok(true)
    }

    /// Reads the entity with `id`. `Ok(None)` when absent; a stored value
    /// that no longer conforms to the schema is a validation error, which
    /// callers can distinguish from absence.
    pub fn get(&self, tx: &mut impl Store, id: &str) -> EntityResult<Option<Entity>> {
        let key = self.keyspace.key_for(id);
        match tx.get(&key)? {
            None => Ok(None),
            Some(raw) => Ok(Some(self.parse_full(Some(&raw))?)),
        }
    }

    /// [`Self::get`] that treats absence as an error.
    pub fn must_get(&self, tx: &mut impl Store, id: &str) -> EntityResult<Entity> {
        self.get(tx, id)?
            .ok_or_else(|| EntityError::NotFound(id.to_string()))
    }

    /// Whether an entity with `id` exists. The stored value is not read past
    /// the key, so this never raises a validation error.
    pub fn has(&self, tx: &mut impl Store, id: &str) -> EntityResult<bool> {
        Ok(tx.get(&self.keyspace.key_for(id))?.is_some())
    }

    /// Applies a partial update: every field present in `patch` overwrites
    /// the stored field, everything else is preserved. Targeting an id with
    /// no stored entity is a silent no-op, not an error. The
    /// read-modify-write relies on the transaction for atomicity.
    pub fn update(&self, tx: &mut impl Store, patch: &Value) -> EntityResult<()> {
        let patch = self.parse_partial(Some(patch))?;
        let key = self.keyspace.key_for(entity_id(&patch));
        let Some(raw) = tx.get(&key)? else {
            return Ok(());
        };
        // Both sides were validated field-by-field, so the merged object
        // needs no further check.
        let mut merged = self.parse_full(Some(&raw))?;
        for (name, value) in patch {
            merged.insert(name, value);
        }
        debug!(%key, "update entity");
        tx.put(&key, Value::Object(merged))?;
        Ok(())
    }

    /// Removes the entity with `id`. No error and no observable difference
    /// whether or not it existed.
    pub fn delete(&self, tx: &mut impl Store, id: &str) -> EntityResult<()> {
        let key = self.keyspace.key_for(id);
        debug!(%key, "delete entity");
        tx.delete(&key)?;
        Ok(())
    }

    /// Lists entities in ascending id order. Any stored value that fails
    /// validation aborts the whole listing with that entry's error.
    pub fn list(&self, tx: &mut impl Store, options: &ListOptions) -> EntityResult<Vec<Entity>> {
        let mut out = Vec::new();
        self.scan_entries(tx, options, |_, entity| out.push(entity))?;
        Ok(out)
    }

    /// Lists `(id, entity)` pairs in ascending id order, validating values
    /// the same way as [`Self::list`].
    pub fn list_entries(
        &self,
        tx: &mut impl Store,
        options: &ListOptions,
    ) -> EntityResult<Vec<(String, Entity)>> {
        let mut out = Vec::new();
        self.scan_entries(tx, options, |id, entity| {
            out.push((id.to_string(), entity));
        })?;
        Ok(out)
    }

    /// Lists ids only, extracted from the scanned keys. Values are never
    /// validated, so this also enumerates entries [`Self::list`] would
    /// reject.
    pub fn list_ids(&self, tx: &mut impl Store, options: &ListOptions) -> EntityResult<Vec<String>> {
        let limit = options.limit.unwrap_or(usize::MAX);
        let mut out = Vec::new();
        if limit == 0 {
            return Ok(out);
        }
        let start_key = options
            .start_at_id
            .as_deref()
            .map(|id| self.keyspace.key_for(id));
        for item in tx.scan(self.keyspace.scan_prefix(), start_key.as_deref())? {
            let (key, _) = item?;
            if let Some(id) = self.keyspace.id_from(&key) {
                out.push(id.to_string());
            }
            if out.len() >= limit {
                break;
            }
        }
        Ok(out)
    }

    fn scan_entries(
        &self,
        tx: &mut impl Store,
        options: &ListOptions,
        mut visit: impl FnMut(&str, Entity),
    ) -> EntityResult<()> {
        let limit = options.limit.unwrap_or(usize::MAX);
        if limit == 0 {
            return Ok(());
        }
        let start_key = options
            .start_at_id
            .as_deref()
            .map(|id| self.keyspace.key_for(id));
        let mut seen = 0usize;
        for item in tx.scan(self.keyspace.scan_prefix(), start_key.as_deref())? {
            let (key, raw) = item?;
            let entity = self.parse_full(Some(&raw))?;
            let id = self.keyspace.id_from(&key).unwrap_or_default();
            visit(id, entity);
            seen += 1;
            if seen >= limit {
                break;
            }
        }
        Ok(())
    }

    fn parse_full(&self, input: Option<&Value>) -> EntityResult<Entity> {
        self.schema.parse_full(input).map_err(EntityError::Validation)
    }

    fn parse_partial(&self, input: Option<&Value>) -> EntityResult<Entity> {
        self.schema
            .parse_partial(input)
            .map_err(EntityError::Validation)
    }
}

/// The `id` of a parsed entity. Validation guarantees presence; the fallback
/// only defends against a misbehaving [`Schema`] implementation.
fn entity_id(entity: &Entity) -> &str {
    entity.get("id").and_then(Value::as_str).unwrap_or_default()
}

use std::collections::HashMap;

/// Durable integer key/value storage, as offered by the host platform.
pub trait PersistentStore {
    fn get_int(&self, key: &str, default: i64) -> i64;
    fn set_int(&mut self, key: &str, value: i64);
    /// Make previous writes durable.
    fn flush(&mut self);
}

/// In-process store. Counts writes and flushes so callers can check how
/// often persistence was requested.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, i64>,
    writes: usize,
    flushes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: i64) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_string(), value);
        store
    }

    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn flushes(&self) -> usize {
        self.flushes
    }
}

impl PersistentStore for MemoryStore {
    fn get_int(&self, key: &str, default: i64) -> i64 {
        self.values.get(key).copied().unwrap_or(default)
    }

    fn set_int(&mut self, key: &str, value: i64) {
        self.values.insert(key.to_string(), value);
        self.writes += 1;
    }

    fn flush(&mut self) {
        self.flushes += 1;
    }
}

impl<S: PersistentStore + ?Sized> PersistentStore for &mut S {
    fn get_int(&self, key: &str, default: i64) -> i64 {
        (**self).get_int(key, default)
    }

    fn set_int(&mut self, key: &str, value: i64) {
        (**self).set_int(key, value);
    }

    fn flush(&mut self) {
        (**self).flush();
    }
}

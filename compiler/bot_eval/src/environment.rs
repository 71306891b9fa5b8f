//! Per-unit variable context.
//!
//! Each unit owns one `Environment`, populated by `define` and read by
//! symbol resolution. There is no scoping: a script has no functions or
//! blocks, so a single flat table lives as long as the unit.

use rustc_hash::FxHashMap;

use bot_ir::{Name, Value};

#[derive(Clone, Debug, Default)]
pub struct Environment {
    /// `FxHashMap` for faster hashing with `Name` keys.
    bindings: FxHashMap<Name, Value>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install or overwrite a binding, returning the previous value.
    #[inline]
    pub fn define(&mut self, name: Name, value: Value) -> Option<Value> {
        self.bindings.insert(name, value)
    }

    #[inline]
    pub fn lookup(&self, name: Name) -> Option<Value> {
        self.bindings.get(&name).copied()
    }

    #[inline]
    pub fn contains(&self, name: Name) -> bool {
        self.bindings.contains_key(&name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Name, Value)> + '_ {
        self.bindings.iter().map(|(name, value)| (*name, *value))
    }
}

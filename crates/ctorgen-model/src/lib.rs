//! Symbol model for ctorgen.
//!
//! The host compiler's semantic services are normalized into the snapshot
//! types in this crate before the engine ever runs: stable, comparable and
//! order-independent, so re-runs produce identical output regardless of
//! incidental compiler ordering. The engine consumes the snapshots through
//! the read-only [`Database`] trait; [`MemoryDatabase`] is a small in-memory
//! implementation for unit tests and embedding hosts.

use std::collections::HashMap;

mod data;
mod ty;

pub use data::{
    ConstructorData, ContainingType, FieldData, FieldMarker, GenerateMarker, InjectSpec,
    MethodData, ParameterData, TypeData, TypeKind,
};
pub use ty::{Ty, PLACEHOLDER_TYPE};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(u32);

impl TypeId {
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub fn to_raw(self) -> u32 {
        self.0
    }
}

/// Read-only query interface over the symbol snapshot of one compilation
/// pass.
pub trait Database {
    fn type_data(&self, id: TypeId) -> &TypeData;

    /// Resolve a qualified type name to its snapshot, if the compilation
    /// contains one. Base-type references resolve through this; a miss is
    /// treated as "no base parameters", never an error.
    fn type_by_name(&self, qualified: &str) -> Option<TypeId>;
}

/// Simple in-memory database for unit tests and embedding hosts.
#[derive(Default)]
pub struct MemoryDatabase {
    next_type: u32,
    types: HashMap<TypeId, TypeData>,
    by_name: HashMap<String, TypeId>,
}

impl MemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a type snapshot, indexing it by its qualified name.
    pub fn add_type(&mut self, data: TypeData) -> TypeId {
        let id = TypeId::new(self.next_type);
        self.next_type += 1;
        self.by_name.insert(data.qualified_name(), id);
        self.types.insert(id, data);
        id
    }
}

impl Database for MemoryDatabase {
    fn type_data(&self, id: TypeId) -> &TypeData {
        self.types
            .get(&id)
            .expect("unknown TypeId passed to db.type_data()")
    }

    fn type_by_name(&self, qualified: &str) -> Option<TypeId> {
        self.by_name.get(qualified).copied()
    }
}

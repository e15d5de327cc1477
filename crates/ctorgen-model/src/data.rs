use crate::Ty;

/// Kind of a type declaration under consideration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TypeKind {
    #[default]
    Class,
    Struct,
}

impl TypeKind {
    pub fn keyword(self) -> &'static str {
        match self {
            TypeKind::Class => "class",
            TypeKind::Struct => "struct",
        }
    }
}

/// The type-level generation marker, already mapped into a strongly-typed
/// value by the host adapter. The rest of the pipeline never inspects raw
/// attribute argument lists.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct GenerateMarker {
    /// Accessibility override for the generated constructors. Validated
    /// downstream against the fixed keyword set; invalid values are not
    /// applied.
    pub accessibility: Option<String>,
    /// Additionally emit a deprecated zero-argument constructor.
    pub add_parameterless: bool,
    /// Unify same-named parameters across inheritance levels instead of
    /// renaming. `None` falls back to the pass-wide default.
    pub match_base_on_name: Option<bool>,
}

/// Per-field marker state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum FieldMarker {
    #[default]
    None,
    /// Explicitly excluded from injection.
    Ignore,
    /// Injected with explicit overrides.
    Inject(InjectSpec),
}

/// Arguments of an explicit injection marker.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct InjectSpec {
    /// Overrides the derived parameter name.
    pub parameter_name: Option<String>,
    /// Expression assigned to the field, e.g. `guid.ToString()`. Defaults to
    /// the parameter name.
    pub initializer: Option<String>,
    /// Overrides the declared parameter type.
    pub ty: Option<Ty>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FieldData {
    pub name: String,
    pub ty: Ty,
    pub is_static: bool,
    pub is_readonly: bool,
    pub has_initializer: bool,
    pub marker: FieldMarker,
    /// Documentation text override for the generated parameter.
    pub comment: Option<String>,
}

impl FieldData {
    /// A plain injectable readonly field, the common case in fixtures.
    pub fn injectable(name: impl Into<String>, ty: Ty) -> Self {
        Self {
            name: name.into(),
            ty,
            is_readonly: true,
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ParameterData {
    pub name: String,
    pub ty: Ty,
}

impl ParameterData {
    pub fn new(name: impl Into<String>, ty: Ty) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct MethodData {
    pub name: String,
    pub is_static: bool,
    pub is_void: bool,
    pub params: Vec<ParameterData>,
    /// Marked as a post-construction hook to be invoked from the generated
    /// constructor body.
    pub is_initializer_hook: bool,
}

/// A declared (non-generated) constructor of a type.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ConstructorData {
    pub params: Vec<ParameterData>,
    pub is_static: bool,
    /// Marked as the forwarding target when the type has several declared
    /// constructors.
    pub is_default_base: bool,
}

/// A containing type of a nested declaration, outermost first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ContainingType {
    pub name: String,
    pub kind: TypeKind,
    pub type_params: Vec<String>,
}

/// Snapshot of one class/struct under consideration.
///
/// Constructed fresh per compilation pass by the host adapter, immutable once
/// built. Field order is declaration order and is semantically meaningful: it
/// determines constructor parameter order. Value equality/hashing over the
/// whole snapshot keys the incrementality cache.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct TypeData {
    pub name: String,
    /// `None` means the global namespace.
    pub namespace: Option<String>,
    /// Containing-type chain for nested declarations, outermost first.
    pub containing_types: Vec<ContainingType>,
    pub type_params: Vec<String>,
    pub kind: TypeKind,
    pub is_static: bool,
    /// Present iff the type carries the generation marker.
    pub marker: Option<GenerateMarker>,
    /// Weak by-name reference to the base type, resolved through the
    /// [`Database`](crate::Database). `None` or unresolvable means no base
    /// parameters.
    pub base_type: Option<String>,
    pub fields: Vec<FieldData>,
    pub methods: Vec<MethodData>,
    pub constructors: Vec<ConstructorData>,
}

impl TypeData {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Dot-qualified name: namespace, containing chain, then the simple name.
    pub fn qualified_name(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        if let Some(ns) = &self.namespace {
            parts.push(ns);
        }
        for containing in &self.containing_types {
            parts.push(&containing.name);
        }
        parts.push(&self.name);
        parts.join(".")
    }

    /// Whether this type participates in constructor generation.
    pub fn is_generated(&self) -> bool {
        self.marker.is_some() && !self.is_static
    }

    /// The first valid post-construction hook, if any: an instance method
    /// marked as hook that is void and parameterless. Later or invalid marked
    /// methods are ignored (misuse is analyzer territory).
    pub fn initializer_hook(&self) -> Option<&MethodData> {
        self.methods
            .iter()
            .find(|m| m.is_initializer_hook && m.is_void && m.params.is_empty() && !m.is_static)
    }
}

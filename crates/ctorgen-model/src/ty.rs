/// Placeholder rendered for types the host could not resolve.
///
/// Falling back keeps generation total on broken compilations; the host
/// compiler reports the underlying resolution failure itself.
pub const PLACEHOLDER_TYPE: &str = "object";

/// Minimal semantic type model.
///
/// The engine only needs a display text plus enough classification to decide
/// null-check emission; everything else about the type stays with the host.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Ty {
    Named {
        /// Display text as the host would render it, e.g. `string`, `int?`,
        /// `IReadOnlyList<Order>`.
        text: String,
        is_value_type: bool,
        is_nullable: bool,
    },
    /// The host failed to resolve the type (broken compilation).
    Unresolved,
}

impl Ty {
    /// A reference type (class, interface, delegate, array, type parameter
    /// without a value constraint).
    pub fn reference(text: impl Into<String>) -> Self {
        Ty::Named {
            text: text.into(),
            is_value_type: false,
            is_nullable: false,
        }
    }

    pub fn value(text: impl Into<String>) -> Self {
        Ty::Named {
            text: text.into(),
            is_value_type: true,
            is_nullable: false,
        }
    }

    /// An optional value type, e.g. `int?`. The text should already carry the
    /// nullability marker.
    pub fn nullable_value(text: impl Into<String>) -> Self {
        Ty::Named {
            text: text.into(),
            is_value_type: true,
            is_nullable: true,
        }
    }

    pub fn render(&self) -> &str {
        match self {
            Ty::Named { text, .. } => text,
            Ty::Unresolved => PLACEHOLDER_TYPE,
        }
    }

    /// Whether a parameter of this type is nullable-unsafe and should receive
    /// a null check when the pass-wide switch is on.
    pub fn needs_null_check(&self) -> bool {
        match self {
            Ty::Named {
                is_value_type,
                is_nullable,
                ..
            } => !is_value_type || *is_nullable,
            // The placeholder renders as a reference type.
            Ty::Unresolved => true,
        }
    }
}

impl Default for Ty {
    fn default() -> Self {
        Ty::Unresolved
    }
}

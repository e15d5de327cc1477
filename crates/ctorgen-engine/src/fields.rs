//! Field eligibility filter.
//!
//! Pure over the symbol snapshot; declaration order is preserved because it
//! determines constructor parameter order.

use ctorgen_core::parameter_name_for_field;
use ctorgen_model::{FieldData, FieldMarker, InjectSpec, Ty, TypeData};

/// One injectable field with marker overrides already applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct FieldPlan {
    pub field_name: String,
    /// Derived parameter name, not yet keyword-escaped.
    pub parameter_name: String,
    pub ty: Ty,
    /// Custom assignment expression; defaults to the parameter name.
    pub initializer: Option<String>,
    pub comment: Option<String>,
}

/// Collect the type's own injectable fields in declaration order.
pub(crate) fn injectable_fields(ty: &TypeData) -> Vec<FieldPlan> {
    ty.fields.iter().filter_map(field_plan).collect()
}

fn field_plan(field: &FieldData) -> Option<FieldPlan> {
    if field.is_static || field.name.is_empty() {
        return None;
    }
    match &field.marker {
        FieldMarker::Ignore => None,
        // Explicitly markered fields are processed permissively even when the
        // base constraints (readonly, uninitialized) are violated; flagging
        // misuse is analyzer territory.
        FieldMarker::Inject(spec) => Some(inject_plan(field, spec)),
        FieldMarker::None => {
            if !field.is_readonly || field.has_initializer {
                return None;
            }
            Some(FieldPlan {
                field_name: field.name.clone(),
                parameter_name: parameter_name_for_field(&field.name).to_string(),
                ty: field.ty.clone(),
                initializer: None,
                comment: field.comment.clone(),
            })
        }
    }
}

fn inject_plan(field: &FieldData, spec: &InjectSpec) -> FieldPlan {
    let parameter_name = spec
        .parameter_name
        .clone()
        .unwrap_or_else(|| parameter_name_for_field(&field.name).to_string());
    FieldPlan {
        field_name: field.name.clone(),
        parameter_name,
        ty: spec.ty.clone().unwrap_or_else(|| field.ty.clone()),
        initializer: spec.initializer.clone(),
        comment: field.comment.clone(),
    }
}

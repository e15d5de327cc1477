//! Parameter/initializer synthesis.
//!
//! Turns a resolved parameter into its final render plan: escaped name,
//! declared type text, assignment expressions with the optional coalescing
//! null check, and documentation text.

use ctorgen_core::escape_identifier;

use crate::chain::ResolvedParam;
use crate::options::GeneratorOptions;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Assignment {
    /// Raw field name; escaped at render time.
    pub field_name: String,
    pub expr: String,
}

/// Final render plan for one constructor parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ParameterPlan {
    /// Keyword-escaped name used in the signature, body and base call.
    pub name: String,
    /// Unescaped name used in documentation.
    pub display_name: String,
    pub ty_text: String,
    pub assignments: Vec<Assignment>,
    /// Documentation text: the per-field override, or the parameter name.
    pub doc: String,
}

pub(crate) fn synthesize(param: &ResolvedParam, options: &GeneratorOptions) -> ParameterPlan {
    let name = escape_identifier(&param.name).into_owned();
    let null_check = options.emit_null_checks && param.ty.needs_null_check();

    let assignments = param
        .bindings
        .iter()
        .map(|binding| {
            let expr = binding.initializer.clone().unwrap_or_else(|| name.clone());
            let expr = if null_check {
                format!("{expr} ?? throw new System.ArgumentNullException(nameof({name}))")
            } else {
                expr
            };
            Assignment {
                field_name: binding.field_name.clone(),
                expr,
            }
        })
        .collect();

    let doc = param
        .bindings
        .iter()
        .find_map(|b| b.comment.clone())
        .unwrap_or_else(|| param.name.clone());

    ParameterPlan {
        name,
        display_name: param.name.clone(),
        ty_text: param.ty.render().to_string(),
        assignments,
        doc,
    }
}

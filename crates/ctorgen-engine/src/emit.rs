//! Constructor emission.
//!
//! Renders one generated source unit per participating type. Output for
//! identical semantic input is byte-identical across runs: member order,
//! whitespace and the unit key are all derived from the snapshot alone.

use ctorgen_core::{escape_identifier, Accessibility};
use ctorgen_emit::{GeneratedUnit, SourceWriter};
use ctorgen_model::TypeData;

use crate::chain::ResolvedCtor;
use crate::options::GeneratorOptions;
use crate::synth::{synthesize, ParameterPlan};

/// Construction policy for one generated type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EmitPolicy {
    /// No parameters and no parameterless request: emit nothing.
    Skip,
    Standard,
    StandardWithParameterless,
    ParameterlessOnly,
}

fn emit_policy(ty: &TypeData, resolved: &ResolvedCtor) -> EmitPolicy {
    let add_parameterless = ty.marker.as_ref().is_some_and(|m| m.add_parameterless);
    // The zero-argument overload needs a parameterless base path and must not
    // clash with a declared parameterless constructor.
    let parameterless_ok = add_parameterless
        && resolved.parameterless_base_path
        && !declares_parameterless(ty);

    match (resolved.params.is_empty(), parameterless_ok) {
        (true, false) => EmitPolicy::Skip,
        (true, true) => EmitPolicy::ParameterlessOnly,
        (false, false) => EmitPolicy::Standard,
        (false, true) => EmitPolicy::StandardWithParameterless,
    }
}

fn declares_parameterless(ty: &TypeData) -> bool {
    ty.constructors
        .iter()
        .any(|c| !c.is_static && c.params.is_empty())
}

fn constructor_accessibility(ty: &TypeData) -> Accessibility {
    let Some(text) = ty.marker.as_ref().and_then(|m| m.accessibility.as_deref()) else {
        return Accessibility::Public;
    };
    match Accessibility::parse(text) {
        Some(access) => access,
        None => {
            tracing::warn!(
                target: "ctorgen.engine",
                type_name = %ty.qualified_name(),
                accessibility = text,
                "invalid accessibility override; generating a public constructor"
            );
            Accessibility::Public
        }
    }
}

/// Deterministic unit key: namespace, containing chain and type name joined
/// with dots, generic arity marked `_N`.
fn unit_name(ty: &TypeData) -> String {
    let mut parts: Vec<String> = Vec::new();
    if let Some(ns) = &ty.namespace {
        parts.push(ns.clone());
    }
    for containing in &ty.containing_types {
        parts.push(arity_marked(&containing.name, containing.type_params.len()));
    }
    parts.push(arity_marked(&ty.name, ty.type_params.len()));
    format!("{}.g.cs", parts.join("."))
}

fn arity_marked(name: &str, arity: usize) -> String {
    if arity == 0 {
        name.to_string()
    } else {
        format!("{name}_{arity}")
    }
}

fn type_header(keyword: &str, name: &str, type_params: &[String]) -> String {
    if type_params.is_empty() {
        format!("partial {keyword} {name}")
    } else {
        format!("partial {keyword} {name}<{}>", type_params.join(", "))
    }
}

/// Documentation cross-reference for the type, e.g. `Widget{T}`.
fn doc_cref(ty: &TypeData) -> String {
    if ty.type_params.is_empty() {
        ty.name.clone()
    } else {
        format!("{}{{{}}}", ty.name, ty.type_params.join(", "))
    }
}

pub(crate) fn emit_unit(
    ty: &TypeData,
    resolved: &ResolvedCtor,
    options: &GeneratorOptions,
) -> Option<GeneratedUnit> {
    let policy = emit_policy(ty, resolved);
    if policy == EmitPolicy::Skip {
        return None;
    }

    let access = constructor_accessibility(ty);
    let plans: Vec<ParameterPlan> = resolved
        .params
        .iter()
        .map(|p| synthesize(p, options))
        .collect();

    let mut w = SourceWriter::new();
    w.line("// <auto-generated>");
    w.line("//     Generated by ctorgen. Changes will be lost when the file is regenerated.");
    w.line("// </auto-generated>");
    w.blank();

    if let Some(ns) = &ty.namespace {
        w.open_block(&format!("namespace {ns}"));
    }
    for containing in &ty.containing_types {
        w.open_block(&type_header(
            containing.kind.keyword(),
            &containing.name,
            &containing.type_params,
        ));
    }
    w.open_block(&type_header(ty.kind.keyword(), &ty.name, &ty.type_params));

    match policy {
        EmitPolicy::Standard => emit_standard(&mut w, ty, resolved, &plans, access, options),
        EmitPolicy::StandardWithParameterless => {
            emit_standard(&mut w, ty, resolved, &plans, access, options);
            w.blank();
            emit_parameterless(&mut w, ty, access, options);
        }
        EmitPolicy::ParameterlessOnly => emit_parameterless(&mut w, ty, access, options),
        EmitPolicy::Skip => unreachable!("skip is handled above"),
    }

    Some(GeneratedUnit {
        name: unit_name(ty),
        text: w.finish(),
    })
}

fn emit_standard(
    w: &mut SourceWriter,
    ty: &TypeData,
    resolved: &ResolvedCtor,
    plans: &[ParameterPlan],
    access: Accessibility,
    options: &GeneratorOptions,
) {
    if options.generate_documentation {
        w.line("/// <summary>");
        w.line(&format!(
            "/// Initializes a new instance of the <see cref=\"{}\"/> {}.",
            doc_cref(ty),
            ty.kind.keyword()
        ));
        w.line("/// </summary>");
        for plan in plans {
            w.line(&format!(
                "/// <param name=\"{}\">{}</param>",
                plan.display_name, plan.doc
            ));
        }
    }

    let parameters = plans
        .iter()
        .map(|p| format!("{} {}", p.ty_text, p.name))
        .collect::<Vec<_>>()
        .join(", ");
    let mut header = format!("{} {}({})", access.keyword(), ty.name, parameters);
    if !resolved.base_args.is_empty() {
        let args = resolved
            .base_args
            .iter()
            .map(|a| escape_identifier(a).into_owned())
            .collect::<Vec<_>>()
            .join(", ");
        header.push_str(&format!(" : base({args})"));
    } else if options.chain_this_call && declares_parameterless(ty) {
        header.push_str(" : this()");
    }

    w.open_block(&header);
    for plan in plans {
        for assignment in &plan.assignments {
            w.line(&format!(
                "this.{} = {};",
                escape_identifier(&assignment.field_name),
                assignment.expr
            ));
        }
    }
    if let Some(hook) = ty.initializer_hook() {
        w.line(&format!("this.{}();", hook.name));
    }
    w.close_block();
}

fn emit_parameterless(
    w: &mut SourceWriter,
    ty: &TypeData,
    access: Accessibility,
    options: &GeneratorOptions,
) {
    w.line(&format!(
        "[global::System.Obsolete(\"{}\")]",
        options.obsolete_message.replace('"', "\\\"")
    ));
    w.open_block(&format!("{} {}()", access.keyword(), ty.name));
    w.close_block();
}

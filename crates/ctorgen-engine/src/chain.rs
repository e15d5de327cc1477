//! Inheritance chain resolution.
//!
//! Computes the full constructor parameter list of a type: its own injectable
//! fields first, then the parameters the base constructor requires, renamed
//! or unified where names collide across levels. Resolution recurses through
//! generated ancestors and is memoized per pass so siblings sharing ancestors
//! never recompute the chain.

use std::collections::HashMap;
use std::sync::Arc;

use ctorgen_model::{Database, ParameterData, Ty, TypeData, TypeId, TypeKind};

use crate::fields::{injectable_fields, FieldPlan};
use crate::options::GeneratorOptions;
use crate::GenerateError;

/// One own-field assignment bound to a resolved parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct FieldBinding {
    pub field_name: String,
    /// Custom assignment expression; defaults to the parameter name.
    pub initializer: Option<String>,
    pub comment: Option<String>,
}

/// One parameter of a resolved constructor signature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ResolvedParam {
    /// Final, unique parameter name in this type's constructor.
    pub name: String,
    /// Pre-rename name; derived types resolve their own collisions against
    /// this, not against the renamed form.
    pub original_name: String,
    pub ty: Ty,
    /// 0 = own field of this type, 1 = immediate ancestor level, and so on.
    pub depth: u32,
    /// Own-field assignments fed from this parameter.
    pub bindings: Vec<FieldBinding>,
    /// Passed on to the base constructor call.
    pub forwarded: bool,
}

/// Fully resolved constructor plan for one type.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct ResolvedCtor {
    pub params: Vec<ResolvedParam>,
    /// Final parameter names to pass to `base(...)`, in the exact order the
    /// base constructor declares them. Empty means no base call.
    pub base_args: Vec<String>,
    /// A zero-argument construction path exists through the base chain.
    pub parameterless_base_path: bool,
}

/// A parameter the base constructor requires, before collision resolution at
/// the current level.
struct BaseCandidate {
    original_name: String,
    ty: Ty,
    depth: u32,
}

pub(crate) struct ChainResolver<'a> {
    db: &'a dyn Database,
    options: &'a GeneratorOptions,
    memo: HashMap<TypeId, Result<Arc<ResolvedCtor>, GenerateError>>,
    in_progress: Vec<TypeId>,
}

impl<'a> ChainResolver<'a> {
    pub fn new(db: &'a dyn Database, options: &'a GeneratorOptions) -> Self {
        Self {
            db,
            options,
            memo: HashMap::new(),
            in_progress: Vec::new(),
        }
    }

    pub fn resolve(&mut self, id: TypeId) -> Result<Arc<ResolvedCtor>, GenerateError> {
        if let Some(result) = self.memo.get(&id) {
            return result.clone();
        }
        // A well-formed compilation cannot contain an inheritance cycle, but
        // the by-name base references come from the host; stay total.
        if self.in_progress.contains(&id) {
            tracing::warn!(
                target: "ctorgen.engine",
                type_name = %self.db.type_data(id).qualified_name(),
                "inheritance chain loops back on itself; treating as no base"
            );
            return Ok(Arc::new(ResolvedCtor {
                parameterless_base_path: true,
                ..ResolvedCtor::default()
            }));
        }

        self.in_progress.push(id);
        let result = self.resolve_uncached(id).map(Arc::new);
        self.in_progress.pop();
        self.memo.insert(id, result.clone());
        result
    }

    fn resolve_uncached(&mut self, id: TypeId) -> Result<ResolvedCtor, GenerateError> {
        let ty = self.db.type_data(id);
        let own = injectable_fields(ty);
        let match_on_name = ty
            .marker
            .as_ref()
            .and_then(|m| m.match_base_on_name)
            .unwrap_or(self.options.match_base_on_name);
        let (candidates, parameterless_base_path) = self.base_candidates(ty)?;
        compose(ty, own, candidates, parameterless_base_path, match_on_name)
    }

    /// Parameters the base constructor requires, lifted one level.
    fn base_candidates(
        &mut self,
        ty: &TypeData,
    ) -> Result<(Vec<BaseCandidate>, bool), GenerateError> {
        if ty.kind == TypeKind::Struct {
            return Ok((Vec::new(), true));
        }
        let Some(base_name) = ty.base_type.as_deref() else {
            return Ok((Vec::new(), true));
        };
        let Some(base_id) = self.db.type_by_name(base_name) else {
            // Absent or unresolvable base symbol: no base parameters.
            tracing::debug!(
                target: "ctorgen.engine",
                type_name = %ty.qualified_name(),
                base = base_name,
                "base type not resolvable; forwarding nothing"
            );
            return Ok((Vec::new(), true));
        };

        let base = self.db.type_data(base_id);
        if base.is_generated() {
            let resolved = self.resolve(base_id)?;
            let parameterless = resolved.params.is_empty();
            let candidates = resolved
                .params
                .iter()
                .map(|p| BaseCandidate {
                    original_name: p.original_name.clone(),
                    ty: p.ty.clone(),
                    depth: p.depth + 1,
                })
                .collect();
            return Ok((candidates, parameterless));
        }

        let (params, parameterless) = declared_base_selection(base);
        let candidates = params
            .into_iter()
            .map(|p| BaseCandidate {
                // Names and types are taken verbatim from the declared
                // constructor signature.
                original_name: p.name,
                ty: p.ty,
                depth: 1,
            })
            .collect();
        Ok((candidates, parameterless))
    }
}

/// Pick the declared base constructor to forward to.
///
/// A constructor carrying the default-base marker wins (the first one when
/// several are marked, so the engine stays total; reporting that conflict is
/// analyzer territory). Otherwise a zero-argument path is preferred and
/// nothing is forwarded; failing that, the first declared constructor with
/// parameters is forwarded.
fn declared_base_selection(base: &TypeData) -> (Vec<ParameterData>, bool) {
    let declared: Vec<_> = base.constructors.iter().filter(|c| !c.is_static).collect();
    let parameterless = declared.is_empty() || declared.iter().any(|c| c.params.is_empty());

    if let Some(marked) = declared.iter().find(|c| c.is_default_base) {
        return (marked.params.clone(), parameterless);
    }
    if parameterless {
        return (Vec::new(), true);
    }
    (declared[0].params.clone(), false)
}

/// Merge own parameters and base candidates into one conflict-free list.
fn compose(
    ty: &TypeData,
    own: Vec<FieldPlan>,
    candidates: Vec<BaseCandidate>,
    parameterless_base_path: bool,
    match_on_name: bool,
) -> Result<ResolvedCtor, GenerateError> {
    let mut params: Vec<ResolvedParam> = Vec::new();

    // Own level first, in declaration order. Same-named fields of the same
    // type share one parameter; different types have no rename escape at a
    // single level.
    for plan in own {
        let binding = FieldBinding {
            field_name: plan.field_name,
            initializer: plan.initializer,
            comment: plan.comment,
        };
        if let Some(existing) = params.iter_mut().find(|p| p.name == plan.parameter_name) {
            if existing.ty == plan.ty {
                existing.bindings.push(binding);
                continue;
            }
            return Err(conflict(ty, &plan.parameter_name, &existing.ty, &plan.ty));
        }
        params.push(ResolvedParam {
            name: plan.parameter_name.clone(),
            original_name: plan.parameter_name,
            ty: plan.ty,
            depth: 0,
            bindings: vec![binding],
            forwarded: false,
        });
    }

    // Base candidates next, in the exact order the base constructor declares
    // them; every candidate contributes exactly one base argument.
    let mut base_args = Vec::new();
    for candidate in candidates {
        if match_on_name {
            if let Some(existing) = params
                .iter_mut()
                .find(|p| p.original_name == candidate.original_name)
            {
                // Unified: one parameter, declared with the most-derived
                // occurrence's type, forwarded as itself.
                existing.forwarded = true;
                base_args.push(existing.name.clone());
                continue;
            }
        }

        let name = if params.iter().any(|p| p.name == candidate.original_name) {
            format!("b{}__{}", candidate.depth - 1, candidate.original_name)
        } else {
            candidate.original_name.clone()
        };
        if let Some(existing) = params.iter_mut().find(|p| p.name == name) {
            // The rename target itself is taken. Identical types can still
            // share the parameter; different types are irreconcilable.
            if existing.ty == candidate.ty {
                existing.forwarded = true;
                base_args.push(existing.name.clone());
                continue;
            }
            return Err(conflict(ty, &name, &existing.ty, &candidate.ty));
        }

        base_args.push(name.clone());
        params.push(ResolvedParam {
            name,
            original_name: candidate.original_name,
            ty: candidate.ty,
            depth: candidate.depth,
            bindings: Vec::new(),
            forwarded: true,
        });
    }

    Ok(ResolvedCtor {
        params,
        base_args,
        parameterless_base_path,
    })
}

fn conflict(ty: &TypeData, parameter: &str, first: &Ty, second: &Ty) -> GenerateError {
    GenerateError::ParameterTypeConflict {
        type_name: ty.qualified_name(),
        parameter: parameter.to_string(),
        first: first.render().to_string(),
        second: second.render().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ctorgen_model::{
        ConstructorData, FieldData, GenerateMarker, MemoryDatabase, ParameterData, Ty, TypeData,
    };

    fn generated(name: &str) -> TypeData {
        let mut ty = TypeData::new(name);
        ty.marker = Some(GenerateMarker::default());
        ty
    }

    #[test]
    fn own_fields_come_before_forwarded_base_parameters() {
        let mut db = MemoryDatabase::new();
        let mut base = generated("Base");
        base.fields
            .push(FieldData::injectable("conn", Ty::reference("IConnection")));
        db.add_type(base);

        let mut derived = generated("Derived");
        derived.base_type = Some("Base".to_string());
        derived
            .fields
            .push(FieldData::injectable("timeout", Ty::value("int")));
        let derived_id = db.add_type(derived);

        let options = GeneratorOptions::default();
        let mut resolver = ChainResolver::new(&db, &options);
        let resolved = resolver.resolve(derived_id).unwrap();

        let names: Vec<_> = resolved.params.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["timeout", "conn"]);
        assert_eq!(resolved.base_args, vec!["conn"]);
    }

    #[test]
    fn default_base_marker_selects_the_forwarded_constructor() {
        let mut db = MemoryDatabase::new();
        let mut base = TypeData::new("Legacy");
        base.constructors.push(ConstructorData {
            params: vec![ParameterData::new("unused", Ty::value("int"))],
            ..ConstructorData::default()
        });
        base.constructors.push(ConstructorData {
            params: vec![ParameterData::new("conn", Ty::reference("IConnection"))],
            is_default_base: true,
            ..ConstructorData::default()
        });
        db.add_type(base);

        let mut derived = generated("Derived");
        derived.base_type = Some("Legacy".to_string());
        let derived_id = db.add_type(derived);

        let options = GeneratorOptions::default();
        let mut resolver = ChainResolver::new(&db, &options);
        let resolved = resolver.resolve(derived_id).unwrap();
        assert_eq!(resolved.base_args, vec!["conn"]);
        assert!(!resolved.parameterless_base_path);
    }

    #[test]
    fn sibling_resolution_reuses_the_memoized_ancestor() {
        let mut db = MemoryDatabase::new();
        let mut base = generated("Base");
        base.fields
            .push(FieldData::injectable("shared", Ty::reference("IShared")));
        db.add_type(base);

        let mut left = generated("Left");
        left.base_type = Some("Base".to_string());
        let left_id = db.add_type(left);

        let mut right = generated("Right");
        right.base_type = Some("Base".to_string());
        let right_id = db.add_type(right);

        let options = GeneratorOptions::default();
        let mut resolver = ChainResolver::new(&db, &options);
        let left_resolved = resolver.resolve(left_id).unwrap();
        let right_resolved = resolver.resolve(right_id).unwrap();
        assert_eq!(left_resolved.base_args, right_resolved.base_args);
        // Base itself plus the two siblings.
        assert_eq!(resolver.memo.len(), 3);
    }

    #[test]
    fn inheritance_cycles_degrade_to_no_base() {
        let mut db = MemoryDatabase::new();
        let mut a = generated("A");
        a.base_type = Some("B".to_string());
        a.fields.push(FieldData::injectable("x", Ty::value("int")));
        let a_id = db.add_type(a);

        let mut b = generated("B");
        b.base_type = Some("A".to_string());
        db.add_type(b);

        let options = GeneratorOptions::default();
        let mut resolver = ChainResolver::new(&db, &options);
        let resolved = resolver.resolve(a_id).unwrap();
        let names: Vec<_> = resolved.params.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["x"]);
        assert!(resolved.base_args.is_empty());
    }
}

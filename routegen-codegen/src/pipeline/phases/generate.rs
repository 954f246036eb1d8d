//! Generate phase - turns validated descriptors into artifact specs.

use eyre::Result;

use crate::{
    ArtifactSpec, BodyFacts, RouteDescriptor,
    builder::{Expr, MethodSpec, ParamSpec, Statement, TypeRef, TypeSpec},
    naming::{LOOKUP_METHOD, PATH_PARAM, artifact_name},
    pipeline::{Phase, RoundContext},
};

/// Build the companion class for one validated descriptor.
///
/// The class holds a single static lookup method that returns the original
/// type when its argument equals the captured path, and null otherwise.
pub fn generate(descriptor: &RouteDescriptor) -> ArtifactSpec {
    let target_file_name = artifact_name(&descriptor.simple_type_name);

    let body = Expr::conditional(
        Expr::equals(Expr::string(&descriptor.path), Expr::param(PATH_PARAM)),
        Expr::type_literal(descriptor.element.clone()),
        Expr::Null,
    );

    let lookup = MethodSpec::new(LOOKUP_METHOD)
        .static_()
        .param(ParamSpec::new(PATH_PARAM, TypeRef::String))
        .returns(TypeRef::TypeToken)
        .statement(Statement::ret(body));

    let type_spec = TypeSpec::class(&target_file_name)
        .doc(format!("Route lookup for {}.", descriptor.element.relative_name()))
        .method(lookup);

    ArtifactSpec {
        target_file_name,
        package_name: descriptor.package_name.clone(),
        facts: BodyFacts {
            literal_path: descriptor.path.clone(),
            original_type: descriptor.element.clone(),
        },
        type_spec,
        source_location: descriptor.location.clone(),
    }
}

/// Phase that generates one artifact per validated descriptor.
pub struct GeneratePhase;

impl Phase for GeneratePhase {
    fn name(&self) -> &'static str {
        "generate"
    }

    fn description(&self) -> &'static str {
        "Build a lookup class for each valid route"
    }

    fn run(&self, ctx: &mut RoundContext<'_>) -> Result<()> {
        ctx.artifacts = ctx.validated.iter().map(generate).collect();
        Ok(())
    }
}

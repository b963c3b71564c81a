//! # Bridge Franca
//!
//! Franca IDL to IFEX translation on top of `bridge-core`:
//! - [`franca`]: the Franca source catalog, loaded from JSON
//! - [`ifex`]: the IFEX target catalog and its YAML rendering
//! - [`table`]: the mapping table between the two
//! - [`franca_to_ifex`]: the driver that turns one package into one IFEX tree

#![warn(clippy::all)]

pub mod franca;
pub mod ifex;
pub mod table;

use bridge_core::{
    Run, SourceNode, TableError, TargetNode, TranslateError, Translation, Translator,
    TranslatorConfig,
};
use thiserror::Error;
use tracing::{debug, info};

pub use franca::{FrancaField, FrancaKind, FrancaRef, Package};
pub use ifex::{to_yaml, Ast, IfexField, IfexKind, IfexNode};
pub use table::{franca_table, translate_type, FrancaState, FrancaTable};

#[derive(Error, Debug)]
pub enum FrancaError {
    #[error("invalid Franca package: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Table(#[from] TableError),

    #[error(transparent)]
    Translate(#[from] TranslateError),

    #[error("failed to render IFEX: {0}")]
    Render(#[from] serde_yaml::Error),

    #[error("{source_kind} translated to {actual} where {expected} was expected")]
    UnexpectedNode {
        source_kind: FrancaKind,
        expected: IfexKind,
        actual: IfexKind,
    },
}

/// Translate `node` and narrow the result to one concrete IFEX type
fn transform_as<'a, N>(
    run: &mut Run<'_, FrancaRef<'a>, IfexNode, FrancaState>,
    node: FrancaRef<'a>,
    expected: IfexKind,
) -> Result<N, FrancaError>
where
    N: TryFrom<IfexNode, Error = IfexNode>,
{
    let translated = run.transform(node)?;
    N::try_from(translated).map_err(|other| FrancaError::UnexpectedNode {
        source_kind: node.kind(),
        expected,
        actual: other.kind(),
    })
}

/// Translate a whole Franca package into an IFEX tree.
///
/// The package becomes the top namespace with its type collections as
/// child namespaces. Each interface is placed in a child namespace of its
/// own name, and imports become includes. An interface that manages others
/// only groups them and is not emitted. All of it happens in one run, so
/// the diagnostics cover the whole package.
pub fn franca_to_ifex(
    package: &Package,
    config: TranslatorConfig,
) -> Result<Translation<Ast>, FrancaError> {
    let translator = Translator::new(franca_table())?.with_config(config);
    let mut run = translator.start();

    info!(package = %package.name, "translating Franca package");
    let mut namespace: ifex::Namespace =
        transform_as(&mut run, FrancaRef::Package(package), IfexKind::Namespace)?;

    for (name, interface) in &package.interfaces {
        if !interface.manages.is_empty() {
            debug!(interface = %name, manages = ?interface.manages, "skipping managing interface");
            continue;
        }
        debug!(interface = %name, "placing interface in its own namespace");
        let interface: ifex::Interface =
            transform_as(&mut run, FrancaRef::Interface(interface), IfexKind::Interface)?;
        namespace.namespaces.push(ifex::Namespace {
            name: name.clone(),
            interface: Some(interface),
            ..Default::default()
        });
    }

    let includes = package
        .imports
        .iter()
        .map(|import| transform_as(&mut run, FrancaRef::Import(import), IfexKind::Include))
        .collect::<Result<Vec<ifex::Include>, _>>()?;

    let translation = run.finish(Ast {
        namespaces: vec![namespace],
        includes,
    });
    info!(
        diagnostics = translation.diagnostics.len(),
        "Franca package translated"
    );
    Ok(translation)
}

/// Parse a JSON-encoded Franca package and render its IFEX YAML
pub fn convert_json(
    input: &str,
    config: TranslatorConfig,
) -> Result<Translation<String>, FrancaError> {
    let package = Package::from_json(input)?;
    let translation = franca_to_ifex(&package, config)?;
    let yaml = to_yaml(&translation.output)?;
    Ok(translation.map(|_| yaml))
}

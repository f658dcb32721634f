//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::TreeUseCase;
use crate::config::Config;
use crate::domain::ports::StatusSource;
use crate::infrastructure::{FileStatusSource, KubectlStatusSource};
use crate::presentation::cli::TreeArgs;

/// Type alias for the tree use case over whichever source the flags select
pub type ConcreteTreeUseCase = TreeUseCase<Box<dyn StatusSource>>;

/// Build kubectl source settings: flags win over config (which already
/// carries env overrides).
pub fn create_kubectl_source(args: &TreeArgs, config: &Config) -> KubectlStatusSource {
    let source = KubectlStatusSource::new()
        .with_binary(config.source.kubectl.clone())
        .with_context(args.context.clone().or_else(|| config.source.context.clone()))
        .with_kind(args.kind.unwrap_or(config.source.kind));

    if args.all_namespaces {
        return source.all_namespaces();
    }
    match &args.namespace {
        Some(ns) => source.with_namespace(ns.clone()),
        None if config.source.all_namespaces => source.all_namespaces(),
        None => source.with_namespace(config.source.namespace.clone()),
    }
}

/// A snapshot file when `--input` is given, kubectl otherwise.
pub fn create_status_source(args: &TreeArgs, config: &Config) -> Box<dyn StatusSource> {
    match &args.input {
        Some(path) => Box::new(FileStatusSource::new(path.clone())),
        None => Box::new(create_kubectl_source(args, config)),
    }
}

/// Create a tree use case with all dependencies wired up
pub fn create_tree_use_case(args: &TreeArgs, config: &Config) -> ConcreteTreeUseCase {
    TreeUseCase::new(create_status_source(args, config))
}

use std::future::Future;

use crate::error::ShimError;

/// Contract of the external renderer module.
///
/// The shim only sees these two points; canvas, GPU and DOM wiring are the
/// module's own business.
pub trait ExternalModule {
    /// Resolves once the module's runtime is initialized. Awaited exactly once.
    fn ready(&self) -> impl Future<Output = Result<(), ShimError>>;

    /// Parameterless entry point. Called exactly once, after `ready` resolved.
    fn start(&self);
}

//! Configuration materialization.
//!
//! Ensures the service's env file exists before the service starts. An
//! existing file is never touched — the operator's edited secrets win over
//! anything we could write.

use std::path::Path;

use crate::error::Result;
use crate::fsops::write_atomic;
use crate::templates;

/// What the materializer did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaterializeOutcome {
    /// File already existed; left byte-identical.
    AlreadyPresent,
    /// Seeded by copying the example file.
    SeededFromExample,
    /// Seeded from the embedded default template.
    SeededFromDefault,
}

/// Ensure `target` exists, seeding it from `example` (usually
/// `.env.example`) when that file is present, otherwise from the embedded
/// default template. The write is atomic — an interrupted run leaves
/// either no file or a complete one, never a truncated config.
pub fn materialize(target: &Path, example: &Path) -> Result<MaterializeOutcome> {
    if target.exists() {
        tracing::debug!(path = %target.display(), "config present, leaving untouched");
        return Ok(MaterializeOutcome::AlreadyPresent);
    }

    if example.exists() {
        let content = std::fs::read_to_string(example)?;
        write_atomic(target, &content)?;
        tracing::info!(
            target = %target.display(),
            example = %example.display(),
            "config seeded from example"
        );
        return Ok(MaterializeOutcome::SeededFromExample);
    }

    write_atomic(target, templates::template("default.env"))?;
    tracing::info!(target = %target.display(), "config seeded from default template");
    Ok(MaterializeOutcome::SeededFromDefault)
}

use thiserror::Error;

/// One variant per publish step, carrying the step's exit code.
///
/// The pipeline aborts on the first failing step; there is no rollback. A
/// failed push after a successful build leaves a stale local image, which
/// is tolerated: the image is rebuildable.
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("registry login failed with exit code {code}")]
    Login { code: i32 },

    #[error("image build failed with exit code {code}")]
    Build { code: i32 },

    #[error("image push failed with exit code {code}")]
    Push { code: i32 },

    #[error("{step} terminated by signal")]
    Interrupted { step: &'static str },

    #[error("failed to run {step}: {source}")]
    Spawn {
        step: &'static str,
        #[source]
        source: std::io::Error,
    },
}

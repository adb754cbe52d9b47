use std::path::Path;
use std::process::{ExitStatus, Stdio};

use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, info};

use crate::PublishError;

const DEFAULT_TAG: &str = "latest";
const DEFAULT_USERNAME: &str = "AWS";

/// Explicit registry coordinates, passed at construction instead of being
/// baked into the publish calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Registry host, e.g. `123456789.dkr.ecr.eu-west-1.amazonaws.com`.
    pub registry: String,
    /// Repository name within the registry.
    pub name: String,
    pub region: String,
    pub tag: String,
    pub username: String,
}

impl RegistryConfig {
    pub fn new(
        registry: impl Into<String>,
        name: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            registry: registry.into(),
            name: name.into(),
            region: region.into(),
            tag: DEFAULT_TAG.to_string(),
            username: DEFAULT_USERNAME.to_string(),
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Fully qualified image reference.
    pub fn image(&self) -> String {
        format!("{}/{}:{}", self.registry, self.name, self.tag)
    }
}

/// Builds and publishes a container image: authenticate → build → push,
/// strictly sequential, aborting on the first failing step.
pub struct RegistryPublisher {
    cfg: RegistryConfig,
}

impl RegistryPublisher {
    pub fn new(cfg: RegistryConfig) -> Self {
        Self { cfg }
    }

    /// Runs the full pipeline against a build context directory and
    /// returns the pushed image reference.
    ///
    /// `use_cache` is off by default upstream of this call: a clean build
    /// avoids stale layers when the context changed outside tracked files.
    pub async fn publish(&self, context: &Path, use_cache: bool) -> Result<String, PublishError> {
        self.login().await?;
        self.build(context, use_cache).await?;
        self.push().await?;
        let image = self.cfg.image();
        info!(%image, "published image");
        Ok(image)
    }

    /// Pipes a short-lived registry password into `docker login`.
    async fn login(&self) -> Result<(), PublishError> {
        let password = Command::new("aws")
            .args(["ecr", "get-login-password", "--region", &self.cfg.region])
            .output()
            .await
            .map_err(|source| PublishError::Spawn {
                step: "login",
                source,
            })?;
        step_status("login", password.status, |code| PublishError::Login { code })?;

        let mut login = Command::new("docker")
            .args([
                "login",
                "--username",
                &self.cfg.username,
                "--password-stdin",
                &self.cfg.registry,
            ])
            .stdin(Stdio::piped())
            .spawn()
            .map_err(|source| PublishError::Spawn {
                step: "login",
                source,
            })?;
        if let Some(mut stdin) = login.stdin.take() {
            stdin
                .write_all(&password.stdout)
                .await
                .map_err(|source| PublishError::Spawn {
                    step: "login",
                    source,
                })?;
        }
        let status = login.wait().await.map_err(|source| PublishError::Spawn {
            step: "login",
            source,
        })?;
        step_status("login", status, |code| PublishError::Login { code })?;
        debug!(registry = %self.cfg.registry, "registry login ok");
        Ok(())
    }

    async fn build(&self, context: &Path, use_cache: bool) -> Result<(), PublishError> {
        let args = build_args(&self.cfg.image(), context, use_cache);
        debug!(?args, "building image");
        let status = Command::new("docker")
            .args(&args)
            .status()
            .await
            .map_err(|source| PublishError::Spawn {
                step: "build",
                source,
            })?;
        step_status("build", status, |code| PublishError::Build { code })
    }

    async fn push(&self) -> Result<(), PublishError> {
        let status = Command::new("docker")
            .args(["push", &self.cfg.image()])
            .status()
            .await
            .map_err(|source| PublishError::Spawn {
                step: "push",
                source,
            })?;
        step_status("push", status, |code| PublishError::Push { code })
    }
}

fn build_args(image: &str, context: &Path, use_cache: bool) -> Vec<String> {
    let mut args = vec!["build".to_string()];
    if !use_cache {
        args.push("--no-cache".to_string());
    }
    args.push("-t".to_string());
    args.push(image.to_string());
    args.push(context.display().to_string());
    args
}

fn step_status(
    step: &'static str,
    status: ExitStatus,
    err: impl FnOnce(i32) -> PublishError,
) -> Result<(), PublishError> {
    if status.success() {
        return Ok(());
    }
    match status.code() {
        Some(code) => Err(err(code)),
        None => Err(PublishError::Interrupted { step }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> RegistryConfig {
        RegistryConfig::new(
            "123456789.dkr.ecr.eu-west-1.amazonaws.com",
            "data/recommend-system",
            "eu-west-1",
        )
    }

    #[test]
    fn image_reference_defaults_to_latest() {
        assert_eq!(
            config().image(),
            "123456789.dkr.ecr.eu-west-1.amazonaws.com/data/recommend-system:latest"
        );
    }

    #[test]
    fn image_reference_with_explicit_tag() {
        assert_eq!(
            config().with_tag("v2").image(),
            "123456789.dkr.ecr.eu-west-1.amazonaws.com/data/recommend-system:v2"
        );
    }

    #[test]
    fn clean_build_disables_layer_cache() {
        let args = build_args("repo/app:latest", Path::new("/src/app"), false);
        assert_eq!(args, ["build", "--no-cache", "-t", "repo/app:latest", "/src/app"]);
    }

    #[test]
    fn cached_build_omits_no_cache() {
        let args = build_args("repo/app:latest", Path::new("/src/app"), true);
        assert_eq!(args, ["build", "-t", "repo/app:latest", "/src/app"]);
    }

    #[cfg(unix)]
    #[test]
    fn step_status_maps_exit_codes() {
        use std::os::unix::process::ExitStatusExt;

        let ok = ExitStatus::from_raw(0);
        assert!(step_status("build", ok, |code| PublishError::Build { code }).is_ok());

        let failed = ExitStatus::from_raw(1 << 8);
        let err = step_status("build", failed, |code| PublishError::Build { code }).unwrap_err();
        assert!(matches!(err, PublishError::Build { code: 1 }));

        // Raw signal termination carries no exit code.
        let signaled = ExitStatus::from_raw(9);
        let err = step_status("push", signaled, |code| PublishError::Push { code }).unwrap_err();
        assert!(matches!(err, PublishError::Interrupted { step: "push" }));
    }
}

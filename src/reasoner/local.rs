//! Reasoner backed by a local solver executable.
//!
//! Each run gets a private scratch directory `<folder>/<uuid>/` holding the
//! document as `model.dummy`. The solver is started inside that directory with
//! the file name as its last argument, so its diagnostics read
//! `model.dummy:<line>: ...`. The directory is removed once the run ends.

use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, warn};
use uuid::Uuid;

use super::{Reasoner, ReasonerConfig, ReasonerError, ReasonerOutcome};
use crate::syntax::{Dummy, SyntaxAdapter};

/// Marker the solver prints on stdout for an unsatisfiable model.
const UNSATISFIABLE_MARKER: &str = "=====UNSATISFIABLE=====";

#[derive(Debug, Clone, Default)]
pub struct LocalReasoner {
    config: ReasonerConfig,
}

impl LocalReasoner {
    pub fn new(config: ReasonerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReasonerConfig {
        &self.config
    }

    async fn run(&self, document: &str) -> Result<ReasonerOutcome, ReasonerError> {
        let workdir = self.config.folder.join(Uuid::new_v4().to_string());
        tokio::fs::create_dir_all(&workdir).await?;

        let result = self.run_in(&workdir, document).await;

        if let Err(e) = tokio::fs::remove_dir_all(&workdir).await {
            warn!("could not remove scratch directory {}: {e}", workdir.display());
        }
        result
    }

    async fn run_in(
        &self,
        workdir: &Path,
        document: &str,
    ) -> Result<ReasonerOutcome, ReasonerError> {
        let file_name = format!("model.{}", Dummy.extensions()[0]);
        tokio::fs::write(workdir.join(&file_name), document).await?;

        let program = self.config.program.display().to_string();
        let child = Command::new(&self.config.program)
            .args(&self.config.args)
            .arg(&file_name)
            .current_dir(workdir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| ReasonerError::Spawn {
                program: program.clone(),
                source,
            })?;

        let output = match self.config.timeout() {
            Some(limit) => tokio::time::timeout(limit, child.wait_with_output())
                .await
                .map_err(|_| ReasonerError::Timeout(limit.as_millis()))??,
            None => child.wait_with_output().await?,
        };

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        debug!(
            "reasoner '{program}' finished with {} ({} bytes stdout, {} bytes stderr)",
            output.status,
            stdout.len(),
            stderr.len()
        );

        if output.status.success() {
            let satisfiable = !stdout.contains(UNSATISFIABLE_MARKER);
            Ok(ReasonerOutcome::success(stdout, satisfiable))
        } else {
            Ok(ReasonerOutcome {
                error: Some(format!("reasoner exited with {}", output.status)),
                stdout,
                stderr,
                is_satisfiable: false,
            })
        }
    }
}

#[async_trait]
impl Reasoner for LocalReasoner {
    async fn solve(&self, document: &str) -> ReasonerOutcome {
        match self.run(document).await {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!("reasoner run failed: {e}");
                ReasonerOutcome::failure(e.to_string(), "")
            }
        }
    }
}

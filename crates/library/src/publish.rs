use std::path::PathBuf;
use std::process::Command;

pub const MANUAL_PUBLISH_HINT: &str = "git add . && git commit -m 'update' && git push";

/// Makes the saved catalog visible to whoever serves it.
pub trait Publish {
    fn publish(&self, imported: usize) -> Result<(), PublishError>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PublishStep {
    Stage,
    Commit,
    Push,
}

impl std::fmt::Display for PublishStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PublishStep::Stage => write!(f, "git add"),
            PublishStep::Commit => write!(f, "git commit"),
            PublishStep::Push => write!(f, "git push"),
        }
    }
}

#[derive(Debug)]
pub struct PublishError {
    pub step: PublishStep,
    pub reason: String,
}

impl std::fmt::Display for PublishError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.step, self.reason)
    }
}

impl std::error::Error for PublishError {}

/// Stages, commits and pushes the catalog file with the system `git`.
#[derive(Clone, Debug)]
pub struct GitPublisher {
    path: PathBuf,
}

impl GitPublisher {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn steps(&self, imported: usize) -> Vec<(PublishStep, Vec<String>)> {
        vec![
            (
                PublishStep::Stage,
                vec!["add".to_string(), self.path.to_string_lossy().to_string()],
            ),
            (
                PublishStep::Commit,
                vec![
                    "commit".to_string(),
                    "-m".to_string(),
                    commit_message(imported),
                ],
            ),
            (PublishStep::Push, vec!["push".to_string()]),
        ]
    }
}

impl Publish for GitPublisher {
    fn publish(&self, imported: usize) -> Result<(), PublishError> {
        for (step, args) in self.steps(imported) {
            let status = Command::new("git")
                .args(&args)
                .status()
                .map_err(|err| PublishError {
                    step,
                    reason: err.to_string(),
                })?;
            if !status.success() {
                return Err(PublishError {
                    step,
                    reason: status.to_string(),
                });
            }
        }
        Ok(())
    }
}

pub fn commit_message(imported: usize) -> String {
    format!("Import {} albums from Archive", imported)
}

#[cfg(test)]
mod tests {
    use super::{commit_message, GitPublisher, PublishError, PublishStep};

    #[test]
    fn stages_the_catalog_path_then_commits_and_pushes() {
        let publisher = GitPublisher::new("public/database.json");
        let steps = publisher.steps(3);
        let order: Vec<PublishStep> = steps.iter().map(|(step, _)| *step).collect();
        assert_eq!(
            order,
            vec![PublishStep::Stage, PublishStep::Commit, PublishStep::Push]
        );
        assert_eq!(steps[0].1, vec!["add", "public/database.json"]);
        assert_eq!(steps[1].1, vec!["commit", "-m", "Import 3 albums from Archive"]);
    }

    #[test]
    fn commit_message_embeds_count() {
        assert_eq!(commit_message(1), "Import 1 albums from Archive");
    }

    #[test]
    fn error_names_the_failed_step() {
        let err = PublishError {
            step: PublishStep::Push,
            reason: "exit status: 128".to_string(),
        };
        assert_eq!(err.to_string(), "git push failed: exit status: 128");
    }
}

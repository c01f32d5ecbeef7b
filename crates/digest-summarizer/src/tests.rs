//! Integration tests for batch runs

#[cfg(test)]
mod tests {
    use crate::{
        AbortReason, AutoConfirm, BatchRunner, CompletionSet, Confirm, PromptTemplate,
        RunOutcome, RunPhase, RunRequest, Summarizer, SummarizerError,
    };
    use digest_domain::JournalEntry;
    use digest_llm::MockProvider;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    /// Declines every batch, remembering what it was shown
    #[derive(Default)]
    struct Decline {
        shown: Vec<String>,
    }

    impl Confirm for Decline {
        fn confirm(&mut self, entries: &[JournalEntry]) -> bool {
            self.shown = entries.iter().map(JournalEntry::label).collect();
            false
        }
    }

    /// Records how often it was asked
    #[derive(Default)]
    struct CountingConfirm {
        calls: usize,
    }

    impl Confirm for CountingConfirm {
        fn confirm(&mut self, _entries: &[JournalEntry]) -> bool {
            self.calls += 1;
            true
        }
    }

    fn runner(provider: &MockProvider, request: RunRequest) -> BatchRunner<MockProvider> {
        // Identity template: the prompt is the entry text itself
        let template = PromptTemplate::new("{entry_text}").unwrap();
        BatchRunner::new(Summarizer::new(provider.clone(), template), request)
    }

    fn write_note(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, body).unwrap();
        path
    }

    fn files_request(files: Vec<PathBuf>, output: PathBuf) -> RunRequest {
        RunRequest {
            outline: None,
            entry_files: files,
            output,
        }
    }

    #[tokio::test]
    async fn test_per_file_run_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let a = write_note(dir.path(), "2024-01-01.md", "Walked the dog.");
        let b = write_note(dir.path(), "2024-01-02.md", "Fixed the sink.");
        let output = dir.path().join("summary.md");
        let provider = MockProvider::new("A summary.");

        let first = runner(&provider, files_request(vec![a.clone(), b.clone()], output.clone()))
            .run(&mut AutoConfirm)
            .await
            .unwrap();
        assert_eq!(first.processed, 2);
        assert_eq!(first.outcome, RunOutcome::Done);

        let mut confirm = CountingConfirm::default();
        let second = runner(&provider, files_request(vec![a, b], output.clone()))
            .run(&mut confirm)
            .await
            .unwrap();

        assert_eq!(second.processed, 0);
        assert_eq!(second.outcome, RunOutcome::NothingToDo);
        assert_eq!(confirm.calls, 0);
        assert_eq!(provider.call_count(), 2);
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "# [[2024-01-01]]\n\nA summary.\n\n# [[2024-01-02]]\n\nA summary.\n\n"
        );
    }

    #[tokio::test]
    async fn test_only_new_files_are_processed() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("summary.md");
        fs::write(&output, "# [[old]]\n\nDone before.\n\n").unwrap();
        let old = write_note(dir.path(), "old.md", "old text");
        let new = write_note(dir.path(), "new.md", "new text");
        let provider = MockProvider::new("Fresh.");

        let report = runner(&provider, files_request(vec![old, new], output.clone()))
            .run(&mut AutoConfirm)
            .await
            .unwrap();

        assert_eq!(report.processed, 1);
        assert_eq!(report.total, 1);
        assert_eq!(provider.prompts(), vec!["new text"]);
        assert!(fs::read_to_string(&output)
            .unwrap()
            .ends_with("# [[new]]\n\nFresh.\n\n"));
    }

    #[tokio::test]
    async fn test_outline_run_writes_in_document_order() {
        let dir = TempDir::new().unwrap();
        let journal = write_note(
            dir.path(),
            "journal.org",
            "* Journal\n** Journal Entry <A>\nalpha\n** Journal Entry <B>\n  \n** Journal Entry <C>\ngamma\n",
        );
        let output = dir.path().join("summary.md");
        let mut provider = MockProvider::default();
        provider.add_response("alpha", "Summary A.");
        provider.add_response("gamma", "<think>thinking</think>Summary C.");

        let request = RunRequest {
            outline: Some(journal),
            entry_files: vec![],
            output: output.clone(),
        };
        let report = runner(&provider, request)
            .run(&mut AutoConfirm)
            .await
            .unwrap();

        assert_eq!(report.processed, 2);
        assert_eq!(report.total, 2);
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "# A\n\nSummary A.\n\n# C\n\nSummary C.\n\n"
        );
    }

    #[tokio::test]
    async fn test_outline_entries_are_not_deduplicated() {
        let dir = TempDir::new().unwrap();
        let journal = write_note(dir.path(), "journal.org", "** Journal Entry <A>\nalpha\n");
        let output = dir.path().join("summary.md");
        let provider = MockProvider::new("Summary.");

        for _ in 0..2 {
            let request = RunRequest {
                outline: Some(journal.clone()),
                entry_files: vec![],
                output: output.clone(),
            };
            runner(&provider, request)
                .run(&mut AutoConfirm)
                .await
                .unwrap();
        }

        assert_eq!(provider.call_count(), 2);
    }

    #[tokio::test]
    async fn test_abort_on_first_failure() {
        let dir = TempDir::new().unwrap();
        let x = write_note(dir.path(), "x.md", "entry x");
        let y = write_note(dir.path(), "y.md", "entry y");
        let z = write_note(dir.path(), "z.md", "entry z");
        let output = dir.path().join("summary.md");
        let mut provider = MockProvider::new("ok");
        provider.add_error("entry y");

        let mut runner = runner(&provider, files_request(vec![x, y, z], output.clone()));
        let report = runner.run(&mut AutoConfirm).await.unwrap();

        assert_eq!(report.processed, 1);
        assert_eq!(report.total, 3);
        assert_eq!(
            report.outcome,
            RunOutcome::Aborted(AbortReason::SummaryFailed {
                label: "y.md".to_string()
            })
        );
        assert_eq!(runner.phase(), RunPhase::Aborted);
        assert_eq!(provider.prompts(), vec!["entry x", "entry y"]);
        assert_eq!(fs::read_to_string(&output).unwrap(), "# [[x]]\n\nok\n\n");

        // The written record makes the retry skip x
        let completed = CompletionSet::load(&output);
        assert!(completed.contains("x.md"));
        assert!(!completed.contains("y.md"));
    }

    #[tokio::test]
    async fn test_both_input_modes_is_config_error() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("summary.md");
        let provider = MockProvider::default();
        let mut confirm = CountingConfirm::default();

        let request = RunRequest {
            outline: Some(dir.path().join("journal.org")),
            entry_files: vec![dir.path().join("a.md")],
            output: output.clone(),
        };
        let mut runner = runner(&provider, request);
        let result = runner.run(&mut confirm).await;

        assert!(matches!(result, Err(SummarizerError::Config(_))));
        assert_eq!(runner.phase(), RunPhase::Aborted);
        assert_eq!(confirm.calls, 0);
        assert_eq!(provider.call_count(), 0);
        assert!(!output.exists());
    }

    #[tokio::test]
    async fn test_declined_run_has_no_side_effects() {
        let dir = TempDir::new().unwrap();
        let a = write_note(dir.path(), "a.md", "text");
        let output = dir.path().join("summary.md");
        let provider = MockProvider::default();
        let mut decline = Decline::default();

        let report = runner(&provider, files_request(vec![a], output.clone()))
            .run(&mut decline)
            .await
            .unwrap();

        assert_eq!(report.outcome, RunOutcome::Aborted(AbortReason::Declined));
        assert_eq!(decline.shown, vec!["a.md"]);
        assert_eq!(provider.call_count(), 0);
        assert!(!output.exists());
    }

    #[tokio::test]
    async fn test_unreachable_service_aborts_before_processing() {
        let dir = TempDir::new().unwrap();
        let a = write_note(dir.path(), "a.md", "text");
        let output = dir.path().join("summary.md");
        let provider = MockProvider::default().unreachable();

        let report = runner(&provider, files_request(vec![a], output.clone()))
            .run(&mut AutoConfirm)
            .await
            .unwrap();

        assert!(matches!(
            report.outcome,
            RunOutcome::Aborted(AbortReason::ServiceUnreachable(_))
        ));
        assert_eq!(provider.call_count(), 0);
        assert!(!output.exists());
    }

    #[tokio::test]
    async fn test_missing_inputs_mean_nothing_to_do() {
        let dir = TempDir::new().unwrap();
        let provider = MockProvider::default();
        let mut confirm = CountingConfirm::default();

        let request = files_request(
            vec![dir.path().join("missing.md")],
            dir.path().join("summary.md"),
        );
        let mut runner = runner(&provider, request);
        let report = runner.run(&mut confirm).await.unwrap();

        assert_eq!(report.outcome, RunOutcome::NothingToDo);
        assert!(report.is_success());
        assert_eq!(runner.phase(), RunPhase::Done);
        assert_eq!(confirm.calls, 0);
    }

    #[tokio::test]
    async fn test_empty_file_is_skipped_not_failed() {
        let dir = TempDir::new().unwrap();
        let empty = write_note(dir.path(), "empty.md", "");
        let full = write_note(dir.path(), "full.md", "words");
        let output = dir.path().join("summary.md");
        let provider = MockProvider::new("Sum.");

        let report = runner(&provider, files_request(vec![empty, full], output.clone()))
            .run(&mut AutoConfirm)
            .await
            .unwrap();

        assert_eq!(report.outcome, RunOutcome::Done);
        assert_eq!(report.processed, 1);
        assert_eq!(report.total, 2);
        assert_eq!(provider.prompts(), vec!["words"]);
    }

    #[tokio::test]
    async fn test_write_failure_aborts() {
        let dir = TempDir::new().unwrap();
        let a = write_note(dir.path(), "a.md", "text a");
        let b = write_note(dir.path(), "b.md", "text b");
        // A directory cannot be opened for appending
        let output = dir.path().join("summary.md");
        fs::create_dir(&output).unwrap();
        let provider = MockProvider::new("Sum.");

        let report = runner(&provider, files_request(vec![a, b], output))
            .run(&mut AutoConfirm)
            .await
            .unwrap();

        assert_eq!(report.processed, 0);
        assert!(matches!(
            report.outcome,
            RunOutcome::Aborted(AbortReason::WriteFailed { ref label, .. }) if label == "a.md"
        ));
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn test_round_trip_identifier() {
        let dir = TempDir::new().unwrap();
        let note = write_note(dir.path(), "note1.md", "Today I learned Rust.");
        let output = dir.path().join("summary.md");
        let provider = MockProvider::new("Learned Rust.");

        runner(&provider, files_request(vec![note], output.clone()))
            .run(&mut AutoConfirm)
            .await
            .unwrap();

        assert!(CompletionSet::load(&output).contains("note1.md"));
    }
}

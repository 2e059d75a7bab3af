//! End-to-end tests for the four insight pipelines.

use std::path::Path;

use codesight::io::reports;
use codesight::{CodesightConfig, CodesightEngine, CodesightError};

fn engine() -> CodesightEngine {
    CodesightEngine::new(CodesightConfig::default()).unwrap()
}

fn write_fixture(dir: &tempfile::TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path.to_string_lossy().into_owned()
}

const JS_FIXTURE: &str = r#"import { api } from './api';
import express from 'express';

const app = express();

function handleRequest(req, res) {
  if (req.query.id) {
    console.log('looking up', req.query.id);
    const row = db.query("SELECT * FROM users WHERE id = " + req.query.id);
    return res.json(row);
  }
  return res.status(400).end();
}

app.listen(3000);
"#;

#[tokio::test]
async fn analyze_code_produces_a_full_report() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(&dir, "server.js", JS_FIXTURE);

    let report = engine().analyze_code(&path, true).await.unwrap();

    assert_eq!(report.language, "javascript");
    assert!(report.metrics.complexity >= 1);
    assert!(report.metrics.maintainability_index <= 100);
    assert!(report.metrics.lines_of_code > 0);

    let total_lines = JS_FIXTURE.split('\n').count();
    for issue in &report.issues {
        assert!(issue.line >= 1 && issue.line <= total_lines);
    }
    assert!(report.issues.iter().any(|i| i.rule == "no-console"));

    let security = report.security_issues.as_ref().expect("security requested");
    assert!(security.iter().any(|i| i.message.contains("SQL injection")));
    for issue in security {
        assert!(issue.line >= 1 && issue.line <= total_lines);
    }
}

#[tokio::test]
async fn security_issues_are_absent_unless_requested() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(&dir, "server.js", JS_FIXTURE);

    let report = engine().analyze_code(&path, false).await.unwrap();
    assert!(report.security_issues.is_none());
}

#[tokio::test]
async fn analyze_code_is_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(&dir, "server.js", JS_FIXTURE);

    let eng = engine();
    let first = eng.analyze_code(&path, true).await.unwrap();
    let second = eng.analyze_code(&path, true).await.unwrap();
    assert_eq!(
        reports::to_json(&first).unwrap(),
        reports::to_json(&second).unwrap()
    );
}

#[tokio::test]
async fn missing_primary_file_is_fatal_with_no_partial_report() {
    let err = engine()
        .analyze_code("no/such/file.ts", false)
        .await
        .unwrap_err();
    match err {
        CodesightError::FileNotFound { path } => assert_eq!(path, "no/such/file.ts"),
        other => panic!("unexpected variant: {other:?}"),
    }
}

#[tokio::test]
async fn bug_pipeline_triages_a_type_error() {
    let dir = tempfile::tempdir().unwrap();
    let content: String = (1..=10).map(|i| format!("line {i}\n")).collect();
    let path = write_fixture(&dir, "app.js", &content);

    let traceback = format!("TypeError: Cannot read properties of undefined\n{path}:5");
    let report = engine()
        .analyze_bug(&traceback, &[path.clone()])
        .await
        .unwrap();

    assert_eq!(report.error_type, "TypeError");
    // Classification matches on the error type's "type" substring, never on
    // the message.
    assert_eq!(
        report.probable_cause,
        "Type mismatch - value is not the expected type"
    );

    // Context file first, then the frame's base name, capped well under 5.
    assert_eq!(report.relevant_files.len(), 2);
    assert_eq!(report.relevant_files[0], path);
    assert_eq!(report.relevant_files[1], "app.js");

    // Only the readable context path yields a snippet; the bare base name
    // does not resolve from the test's working directory and is skipped.
    assert_eq!(report.code_snippets.len(), 1);
    assert_eq!(report.code_snippets[0].file, path);
    // No frame matches the full path exactly, so the window defaults to
    // line 1.
    assert_eq!(
        report.code_snippets[0].explanation,
        "Code around line 1 where error occurred"
    );
    assert_eq!(report.code_snippets[0].lines, "line 1\nline 2\nline 3");
}

#[tokio::test]
async fn bug_pipeline_never_fails_on_unparseable_input() {
    let report = engine()
        .analyze_bug("nothing recognizable here", &[])
        .await
        .unwrap();
    assert_eq!(report.error_type, "UnknownError");
    assert!(report.relevant_files.is_empty());
    assert!(report.code_snippets.is_empty());
    assert_eq!(
        report.probable_cause,
        "Error analysis requires deeper investigation of the code context"
    );
}

#[tokio::test]
async fn relevant_files_are_capped_at_five() {
    let traceback = "Error: x\na.js:1\nb.js:2\nc.js:3\nd.js:4\ne.js:5\nf.js:6";
    let report = engine().analyze_bug(traceback, &[]).await.unwrap();
    assert_eq!(report.relevant_files.len(), 5);
    assert_eq!(report.relevant_files[0], "a.js");
}

#[tokio::test]
async fn explain_pipeline_walks_sections_and_dependencies() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(&dir, "server.js", JS_FIXTURE);

    let report = engine().explain_code(&path, None, None).await.unwrap();

    assert!(report.overview.contains("This javascript file"));
    assert!(report.overview.contains("an Express.js server"));

    assert!(!report.sections.is_empty());
    for window in report.sections.windows(2) {
        assert!(window[0].end_line < window[1].start_line);
    }

    assert!(report.dependencies.contains(&"./api".to_string()));
    assert!(report.dependencies.contains(&"express".to_string()));

    let expected_related = Path::new(&path)
        .parent()
        .unwrap()
        .join("api")
        .to_string_lossy()
        .into_owned();
    assert_eq!(report.related_files, vec![expected_related]);
}

#[tokio::test]
async fn explain_pipeline_honors_a_line_range() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(&dir, "range.py", "a = 1\nb = 2\nc = 3\nd = 4\ne = 5\n");

    let report = engine()
        .explain_code(&path, Some(2), Some(4))
        .await
        .unwrap();

    for section in &report.sections {
        assert!(section.start_line >= 2);
        assert!(section.end_line <= 4);
    }
}

#[tokio::test]
async fn history_pipeline_requires_a_repository() {
    let dir = tempfile::tempdir().unwrap();
    let err = engine()
        .analyze_history(dir.path(), "")
        .await
        .unwrap_err();
    match err {
        CodesightError::NotARepository { .. } => {}
        other => panic!("unexpected variant: {other:?}"),
    }
}

#[tokio::test]
async fn history_pipeline_mines_patterns_and_recommendations() {
    let dir = tempfile::tempdir().unwrap();
    let repo = git2::Repository::init(dir.path()).unwrap();
    let sig = git2::Signature::now("dev", "dev@example.com").unwrap();

    let mut parent: Option<git2::Oid> = None;
    for (i, message) in [
        "feat: add core module",
        "fix: handle empty input",
        "wip",
    ]
    .iter()
    .enumerate()
    {
        let name = format!("file{i}.js");
        std::fs::write(dir.path().join(&name), format!("// rev {i}\n")).unwrap();
        std::fs::write(dir.path().join("core.js"), format!("// core rev {i}\n")).unwrap();

        let mut index = repo.index().unwrap();
        index.add_path(Path::new(&name)).unwrap();
        index.add_path(Path::new("core.js")).unwrap();
        index.write().unwrap();
        let tree_id = index.write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();

        let parents: Vec<git2::Commit> = parent
            .map(|oid| vec![repo.find_commit(oid).unwrap()])
            .unwrap_or_default();
        let parent_refs: Vec<&git2::Commit> = parents.iter().collect();
        parent = Some(
            repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parent_refs)
                .unwrap(),
        );
    }

    let report = engine().analyze_history(dir.path(), "").await.unwrap();

    assert_eq!(report.commits.len(), 3);
    // Newest first; summaries carry the touched categories.
    assert!(report.commits[0].message.starts_with("wip"));
    assert!(report.commits[0]
        .summary
        .contains("(Modified: JavaScript/TypeScript)"));

    // core.js touched three times: strictly more than two.
    assert!(report
        .patterns
        .iter()
        .any(|p| p.contains("Frequently modified files") && p.contains("core.js")));
    assert!(report
        .patterns
        .iter()
        .any(|p| p.contains("conventional commit")));
    // Three commits is not "high frequency" (threshold is strictly > 5).
    assert!(!report
        .patterns
        .iter()
        .any(|p| p.contains("High commit frequency")));

    // "wip" is under ten characters; nothing touches a test path.
    assert!(report
        .recommendations
        .iter()
        .any(|r| r.contains("more descriptive commit messages")));
    assert!(report
        .recommendations
        .iter()
        .any(|r| r.contains("adding tests")));
    assert!(!report
        .recommendations
        .iter()
        .any(|r| r.contains("breaking large commits")));
}

#[tokio::test]
async fn history_query_filters_by_message_substring() {
    let dir = tempfile::tempdir().unwrap();
    let repo = git2::Repository::init(dir.path()).unwrap();
    let sig = git2::Signature::now("dev", "dev@example.com").unwrap();

    std::fs::write(dir.path().join("a.txt"), "a\n").unwrap();
    let mut index = repo.index().unwrap();
    index.add_path(Path::new("a.txt")).unwrap();
    index.write().unwrap();
    let tree_id = index.write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();
    repo.commit(Some("HEAD"), &sig, &sig, "docs: initial notes", &tree, &[])
        .unwrap();

    let report = engine().analyze_history(dir.path(), "docs").await.unwrap();
    assert_eq!(report.commits.len(), 1);

    let report = engine()
        .analyze_history(dir.path(), "unrelated")
        .await
        .unwrap();
    assert!(report.commits.is_empty());
}

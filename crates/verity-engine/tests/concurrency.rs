//! Concurrent callers through `SharedJournal`.

use pretty_assertions::assert_eq;
use tokio::task::JoinSet;
use verity_core::enums::{AnalysisType, AuditCategory, MatchOutcome, Severity};
use verity_engine::SharedJournal;
use verity_engine::commands::{AnalysisDraft, NewSubmission, ResultDraft};
use verity_engine::JournalService;

const WORKERS: usize = 16;

async fn journal_with_analyses(n: usize) -> anyhow::Result<(SharedJournal, String, Vec<String>)> {
    let journal = SharedJournal::new(JournalService::in_memory());
    let sub_id = journal.create_submission(NewSubmission::default()).await;
    let mut analyses = Vec::with_capacity(n);
    for i in 0..n {
        let id = journal
            .add_reported_analysis(
                &sub_id,
                AnalysisDraft::new(AnalysisType::Descriptive, format!("Table 1 row {i}")),
            )
            .await
            .applied()
            .ok_or_else(|| anyhow::anyhow!("analysis {i} not added"))?;
        analyses.push(id);
    }
    Ok((journal, sub_id, analyses))
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn each_concurrent_result_gets_exactly_one_entry() -> anyhow::Result<()> {
    let (journal, sub_id, analyses) = journal_with_analyses(WORKERS).await?;
    let before = journal
        .submission(&sub_id)
        .await
        .map_or(0, |s| s.audit_log.len());

    let mut tasks = JoinSet::new();
    for ana_id in analyses {
        let journal = journal.clone();
        let sub_id = sub_id.clone();
        tasks.spawn(async move {
            journal
                .add_verification_result(
                    &sub_id,
                    ResultDraft::new(&ana_id, MatchOutcome::Exact, Severity::None, "Dr. Okafor"),
                )
                .await
        });
    }
    while let Some(outcome) = tasks.join_next().await {
        assert!(outcome?.is_applied());
    }

    let sub = journal
        .submission(&sub_id)
        .await
        .ok_or_else(|| anyhow::anyhow!("submission vanished"))?;
    assert_eq!(sub.audit_log.len(), before + WORKERS);
    assert_eq!(sub.verification_results.len(), WORKERS);
    assert_eq!(
        sub.audit_log.count_by_category(AuditCategory::Verification),
        2 * WORKERS
    );
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn racing_results_for_one_analysis_leave_one_record() -> anyhow::Result<()> {
    let (journal, sub_id, analyses) = journal_with_analyses(1).await?;
    let ana_id = analyses[0].clone();

    let mut tasks = JoinSet::new();
    for i in 0..WORKERS {
        let journal = journal.clone();
        let sub_id = sub_id.clone();
        let ana_id = ana_id.clone();
        let outcome = if i % 2 == 0 {
            MatchOutcome::Exact
        } else {
            MatchOutcome::MinorDiscrepancy
        };
        tasks.spawn(async move {
            journal
                .add_verification_result(
                    &sub_id,
                    ResultDraft::new(&ana_id, outcome, Severity::Low, format!("Reviewer {i}")),
                )
                .await
        });
    }
    while let Some(outcome) = tasks.join_next().await {
        assert!(outcome?.is_applied());
    }

    let sub = journal
        .submission(&sub_id)
        .await
        .ok_or_else(|| anyhow::anyhow!("submission vanished"))?;
    assert_eq!(sub.verification_results.len(), 1);
    assert_eq!(
        sub.audit_log.count_by_category(AuditCategory::Verification),
        1 + WORKERS
    );
    let last = sub
        .audit_log
        .latest()
        .ok_or_else(|| anyhow::anyhow!("empty ledger"))?;
    assert!(last.action.starts_with("Verification recorded: "));
    Ok(())
}

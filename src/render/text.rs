use crate::model::AuditReport;
use std::fmt::Write;

/// Render the human-readable report printed to stdout.
///
/// Layout:
/// - read diagnostic (only when the log could not be read)
/// - distinct thread count, then either the all-present line or the
///   missing/unexpected lists
/// - one line per thread ID with its completion-line count
/// - whether the completion marker was seen
pub fn render_text_report(report: &AuditReport) -> anyhow::Result<String> {
    let mut out = String::new();

    if let Some(err) = &report.read_error {
        writeln!(out, "{}", err)?;
    }

    writeln!(out, "总共检测到 {} 个线程退出", report.total_threads)?;
    if report.all_present {
        writeln!(
            out,
            "所有 0-{} 的 {} 个线程均正常退出！",
            report.expected_threads.saturating_sub(1),
            report.expected_threads
        )?;
    } else {
        if !report.missing.is_empty() {
            writeln!(out, "以下线程未退出：{:?}", report.missing)?;
        }
        if !report.unexpected.is_empty() {
            writeln!(out, "检测到意外的线程 ID：{:?}", report.unexpected)?;
        }
    }

    writeln!(out)?;
    writeln!(out, "每个线程的操作次数统计：")?;
    for (tid, count) in &report.completions {
        writeln!(out, "Thread {}: {} 次操作", tid, count)?;
    }

    writeln!(out)?;
    writeln!(
        out,
        "测试是否完成：{}",
        if report.test_completed { "是" } else { "否" }
    )?;

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expect::ExpectedThreads;
    use crate::log::{CompletionParser, ReadError};
    use crate::model::build_audit_report;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn render_lines(lines: &[String], expected: ExpectedThreads) -> String {
        let scan = CompletionParser::new().unwrap().scan(lines);
        render_text_report(&build_audit_report(expected, &scan, None)).unwrap()
    }

    #[test]
    fn complete_run() {
        let lines: Vec<String> = vec![
            "2025-01-01 10:00:00.001 [INFO] Thread 1 executed 12 operations".into(),
            "2025-01-01 10:00:00.002 [INFO] Thread 0 executed 9 operations".into(),
            "2025-01-01 10:00:00.003 [INFO] Thread 2 executed 30 operations".into(),
            "2025-01-01 10:00:05.000 [INFO] Test completed".into(),
        ];

        assert_eq!(
            render_lines(&lines, ExpectedThreads::new(3)),
            "总共检测到 3 个线程退出\n\
             所有 0-2 的 3 个线程均正常退出！\n\
             \n\
             每个线程的操作次数统计：\n\
             Thread 0: 1 次操作\n\
             Thread 1: 1 次操作\n\
             Thread 2: 1 次操作\n\
             \n\
             测试是否完成：是\n"
        );
    }

    #[test]
    fn missing_and_unexpected() {
        let lines: Vec<String> = vec![
            "Thread 0 executed 5 operations".into(),
            "Thread 0 executed 6 operations".into(),
            "Thread 3 executed 7 operations".into(),
            "Thread 9 executed 8 operations".into(),
        ];

        assert_eq!(
            render_lines(&lines, ExpectedThreads::new(4)),
            "总共检测到 3 个线程退出\n\
             以下线程未退出：[1, 2]\n\
             检测到意外的线程 ID：[9]\n\
             \n\
             每个线程的操作次数统计：\n\
             Thread 0: 2 次操作\n\
             Thread 3: 1 次操作\n\
             Thread 9: 1 次操作\n\
             \n\
             测试是否完成：否\n"
        );
    }

    #[test]
    fn extra_id_on_top_of_full_population() {
        let lines: Vec<String> = (0..3)
            .chain([7])
            .map(|id| format!("Thread {} executed 1 operations", id))
            .collect();

        let text = render_lines(&lines, ExpectedThreads::new(3));
        assert!(text.starts_with("总共检测到 4 个线程退出\n检测到意外的线程 ID：[7]\n"));
        assert!(!text.contains("均正常退出"));
        assert!(!text.contains("未退出"));
    }

    #[test]
    fn unreadable_log() {
        let err = ReadError::NotFound {
            path: PathBuf::from("log.txt"),
        };
        let report = build_audit_report(
            ExpectedThreads::new(2),
            &Default::default(),
            Some(&err),
        );

        assert_eq!(
            render_text_report(&report).unwrap(),
            "错误：找不到文件 log.txt\n\
             总共检测到 0 个线程退出\n\
             以下线程未退出：[0, 1]\n\
             \n\
             每个线程的操作次数统计：\n\
             \n\
             测试是否完成：否\n"
        );
    }
}

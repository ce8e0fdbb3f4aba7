use log::info;

use crate::config::AccountConfig;
use crate::data::{AccountReport, Period, RunContext};
use crate::evaluate::evaluate_account;
use crate::read::RecordSource;
use crate::report::{render_account_section, render_report};

/// One linear pass over all accounts, producing the notification's
/// (subject, body) pair. The only decision made here is overall severity:
/// a single mismatched currency anywhere makes the whole run URGENT.
///
/// Per-currency failures never surface as errors at this level - they are
/// already ERROR rows by the time the evaluator returns - which is why this
/// is infallible despite doing a pile of file reads underneath.
pub(crate) fn run(
    ctx: &RunContext,
    accounts: &[AccountConfig],
    header: &str,
    source: &impl RecordSource,
) -> (String, String) {
    let mut sections = Vec::with_capacity(accounts.len());
    let mut total_errors = 0;
    for account in accounts {
        let (outcomes, error_count) = evaluate_account(ctx, account, source);
        let report = AccountReport {
            number: account.number.clone(),
            fragment: render_account_section(&outcomes, &account.number, &account.label, ctx.period),
            error_count,
        };
        info!("account {}: {} error(s)", report.number, report.error_count);
        total_errors += report.error_count;
        sections.push(report.fragment);
    }

    let category = if total_errors > 0 { "URGENT" } else { "INFO" };
    let title = match ctx.period {
        Period::Evening => "PIVOT COMPUTATION",
        Period::Morning => "PIVOT CONSUMPTION",
    };
    let subject = format!("{category}: {title}");
    (subject, render_report(header, &ctx.today, &sections))
}

use log::{error, info};

use crate::config::AccountConfig;
use crate::data::{CurrencyOutcome, Period, RunContext, Status};
use crate::read::RecordSource;

/// Check every currency of one account against today's date. Returns the
/// outcomes in configured currency order plus the number of ERROR entries.
///
/// A currency whose file can't be read (missing, unreadable, malformed) is
/// recorded as an ERROR row with blank fields and the loop moves on; one bad
/// pivot file must never hide the state of the others. The `Result` from the
/// source is consumed right here, so nothing below this function ever sees a
/// read failure.
pub(crate) fn evaluate_account(
    ctx: &RunContext,
    account: &AccountConfig,
    source: &impl RecordSource,
) -> (Vec<CurrencyOutcome>, usize) {
    let mut outcomes = Vec::with_capacity(account.currencies.len());
    let mut error_count = 0;
    for currency in &account.currencies {
        match source.load(&account.pivot_dir, currency) {
            Ok(record) => {
                let observed_date = match ctx.period {
                    Period::Evening => record.computation_date,
                    Period::Morning => record.consumption_date,
                };
                info!(
                    "account {} {}: checking {:?} date {} against {}",
                    account.number,
                    currency.to_uppercase(),
                    ctx.period,
                    observed_date,
                    ctx.today
                );
                let status = if observed_date == ctx.today {
                    Status::Ok
                } else {
                    error_count += 1;
                    Status::Error
                };
                outcomes.push(CurrencyOutcome {
                    currency: currency.to_uppercase(),
                    expected_date: ctx.today.clone(),
                    observed_date,
                    value: record.value,
                    status,
                });
            }
            Err(e) => {
                error!("account {}: {e}", account.number);
                error_count += 1;
                outcomes.push(CurrencyOutcome {
                    currency: currency.to_uppercase(),
                    expected_date: String::new(),
                    observed_date: String::new(),
                    value: String::new(),
                    status: Status::Error,
                });
            }
        }
    }
    (outcomes, error_count)
}

use crate::data::{CurrencyOutcome, Period, Status};

/// CSS class carried by the status cell; the header fragment is expected to
/// ship matching `.success` / `.error` rules.
fn status_class(status: Status) -> &'static str {
    match status {
        Status::Ok => "success",
        Status::Error => "error",
    }
}

fn status_label(status: Status) -> &'static str {
    match status {
        Status::Ok => "OK",
        Status::Error => "ERROR",
    }
}

/// Header of the period-dependent column: what kind of date the row shows.
fn date_column_label(period: Period) -> &'static str {
    match period {
        Period::Evening => "Computation date",
        Period::Morning => "Consumption date",
    }
}

/// Render one account's outcomes as a heading plus a table, one row per
/// outcome in input order. ERROR rows with blank fields render as blank
/// cells; dropping them would hide exactly the currencies the reader most
/// needs to see.
pub(crate) fn render_account_section(
    outcomes: &[CurrencyOutcome],
    number: &str,
    label: &str,
    period: Period,
) -> String {
    let mut section = format!("<h3>Account {number} ({label})</h3>");
    section.push_str(&format!(
        "<table><thead>\
         <th>Currency</th><th>Reference date</th><th>{}</th><th>Value</th><th>Status</th>\
         </thead><tbody>",
        date_column_label(period)
    ));
    for outcome in outcomes {
        section.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td class=\"{}\">{}</td></tr>",
            outcome.currency,
            outcome.expected_date,
            outcome.observed_date,
            outcome.value,
            status_class(outcome.status),
            status_label(outcome.status),
        ));
    }
    section.push_str("</tbody></table><hr/>");
    section
}

/// Assemble the full report body: static header, centered date title, then
/// every account section in evaluation order. Pure concatenation; the header
/// is opaque to us.
pub(crate) fn render_report(header: &str, date: &str, sections: &[String]) -> String {
    let mut body = String::from(header);
    body.push_str(&format!("<h1 style=\"text-align: center\">{date}</h1><hr/>"));
    for section in sections {
        body.push_str(section);
    }
    body
}

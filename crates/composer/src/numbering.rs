//! Document number allocation
//!
//! Numbers are derived from the document date and the numbers already issued;
//! the caller supplies those from its store.

use chrono::{Datelike, NaiveDate};

const BILL_NOTE_PREFIX: &str = "BNTS";
const CREDIT_NOTE_PREFIX: &str = "SSCR";
const BILL_NOTE_RUN_WIDTH: usize = 6;
const BUDDHIST_ERA_OFFSET: i32 = 543;

fn be_year(date: NaiveDate) -> i32 {
    date.year() + BUDDHIST_ERA_OFFSET
}

/// Month prefix of bill note numbers, e.g. `BNTS6801` for January 2568
pub fn bill_note_prefix(date: NaiveDate) -> String {
    format!(
        "{BILL_NOTE_PREFIX}{:02}{:02}",
        be_year(date).rem_euclid(100),
        date.month()
    )
}

/// Next bill note number: `BNTS<yy><mm><nnnnnn>`
///
/// `latest` is the highest number issued so far. The run restarts at 1 when it
/// belongs to another month or its run cannot be read.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use composer::next_bill_note_number;
///
/// let date = NaiveDate::from_ymd_opt(2025, 9, 3).unwrap();
/// assert_eq!(next_bill_note_number(date, None), "BNTS6809000001");
/// assert_eq!(next_bill_note_number(date, Some("BNTS6809000041")), "BNTS6809000042");
/// ```
pub fn next_bill_note_number(date: NaiveDate, latest: Option<&str>) -> String {
    let prefix = bill_note_prefix(date);

    let last_run = latest
        .map(str::trim)
        .and_then(|number| number.strip_prefix(prefix.as_str()))
        .and_then(|run| {
            let parsed = run.parse::<u64>().ok();
            if parsed.is_none() {
                tracing::debug!(run, "unreadable bill note run, restarting at 1");
            }
            parsed
        })
        .unwrap_or(0);

    format!(
        "{prefix}{:0width$}",
        last_run.saturating_add(1),
        width = BILL_NOTE_RUN_WIDTH
    )
}

/// Run number of a credit note issued in `be_year`, if the number is well formed
fn credit_note_run(number: &str, be_year: i32) -> Option<u64> {
    let number = number.trim();
    let rest = number.strip_prefix(CREDIT_NOTE_PREFIX)?;
    let (run, date_part) = rest.split_once('-')?;
    let (_, year) = date_part.rsplit_once('/')?;
    if year.parse::<i32>().ok()? != be_year {
        return None;
    }
    run.parse().ok()
}

/// Next credit note number: `SSCR<run>-<dd><mm>/<yyyy>`
///
/// The run counts up across the whole Buddhist-era year of `date`. Numbers from
/// other years and numbers that cannot be read are ignored.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use composer::next_credit_note_number;
///
/// let date = NaiveDate::from_ymd_opt(2025, 1, 25).unwrap();
/// assert_eq!(next_credit_note_number(date, &[]), "SSCR1-2501/2568");
/// assert_eq!(
///     next_credit_note_number(date, &["SSCR7-0201/2568", "SSCR3-1501/2568"]),
///     "SSCR8-2501/2568"
/// );
/// ```
pub fn next_credit_note_number(date: NaiveDate, existing: &[&str]) -> String {
    let year = be_year(date);
    let max_run = existing
        .iter()
        .filter_map(|number| credit_note_run(number, year))
        .max()
        .unwrap_or(0);

    format!(
        "{CREDIT_NOTE_PREFIX}{}-{:02}{:02}/{year}",
        max_run.saturating_add(1),
        date.day(),
        date.month()
    )
}

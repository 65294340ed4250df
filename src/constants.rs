//! Constants shared across the task lifecycle modules.

/// Environment variable that overrides the Workday base URL.
pub const WORKDAY_URL_ENV: &str = "WORKDAY_URL";

/// Default Workday base URL used when [`WORKDAY_URL_ENV`] is unset.
pub const DEFAULT_WORKDAY_URL: &str = "https://wd3.myworkday.com/company/d/home.htmld";

/// Status message written when a fill request is accepted, before the
/// background run has made any progress.
pub const FILL_IN_PROGRESS_MESSAGE: &str = "Timesheet filling in progress. Please wait.";

/// URI prefix under which the protocol layer exposes status lookups.
///
/// The acknowledgment returned by
/// [`TimesheetService::fill_timesheet`](crate::service::TimesheetService::fill_timesheet)
/// points callers at `{prefix}{request_id}`.
pub const STATUS_RESOURCE_PREFIX: &str = "resource://timesheet_status/";

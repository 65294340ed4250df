//! Fill request parameters and the task description they expand into.
//!
//! The protocol layer hands over raw JSON arguments; [`FillRequest`]
//! deserializes them with the documented defaults and turns them into the
//! instruction list the browser agent executes. All of this is
//! deterministic string work -- no validation beyond trimming is applied,
//! and malformed days-off text is treated permissively.

use serde::Deserialize;

/// Parameters of one timesheet fill request.
///
/// # Examples
///
/// ```
/// use timesheet_tasks::request::FillRequest;
///
/// let request: FillRequest = serde_json::from_str("{}").unwrap();
/// assert_eq!(request.week_start_date, "this week");
/// assert_eq!(request.time_types, "Admin");
/// assert!(request.days_off.is_empty());
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FillRequest {
    /// Start date of the week, `YYYY-MM-DD` or free text.
    pub week_start_date: String,

    /// Days off in the week as comma-separated free text
    /// (e.g. `"Monday, Tuesday"`).
    pub days_off: String,

    /// Time types to fill (e.g. `"Admin, KITN-1937"`).
    pub time_types: String,
}

impl Default for FillRequest {
    fn default() -> Self {
        Self {
            week_start_date: "this week".to_string(),
            days_off: String::new(),
            time_types: "Admin".to_string(),
        }
    }
}

impl FillRequest {
    /// Normalizes the free-text days-off field into day names.
    ///
    /// Splits on commas, trims whitespace, and drops empty segments. No
    /// check is made that the parts are actual day names.
    ///
    /// # Examples
    ///
    /// ```
    /// use timesheet_tasks::request::FillRequest;
    ///
    /// let request = FillRequest {
    ///     days_off: " Monday ,Tuesday,, ".to_string(),
    ///     ..FillRequest::default()
    /// };
    /// assert_eq!(request.days_off_list(), vec!["Monday", "Tuesday"]);
    /// ```
    pub fn days_off_list(&self) -> Vec<String> {
        self.days_off
            .split(',')
            .map(str::trim)
            .filter(|day| !day.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Builds the instruction list handed to the executor.
    ///
    /// Embeds the Workday base URL, the week start, and the time types;
    /// when days off are present, step 6 gains a clause instructing the
    /// agent to skip them.
    pub fn task_description(&self, workday_url: &str) -> String {
        let days_off = self.days_off_list();
        let days_off_instruction = if days_off.is_empty() {
            String::new()
        } else {
            format!(
                " Skip the following days as they are days off: {}.",
                days_off.join(", ")
            )
        };

        format!(
            "1. Go to {workday_url}\n\
             2. Wait for the Workday dashboard to load fully\n\
             3. Scroll down if needed to view all apps\n\
             4. Navigate to Time app (from \"View all apps\")\n\
             5. Find the week starting on {week} or this week\n\
             6. Fill in each day (Monday to Friday except holidays) with 4 hours time type {types} \
             and 4 hours time type Admin.{days_off_instruction}\n\
             7. Click \"save\"",
            week = self.week_start_date,
            types = self.time_types,
        )
    }
}

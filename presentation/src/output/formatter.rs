//! Output formatter trait

use tablevote_application::RankGroupOutput;

/// Trait for formatting ranking runs
pub trait OutputFormatter {
    /// Format rankings with every vote breakdown
    fn format(&self, output: &RankGroupOutput) -> String;

    /// Format as JSON
    fn format_json(&self, output: &RankGroupOutput) -> String;

    /// Format the ranked table and recommendations only
    fn format_summary(&self, output: &RankGroupOutput) -> String;
}

//! Console output formatter for ranking runs

use crate::output::formatter::OutputFormatter;
use colored::{ColoredString, Colorize};
use tablevote_application::RankGroupOutput;
use tablevote_domain::{
    Badge, ConsensusLevel, RankedResult, Recommendation, Trend, VoteChoice, VoterEntry,
};

/// Formats ranking runs for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Globally enable or disable ANSI colors for subsequent output
    pub fn set_color(enabled: bool) {
        colored::control::set_override(enabled);
    }

    /// Format rankings with the full vote breakdown of every candidate
    pub fn format(output: &RankGroupOutput) -> String {
        let mut out = String::new();

        out.push_str(&Self::header("Group Ranking"));
        out.push('\n');
        out.push_str(&format!(
            "{} {}\n",
            "Generated:".cyan().bold(),
            output.generated_at.to_rfc3339()
        ));

        out.push_str(&Self::section_header("Rankings"));
        out.push_str(&Self::ranking_table(&output.rankings));

        for result in &output.rankings {
            out.push_str(&Self::section_header(&format!(
                "#{} {}",
                result.rank, result.candidate.name
            )));
            out.push_str(&Self::candidate_details(result));
        }

        if !output.recommendations.is_empty() {
            out.push_str(&Self::section_header("Recommendations"));
            out.push_str(&Self::recommendations(&output.recommendations));
        }

        out.push_str(&Self::footer());
        out
    }

    /// Format as JSON
    pub fn format_json(output: &RankGroupOutput) -> String {
        serde_json::to_string_pretty(output).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the ranked table and recommendations (concise output)
    pub fn format_summary(output: &RankGroupOutput) -> String {
        let mut out = String::new();

        out.push_str(&format!("{}\n\n", "=== Group Ranking ===".cyan().bold()));
        out.push_str(&Self::ranking_table(&output.rankings));

        if !output.recommendations.is_empty() {
            out.push('\n');
            out.push_str(&Self::recommendations(&output.recommendations));
        }

        out
    }

    fn ranking_table(rankings: &[RankedResult]) -> String {
        if rankings.is_empty() {
            return format!("{}\n", "No candidates to rank.".dimmed());
        }

        rankings
            .iter()
            .map(|r| {
                let badge = r
                    .badge
                    .map(|b| format!("  {}", Self::badge(b)))
                    .unwrap_or_default();
                format!(
                    "{:>3}. {:<28} {:>7.2}  {} {}  {:>3}%  {:<16} {}{}\n",
                    r.rank,
                    r.candidate.name.bold(),
                    r.composite_score,
                    format!("+{}", r.likes).green(),
                    format!("-{}", r.dislikes).red(),
                    r.approval_percent,
                    Self::consensus(r.consensus),
                    Self::trend(r.trend),
                    badge
                )
            })
            .collect()
    }

    fn candidate_details(result: &RankedResult) -> String {
        let mut out = String::new();
        let candidate = &result.candidate;

        let mut tags = Vec::new();
        if let Some(cuisine) = &candidate.cuisine {
            tags.push(cuisine.as_str());
        }
        if let Some(price_tier) = &candidate.price_tier {
            tags.push(price_tier.as_str());
        }
        if !tags.is_empty() {
            out.push_str(&format!("{}\n", tags.join(" · ").dimmed()));
        }

        out.push_str(&format!(
            "{} {:.2} (net {} + engagement {:.2} + recency {:.2})\n",
            "Score:".cyan().bold(),
            result.composite_score,
            result.net_score,
            result.engagement_boost,
            result.recency_boost
        ));
        out.push_str(&format!(
            "{} {}% of {} votes, {}\n",
            "Approval:".cyan().bold(),
            result.approval_percent,
            result.total_votes,
            Self::consensus(result.consensus)
        ));
        if let Some(participation) = result.participation_percent {
            out.push_str(&format!(
                "{} {}% of the group\n",
                "Participation:".cyan().bold(),
                participation
            ));
        }
        if result.discussion_count > 0 {
            out.push_str(&format!(
                "{} {} comments\n",
                "Discussion:".cyan().bold(),
                result.discussion_count
            ));
        }
        if result.authority_applied {
            out.push_str(&format!("{}\n", "Weighted votes applied".dimmed()));
        }

        let breakdown = &result.breakdown;
        if !breakdown.likers.is_empty() {
            out.push_str(&format!("\n{}\n", "Liked by:".green().bold()));
            out.push_str(&Self::voters(&breakdown.likers));
        }
        if !breakdown.dislikers.is_empty() {
            out.push_str(&format!("\n{}\n", "Disliked by:".red().bold()));
            out.push_str(&Self::voters(&breakdown.dislikers));
        }
        if !breakdown.abstainers.is_empty() {
            out.push_str(&format!(
                "\n{} {}\n",
                "Not voted:".dimmed(),
                breakdown.abstainers.join(", ")
            ));
        }

        if !breakdown.reasons.is_empty() {
            out.push_str(&format!("\n{}\n", "Reasons:".cyan().bold()));
            for tally in &breakdown.reasons {
                out.push_str(&format!("  {} ({})\n", tally.category.label(), tally.count));
                for example in &tally.examples {
                    out.push_str(&format!("    \"{}\"\n", example));
                }
            }
        }

        if !breakdown.timeline.is_empty() {
            out.push_str(&format!("\n{}\n", "Timeline:".cyan().bold()));
            for entry in &breakdown.timeline {
                let when = entry
                    .timestamp
                    .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                    .unwrap_or_else(|| "undated".to_string());
                let choice = match entry.choice {
                    VoteChoice::Like => "liked".green(),
                    VoteChoice::Dislike => "disliked".red(),
                };
                out.push_str(&format!("  {}  {} {}\n", when.dimmed(), entry.name, choice));
            }
        }

        out
    }

    fn voters(voters: &[VoterEntry]) -> String {
        voters
            .iter()
            .map(|v| {
                let verified = if v.verified { " ✓" } else { "" };
                let weight = if (v.weight - 1.0).abs() > f64::EPSILON {
                    format!(" (x{:.2})", v.weight)
                } else {
                    String::new()
                };
                let reason = v
                    .reason
                    .as_deref()
                    .map(|r| format!(": {}", r.italic()))
                    .unwrap_or_default();
                format!("  * {}{}{}{}\n", v.name, verified, weight, reason)
            })
            .collect()
    }

    fn recommendations(recommendations: &[Recommendation]) -> String {
        let mut out = String::new();
        for rec in recommendations {
            out.push_str(&format!(
                "{} {}\n",
                format!("[{}]", rec.kind.as_str()).yellow().bold(),
                rec.title.bold()
            ));
            out.push_str(&format!("  {}\n", rec.description));
            out.push_str(&format!(
                "  {} {}\n",
                format!("confidence {:.0}%:", rec.confidence * 100.0).dimmed(),
                rec.reasoning.dimmed()
            ));
        }
        out
    }

    fn consensus(level: ConsensusLevel) -> ColoredString {
        let text = level.as_str();
        match level {
            ConsensusLevel::Strong => text.green(),
            ConsensusLevel::Moderate => text.normal(),
            ConsensusLevel::Mixed => text.yellow(),
            ConsensusLevel::Low => text.red(),
        }
    }

    fn badge(badge: Badge) -> ColoredString {
        let text = badge.label();
        match badge {
            Badge::Unanimous | Badge::GroupFavorite => text.green().bold(),
            Badge::Contested => text.yellow().bold(),
            Badge::TopChoice => text.cyan().bold(),
        }
    }

    fn trend(trend: Trend) -> ColoredString {
        match trend {
            Trend::Up => "↑".green(),
            Trend::Down => "↓".red(),
            Trend::Steady => "→".dimmed(),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, output: &RankGroupOutput) -> String {
        Self::format(output)
    }

    fn format_json(&self, output: &RankGroupOutput) -> String {
        Self::format_json(output)
    }

    fn format_summary(&self, output: &RankGroupOutput) -> String {
        Self::format_summary(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use tablevote_domain::{
        Candidate, GroupConfig, MemberEntry, RankingOptions, Vote, compute_rankings,
        generate_recommendations,
    };

    fn output() -> RankGroupOutput {
        let now = Utc.with_ymd_and_hms(2026, 6, 15, 19, 0, 0).unwrap();
        let candidates = vec![
            Candidate::new("e", "Thai Palace").with_cuisine("Thai"),
            Candidate::new("f", "Lemongrass")
                .with_cuisine("Thai")
                .with_price_tier("$$"),
        ];
        let mut votes = Vec::new();
        for i in 0..3 {
            votes.push(Vote::like(format!("u{i}"), "e"));
            votes.push(Vote::dislike(format!("v{i}"), "e").with_reason("Too expensive"));
            votes.push(Vote::like(format!("u{i}"), "f"));
        }
        votes.push(Vote::like("u3", "f").at(now));

        let group = GroupConfig::new(vec![MemberEntry::from("u0"), MemberEntry::from("w9")]);
        let options = RankingOptions::default()
            .with_group_config(group.clone())
            .with_discussion_count("e", 6);
        let rankings = compute_rankings(&candidates, &votes, &options, now);
        let recommendations = generate_recommendations(&rankings, &group, now);

        RankGroupOutput {
            rankings,
            recommendations,
            generated_at: now,
        }
    }

    #[test]
    fn test_summary_lists_candidates_in_rank_order() {
        let text = ConsoleFormatter::format_summary(&output());

        let first = text.find("Lemongrass").unwrap();
        let second = text.find("Thai Palace").unwrap();
        assert!(first < second);
        assert!(text.contains("Debated"));
        assert!(text.contains("Can't agree on Thai Palace?"));
        assert!(!text.contains("Timeline:"));
    }

    #[test]
    fn test_full_output_includes_breakdowns() {
        let text = ConsoleFormatter::format(&output());

        assert!(text.contains("Group Ranking"));
        assert!(text.contains("Liked by:"));
        assert!(text.contains("Disliked by:"));
        assert!(text.contains("Price (3)"));
        assert!(text.contains("Not voted:"));
        assert!(text.contains("w9"));
        assert!(text.contains("Timeline:"));
        assert!(text.contains("2026-06-15 19:00"));
        assert!(text.contains("undated"));
    }

    #[test]
    fn test_json_output_is_parseable() {
        let json = ConsoleFormatter::format_json(&output());
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["rankings"][0]["candidate"]["id"], "f");
        assert_eq!(value["rankings"][1]["badge"], "contested");
        assert_eq!(value["recommendations"][0]["kind"], "compromise");
    }

    #[test]
    fn test_empty_rankings() {
        let output = RankGroupOutput {
            rankings: Vec::new(),
            recommendations: Vec::new(),
            generated_at: Utc::now(),
        };

        assert!(ConsoleFormatter::format_summary(&output).contains("No candidates to rank."));
    }
}

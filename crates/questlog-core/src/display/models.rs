//! Display implementations for domain models.
//!
//! Markdown output with status icons:
//! - `✓` completed step
//! - `○` open step
//! - `➤` today's step in a focus view

use std::fmt;

use jiff::{Timestamp, tz::TimeZone};

use crate::models::{Difficulty, FocusView, Quest, QuestKind, QuestStep, QuestSummary};

/// `YYYY-MM-DD HH:MM TZ` in the system time zone.
fn local_time(ts: &Timestamp) -> String {
    ts.to_zoned(TimeZone::system())
        .strftime("%Y-%m-%d %H:%M %Z")
        .to_string()
}

impl fmt::Display for QuestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl QuestStep {
    /// Status with icon, e.g. `✓ Done`.
    pub fn status_with_icon(&self) -> &'static str {
        if self.completed { "✓ Done" } else { "○ Open" }
    }

    /// One-line form used inside focus views.
    fn fmt_line(&self, f: &mut fmt::Formatter<'_>, icon: &str) -> fmt::Result {
        writeln!(
            f,
            "{icon} Day {}. {} ({} XP, {})",
            self.day, self.task_title, self.xp, self.duration
        )
    }
}

impl fmt::Display for QuestStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### Day {}. {} ({})",
            self.day,
            self.task_title,
            self.status_with_icon()
        )?;
        writeln!(f)?;
        writeln!(f, "- Duration: {}", self.duration)?;
        writeln!(f, "- XP: {}", self.xp)?;
        writeln!(f)?;

        if !self.task_description.is_empty() {
            writeln!(f, "{}", self.task_description)?;
            writeln!(f)?;
        }

        Ok(())
    }
}

impl fmt::Display for Quest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.quest_title)?;
        writeln!(f)?;

        writeln!(f, "- ID: {}", self.id)?;
        if let Some(target) = &self.metadata.target_date {
            writeln!(f, "- Target date: {target}")?;
        }
        writeln!(f, "- Created: {}", local_time(&self.created_at))?;

        if let Some(desc) = &self.metadata.original_description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }

        if self.plan.is_empty() {
            writeln!(f, "\nNo steps in this quest.")?;
        } else {
            writeln!(f, "\n## Steps")?;
            writeln!(f)?;
            for step in &self.plan {
                write!(f, "{step}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for FocusView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Focus")?;
        writeln!(f)?;
        writeln!(f, "- Progress: {}%", self.overall_progress)?;
        writeln!(f, "- Total XP: {}", self.total_xp)?;
        writeln!(f)?;

        match &self.todays_step {
            Some(today) => {
                writeln!(f, "### Today")?;
                writeln!(f)?;
                today.fmt_line(f, "➤")?;
                writeln!(f)?;

                writeln!(f, "### Tomorrow")?;
                writeln!(f)?;
                match &self.tomorrows_step {
                    Some(tomorrow) => tomorrow.fmt_line(f, if tomorrow.completed { "✓" } else { "○" })?,
                    None => writeln!(f, "Nothing scheduled.")?,
                }
                writeln!(f)?;
            }
            None if self.is_fully_completed => {
                writeln!(f, "All steps completed. Quest complete!")?;
            }
            None => {
                writeln!(f, "No steps in this quest.")?;
            }
        }

        if !self.missed_steps.is_empty() {
            writeln!(f, "### Missed")?;
            writeln!(f)?;
            for step in &self.missed_steps {
                step.fmt_line(f, "○")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for QuestSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let progress = if self.total_steps > 0 {
            format!(" ({}/{})", self.completed_steps, self.total_steps)
        } else {
            String::new()
        };

        writeln!(f, "## {} (ID: {}){progress}", self.title, self.id)?;
        writeln!(f)?;
        writeln!(f, "- **Type**: {}", self.kind)?;
        writeln!(f, "- **Difficulty**: {}", self.difficulty)?;
        writeln!(f, "- **Progress**: {}%", self.progress)?;
        writeln!(
            f,
            "- **Reward**: {} XP ({} earned)",
            self.total_xp, self.earned_xp
        )?;
        if let Some(target) = &self.target_date {
            writeln!(f, "- **Target**: {target}")?;
        }
        if self.completed {
            writeln!(f, "- **Status**: ✓ Completed")?;
        }
        writeln!(f, "- **Created**: {}", local_time(&self.created_at))?;
        writeln!(f)?;

        Ok(())
    }
}

//! Terminal rendering: grid tables, summaries and colored messages.
//!
//! Tables use tabulate's `grid` layout:
//!
//! ```text
//! +---------+------+
//! | plan_id | type |
//! +=========+======+
//! | 1       | Diet |
//! +---------+------+
//! ```
//!
//! Column widths are measured with `unicode-width` so names with wide
//! characters stay aligned.

use colored::Colorize;
use fitrackapp::commands::doctor::DoctorReport;
use fitrackapp::commands::stats::{HealthReport, ProgressSummary};
use fitrackapp::model::{Log, Plan, User};
use unicode_width::UnicodeWidthStr;

pub fn grid(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.width());
            }
        }
    }

    let mut out = rule(&widths, '-');
    out.push_str(&grid_line(headers.iter().copied(), &widths));
    out.push_str(&rule(&widths, '='));
    for row in rows {
        out.push_str(&grid_line(row.iter().map(String::as_str), &widths));
        out.push_str(&rule(&widths, '-'));
    }
    out
}

fn rule(widths: &[usize], fill: char) -> String {
    let mut line = String::from("+");
    for w in widths {
        line.push_str(&fill.to_string().repeat(w + 2));
        line.push('+');
    }
    line.push('\n');
    line
}

fn grid_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let mut out = String::from("|");
    for (cell, w) in cells.zip(widths) {
        let pad = w.saturating_sub(cell.width());
        out.push(' ');
        out.push_str(cell);
        out.push_str(&" ".repeat(pad + 1));
        out.push('|');
    }
    out.push('\n');
    out
}

pub fn users_table(users: &[User]) -> String {
    let rows: Vec<Vec<String>> = users
        .iter()
        .map(|u| {
            vec![
                u.user_id.to_string(),
                u.name.clone(),
                u.age.to_string(),
                u.height.to_string(),
                u.weight.to_string(),
                u.contact.clone(),
            ]
        })
        .collect();
    grid(
        &["user_id", "name", "age", "height", "weight", "contact"],
        &rows,
    )
}

pub fn plans_table(plans: &[Plan]) -> String {
    let rows: Vec<Vec<String>> = plans
        .iter()
        .map(|p| {
            vec![
                p.plan_id.to_string(),
                p.plan_type.clone(),
                p.description.clone(),
            ]
        })
        .collect();
    grid(&["plan_id", "type", "description"], &rows)
}

pub fn logs_table(logs: &[Log]) -> String {
    let rows: Vec<Vec<String>> = logs
        .iter()
        .map(|l| {
            vec![
                l.log_id.to_string(),
                l.user_id.to_string(),
                l.date.to_string(),
                l.steps.to_string(),
                l.calories_burned.to_string(),
                l.calories_consumed.to_string(),
                l.exercise_time.to_string(),
            ]
        })
        .collect();
    grid(
        &[
            "log_id",
            "user_id",
            "date",
            "steps",
            "calories_burned",
            "calories_consumed",
            "exercise_time",
        ],
        &rows,
    )
}

pub fn progress_summary(summary: &ProgressSummary, precision: usize) -> String {
    format!(
        "Average Steps: {:.*}\nAverage Calories Burned: {:.*}\n",
        precision, summary.mean_steps, precision, summary.mean_calories_burned
    )
}

pub fn health_report(report: &HealthReport, precision: usize) -> String {
    format!(
        "=== Health Report ===\n\
         Average Steps: {:.*}\n\
         Average Calories Burned: {:.*}\n\
         Average Calories Consumed: {:.*}\n",
        precision,
        report.mean_steps,
        precision,
        report.mean_calories_burned,
        precision,
        report.mean_calories_consumed
    )
}

pub fn doctor_report(report: &DoctorReport) -> String {
    let mut out = String::new();
    for c in &report.collections {
        out.push_str(&format!("{}: {} records", c.collection, c.records));
        if !c.duplicate_ids.is_empty() {
            let ids: Vec<String> = c.duplicate_ids.iter().map(|id| id.to_string()).collect();
            out.push_str(&format!(", duplicate ids: {}", ids.join(", ")));
        }
        out.push('\n');
    }
    if !report.orphan_logs.is_empty() {
        let ids: Vec<String> = report.orphan_logs.iter().map(|id| id.to_string()).collect();
        out.push_str(&format!(
            "logs referencing unknown users: {}\n",
            ids.join(", ")
        ));
    }
    out
}

pub fn print_success(message: &str) {
    println!("{}", message.green());
}

pub fn print_info(message: &str) {
    println!("{}", message.dimmed());
}

pub fn print_warning(message: &str) {
    println!("{}", message.yellow());
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_grid_layout() {
        let out = grid(&["id", "name"], &[vec!["1".to_string(), "Ana".to_string()]]);
        let expected = "\
+----+------+
| id | name |
+====+======+
| 1  | Ana  |
+----+------+
";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_grid_wide_characters_align() {
        let out = grid(&["name"], &[vec!["日本".to_string()], vec!["ab".to_string()]]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[3], "| 日本 |");
        assert_eq!(lines[5], "| ab   |");
    }

    #[test]
    fn test_plans_table_headers() {
        let plans = vec![Plan {
            plan_id: 1,
            plan_type: "Diet".to_string(),
            description: "Less sugar".to_string(),
        }];
        let out = plans_table(&plans);
        assert!(out.contains("| plan_id | type | description |"));
        assert!(out.contains("| 1       | Diet | Less sugar  |"));
    }

    #[test]
    fn test_logs_table_contains_date() {
        let logs = vec![Log {
            log_id: 1,
            user_id: 2,
            date: NaiveDate::from_ymd_opt(2024, 7, 4).unwrap(),
            steps: 1200,
            calories_burned: 300,
            calories_consumed: 2100,
            exercise_time: 42.5,
        }];
        let out = logs_table(&logs);
        assert!(out.contains("2024-07-04"));
        assert!(out.contains("42.5"));
    }

    #[test]
    fn test_health_report_precision() {
        let report = HealthReport {
            mean_steps: 1500.0,
            mean_calories_burned: 250.0,
            mean_calories_consumed: 2000.0,
        };
        let out = health_report(&report, 2);
        assert!(out.contains("Average Steps: 1500.00"));
        assert!(out.contains("Average Calories Burned: 250.00"));
        assert!(out.contains("Average Calories Consumed: 2000.00"));
    }

    #[test]
    fn test_progress_summary_custom_precision() {
        let summary = ProgressSummary {
            mean_steps: 2000.0 / 3.0,
            mean_calories_burned: 10.0,
        };
        let out = progress_summary(&summary, 1);
        assert_eq!(out, "Average Steps: 666.7\nAverage Calories Burned: 10.0\n");
    }
}

// GitHub-flavored markdown tables for job statistics.
//
// Rows are numbered from 0 in the first column, like a data frame dump, so a
// table can be pasted straight into a report.

use crate::syslog::stats::StatEntry;

const RIGHT_ALIGNED: [bool; 5] = [true, false, false, false, true];

/// Render statistics rows as a GitHub markdown table.
pub fn stats_table(rows: &[&StatEntry]) -> String {
    let headers = ["", "Status", "Statistic", "Stage", "Value"];
    let cells: Vec<[String; 5]> = rows
        .iter()
        .enumerate()
        .map(|(i, r)| {
            [
                i.to_string(),
                r.status.clone(),
                r.statistic.clone(),
                r.stage.to_string(),
                r.value.to_string(),
            ]
        })
        .collect();

    let mut widths: [usize; 5] = headers.map(|h| h.chars().count());
    for row in &cells {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    out.push_str(&format_row(&headers.map(str::to_string), &widths));
    out.push('\n');

    // Separator: numeric columns right-aligned.
    let sep: Vec<String> = widths
        .iter()
        .zip(RIGHT_ALIGNED)
        .map(|(w, right)| {
            let dashes = "-".repeat(w + 1);
            if right {
                format!("{dashes}:")
            } else {
                format!(":{dashes}")
            }
        })
        .collect();
    out.push_str(&format!("|{}|", sep.join("|")));

    for row in &cells {
        out.push('\n');
        out.push_str(&format_row(row, &widths));
    }
    out
}

fn format_row(cells: &[String; 5], widths: &[usize; 5]) -> String {
    let parts: Vec<String> = cells
        .iter()
        .zip(widths)
        .zip(RIGHT_ALIGNED)
        .map(|((cell, &w), right)| {
            if right {
                format!(" {cell:>w$} ")
            } else {
                format!(" {cell:<w$} ")
            }
        })
        .collect();
    format!("|{}|", parts.join("|"))
}

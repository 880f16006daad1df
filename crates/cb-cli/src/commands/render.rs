//! Shared text rendering helpers for query results
//!
//! Charts are rendered as aligned label/bar/value rows; cross-tabulations
//! as aligned numeric matrices; drill-down hierarchies as trees.

use cb_olap::{CrossTab, DrillNode, Summary};

/// Width of the widest proportional bar, in characters
const BAR_WIDTH: usize = 40;

/// Format an amount with thousands separators: 1234567 -> "1,234,567"
pub(crate) fn format_amount(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Proportional bar for a value against the chart maximum
pub(crate) fn bar(value: u64, max: u64) -> String {
    if max == 0 {
        return String::new();
    }
    let len = (value as f64 / max as f64 * BAR_WIDTH as f64).round() as usize;
    "█".repeat(len)
}

/// Print the standard sum/count/mean metric block
pub(crate) fn print_summary(summary: &Summary) {
    println!("Total sales    ${}", format_amount(summary.total));
    println!("Records        {}", format_amount(summary.count as u64));
    println!("Mean sale      ${:.0}", summary.mean);
}

/// Print a labelled bar chart, one row per entry
pub(crate) fn print_bar_chart(rows: &[(String, u64)]) {
    let max = rows.iter().map(|(_, v)| *v).max().unwrap_or(0);
    let label_width = rows.iter().map(|(l, _)| l.len()).max().unwrap_or(0);

    for (label, value) in rows {
        println!(
            "{:<label_width$}  {:<bar_width$}  {}",
            label,
            bar(*value, max),
            format_amount(*value),
            label_width = label_width,
            bar_width = BAR_WIDTH,
        );
    }
}

/// Print a cross-tabulation as an aligned matrix
pub(crate) fn print_matrix(tab: &CrossTab) {
    let index_header = tab.index_dim.to_string();
    let row_width = tab
        .row_labels
        .iter()
        .map(|l| l.len())
        .max()
        .unwrap_or(0)
        .max(index_header.len());
    let col_widths: Vec<usize> = tab
        .col_labels
        .iter()
        .enumerate()
        .map(|(c, label)| {
            tab.cells
                .iter()
                .map(|row| format_amount(row[c]).len())
                .max()
                .unwrap_or(0)
                .max(label.len())
        })
        .collect();

    print!("{:<row_width$}", index_header, row_width = row_width);
    for (label, width) in tab.col_labels.iter().zip(&col_widths) {
        print!("  {:>width$}", label, width = width);
    }
    println!();

    for (r, row_label) in tab.row_labels.iter().enumerate() {
        print!("{:<row_width$}", row_label, row_width = row_width);
        for (c, width) in col_widths.iter().enumerate() {
            print!("  {:>width$}", format_amount(tab.cells[r][c]), width = width);
        }
        println!();
    }
}

/// Print a drill-down hierarchy as a tree sized by sales
pub(crate) fn print_tree(node: &DrillNode) {
    println!("{}  ${}", node.label, format_amount(node.total));
    for (i, child) in node.children.iter().enumerate() {
        print_tree_node(child, "", i == node.children.len() - 1);
    }
}

/// Recursively print a tree node
fn print_tree_node(node: &DrillNode, prefix: &str, is_last: bool) {
    let connector = if is_last { "└── " } else { "├── " };
    println!(
        "{}{}{}  ${}",
        prefix,
        connector,
        node.label,
        format_amount(node.total)
    );

    let new_prefix = format!("{}{}   ", prefix, if is_last { " " } else { "│" });
    for (i, child) in node.children.iter().enumerate() {
        print_tree_node(child, &new_prefix, i == node.children.len() - 1);
    }
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;

//! Table and detail pretty-printing for tasks.

use colored::*;

use crate::task::Task;

/// Print the full detail view for a single task. Optional fields are only
/// shown when present.
pub fn print_task_details(task: &Task) {
    println!("\n{}", "=".repeat(50));
    println!("Task #{}", task.id);
    println!("{}", "=".repeat(50));
    println!("Title: {}", task.title);
    if let Some(description) = &task.description {
        println!("Description: {}", description);
    }
    if task.completed {
        println!("Status: {}", "completed ✓".green());
    } else {
        println!("Status: {}", "open ✗".yellow());
    }
    println!("Created: {}", task.created_at);
    if let Some(due) = &task.due_date {
        println!("Due: 📅 {}", due);
    }
    println!("Priority: {}", task.priority.label());
    if let Some(category) = &task.category {
        println!("Category: 🏷 {}", category);
    }
    println!("{}\n", "=".repeat(50));
}

/// Print a list of tasks as a fixed-width table with a count footer.
pub fn print_tasks_table(tasks: &[Task], title: &str) {
    if tasks.is_empty() {
        println!("No tasks to show.");
        return;
    }

    println!("\n{}:", title.bold());
    println!("{}", "=".repeat(80));
    println!(
        "{:<5} | {:<6} | {:<30} | {:<12} | {:<15} | {:<10}",
        "ID", "Status", "Title", "Due", "Category", "Priority"
    );
    println!("{}", "-".repeat(80));

    for task in tasks {
        let status = if task.completed { "✓".green() } else { "✗".yellow() };
        let due = task.due_date.as_deref().unwrap_or("-");
        let category = task.category.as_deref().unwrap_or("-");
        println!(
            "{:<5} | {:<6} | {:<30} | {:<12} | {:<15} | {:<10}",
            task.id,
            status,
            truncate(&task.title, 28),
            due,
            truncate(category, 13),
            task.priority.label(),
        );
    }

    println!("{}", "=".repeat(80));
    println!("{} task(s)\n", tasks.len());
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        text.chars().take(max_chars).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_untouched() {
        assert_eq!(truncate("Buy milk", 28), "Buy milk");
    }

    #[test]
    fn test_truncate_long_text() {
        let long = "a".repeat(40);
        assert_eq!(truncate(&long, 28).chars().count(), 28);
    }

    #[test]
    fn test_truncate_is_char_safe() {
        // Multi-byte characters must not be split
        let text = "méétings about méétings éé";
        let cut = truncate(text, 10);
        assert_eq!(cut.chars().count(), 10);
    }
}

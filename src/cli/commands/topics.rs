//! Lists the built-in patient education topics.

use crate::education::TOPICS;
use crate::ui::Style;

pub fn print_topics() {
    println!("{}", Style::header("Built-in education topics"));
    for topic in TOPICS {
        println!(
            "  {} {}",
            Style::value(topic.name),
            Style::secondary(format!("({})", topic.aliases.join(", ")))
        );
        println!("    {}", topic.content);
    }
    println!();
    println!(
        "{}",
        Style::hint("Any other topic is summarized by the AI service.")
    );
}

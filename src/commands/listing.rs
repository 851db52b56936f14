//! Catalog and history listings.

use crate::assessment;
use crate::config::Language;
use crate::history::SearchHistory;
use crate::prompts::{QUICK_QUESTIONS, SUBJECTS};

/// Print supported languages with their speech locales.
pub fn print_languages() {
    println!("{:<10} {:<7} NAME", "LANGUAGE", "LOCALE");
    println!("{}", "─".repeat(40));
    for language in Language::ALL {
        println!("{:<10} {:<7} {}", language.as_str(), language.locale(), language.display_name());
    }
    println!();
    println!("Subjects for lesson plans:");
    for subject in SUBJECTS {
        println!("  {}", subject);
    }
}

/// Print bundled reading passages, optionally for one language.
pub fn print_samples(filter: Option<Language>) {
    let languages: Vec<Language> = match filter {
        Some(language) => vec![language],
        None => Language::ALL.to_vec(),
    };

    for language in languages {
        let texts = assessment::sample_texts(language);
        if texts.is_empty() {
            if filter.is_some() {
                println!("No bundled passages for {}; pass --reference instead.", language.display_name());
            }
            continue;
        }

        println!("\n── {} ({}) ──", language.display_name(), texts.len());
        for (i, text) in texts.iter().enumerate() {
            println!("{:>2}. {}", i + 1, text);
        }
    }

    println!("\nUsage:");
    println!("  sahayak assess --language english --sample 1 --spoken \"the sun rises in the east\"");
}

/// Print recent questions followed by the quick-question list.
pub fn print_history(history: &SearchHistory) {
    if history.is_empty() {
        println!("No recent questions.");
    } else {
        println!("Recent questions:");
        for (i, entry) in history.entries().iter().enumerate() {
            println!("{:>2}. {} [{}] ({})", i + 1, entry.question, entry.language, entry.asked_at);
        }
    }

    println!("\nQuick questions:");
    for (i, question) in QUICK_QUESTIONS.iter().enumerate() {
        println!("{:>2}. {}", i + 1, question);
    }
}

use anyhow::Result;

use fundstory::analytics::{
    build_report, element_order, example_sentences_with_rng, keyword_frequency, top_bigrams,
    BigramOptions, StoryReport,
};
use fundstory::models::Dataset;
use fundstory::utils::truncate_text;

use super::Context;

pub fn order(ctx: &Context) -> Result<()> {
    let records = ctx.load_records()?;
    let order = element_order(&records);

    if ctx.json {
        return ctx.print_json(&order);
    }

    if order.is_empty() {
        println!("No records match the current filters.");
        return Ok(());
    }

    println!("Most common story order");
    println!("=======================");
    for (i, element) in order.iter().enumerate() {
        println!("{:>2}. {element}", i + 1);
    }
    Ok(())
}

pub fn elements(ctx: &Context) -> Result<()> {
    let records = ctx.load_records()?;
    let elements = Dataset::from_records(records).elements();

    if ctx.json {
        return ctx.print_json(&elements);
    }

    for element in &elements {
        println!("{element}");
    }
    Ok(())
}

pub fn keywords(ctx: &Context, element: &str, top: usize) -> Result<()> {
    let records = ctx.load_records()?;
    let freq = keyword_frequency(&records, element);
    let ranked = freq.top(top);

    if ctx.json {
        return ctx.print_json(&ranked);
    }

    if ranked.is_empty() {
        println!("No keywords for \"{element}\".");
        return Ok(());
    }

    println!("Keywords for \"{element}\" ({} distinct, {} total)", freq.len(), freq.total());
    println!("================================");
    for (i, (word, count)) in ranked.iter().enumerate() {
        println!("{:>3}. {word:<20} {count}", i + 1);
    }
    Ok(())
}

pub fn examples(ctx: &Context, element: &str, n: Option<usize>) -> Result<()> {
    let records = ctx.load_records()?;
    let n = n.unwrap_or(ctx.config.analysis.example_sentences);
    let sample = example_sentences_with_rng(&records, element, n, &mut ctx.rng());

    if ctx.json {
        return ctx.print_json(&sample);
    }

    if sample.is_empty() {
        println!("No example sentences for \"{element}\".");
        return Ok(());
    }

    for sentence in &sample {
        println!("- {sentence}");
    }
    Ok(())
}

pub fn bigrams(
    ctx: &Context,
    element: &str,
    top_words: Option<usize>,
    top_bigrams_per_word: Option<usize>,
) -> Result<()> {
    let records = ctx.load_records()?;
    let defaults = ctx.config.bigram_options();
    let options = BigramOptions {
        top_n_words: top_words.unwrap_or(defaults.top_n_words),
        top_n_bigrams: top_bigrams_per_word.unwrap_or(defaults.top_n_bigrams),
    };
    let assoc = top_bigrams(&records, element, options);

    if ctx.json {
        return ctx.print_json(&assoc);
    }

    if assoc.is_empty() {
        println!("No keywords for \"{element}\".");
        return Ok(());
    }

    for (word, related) in assoc.iter() {
        if related.is_empty() {
            println!("{word}: (no bigrams)");
        } else {
            println!("{word}: {}", related.join(", "));
        }
    }
    Ok(())
}

pub fn report(ctx: &Context, all_elements: bool) -> Result<()> {
    let records = ctx.load_records()?;
    let options = ctx.config.report_options(all_elements);
    let report = build_report(&records, &options, &mut ctx.rng());

    if ctx.json {
        return ctx.print_json(&report);
    }

    print_report(&report);
    Ok(())
}

fn print_report(report: &StoryReport) {
    println!(
        "Story report: {} campaigns, {} sentences",
        report.campaign_count, report.sentence_count
    );
    println!("Generated at {}", report.generated_at.format("%Y-%m-%d %H:%M:%S UTC"));
    println!();

    if report.element_order.is_empty() {
        println!("No records match the current filters.");
        return;
    }
    println!("Order: {}", report.element_order.display());

    for element in &report.elements {
        println!();
        println!("## {} ({} sentences)", element.element, element.sentence_count);

        let keywords: Vec<String> = element
            .keywords
            .iter()
            .take(10)
            .map(|k| format!("{}({})", k.word, k.count))
            .collect();
        println!("Keywords: {}", keywords.join(" "));

        for (word, related) in element.bigrams.iter() {
            println!("  {word}: {}", related.join(", "));
        }

        for sentence in &element.examples {
            println!("  > {}", truncate_text(sentence, 80));
        }
    }
}

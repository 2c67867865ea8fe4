use anyhow::Result;
use std::path::PathBuf;

use fundstory::demo::{random_weights, weight_shares};
use fundstory::success_cases::cached_success_cases;

use super::Context;

pub fn success_cases(ctx: &Context, path: Option<PathBuf>) -> Result<()> {
    let path = path.unwrap_or_else(|| ctx.config.data.success_cases_path.clone());
    let cases = cached_success_cases(&path);

    if ctx.json {
        return ctx.print_json(&*cases);
    }

    println!("Success cases ({})", cases.len());
    println!("================================");
    for (i, case) in cases.iter().enumerate() {
        println!("{}. {}", i + 1, case.project_name);
        println!("   Approach: {}", case.approach);
        println!("   URL: {}", case.url);
        println!("   Thumbnail: {}", case.project_thumbnail_url);
        println!();
    }
    Ok(())
}

pub fn demo_weights(ctx: &Context, labels: &[String]) -> Result<()> {
    let weights = random_weights(labels, &mut ctx.rng());

    if ctx.json {
        return ctx.print_json(&weights);
    }

    for ((label, weight), (_, share)) in weights.iter().zip(weight_shares(&weights)) {
        println!("{label:<20} {weight:>3} ({share:.1}%)");
    }
    Ok(())
}

//! Term retrieval by ID.
//!
//! Used by the `slang get` CLI command. The HTTP endpoint goes straight to
//! [`Catalog::get`].

use anyhow::Result;

use crate::catalog::Catalog;
use crate::config::Config;

/// CLI entry point. Looks up `id` and prints the full record.
pub fn run_get(config: &Config, id: &str) -> Result<()> {
    let catalog = Catalog::load(&config.data.path);

    let record = match catalog.get(id) {
        Some(r) => r,
        None => {
            eprintln!("Error: term not found: {}", id);
            std::process::exit(1);
        }
    };

    println!("--- Term ---");
    println!("id:           {}", record.id);
    println!("term:         {}", record.term);
    println!("definition:   {}", record.definition);
    if let Some(ref formal) = record.formal_translation {
        println!("formal:       {}", formal);
    }
    if let Some(ref ts) = record.created_at {
        println!("created_at:   {}", ts);
    }
    if let Some(ref ts) = record.updated_at {
        println!("updated_at:   {}", ts);
    }
    println!();

    println!("--- Usage Examples ({}) ---", record.usage_examples.len());
    for example in &record.usage_examples {
        match example.context.as_deref() {
            Some(ctx) if !ctx.is_empty() => println!("- {} ({})", example.example, ctx),
            _ => println!("- {}", example.example),
        }
    }
    println!();

    let context = &record.cultural_context;
    println!("--- Cultural Context ---");
    println!("age group:    {}", context.age_group);
    println!("setting:      {}", context.social_setting);
    println!("region:       {}", context.region_specificity);
    if let Some(ref notes) = context.additional_notes {
        println!("notes:        {}", notes);
    }

    Ok(())
}

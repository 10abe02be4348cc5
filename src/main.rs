// Demo binary: build two records through the builders, register them,
// and print their descriptions.

use anyhow::Result;
use persona_forge::{ArchitectBuilder, DeveloperBuilder, PersonRegistry};

fn main() -> Result<()> {
    println!("👤 Persona Forge v{}", persona_forge::VERSION);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    // 1. Developer via the preset builder (default language seeded first)
    let mut dev = DeveloperBuilder::with_default_language("Ada");
    dev.age(36).profession("Compiler Engineer");
    dev.add_language(|| "Rust".to_string());
    let ada = dev.build();
    println!("\n✓ Built: {}", ada);

    // 2. Architect referencing the developer as a friend
    let mut arch = ArchitectBuilder::new("Grace");
    arch.age(41).profession("Systems Architect").friend(ada.id);
    arch.add_language(|| "Go".to_string());
    arch.add_pattern(|| "Builder".to_string());
    arch.add_pattern(|| "Observer".to_string());
    let grace = arch.build();
    let grace_id = grace.id;
    println!("✓ Built: {}", grace);

    // 3. Register and query
    let mut registry = PersonRegistry::new();
    registry.register(ada);
    registry.register(grace);
    println!("\n📇 Registered {} people", registry.count());
    println!("✓ Friends of Grace: {}", registry.friends_of(&grace_id).join(", "));

    if let Some(oldest) = registry.oldest() {
        println!("✓ Oldest: {}", oldest);
    }

    // 4. One record as JSON
    if let Some(grace) = registry.find_by_id(&grace_id) {
        println!("\n💾 {}", serde_json::to_string_pretty(grace)?);
    }

    Ok(())
}

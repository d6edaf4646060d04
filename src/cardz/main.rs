use cardz::api::CardzApi;
use cardz::config::CardzConfig;
use cardz::error::Result;
use cardz::inventory;
use cardz::model::Card;
use cardz::remote::CatalogClient;
use chrono::Utc;
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use std::path::PathBuf;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let api = init_api(&cli)?;

    match cli.command {
        Some(Commands::List { filter }) => handle_list(&api, filter),
        Some(Commands::Add {
            id,
            name,
            card_type,
            rarity,
            set,
            quantity,
            image_url,
        }) => handle_add(&api, Card::new(id, name, card_type, rarity, set, quantity, image_url)),
        Some(Commands::Remove { id }) => handle_remove(&api, &id),
        Some(Commands::Search { query, cached }) => handle_search(&api, &query, cached),
        Some(Commands::Sync { seed_on_failure }) => handle_sync(&api, seed_on_failure),
        Some(Commands::Import) => handle_import(&api),
        Some(Commands::ImportCsv { path }) => handle_import_csv(&api, &path),
        Some(Commands::Export { path }) => handle_export(&api, path),
        None => handle_list(&api, None),
    }
}

fn init_api(cli: &Cli) -> Result<CardzApi<CatalogClient>> {
    let data_dir = match &cli.dir {
        Some(dir) => dir.clone(),
        None => ProjectDirs::from("com", "cardz", "cardz")
            .expect("Could not determine data dir")
            .data_dir()
            .to_path_buf(),
    };

    let config = CardzConfig::load(&data_dir).unwrap_or_default();
    let catalog = CatalogClient::new(&config)?;
    Ok(CardzApi::new(&config, &data_dir, catalog))
}

fn handle_list(api: &CardzApi<CatalogClient>, filter: Option<String>) -> Result<()> {
    let mut cards = api.load_inventory()?;
    if let Some(term) = filter {
        let needle = term.to_lowercase();
        cards.retain(|card| {
            card.name.to_lowercase().contains(&needle)
                || card.card_type.to_lowercase().contains(&needle)
                || card.set_name.to_lowercase().contains(&needle)
        });
    }

    if cards.is_empty() {
        println!(
            "{}",
            format!("No cards in inventory ({})", api.inventory_path().display()).dimmed()
        );
        return Ok(());
    }

    let total: u32 = cards.iter().map(|card| card.quantity).sum();
    print_cards(&cards);
    println!("{}", format!("{} cards total", total).dimmed());
    Ok(())
}

fn handle_add(api: &CardzApi<CatalogClient>, card: Card) -> Result<()> {
    if !card.is_valid() {
        return Err(cardz::error::CardzError::Store(
            "ID and name are required".to_string(),
        ));
    }

    let mut cards = api.load_inventory()?;

    // Same id: bump the owned count instead of duplicating the row
    if let Some(existing) = cards.iter_mut().find(|c| c.id == card.id) {
        existing.quantity += card.quantity;
        println!(
            "{} {} (now x{})",
            "Updated".green(),
            existing.name,
            existing.quantity
        );
    } else {
        println!("{} {}", "Added".green(), card.name);
        cards.push(card);
    }

    api.save_inventory(&cards)
}

fn handle_remove(api: &CardzApi<CatalogClient>, id: &str) -> Result<()> {
    let mut cards = api.load_inventory()?;
    let before = cards.len();
    cards.retain(|card| card.id != id);

    if cards.len() == before {
        println!("{}", format!("No card with id '{}'", id).yellow());
        return Ok(());
    }

    api.save_inventory(&cards)?;
    println!("{} {}", "Removed".green(), id);
    Ok(())
}

fn handle_search(api: &CardzApi<CatalogClient>, query: &str, cached: bool) -> Result<()> {
    let hits = if cached {
        api.search_cache(query)
    } else {
        api.search_remote(query)?
    };

    if hits.is_empty() {
        println!("{}", "No matches.".dimmed());
        return Ok(());
    }
    print_cards(&hits);
    Ok(())
}

fn handle_sync(api: &CardzApi<CatalogClient>, seed_on_failure: bool) -> Result<()> {
    match api.sync_remote() {
        Ok(count) => {
            println!("{} {} cards cached", "Synced".green(), count);
            Ok(())
        }
        Err(e) if seed_on_failure => {
            eprintln!("{} {}", "Sync failed:".yellow(), e);
            let count = api.seed_sample_cache()?;
            println!("{} {} sample cards cached", "Seeded".green(), count);
            Ok(())
        }
        Err(e) => Err(e),
    }
}

fn handle_import(api: &CardzApi<CatalogClient>) -> Result<()> {
    let summary = api.import_bulk()?;
    println!("{} {}", "Success:".green(), summary);
    Ok(())
}

fn handle_import_csv(api: &CardzApi<CatalogClient>, path: &std::path::Path) -> Result<()> {
    if !path.exists() {
        return Err(cardz::error::CardzError::Store(format!(
            "File '{}' not found",
            path.display()
        )));
    }

    let incoming = inventory::load(path)?;
    if incoming.is_empty() {
        println!("{}", format!("No cards found in {}", path.display()).yellow());
        return Ok(());
    }

    let mut cards = api.load_inventory()?;
    let mut added = 0;
    let mut merged = 0;
    for card in incoming {
        if let Some(existing) = cards.iter_mut().find(|c| c.id == card.id) {
            existing.quantity += card.quantity;
            merged += 1;
        } else {
            cards.push(card);
            added += 1;
        }
    }
    api.save_inventory(&cards)?;

    println!(
        "{} {} new, {} merged from {}",
        "Imported".green(),
        added,
        merged,
        path.display()
    );
    Ok(())
}

fn handle_export(api: &CardzApi<CatalogClient>, path: Option<PathBuf>) -> Result<()> {
    let path = path.unwrap_or_else(|| {
        PathBuf::from(format!("cardz-{}.csv", Utc::now().format("%Y-%m-%d_%H%M%S")))
    });

    let cards = api.load_inventory()?;
    inventory::save(&cards, &path)?;
    println!("{} {} cards to {}", "Exported".green(), cards.len(), path.display());
    Ok(())
}

fn print_cards(cards: &[Card]) {
    for card in cards {
        let set = if card.set_name.is_empty() {
            String::new()
        } else {
            format!(" [{}]", card.set_name)
        };
        println!(
            "{:<12} {} {}{} x{}",
            card.id.cyan(),
            card.name.bold(),
            format!("{}/{}", card.card_type, card.rarity).dimmed(),
            set,
            card.quantity
        );
    }
}

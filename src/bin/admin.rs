//! CLI administration tool for the storefront service.
//!
//! Manages template packages and inspects the component catalog without
//! going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List template packages
//! cargo run --bin admin -- templates list --tier PREMIUM
//!
//! # Verify every package resolves against the component catalog
//! cargo run --bin admin -- templates check
//!
//! # Register a package interactively
//! cargo run --bin admin -- templates create
//!
//! # Render a package with the sample store
//! cargo run --bin admin -- render hover-showcase --out preview.html
//!
//! # Generate a value for ADMIN_TOKEN
//! cargo run --bin admin -- token generate
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `DATABASE_URL` (or `DB_*`), `COMPONENTS_DIR`.
//! Without a database, read-only commands run against the built-in packages.

use storefront::application::services::{PackageService, StorefrontService};
use storefront::config::{self, Config};
use storefront::domain::entities::{
    ComponentKind, NewTemplatePackage, PackageFilter, TemplateConfig, Tier,
};
use storefront::domain::repositories::{ComponentRepository, PackageRepository};
use storefront::infrastructure::components::FsComponentRepository;
use storefront::infrastructure::persistence::PgPackageRepository;
use storefront::rendering::{Renderer, build_engine};
use storefront::server;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input, Select};
use std::path::PathBuf;
use std::sync::Arc;

/// CLI tool for managing the storefront service.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage template packages
    Templates {
        #[command(subcommand)]
        action: TemplateAction,
    },

    /// Inspect the component catalog
    Components {
        #[command(subcommand)]
        action: ComponentAction,
    },

    /// Render a package with the sample store
    Render {
        /// Package id
        id: String,

        /// Write the HTML to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Admin token helpers
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },
}

/// Template package subcommands.
#[derive(Subcommand)]
enum TemplateAction {
    /// List template packages
    List {
        /// Only packages of this tier (FREE, PREMIUM, UNLIMITED)
        #[arg(short, long)]
        tier: Option<Tier>,
    },

    /// Check that every package's components exist
    Check,

    /// Register a new template package
    Create {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Delete a template package
    Delete {
        /// Package id
        id: String,
    },

    /// Insert missing built-in packages
    Seed,
}

/// Component catalog subcommands.
#[derive(Subcommand)]
enum ComponentAction {
    /// List component names, optionally for one kind
    List {
        /// nav, hero, product-card, footer or background
        kind: Option<ComponentKind>,
    },
}

#[derive(Subcommand)]
enum TokenAction {
    /// Generate a random admin token
    Generate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Invalid configuration")?;
    let components: Arc<dyn ComponentRepository> =
        Arc::new(FsComponentRepository::new(&config.components_dir));

    match cli.command {
        Commands::Templates { action } => {
            handle_template_action(action, &config, components).await?
        }
        Commands::Components { action } => handle_component_action(action, components).await?,
        Commands::Render { id, out } => render(&config, components, &id, out).await?,
        Commands::Token {
            action: TokenAction::Generate,
        } => {
            println!("{}", generate_token().bright_yellow().bold());
        }
    }

    Ok(())
}

/// Dispatches template package commands.
async fn handle_template_action(
    action: TemplateAction,
    config: &Config,
    components: Arc<dyn ComponentRepository>,
) -> Result<()> {
    if let TemplateAction::Seed = action {
        return seed(config).await;
    }

    let (packages, backend) = server::open_registry(config).await?;
    let mutates = matches!(
        action,
        TemplateAction::Create { .. } | TemplateAction::Delete { .. }
    );
    if backend == "memory" && mutates {
        bail!("Changing templates needs a database; set DATABASE_URL");
    }

    let service = PackageService::new(packages, components);

    match action {
        TemplateAction::List { tier } => list_templates(&service, tier).await,
        TemplateAction::Check => check_templates(&service).await,
        TemplateAction::Create { yes } => create_template(&service, yes).await,
        TemplateAction::Delete { id } => delete_template(&service, &id).await,
        TemplateAction::Seed => Ok(()),
    }
}

type DynPackageService = PackageService<dyn PackageRepository, dyn ComponentRepository>;

/// Lists packages in a table.
///
/// # Output Format
///
/// ```text
/// 📋 Template Packages
///
///   ID                   Name                      Tier       Card
///   ─────────────────────────────────────────────────────────────────────
///   modern-minimal       Modern Minimal            FREE       card-minimal
/// ```
async fn list_templates(service: &DynPackageService, tier: Option<Tier>) -> Result<()> {
    println!("{}", "📋 Template Packages".bright_blue().bold());
    println!();

    let packages = service
        .list(PackageFilter { tier, search: None })
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list templates: {}", e))?;

    if packages.is_empty() {
        println!("{}", "  No templates found".yellow());
        return Ok(());
    }

    println!(
        "  {:<20} {:<25} {:<10} {}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Tier".bright_white().bold(),
        "Card".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for package in &packages {
        let tier = match package.tier {
            Tier::Free => package.tier.as_str().green(),
            Tier::Premium => package.tier.as_str().magenta(),
            Tier::Unlimited => package.tier.as_str().yellow(),
        };

        println!(
            "  {:<20} {:<25} {:<10} {}{}",
            package.id.cyan(),
            package.name,
            tier,
            package.config.product_card.bright_black(),
            if package.builtin { " (built-in)".bright_black() } else { "".normal() }
        );
    }

    println!();
    println!(
        "  Total: {}",
        packages.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Resolves every slot of every package against the catalog.
///
/// Exits with an error when any package references a missing component.
async fn check_templates(service: &DynPackageService) -> Result<()> {
    println!("{}", "🔍 Checking template packages...".bright_blue());
    println!();

    let packages = service
        .list(PackageFilter::default())
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list templates: {}", e))?;

    let mut broken = 0;
    for package in &packages {
        match service.check_components(&package.config).await {
            Ok(missing) if missing.is_empty() => {
                println!("  {} {}", "✅".green(), package.id.cyan());
            }
            Ok(missing) => {
                broken += 1;
                let list: Vec<String> = missing.iter().map(|(k, n)| format!("{k}/{n}")).collect();
                println!(
                    "  {} {} missing {}",
                    "❌".red(),
                    package.id.cyan(),
                    list.join(", ").red()
                );
            }
            Err(e) => bail!("Component catalog error: {}", e),
        }
    }

    println!();
    if broken > 0 {
        bail!("{} of {} templates reference missing components", broken, packages.len());
    }
    println!("{}", "✅ All templates resolve".green().bold());
    Ok(())
}

/// Prompts for a component name of `kind`, offering the catalog's names.
async fn pick_component(
    components: &dyn ComponentRepository,
    kind: ComponentKind,
    optional: bool,
) -> Result<Option<String>> {
    let mut names = components
        .list(kind)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list {} components: {}", kind, e))?;

    if names.is_empty() {
        if optional {
            return Ok(None);
        }
        bail!("No {} components in the catalog", kind);
    }

    if optional {
        names.insert(0, "(none)".to_string());
    }

    let choice = Select::new()
        .with_prompt(format!("{} component", kind))
        .items(&names)
        .default(0)
        .interact()?;

    if optional && choice == 0 {
        Ok(None)
    } else {
        Ok(Some(names[choice].clone()))
    }
}

/// Registers a package with interactive prompts.
///
/// # Flow
///
/// 1. Prompt for id, name, description and thumbnail
/// 2. Pick one component per slot from the catalog
/// 3. Pick the tier
/// 4. Confirm (unless `--yes`)
/// 5. Validate and store through the package service
async fn create_template(service: &DynPackageService, skip_confirm: bool) -> Result<()> {
    println!("{}", "🧩 Create Template Package".bright_blue().bold());
    println!();

    let id: String = Input::new().with_prompt("Template id").interact_text()?;
    let name: String = Input::new().with_prompt("Name").interact_text()?;
    let description: String = Input::new()
        .with_prompt("Description")
        .allow_empty(true)
        .interact_text()?;
    let thumbnail: String = Input::new()
        .with_prompt("Thumbnail URL")
        .with_initial_text(format!("/static/thumbnails/{id}.svg"))
        .interact_text()?;

    let components = service.components();
    let config = TemplateConfig {
        nav: pick_component(components, ComponentKind::Nav, true).await?,
        hero: pick_component(components, ComponentKind::Hero, true).await?,
        product_card: pick_component(components, ComponentKind::ProductCard, false)
            .await?
            .context("A product card is required")?,
        footer: pick_component(components, ComponentKind::Footer, true).await?,
        background: pick_component(components, ComponentKind::Background, true).await?,
    };

    let tiers = Tier::ALL.map(|t| t.as_str());
    let tier = Tier::ALL[Select::new()
        .with_prompt("Tier")
        .items(&tiers)
        .default(0)
        .interact()?];

    println!();
    println!("{}", "Template details:".bright_white().bold());
    println!("  Id:   {}", id.cyan());
    println!("  Name: {}", name.cyan());
    println!("  Tier: {}", tier.as_str().cyan());
    for (kind, component) in config.slots() {
        println!("  {:<13} {}", format!("{kind}:"), component.bright_black());
    }
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this template?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let package = service
        .create(NewTemplatePackage {
            id,
            name,
            description,
            thumbnail,
            config,
            tier,
        })
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create template: {}", e))?;

    println!();
    println!(
        "{} {}",
        "✅ Template created:".green().bold(),
        package.id.bright_yellow()
    );
    println!();

    Ok(())
}

/// Deletes a package after confirmation (default: No).
async fn delete_template(service: &DynPackageService, id: &str) -> Result<()> {
    println!("{}", "🗑  Delete Template Package".bright_blue().bold());
    println!();

    let package = service
        .get(id)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    println!("  Template: {}", package.name.cyan());
    println!("  Id:       {}", package.id.bright_black());
    println!();

    let confirmed = Confirm::new()
        .with_prompt("Delete this template?")
        .default(false)
        .interact()?;

    if !confirmed {
        println!("{}", "❌ Cancelled".red());
        return Ok(());
    }

    service
        .delete(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete template: {}", e))?;

    println!();
    println!("{}", "✅ Template deleted".green().bold());
    println!();

    Ok(())
}

/// Inserts built-in packages missing from the database.
async fn seed(config: &Config) -> Result<()> {
    let url = config
        .database_url
        .as_deref()
        .context("Seeding needs a database; set DATABASE_URL")?;

    let pool = server::connect_database(config, url).await?;
    let repository = PgPackageRepository::new(Arc::new(pool));

    let inserted = repository
        .seed_builtin()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to seed templates: {}", e))?;

    println!(
        "{} {} built-in templates inserted",
        "✅".green(),
        inserted.to_string().bright_white().bold()
    );

    Ok(())
}

/// Lists catalog components by kind.
async fn handle_component_action(
    action: ComponentAction,
    components: Arc<dyn ComponentRepository>,
) -> Result<()> {
    let ComponentAction::List { kind } = action;
    let kinds: Vec<ComponentKind> = match kind {
        Some(kind) => vec![kind],
        None => ComponentKind::ALL.to_vec(),
    };

    println!("{}", "🧱 Components".bright_blue().bold());
    println!();

    for kind in kinds {
        let names = components
            .list(kind)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to list {} components: {}", kind, e))?;

        println!("  {}", kind.as_str().bright_white().bold());
        if names.is_empty() {
            println!("    {}", "(none)".bright_black());
        }
        for name in names {
            println!("    {}", name.cyan());
        }
    }
    println!();

    Ok(())
}

/// Renders a package with the sample store to stdout or a file.
async fn render(
    config: &Config,
    components: Arc<dyn ComponentRepository>,
    id: &str,
    out: Option<PathBuf>,
) -> Result<()> {
    let (packages, _) = server::open_registry(config).await?;
    let service = StorefrontService::new(
        packages,
        components,
        Renderer::new(Arc::new(build_engine())),
    );

    let html = service
        .preview(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to render {}: {}", id, e))?;

    match out {
        Some(path) => {
            tokio::fs::write(&path, &html)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!(
                "{} {} ({} bytes)",
                "✅ Rendered to".green().bold(),
                path.display(),
                html.len()
            );
        }
        None => println!("{html}"),
    }

    Ok(())
}

/// Generates a cryptographically random admin token.
///
/// # Format
///
/// - Length: 48 characters
/// - Character set: A-Z, a-z, 0-9
fn generate_token() -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    const TOKEN_LEN: usize = 48;

    let mut rng = rand::rng();

    (0..TOKEN_LEN)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use colored::Colorize;
use filters::FilterMode;
use post_model::Post;
use repository::{DEFAULT_BASE_URL, HttpPostRepository, RepositoryConfig};
use session::{ArticlesSession, ArticlesState};
use std::time::Duration;
use tracing::warn;

/// Awesome Posts - browse and filter the blog's articles
#[derive(Parser)]
#[command(name = "awesome-posts")]
#[command(about = "Browse published posts and filter them by category", long_about = None)]
struct Cli {
    /// Base URL of the blog server
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Request timeout in seconds
    #[arg(long, default_value = "10")]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List posts, optionally filtered by category
    List {
        /// Category name to select (repeatable; posts in ANY selected category are shown)
        #[arg(long = "category")]
        categories: Vec<String>,
    },

    /// Show the categories available as filters
    Categories,

    /// Show a single post
    Show {
        /// Id of the post to display
        #[arg(long)]
        post_id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = RepositoryConfig::default()
        .with_base_url(cli.base_url)
        .with_timeout(Duration::from_secs(cli.timeout_secs));
    let repository =
        HttpPostRepository::new(&config).context("Failed to set up posts repository")?;
    let mut session = ArticlesSession::new(repository);

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::List { categories } => handle_list(&mut session, categories).await?,
        Commands::Categories => handle_categories(&mut session).await?,
        Commands::Show { post_id } => handle_show(&session, &post_id).await?,
    }

    Ok(())
}

/// Handle the 'list' command
async fn handle_list(
    session: &mut ArticlesSession<HttpPostRepository>,
    categories: Vec<String>,
) -> Result<()> {
    session.load().await?;

    for name in categories {
        if !session.state().categories().contains_name(&name) {
            warn!("No loaded post has category '{}'", name);
        }
        session.toggle(name, true);
    }

    print_articles(session.state());
    Ok(())
}

/// Handle the 'categories' command
async fn handle_categories(session: &mut ArticlesSession<HttpPostRepository>) -> Result<()> {
    let state = session.load().await?;

    println!("{}", "Filter by category:".bold().blue());
    if state.categories().is_empty() {
        println!("  (no categories)");
    }
    for category in state.categories() {
        let count = state
            .posts()
            .iter()
            .filter(|post| post.category_names().any(|name| name == category.name))
            .count();
        println!(
            "  {} {} {}",
            "•".green(),
            category.name,
            format!("[id {}, {} posts]", category.id, count).dimmed()
        );
    }
    Ok(())
}

/// Handle the 'show' command
async fn handle_show(session: &ArticlesSession<HttpPostRepository>, post_id: &str) -> Result<()> {
    let post = session
        .load_post(post_id)
        .await?
        .ok_or_else(|| anyhow!("Post {} not found", post_id))?;

    print_post(&post);
    Ok(())
}

/// Print the visible posts with a header describing the active filter
fn print_articles(state: &ArticlesState) {
    let visible = state.visible_posts();

    let header = match state.mode() {
        FilterMode::Unfiltered => format!("Awesome Posts ({} posts)", visible.len()),
        FilterMode::Filtered => format!(
            "Awesome Posts ({} of {} posts, categories: {})",
            visible.len(),
            state.posts().len(),
            state.selection().selected_names().collect::<Vec<_>>().join(", ")
        ),
    };
    println!("{}", header.bold().blue());

    if visible.is_empty() {
        println!("No posts match the selected categories.");
    }
    for post in visible {
        println!();
        print_post(post);
    }
}

/// Print one post: title, author line, summary, categories
fn print_post(post: &Post) {
    println!("{}", post.title.bold());
    println!(
        "{} {} {}",
        post.author.name.cyan(),
        "·".dimmed(),
        display_date(post)
    );
    if !post.summary.is_empty() {
        println!("{}", post.summary);
    }
    if !post.categories.is_empty() {
        let names: Vec<&str> = post.category_names().collect();
        println!("{} {}", "Categories:".green(), names.join(", "));
    }
    println!("{}", format!("id: {}", post.id).dimmed());
}

/// Calendar date of the post, or the raw string when it cannot be parsed
fn display_date(post: &Post) -> String {
    match post.published_on() {
        Some(date) => date.format("%-d %b %Y").to_string(),
        None => post.publish_date.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use post_model::Author;

    fn post_dated(date: &str) -> Post {
        Post {
            id: "p1".to_string(),
            title: "Title".to_string(),
            publish_date: date.to_string(),
            author: Author {
                name: "Ada".to_string(),
                avatar_url: "a.png".to_string(),
            },
            summary: String::new(),
            categories: vec![],
        }
    }

    #[test]
    fn test_display_date_parsed() {
        assert_eq!(display_date(&post_dated("2020-04-09T15:24:43Z")), "9 Apr 2020");
    }

    #[test]
    fn test_display_date_falls_back_to_raw() {
        assert_eq!(display_date(&post_dated("sometime in spring")), "sometime in spring");
    }

    #[test]
    fn test_cli_parses_repeated_categories() {
        let cli = Cli::parse_from([
            "awesome-posts",
            "--base-url",
            "http://example.com",
            "list",
            "--category",
            "Tech",
            "--category",
            "Life",
        ]);

        assert_eq!(cli.base_url, "http://example.com");
        assert_eq!(cli.timeout_secs, 10);
        match cli.command {
            Commands::List { categories } => assert_eq!(categories, vec!["Tech", "Life"]),
            _ => panic!("expected list command"),
        }
    }
}

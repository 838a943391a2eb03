//! Shorten command

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::mediator::Mediator;

/// Shorten `url` and print the short URL on stdout
///
/// Status lines go to stderr so `$(url-compactor shorten ...)` captures
/// only the URL.
pub async fn shorten_url(mediator: &mut Mediator, url: &str, copy: bool) -> Result<(), CliError> {
    eprintln!(
        "{} {} {}",
        "Shortening...".yellow(),
        url.blue().underline(),
        format!("via {}", mediator.provider_name()).dimmed()
    );

    let short_url = mediator.shorten(url).await?;
    println!("{}", short_url);

    if copy {
        mediator.copy(&short_url)?;
        eprintln!("{} Short URL has been copied to your clipboard.", "✓".bold().green());
    }

    Ok(())
}

//! Interactive browse session.
//!
//! Reads commands line by line. A bare id looks up a hero; slash commands
//! drive the search box, the category selector and the hero overlay.
//! Lookup errors are printed and the session carries on.

use super::traits::render_view;
use super::utils::{load_catalog, Catalog};
use crate::aggregator::{
    available_categories, expanded_categories, toggle_category, CategorySelection,
};
use crate::lookup::{assess_hero, LookupSession};
use crate::output::{render_category_bar, render_hero};
use crate::store::HeroStore;
use anyhow::Result;
use log::debug;
use std::io::{BufRead, Write};

const HELP: &str = "\
Commands:
  <id>               look up a hero
  /search <text>     filter trait values (empty text clears the search)
  /category <name>   select a category (All for every category)
  /categories        list categories
  /toggle <name>     fold or unfold one category
  /close             close the hero card
  /help              show this help
  /quit              leave";

/// A parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    Lookup(String),
    Search(String),
    Category(CategorySelection),
    Categories,
    Toggle(String),
    Close,
    Help,
    Quit,
    Unknown(String),
}

impl BrowseCommand {
    /// Parse one input line; blank lines yield `None`
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let Some(rest) = line.strip_prefix('/') else {
            return Some(Self::Lookup(line.to_string()));
        };

        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (rest, ""),
        };

        Some(match name {
            "search" | "s" => Self::Search(arg.to_string()),
            "category" | "c" => Self::Category(arg.parse().unwrap_or_default()),
            "categories" => Self::Categories,
            "toggle" | "t" => Self::Toggle(arg.to_string()),
            "close" => Self::Close,
            "help" | "h" => Self::Help,
            "quit" | "q" | "exit" => Self::Quit,
            other => Self::Unknown(other.to_string()),
        })
    }
}

/// Run an interactive session until `/quit` or end of input
pub fn execute_browse<S, R, W>(store: &S, input: R, mut out: W) -> Result<()>
where
    S: HeroStore + ?Sized,
    R: BufRead,
    W: Write,
{
    let catalog = load_catalog(store);
    let mut session = LookupSession::new(store);
    let mut search = String::new();
    let mut selection = CategorySelection::All;
    let mut expanded = expanded_categories(&catalog.traits, &search, &selection);

    writeln!(out, "{}", render_view(&catalog, &search, &selection, &expanded, false))?;
    writeln!(out, "\nType /help for commands.")?;

    for line in input.lines() {
        let line = line?;
        let Some(command) = BrowseCommand::parse(&line) else {
            continue;
        };
        debug!("Browse command: {:?}", command);

        match command {
            BrowseCommand::Quit => break,
            BrowseCommand::Help => writeln!(out, "{}", HELP)?,
            BrowseCommand::Unknown(name) => writeln!(out, "Unknown command: /{}", name)?,
            BrowseCommand::Categories => writeln!(
                out,
                "{}",
                render_category_bar(&available_categories(&catalog.traits), &selection)
            )?,
            BrowseCommand::Search(text) => {
                search = text;
                expanded = expanded_categories(&catalog.traits, &search, &selection);
                writeln!(out, "{}", render_view(&catalog, &search, &selection, &expanded, false))?;
            }
            BrowseCommand::Category(next) => {
                // Picking a category clears the search box
                selection = next;
                search.clear();
                expanded = expanded_categories(&catalog.traits, &search, &selection);
                writeln!(out, "{}", render_view(&catalog, &search, &selection, &expanded, false))?;
            }
            BrowseCommand::Toggle(name) => match find_category(&catalog, &name) {
                Some(category) => {
                    toggle_category(&mut expanded, category);
                    writeln!(out, "{}", render_view(&catalog, &search, &selection, &expanded, false))?;
                }
                None => writeln!(out, "Unknown category: {}", name)?,
            },
            BrowseCommand::Close => {
                session.close();
                writeln!(out, "Hero card closed.")?;
            }
            BrowseCommand::Lookup(id) => {
                session.submit(&id);
                write_lookup_result(&mut out, &catalog, &session)?;
            }
        }
    }

    Ok(())
}

/// Catalog category matching `name`, ignoring case
fn find_category<'c>(catalog: &'c Catalog, name: &str) -> Option<&'c str> {
    catalog
        .traits
        .iter()
        .map(|(category, _)| category)
        .find(|category| category.eq_ignore_ascii_case(name))
}

fn write_lookup_result<S, W>(out: &mut W, catalog: &Catalog, session: &LookupSession<'_, S>) -> Result<()>
where
    S: HeroStore + ?Sized,
    W: Write,
{
    if let Some(error) = session.error() {
        writeln!(out, "✗ {}", error)?;
    } else if let Some(hero) = session.visible() {
        let traits = assess_hero(&catalog.traits, hero);
        writeln!(out, "{}", render_hero(hero, &traits))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(BrowseCommand::parse("   "), None);
        assert_eq!(BrowseCommand::parse("42"), Some(BrowseCommand::Lookup("42".to_string())));
        assert_eq!(
            BrowseCommand::parse("/search dragon helm"),
            Some(BrowseCommand::Search("dragon helm".to_string()))
        );
        assert_eq!(BrowseCommand::parse("/search"), Some(BrowseCommand::Search(String::new())));
        assert_eq!(
            BrowseCommand::parse("/category Weapon"),
            Some(BrowseCommand::Category(CategorySelection::Category("Weapon".to_string())))
        );
        assert_eq!(
            BrowseCommand::parse("/category all"),
            Some(BrowseCommand::Category(CategorySelection::All))
        );
        assert_eq!(
            BrowseCommand::parse("/t Weapon"),
            Some(BrowseCommand::Toggle("Weapon".to_string()))
        );
        assert_eq!(BrowseCommand::parse("/quit"), Some(BrowseCommand::Quit));
        assert_eq!(
            BrowseCommand::parse("/zoom"),
            Some(BrowseCommand::Unknown("zoom".to_string()))
        );
    }
}

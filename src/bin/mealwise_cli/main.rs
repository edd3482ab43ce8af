// ABOUTME: Mealwise CLI - command-line front end for grocery lists, scaling, search, and plans
// ABOUTME: Reads a recipe catalog and a JSON store file, printing results as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Build a grocery list from a meal plan file without touching the store
//! mealwise-cli grocery build --plan week.json
//!
//! # Rebuild the stored grocery list from the stored meal plan
//! mealwise-cli grocery build
//!
//! # Scale a recipe to four servings
//! mealwise-cli scale "Palak Paneer" --servings 4
//!
//! # Find quick vegetarian recipes mentioning spinach
//! mealwise-cli search --text spinach --diet vegetarian --max-time 30
//!
//! # Generate a week starting on a date with a fixed seed
//! mealwise-cli plan generate --start 2024-12-16 --seed 7
//!
//! # Weekly calorie and prep-time totals
//! mealwise-cli plan summary
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use helpers::args::{parse_category, parse_diet, parse_servings};
use mealwise::logging::LoggingConfig;
use mealwise::services::{GenerationPreferences, RecipeCatalog, RecipeQuery};
use mealwise::storage::JsonFileStore;
use mealwise_core::models::{CategoryTag, Diet, MealSlot};
use mealwise_intelligence::ServingSize;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "mealwise-cli",
    about = "Mealwise meal planning CLI",
    long_about = "Build grocery lists, scale recipes, search the catalog, and generate \
                  weekly meal plans."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Store file holding the meal plan, grocery list, and preferences
    #[arg(long, global = true, env = "MEALWISE_STORE", default_value = "data/mealwise-store.json")]
    store: PathBuf,

    /// Recipe catalog file
    #[arg(long, global = true, env = "MEALWISE_CATALOG", default_value = "data/recipes.json")]
    catalog: PathBuf,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Grocery list commands
    Grocery {
        #[command(subcommand)]
        action: GroceryCommand,
    },

    /// Scale a recipe by serving size
    Scale {
        /// Recipe name, exactly as in the catalog
        recipe: String,

        /// Serving multiplier (must be positive)
        #[arg(long, short = 's', default_value = "1", value_parser = parse_servings)]
        servings: ServingSize,
    },

    /// Search the recipe catalog
    Search {
        /// Text to find in recipe or ingredient names
        #[arg(long, short = 't')]
        text: Option<String>,

        /// Accepted diet (repeatable)
        #[arg(long, value_parser = parse_diet)]
        diet: Vec<Diet>,

        /// Accepted cuisine (repeatable)
        #[arg(long)]
        cuisine: Vec<String>,

        /// Longest prep time in minutes
        #[arg(long)]
        max_time: Option<u32>,

        /// Highest calories per serving
        #[arg(long)]
        max_calories: Option<u32>,

        /// Print only recipe names
        #[arg(long)]
        names: bool,
    },

    /// List the diets, cuisines, and serving sizes available for filtering
    Filters,

    /// Meal plan commands
    Plan {
        #[command(subcommand)]
        action: PlanCommand,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum GroceryCommand {
    /// Build a grocery list
    Build {
        /// Meal plan JSON file; the stored plan is used when omitted
        #[arg(long)]
        plan: Option<PathBuf>,

        /// Replace the stored list with the result (always true for the stored plan)
        #[arg(long)]
        persist: bool,
    },

    /// Show the stored list
    Show {
        /// Group items by category
        #[arg(long)]
        by_category: bool,
    },

    /// Toggle an item's checked state
    Toggle {
        /// Exact item name
        name: String,
    },

    /// Add an item to the stored list by hand
    Add {
        /// Item name; must not already be on the list
        name: String,

        /// Category; classified from the name when omitted
        #[arg(long, short = 'c', value_parser = parse_category)]
        category: Option<CategoryTag>,
    },

    /// Delete an item from the stored list
    Remove {
        /// Exact item name
        name: String,
    },

    /// Move an item to another category
    Categorize {
        /// Exact item name
        name: String,

        /// New category
        #[arg(value_parser = parse_category)]
        category: CategoryTag,
    },

    /// Remove checked items from the stored list
    ClearChecked,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum PlanCommand {
    /// Generate seven days of meals from the catalog
    Generate {
        /// First day of the week (YYYY-MM-DD)
        #[arg(long)]
        start: NaiveDate,

        /// Random seed; the same seed yields the same plan
        #[arg(long, default_value = "0")]
        seed: u64,

        /// Accepted diet (repeatable); overrides stored preferences
        #[arg(long, value_parser = parse_diet)]
        diet: Vec<Diet>,

        /// Accepted cuisine (repeatable); overrides stored preferences
        #[arg(long)]
        cuisine: Vec<String>,

        /// Longest prep time per meal; overrides stored preferences
        #[arg(long)]
        max_time: Option<u32>,

        /// Skip snacks
        #[arg(long)]
        no_snacks: bool,
    },

    /// Place a catalog recipe into a slot
    Add {
        /// Day key, e.g. 2024-12-16
        date: String,
        /// breakfast, lunch or dinner
        slot: MealSlot,
        /// Recipe name
        recipe: String,
    },

    /// Empty a slot
    Remove {
        /// Day key
        date: String,
        /// breakfast, lunch or dinner
        slot: MealSlot,
    },

    /// Clear one day, or the whole plan
    Clear {
        /// Day key; clears every day when omitted
        date: Option<String>,
    },

    /// Print the stored plan
    Show,

    /// Weekly calorie and prep-time totals
    Summary,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    let store = JsonFileStore::open(&cli.store)?;
    debug!(store = %store.path().display(), "Opened store");
    let load_catalog = || RecipeCatalog::from_file(&cli.catalog);

    match cli.command {
        Command::Grocery { action } => match action {
            GroceryCommand::Build { plan, persist } => {
                commands::grocery::build(&store, plan.as_deref(), persist)?;
            }
            GroceryCommand::Show { by_category } => commands::grocery::show(&store, by_category)?,
            GroceryCommand::Toggle { name } => commands::grocery::toggle(&store, &name)?,
            GroceryCommand::Add { name, category } => {
                commands::grocery::add(&store, &name, category)?;
            }
            GroceryCommand::Remove { name } => commands::grocery::remove(&store, &name)?,
            GroceryCommand::Categorize { name, category } => {
                commands::grocery::categorize(&store, &name, category)?;
            }
            GroceryCommand::ClearChecked => commands::grocery::clear_checked(&store)?,
        },
        Command::Scale { recipe, servings } => {
            commands::recipes::scale(&load_catalog()?, &recipe, servings)?;
        }
        Command::Search {
            text,
            diet,
            cuisine,
            max_time,
            max_calories,
            names,
        } => {
            let query = RecipeQuery {
                text,
                diets: diet,
                cuisines: cuisine,
                max_time,
                max_calories,
                ..RecipeQuery::default()
            };
            commands::recipes::search(&load_catalog()?, &query, names)?;
        }
        Command::Filters => commands::recipes::filters(&load_catalog()?)?,
        Command::Plan { action } => run_plan(&store, action, load_catalog)?,
    }

    Ok(())
}

fn run_plan(
    store: &JsonFileStore,
    action: PlanCommand,
    load_catalog: impl Fn() -> mealwise::AppResult<RecipeCatalog>,
) -> Result<()> {
    match action {
        PlanCommand::Generate {
            start,
            seed,
            diet,
            cuisine,
            max_time,
            no_snacks,
        } => {
            let overridden =
                !diet.is_empty() || !cuisine.is_empty() || max_time.is_some() || no_snacks;
            let preferences = overridden.then(|| {
                let defaults = GenerationPreferences::default();
                GenerationPreferences {
                    diets: diet,
                    cuisines: cuisine,
                    max_prep_time: max_time.or(defaults.max_prep_time),
                    include_snacks: !no_snacks,
                    ..defaults
                }
            });
            commands::plan::generate(store, &load_catalog()?, start, preferences, seed)
        }
        PlanCommand::Add { date, slot, recipe } => {
            commands::plan::add(store, &load_catalog()?, &date, slot, &recipe)
        }
        PlanCommand::Remove { date, slot } => commands::plan::remove(store, &date, slot),
        PlanCommand::Clear { date } => commands::plan::clear(store, date.as_deref()),
        PlanCommand::Show => commands::plan::show(store),
        PlanCommand::Summary => commands::plan::summary(store),
    }
}

use super::menu::{print_menu, MenuChoice, CHOICE_ERROR, CHOICE_PROMPT};
use super::prompt::{OnReject, Prompter};
use super::render::{print_error, print_found, print_items, print_messages};
use super::setup::{init_tracing, Cli};
use clap::Parser;
use std::io::{self, BufRead, Write};
use stockpile::api::{InventoryApi, ItemUpdate};
use stockpile::commands::helpers::valid_price;
use stockpile::config::InventoryConfig;
use stockpile::error::{Result, StockpileError};
use stockpile::model::{Category, NewItem, SortKey, SortOrder};
use stockpile::store::memory::InMemoryStore;
use stockpile::store::ItemStore;
use tracing::debug;

const QUANTITY_ERROR: &str =
    "Invalid input! Please enter a valid non-negative number for quantity.";
const PRICE_ERROR: &str = "Invalid input! Please enter a valid non-negative number for price.";
const FIELD_PROMPT: &str = "Update Quantity (q), Price (p), or ID (i)? ";
const FIELD_ERROR: &str = "Invalid choice! Please enter 'q', 'p', or 'i'.";
const SORT_KEY_PROMPT: &str = "Sort by: 1 - Quantity, 2 - Price: ";
const SORT_KEY_ERROR: &str = "Invalid option! Please enter 1 for Quantity or 2 for Price.";
const SORT_ORDER_PROMPT: &str = "Order: 1 - Ascending, 2 - Descending: ";
const SORT_ORDER_ERROR: &str = "Invalid option! Please enter 1 for Ascending or 2 for Descending.";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = load_config(&cli)?;
    debug!(?config, "starting session");

    let store = InMemoryStore::with_capacity(config.max_items);
    let api = InventoryApi::new(store, config);
    let prompter = Prompter::new(io::stdin().lock(), io::stdout());
    Session::new(api, prompter).run()
}

/// Defaults, then the config file, then command-line overrides.
fn load_config(cli: &Cli) -> Result<InventoryConfig> {
    let mut config = match &cli.config {
        Some(path) => InventoryConfig::load(path)?,
        None => InventoryConfig::default(),
    };
    if let Some(max_items) = cli.max_items {
        config = config.with_max_items(max_items);
    }
    if let Some(threshold) = cli.low_stock {
        config = config.with_low_stock_threshold(threshold);
    }
    config.validate()?;
    Ok(config)
}

#[derive(Debug, Clone, Copy)]
enum Field {
    Quantity,
    Price,
    Id,
}

/// One interactive run of the menu over an inventory.
pub struct Session<S: ItemStore, R, W> {
    api: InventoryApi<S>,
    prompter: Prompter<R, W>,
}

impl<S: ItemStore, R: BufRead, W: Write> Session<S, R, W> {
    pub fn new(api: InventoryApi<S>, prompter: Prompter<R, W>) -> Self {
        Self { api, prompter }
    }

    /// Runs until Exit is chosen or input ends. Operation failures are reported and
    /// the menu comes back; only I/O errors escape.
    pub fn run(&mut self) -> Result<()> {
        loop {
            print_menu(self.prompter.output())?;
            let outcome = self
                .prompter
                .ask_with(CHOICE_PROMPT, OnReject::DiscardLine, |token| {
                    token
                        .parse::<u8>()
                        .ok()
                        .and_then(MenuChoice::from_number)
                        .ok_or_else(|| CHOICE_ERROR.to_string())
                });
            let choice = match outcome {
                Ok(choice) => choice,
                Err(StockpileError::InputClosed) => return self.exit(),
                Err(e) => return Err(e),
            };
            debug!(?choice, "menu choice");

            if choice == MenuChoice::Exit {
                return self.exit();
            }

            match self.dispatch(choice) {
                Ok(()) => {}
                Err(StockpileError::InputClosed) => return self.exit(),
                Err(e) if e.is_recoverable() => print_error(self.prompter.output(), &e)?,
                Err(e) => return Err(e),
            }
        }
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (InventoryApi<S>, Prompter<R, W>) {
        (self.api, self.prompter)
    }

    fn exit(&mut self) -> Result<()> {
        writeln!(self.prompter.output(), "Exiting program.")?;
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<()> {
        match choice {
            MenuChoice::Add => self.handle_add(),
            MenuChoice::Update => self.handle_update(),
            MenuChoice::Remove => self.handle_remove(),
            MenuChoice::ByCategory => self.handle_by_category(),
            MenuChoice::All => self.handle_all(),
            MenuChoice::Search => self.handle_search(),
            MenuChoice::Sort => self.handle_sort(),
            MenuChoice::LowStock => self.handle_low_stock(),
            MenuChoice::Exit => Ok(()),
        }
    }

    fn handle_add(&mut self) -> Result<()> {
        if self.api.is_full() {
            return Err(StockpileError::InventoryFull {
                capacity: self.api.config().max_items,
            });
        }

        let category_prompt = format!("Enter category ({}): ", Category::names());
        let category = self.prompter.ask_with(&category_prompt, OnReject::KeepLine, |token| {
            token
                .parse::<Category>()
                .map_err(|e| format!("{} Please try again.", e))
        })?;

        let api = &self.api;
        let id = self.prompter.ask_with("Enter ID: ", OnReject::KeepLine, |token| {
            if api.contains_id(token) {
                Err(StockpileError::DuplicateId(token.to_string()).to_string())
            } else {
                Ok(token.to_string())
            }
        })?;

        let name = self.prompter.token("Enter Name: ")?;
        let quantity = self.ask_quantity("Enter Quantity: ")?;
        let price = self.ask_price("Enter Price: ")?;

        let result = self
            .api
            .add_item(NewItem::new(id, name, quantity, price, category))?;
        print_messages(self.prompter.output(), &result.messages)?;
        Ok(())
    }

    fn handle_update(&mut self) -> Result<()> {
        let id = self.prompter.token("Enter ID of the item to update: ")?;
        if !self.api.contains_id(&id) {
            return Err(StockpileError::ItemNotFound(id));
        }

        let field = self
            .prompter
            .ask_with(FIELD_PROMPT, OnReject::KeepLine, |token| match token {
                "q" => Ok(Field::Quantity),
                "p" => Ok(Field::Price),
                "i" => Ok(Field::Id),
                _ => Err(FIELD_ERROR.to_string()),
            })?;

        let update = match field {
            Field::Quantity => ItemUpdate::Quantity(self.ask_quantity("Enter new quantity: ")?),
            Field::Price => ItemUpdate::Price(self.ask_price("Enter new price: ")?),
            Field::Id => {
                let api = &self.api;
                let new_id = self.prompter.ask_with("Enter new ID: ", OnReject::KeepLine, |token| {
                    if api.id_available_for(&id, token) {
                        Ok(token.to_string())
                    } else {
                        Err(StockpileError::DuplicateId(token.to_string()).to_string())
                    }
                })?;
                ItemUpdate::Id(new_id)
            }
        };

        let result = self.api.update_item(&id, update)?;
        print_messages(self.prompter.output(), &result.messages)?;
        Ok(())
    }

    fn handle_remove(&mut self) -> Result<()> {
        let id = self.prompter.token("Enter ID of the item to remove: ")?;
        let result = self.api.remove_item(&id)?;
        print_messages(self.prompter.output(), &result.messages)?;
        Ok(())
    }

    fn handle_by_category(&mut self) -> Result<()> {
        let category: Category = self.prompter.token("Enter category: ")?.parse()?;
        let result = self.api.list_by_category(category)?;
        let out = self.prompter.output();
        print_items(out, &result.listed_items)?;
        print_messages(out, &result.messages)?;
        Ok(())
    }

    fn handle_all(&mut self) -> Result<()> {
        let result = self.api.list_items()?;
        print_items(self.prompter.output(), &result.listed_items)?;
        Ok(())
    }

    fn handle_search(&mut self) -> Result<()> {
        let id = self.prompter.token("Enter ID to search: ")?;
        let result = self.api.search_item(&id)?;
        let out = self.prompter.output();
        for item in &result.listed_items {
            print_found(out, item)?;
        }
        Ok(())
    }

    fn handle_sort(&mut self) -> Result<()> {
        let key = self
            .prompter
            .ask_with(SORT_KEY_PROMPT, OnReject::DiscardLine, |token| match token.parse::<u8>() {
                Ok(1) => Ok(SortKey::Quantity),
                Ok(2) => Ok(SortKey::Price),
                _ => Err(SORT_KEY_ERROR.to_string()),
            })?;
        let order = self
            .prompter
            .ask_with(SORT_ORDER_PROMPT, OnReject::DiscardLine, |token| match token.parse::<u8>() {
                Ok(1) => Ok(SortOrder::Ascending),
                Ok(2) => Ok(SortOrder::Descending),
                _ => Err(SORT_ORDER_ERROR.to_string()),
            })?;

        let result = self.api.sort_items(key, order)?;
        print_items(self.prompter.output(), &result.listed_items)?;
        Ok(())
    }

    fn handle_low_stock(&mut self) -> Result<()> {
        let result = self.api.low_stock_items()?;
        print_items(self.prompter.output(), &result.listed_items)?;
        Ok(())
    }

    fn ask_quantity(&mut self, prompt: &str) -> Result<u32> {
        self.prompter.ask(prompt, |_: &u32| true, QUANTITY_ERROR)
    }

    fn ask_price(&mut self, prompt: &str) -> Result<f64> {
        self.prompter.ask(prompt, |p: &f64| valid_price(*p), PRICE_ERROR)
    }
}

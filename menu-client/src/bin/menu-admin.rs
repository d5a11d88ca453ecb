//! Line-oriented terminal front end for the menu admin
//!
//! ```text
//! MENU_API_URL=http://localhost:4000 cargo run -p menu-client --bin menu-admin
//! ```

use std::io::Write;
use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use menu_client::admin::view::EMPTY_MENU_MESSAGE;
use menu_client::{
    ClientConfig, Confirm, DraftField, FoodApi, FoodId, HttpClient, MenuAdmin, MenuCard,
    MenuStore,
};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing_subscriber::EnvFilter;

type Input = Lines<BufReader<Stdin>>;

/// Reads the answer from the same stdin as the command loop
struct StdinConfirm<'a> {
    lines: &'a mut Input,
}

#[async_trait]
impl Confirm for StdinConfirm<'_> {
    async fn confirm(&mut self, message: &str) -> bool {
        print!("{message} [y/N] ");
        let _ = std::io::stdout().flush();
        match self.lines.next_line().await {
            Ok(Some(answer)) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
            _ => false,
        }
    }
}

const HELP: &str = "\
Commands:
  list                 show the menu
  refresh              reload the menu from the server
  draft                show the form
  set <field> <value>  edit a form field (name, description, category, price, image, rating, discount)
  edit <id>            load an item into the form
  cancel               clear the form and go back to adding
  save                 submit the form
  delete <id>          delete an item (asks first)
  quit                 exit";

fn print_menu<C: HttpClient>(admin: &MenuAdmin<C>) {
    let cards = admin.cards();
    if cards.is_empty() {
        println!("{EMPTY_MENU_MESSAGE}");
        return;
    }
    for card in cards {
        println!("{card}");
    }
}

fn print_draft<C: HttpClient>(admin: &MenuAdmin<C>) {
    println!("{}", admin.form_title());
    for field in DraftField::ALL {
        println!("  {:<12} {}", field.as_str(), admin.draft().get(field));
    }
    println!("  ({})", admin.submit_label());
}

fn parse_id(arg: &str) -> Option<FoodId> {
    let id = arg.trim().parse().ok();
    if id.is_none() {
        eprintln!("Expected a numeric id, got '{}'", arg.trim());
    }
    id
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    let config = ClientConfig::from_env();
    let client = config
        .build_http_client()
        .context("Failed to build HTTP client")?;
    let store = Arc::new(MenuStore::new());
    let mut admin = MenuAdmin::new(FoodApi::new(client), store, config.refresh_policy);

    println!("Menu admin ({})", config.base_url);
    if let Err(e) = admin.mount().await {
        eprintln!("Failed to load menu: {e}");
    }
    print_menu(&admin);
    println!("Type 'help' for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("{}> ", admin.form_title());
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();
        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));

        match command {
            "" => continue,
            "help" | "?" => println!("{HELP}"),
            "list" | "ls" => print_menu(&admin),
            "refresh" => match admin.refresh().await {
                Ok(()) => print_menu(&admin),
                Err(e) => eprintln!("Error: {e}"),
            },
            "draft" => print_draft(&admin),
            "set" => {
                let (field, value) = rest.trim().split_once(' ').unwrap_or((rest.trim(), ""));
                match field.parse::<DraftField>() {
                    Ok(field) => admin.set_field(field, value.trim()),
                    Err(e) => eprintln!("Error: {e}"),
                }
            }
            "edit" => {
                let Some(id) = parse_id(rest) else { continue };
                let items = admin.items();
                match items.iter().find(|item| item.id == id) {
                    Some(item) => {
                        admin.start_edit(item);
                        print_draft(&admin);
                    }
                    None => eprintln!("No food item with id {id}"),
                }
            }
            "cancel" | "new" => admin.cancel_edit(),
            "save" => match admin.submit().await {
                Ok(item) => {
                    println!("Saved {}", MenuCard::from(&item));
                    print_menu(&admin);
                }
                Err(e) => eprintln!("Error: {e}"),
            },
            "delete" | "rm" => {
                let Some(id) = parse_id(rest) else { continue };
                let mut confirm = StdinConfirm { lines: &mut lines };
                match admin.delete(id, &mut confirm).await {
                    Ok(true) => {
                        println!("Deleted {id}");
                        print_menu(&admin);
                    }
                    Ok(false) => println!("Cancelled"),
                    Err(e) => eprintln!("Error: {e}"),
                }
            }
            "quit" | "exit" => break,
            other => eprintln!("Unknown command '{other}', try 'help'"),
        }
    }

    Ok(())
}

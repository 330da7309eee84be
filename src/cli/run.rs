use crate::{
    cli::{self, prompt, required},
    prelude::{
        AppError, ConsoleNotifier, ContactStore, Notifier, Storage, StorageMediums,
        command::{Cli, Commands, ShellCommand},
        parse_storage_type,
    },
};
use clap::Parser;
use dotenv::dotenv;

pub fn run_app() -> Result<(), AppError> {
    dotenv().ok();
    let cli = Cli::parse();

    let medium = StorageMediums::from(&cli.storage)?;
    let storage = parse_storage_type(medium, &cli.path)?;
    log::debug!("using {} storage", medium.is_which());

    let mut store = ContactStore::open(storage, ConsoleNotifier)?;

    match cli.command {
        Commands::Add { name, number } => add_contact(&mut store, &name, &number),

        Commands::Delete { id, name } => {
            store.delete(&id, name.as_deref().unwrap_or_default())?;
            Ok(())
        }

        Commands::List { filter } => {
            if let Some(query) = filter {
                store.set_filter(&query);
            }
            cli::print_listing(&store.filtered_view());
            Ok(())
        }

        Commands::Shell => run_shell(&mut store),
    }
}

/// Form step: presence checks, then hand the pair to the store.
///
/// A duplicate name has already been reported by the store's notice, so it
/// ends here as a handled outcome.
pub fn add_contact<S: Storage, N: Notifier>(
    store: &mut ContactStore<S, N>,
    name: &str,
    number: &str,
) -> Result<(), AppError> {
    let name = required("Name", name)?;
    let number = required("Number", number)?;

    match store.add(&name, &number) {
        Ok(_) | Err(AppError::DuplicateName(_)) => Ok(()),
        Err(e) => Err(e),
    }
}

pub fn run_shell<S: Storage, N: Notifier>(store: &mut ContactStore<S, N>) -> Result<(), AppError> {
    println!("\n\n--- PHONEBOOK ---\n");

    'outerloop: loop {
        cli::show_menu()?;

        let Some(action) = cli::get_input()? else {
            break 'outerloop;
        };

        let command = match ShellCommand::parse(&action) {
            Ok(command) => command,
            Err(e) => {
                eprintln!("{e}");
                continue;
            }
        };

        match command {
            ShellCommand::Add => {
                let Some(name) = prompt("Enter contact name:")? else {
                    break 'outerloop;
                };
                let Some(number) = prompt("Enter contact number:")? else {
                    break 'outerloop;
                };

                if let Err(e) = add_contact(store, &name, &number) {
                    match e {
                        AppError::Validation(_) => eprintln!("{e}"),
                        _ => return Err(e),
                    }
                }
            }

            ShellCommand::Delete => {
                cli::print_listing(&store.filtered_view());

                let Some(id) = prompt("Enter id of contact to delete:")? else {
                    break 'outerloop;
                };
                let shown_name = store
                    .get(&id)
                    .map(|c| c.name.clone())
                    .unwrap_or_default();

                store.delete(&id, &shown_name)?;
            }

            ShellCommand::Filter => {
                let Some(query) = prompt("Find contacts by name (empty to clear):")? else {
                    break 'outerloop;
                };
                store.set_filter(&query);
                cli::print_listing(&store.filtered_view());
            }

            ShellCommand::List => {
                cli::print_listing(&store.filtered_view());
            }

            ShellCommand::Exit => break 'outerloop,
        }
    }

    Ok(())
}

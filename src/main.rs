use clap::Parser;
use daybook::application::init::init;
use daybook::application::{ConfigService, DiarySession, SubmitOutcome};
use daybook::cli::{format_entry_list, format_stats, Cli, Commands, EntryFields};
use daybook::domain::time_ref::resolve_date;
use daybook::domain::{Clock, Draft, Mood, SystemClock, DATE_FORMAT};
use daybook::error::{DiaryError, Result};
use daybook::infrastructure::{FileBackend, FileSystemRepository};
use log::info;
use std::str::FromStr;

fn initialize_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("DAYBOOK_LOG", "warn"))
        .format_timestamp_secs()
        .init();
}

fn main() {
    initialize_logger();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init { path, mood } => {
            let mood = Mood::from_str(&mood)?;
            init(&path, mood)?;
            println!("Initialized daybook diary at {}", path.display());
            println!("Default mood: {}", mood);
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let service = ConfigService::new(FileSystemRepository::discover()?);

            if list {
                let config = service.list()?;
                println!("default_mood = {}", config.default_mood);
                println!("created = {}", config.created.to_rfc3339());
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
            } else {
                println!("Usage: daybook config [--list | <key> [<value>]]");
                println!("Valid keys: default_mood, created");
            }
            Ok(())
        }
        Commands::Add { fields } => {
            let mut session = open_session()?;
            fill_draft(session.draft_mut(), fields)?;

            let outcome = session.submit()?;
            report_warning(&mut session);
            match outcome {
                SubmitOutcome::Created(entry) => {
                    info!("Created entry {}", entry.id);
                    println!("Saved {}", entry.id.short());
                    Ok(())
                }
                _ => Err(DiaryError::EmptyEntry),
            }
        }
        Commands::Edit { id, fields } => {
            let mut session = open_session()?;
            let id = session.store().resolve_id(&id)?;
            session.begin_edit(&id)?;
            fill_draft(session.draft_mut(), fields)?;

            let outcome = session.submit()?;
            report_warning(&mut session);
            if let SubmitOutcome::Updated(entry) = outcome {
                info!("Updated entry {}", entry.id);
                println!("Updated {}", entry.id.short());
            }
            Ok(())
        }
        Commands::Delete { id } => {
            let mut session = open_session()?;
            let id = session.store().resolve_id(&id)?;
            session.delete(&id);
            report_warning(&mut session);
            println!("Deleted {}", id.short());
            Ok(())
        }
        Commands::List {
            search,
            date,
            full_ids,
        } => {
            let mut session = open_session()?;
            if let Some(search) = search {
                session.set_search(&search);
            }
            if let Some(date) = date {
                let date = resolve_date(&date, SystemClock.today())?;
                session.set_date_filter(&date.format(DATE_FORMAT).to_string());
            }
            let listing = format_entry_list(&session.visible_entries(), full_ids);
            println!("{}", listing.trim_end());
            Ok(())
        }
        Commands::Stats => {
            let session = open_session()?;
            print!("{}", format_stats(&session.stats()));
            Ok(())
        }
    }
}

fn open_session() -> Result<DiarySession<FileBackend>> {
    let repo = FileSystemRepository::discover()?;
    DiarySession::open(&repo)
}

/// Overwrite the form fields given on the command line
fn fill_draft(draft: &mut Draft, fields: EntryFields) -> Result<()> {
    if let Some(title) = fields.title {
        draft.title = title;
    }
    if let Some(content) = fields.content {
        draft.content = content;
    }
    if let Some(mood) = fields.mood {
        draft.set_mood(Mood::from_str(&mood)?);
    }
    if let Some(date) = fields.date {
        draft.set_date(resolve_date(&date, SystemClock.today())?);
    }
    Ok(())
}

fn report_warning(session: &mut DiarySession<FileBackend>) {
    if let Some(warning) = session.take_warning() {
        eprintln!("Warning: {}", warning.display_with_suggestions());
    }
}

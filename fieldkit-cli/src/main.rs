//! FieldKit demo host: keeps a user Record File and drives it from the console.
//!
//! Record layout: `username;password_sha256;name;phone;email;birth_date`

mod settings;

use fieldkit_core::{
    crypto,
    lookup::find_index,
    store::{self, Record, StoreError, StoreResult},
    utils::{PromptResult, Terminal, merge_fields},
};
use log::{error, info};
use settings::CliConfig;
use std::{
    fs,
    io::{BufRead, Write},
    path::Path,
    process,
};

const PASSWORD: usize = 1;
const NAME: usize = 2;

fn main() {
    let config = match CliConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            process::exit(1);
        }
    };

    let env = env_logger::Env::default().default_filter_or(&config.log_level);
    env_logger::Builder::from_env(env).init();

    println!("------------------------------------------------------------");
    println!("                 FIELDKIT  v{}", env!("CARGO_PKG_VERSION"));
    println!("------------------------------------------------------------");
    info!("using record file {}", config.records_path.display());

    let mut term = Terminal::stdio().with_config(config.prompt.clone());
    if let Err(e) = run(&mut term, &config.records_path) {
        error!("{}", e);
        process::exit(1);
    }
}

fn run<R: BufRead, W: Write>(term: &mut Terminal<R, W>, path: &Path) -> PromptResult<()> {
    loop {
        term.say("1) Register  2) Search  3) Update  4) Login  5) Quit")?;
        let choice = term.prompt_double("Choose an option: ", &[1.0, 5.0])?;

        match choice.trunc() as u8 {
            1 => register(term, path)?,
            2 => search(term)?,
            3 => update(term, path)?,
            4 => login(term, path)?,
            _ => break,
        }

        if !term.prompt_yes_no("Continue? (Y/N): ")? {
            break;
        }
    }
    Ok(())
}

/// Records stored at `path`, plus the number of non-blank lines that did not
/// parse as a record. A missing file holds no records.
fn load(path: &Path) -> StoreResult<(Vec<Record>, usize)> {
    if !path.exists() {
        return Ok((Vec::new(), 0));
    }

    let mut lines = store::try_read_all(path)?;
    if lines.is_empty() {
        // One record without a trailing newline.
        let content = fs::read_to_string(path).map_err(|source| StoreError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        lines.push(content);
    }

    let records = store::load_records(&lines);
    let skipped = lines.iter().filter(|line| !line.trim().is_empty()).count() - records.len();
    Ok((records, skipped))
}

/// [`load`] for a caller that rewrites the whole file: refuses anything it
/// could not read back in full.
fn load_for_rewrite<R: BufRead, W: Write>(
    term: &mut Terminal<R, W>,
    path: &Path,
) -> PromptResult<Option<Vec<Record>>> {
    match load(path) {
        Ok((records, 0)) => Ok(Some(records)),
        Ok((_, skipped)) => {
            error!("{}: {} malformed line(s)", path.display(), skipped);
            term.say("Record File Has Malformed Lines, Nothing Was Written")?;
            Ok(None)
        }
        Err(e) => {
            error!("{}", e);
            term.say("Record File Is Unreadable, Nothing Was Written")?;
            Ok(None)
        }
    }
}

fn register<R: BufRead, W: Write>(term: &mut Terminal<R, W>, path: &Path) -> PromptResult<()> {
    let username = term.input_username()?;
    let Some(mut records) = load_for_rewrite(term, path)? else {
        return Ok(());
    };
    if find_index(&records, &username).is_some() {
        return term.say("Username Taken");
    }

    let password = term.input_password(true)?;
    let name = term.input_name("Full", false)?;
    let phone = term.input_phone(true)?;
    let email = term.input_email(true)?;
    let birth_date = term.input_date("Date of Birth")?;

    let record = match Record::new([username, password, name, phone, email, birth_date]) {
        Ok(record) => record,
        Err(e) => return term.say(e),
    };

    let key = record.key().to_string();
    records.push(record);
    if store::write_all(path, &store::encode_records(&records)) {
        info!("registered {}", key);
        term.say("Registered")?;
    }
    Ok(())
}

fn search<R: BufRead, W: Write>(term: &mut Terminal<R, W>) -> PromptResult<()> {
    let key = term.prompt_line("Enter Search Key: ", false)?;
    let path = term.prompt_line("Enter File Path: ", false)?;

    if store::find_by_key(&path, &key) {
        term.say("Exist")
    } else {
        term.say("Does not exist")
    }
}

fn update<R: BufRead, W: Write>(term: &mut Terminal<R, W>, path: &Path) -> PromptResult<()> {
    let username = term.prompt_line("Enter username: ", false)?;
    let Some(mut records) = load_for_rewrite(term, path)? else {
        return Ok(());
    };
    let Some(index) = find_index(&records, &username) else {
        return term.say("User Not Found");
    };

    term.say("Leave a field empty to keep it")?;
    let updates = [
        None,
        None,
        Some(term.input_name("Full", true)?),
        Some(term.input_phone(true)?),
        Some(term.input_email(true)?),
        None,
    ];

    let merged = match merge_fields(records[index].fields(), &updates) {
        Ok(merged) => merged,
        Err(e) => {
            error!("{}: {}", username, e);
            return term.say("Stored record is malformed");
        }
    };

    match Record::new(merged) {
        Ok(record) => records[index] = record,
        Err(e) => return term.say(e),
    }

    if store::write_all(path, &store::encode_records(&records)) {
        info!("updated {}", username);
        term.say("Updated")?;
    }
    Ok(())
}

fn login<R: BufRead, W: Write>(term: &mut Terminal<R, W>, path: &Path) -> PromptResult<()> {
    let username = term.prompt_line("Enter username: ", false)?;
    let password = term.prompt_line("Enter Password: ", false)?;

    let records = match load(path) {
        Ok((records, _)) => records,
        Err(e) => {
            error!("{}", e);
            Vec::new()
        }
    };
    let verified = find_index(&records, &username)
        .map(|index| &records[index])
        .filter(|record| {
            record
                .get(PASSWORD)
                .is_some_and(|stored| crypto::verify(&password, stored))
        });

    match verified {
        Some(record) => {
            let name = record.get(NAME).unwrap_or(&username);
            term.say(format!("Welcome, {}", name))
        }
        None => term.say("Invalid Credentials"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldkit_core::utils::PromptConfig;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn session(input: &str, path: &Path) -> String {
        let mut out = Vec::new();
        let mut term = Terminal::new(Cursor::new(input.to_string()), &mut out).with_config(
            PromptConfig {
                eof_retry_limit: Some(1),
            },
        );
        run(&mut term, path).unwrap();
        drop(term);
        String::from_utf8_lossy(&out).into_owned()
    }

    #[test]
    fn test_register_login_and_update() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("users.txt");

        let out = session(
            "1\nalice_w\nSecret1\nSecret1\nalice wonder\n\nalice@example.com\n01/02/1990\nN\n",
            &path,
        );
        assert!(out.contains("Registered"));
        let stored = store::find_record(&path, "alice_w").unwrap();
        let expected = format!("alice_w;{};Alice Wonder;", crypto::hex_digest("Secret1"));
        assert!(stored.starts_with(&expected));

        let out = session("4\nalice_w\nSecret1\nY\n4\nalice_w\nnope\nN\n", &path);
        assert!(out.contains("Welcome, Alice Wonder"));
        assert!(out.contains("Invalid Credentials"));

        let out = session("3\nalice_w\n\n0123456789\n\nN\n", &path);
        assert!(out.contains("Updated"));
        let stored = store::find_record(&path, "alice_w").unwrap();
        assert!(stored.ends_with(";Alice Wonder;0123456789;alice@example.com;01/02/1990"));
    }

    #[test]
    fn test_register_rejects_taken_username() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("users.txt");
        assert!(store::write_all(&path, "alice_w;x;Alice;;;01/01/2000\n"));

        let out = session("1\nalice_w\nN\n", &path);
        assert!(out.contains("Username Taken"));
    }

    #[test]
    fn test_register_keeps_record_without_trailing_newline() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("users.txt");
        assert!(store::write_all(&path, "bob_b;x;Bob;;;01/01/2000"));

        let out = session(
            "1\nalice_w\nSecret1\nSecret1\nalice\n\n\n01/02/1990\nN\n",
            &path,
        );
        assert!(out.contains("Registered"));

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("bob_b;x;Bob;;;01/01/2000\n"));
        assert!(content.contains("\nalice_w;"));
    }

    #[test]
    fn test_register_sees_taken_username_without_trailing_newline() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("users.txt");
        assert!(store::write_all(&path, "alice_w;x;Alice;;;01/01/2000"));

        let out = session("1\nalice_w\nN\n", &path);
        assert!(out.contains("Username Taken"));
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "alice_w;x;Alice;;;01/01/2000"
        );
    }

    #[test]
    fn test_unreadable_file_is_never_overwritten() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("users.txt");
        let bytes = [b'b', b'o', b'b', b';', 0xff, 0xfe, b'\n'];
        fs::write(&path, bytes).unwrap();

        let out = session("1\nalice_w\nY\n3\nbob\nN\n", &path);
        assert_eq!(out.matches("Record File Is Unreadable").count(), 2);
        assert!(!out.contains("Registered"));
        assert_eq!(fs::read(&path).unwrap(), bytes);
    }

    #[test]
    fn test_malformed_lines_block_rewrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("users.txt");
        let content = "legacy header\nalice_w;x;Alice;;;01/01/2000\n";
        assert!(store::write_all(&path, content));

        let out = session("3\nalice_w\nN\n", &path);
        assert!(out.contains("Record File Has Malformed Lines"));
        assert_eq!(fs::read_to_string(&path).unwrap(), content);
    }

    #[test]
    fn test_search_by_key_and_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("users.txt");
        assert!(store::write_all(&path, "alice;30\nbob;40\n"));

        let input = format!(
            "2\nalice\n{p}\nY\n2\nali\n{p}\nN\n",
            p = path.display()
        );
        let out = session(&input, dir.path());
        assert_eq!(out.matches("Does not exist").count(), 1);
        assert_eq!(out.matches("Exist").count(), 1);
    }

    #[test]
    fn test_update_unknown_user() {
        let dir = TempDir::new().unwrap();
        let out = session("3\nghost\nN\n", &dir.path().join("users.txt"));
        assert!(out.contains("User Not Found"));
    }
}

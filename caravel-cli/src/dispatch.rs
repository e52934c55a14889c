// SPDX-License-Identifier: AGPL-3.0-or-later
//! Verb-table command dispatch
//!
//! One input line comes in, one outcome goes out. The verb table is a
//! static ordered list so matching precedence and arity live in data
//! rather than in a conditional chain.

use caravel_core::{CaravelError, CaravelResult, DirEntry, Session};
use caravel_ops::operations;
use console::style;
use tabled::{Table, Tabled};

use crate::hostinfo;

/// What the REPL should do after a line has been handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    Exit,
}

#[derive(Debug, Clone, Copy)]
enum Action {
    Exit,
    Up,
    Cd,
    Ls,
    Cat,
    Add,
    Rn,
    Cp,
    Mv,
    Rm,
    Os,
    Hash,
    Compress,
    Decompress,
}

struct Verb {
    name: &'static str,
    arity: usize,
    action: Action,
}

/// Order fixes matching precedence.
const VERBS: &[Verb] = &[
    Verb { name: ".exit", arity: 0, action: Action::Exit },
    Verb { name: "up", arity: 0, action: Action::Up },
    Verb { name: "cd", arity: 1, action: Action::Cd },
    Verb { name: "ls", arity: 0, action: Action::Ls },
    Verb { name: "cat", arity: 1, action: Action::Cat },
    Verb { name: "add", arity: 1, action: Action::Add },
    Verb { name: "rn", arity: 2, action: Action::Rn },
    Verb { name: "cp", arity: 2, action: Action::Cp },
    Verb { name: "mv", arity: 2, action: Action::Mv },
    Verb { name: "rm", arity: 1, action: Action::Rm },
    Verb { name: "os", arity: 1, action: Action::Os },
    Verb { name: "hash", arity: 1, action: Action::Hash },
    Verb { name: "compress", arity: 2, action: Action::Compress },
    Verb { name: "decompress", arity: 2, action: Action::Decompress },
];

fn match_verb(token: &str) -> Option<&'static Verb> {
    VERBS.iter().find(|verb| verb.name == token)
}

/// Tokenize and execute one input line against the session. Extra
/// tokens beyond a verb's arity are ignored.
pub async fn dispatch(line: &str, session: &mut Session) -> CaravelResult<Outcome> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&verb_token, args)) = tokens.split_first() else {
        return Err(CaravelError::MissingArgument);
    };
    let Some(verb) = match_verb(verb_token) else {
        return Err(CaravelError::UnknownCommand(verb_token.to_string()));
    };
    if args.len() < verb.arity {
        return Err(CaravelError::MissingArgument);
    }

    // snapshot: operations never observe a cursor mutated mid-flight
    let current = session.current().to_path_buf();

    match verb.action {
        Action::Exit => return Ok(Outcome::Exit),
        Action::Up => session.navigate_up(),
        Action::Cd => session.navigate_to(args[0]).await?,
        Action::Ls => {
            let entries = session.list().await?;
            print_listing(&entries);
        }
        Action::Cat => operations::read_print(&current, args[0]).await?,
        Action::Add => operations::create_file(&current, args[0]).await?,
        Action::Rn => operations::rename_entry(&current, args[0], args[1]).await?,
        Action::Cp => operations::copy_file(&current, args[0], args[1]).await?,
        Action::Mv => operations::move_file(&current, args[0], args[1]).await?,
        Action::Rm => operations::delete_entry(&current, args[0]).await?,
        Action::Os => hostinfo::report(args[0])?,
        Action::Hash => {
            let digest = operations::hash_file(&current, args[0]).await?;
            println!("{digest}");
        }
        Action::Compress => operations::compress_file(&current, args[0], args[1]).await?,
        Action::Decompress => operations::decompress_file(&current, args[0], args[1]).await?,
    }

    Ok(Outcome::Done)
}

#[derive(Tabled)]
struct ListingRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    kind: String,
}

fn print_listing(entries: &[DirEntry]) {
    if entries.is_empty() {
        println!("(empty directory)");
        return;
    }

    let rows: Vec<ListingRow> = entries
        .iter()
        .map(|entry| ListingRow {
            name: if entry.is_directory() {
                style(&entry.name).cyan().to_string()
            } else {
                entry.name.clone()
            },
            kind: if entry.is_directory() { "directory" } else { "file" }.to_string(),
        })
        .collect();

    println!("{}", Table::new(rows));
}

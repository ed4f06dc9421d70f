//! Interactive command loop for the transaction ledger.
//!
//! Reads commands line by line from the given input, validates every value
//! before it reaches the store, and writes all prompts and results to the
//! given writer so whole sessions can be scripted in tests.

use std::io::{BufRead, Write};

use chrono::NaiveTime;

use crate::dto::Transaction;
use crate::prompt;
use crate::stores::TransactionsStore;
use crate::Error;

const CMD_ADD: &str = "add";
const CMD_GET: &str = "get";
const CMD_EXIT: &str = "exit";

const PROMPT_COMMAND: &str = "Enter a command:";
const PROMPT_ID: &str = "Enter an id:";
const PROMPT_DATE: &str = "Enter a date (day.month.year):";
const PROMPT_AMOUNT: &str = "Enter an amount:";

const INVALID_ID: &str = "Invalid id. Try again.";
const INVALID_DATE: &str = "Invalid date. Try again.";
const INVALID_AMOUNT: &str = "Invalid amount. Try again.";

const UNKNOWN_COMMAND: &str = "Unknown command.";
const DUPLICATE_ID: &str = "A transaction with this id already exists. Enter another id.";
const NOT_FOUND: &str = "No transaction found with this id.";
const ADDED: &str = "[OK]";

/// Runs the ledger loop until `exit` (or end of input at the command prompt)
/// and writes every prompt and result to `output`.
///
/// # Errors
/// Returns an error if:
/// * The input stream closes in the middle of a prompt
/// * Writing to the output fails
pub fn run<R, W>(mut input: R, mut output: W) -> Result<(), Error>
where
    R: BufRead,
    W: Write,
{
    let mut store = TransactionsStore::new();

    loop {
        let command = match prompt::read_value(&mut input, &mut output, PROMPT_COMMAND, None) {
            Ok(command) => command,
            // Closed stdin at the command prompt acts as `exit`.
            Err(Error::InputClosed) => return Ok(()),
            Err(err) => return Err(err),
        };

        match command.to_lowercase().as_str() {
            CMD_ADD => handle_add(&mut input, &mut output, &mut store)?,
            CMD_GET => handle_get(&mut input, &mut output, &store)?,
            CMD_EXIT => return Ok(()),
            _ => writeln!(output, "{UNKNOWN_COMMAND}")?,
        }
    }
}

/// Prompts for a fresh id, a date and an amount, then stores the transaction.
/// An id that is already taken prints a notice and is prompted again.
fn handle_add<R, W>(
    input: &mut R,
    output: &mut W,
    store: &mut TransactionsStore,
) -> Result<(), Error>
where
    R: BufRead,
    W: Write,
{
    let id = loop {
        let id = prompt::read_parsed(input, output, PROMPT_ID, INVALID_ID, prompt::parse_id)?;
        if store.contains(&id) {
            writeln!(output, "{DUPLICATE_ID}")?;
            continue;
        }
        break id;
    };

    let date = prompt::read_parsed(input, output, PROMPT_DATE, INVALID_DATE, prompt::parse_date)?;
    let amount = prompt::read_parsed(
        input,
        output,
        PROMPT_AMOUNT,
        INVALID_AMOUNT,
        prompt::parse_amount,
    )?;

    let transaction = Transaction {
        id,
        transaction_date: date.and_time(NaiveTime::MIN).and_utc(),
        amount,
    };
    // The id was confirmed fresh above, so the insert cannot conflict.
    let _ = store.try_insert(id, transaction);
    writeln!(output, "{ADDED}")?;
    Ok(())
}

/// Looks a transaction up by id and prints it as a single JSON line.
fn handle_get<R, W>(input: &mut R, output: &mut W, store: &TransactionsStore) -> Result<(), Error>
where
    R: BufRead,
    W: Write,
{
    let id = prompt::read_parsed(input, output, PROMPT_ID, INVALID_ID, prompt::parse_id)?;
    match store.get(&id) {
        Some(transaction) => writeln!(output, "{}", serde_json::to_string(transaction)?)?,
        None => writeln!(output, "{NOT_FOUND}")?,
    }
    Ok(())
}

//! Interactive console prompts for the `queens` command.

use std::io::{self, BufRead, Write};

/// Asks for a board size until a non-negative integer is entered.
///
/// Returns `None` if the input ends first.
pub(crate) fn read_board_size<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> io::Result<Option<usize>> {
    loop {
        write!(out, "Entrez la taille de l'échiquier ? : ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let answer = line.trim();
        if !answer.is_empty() && answer.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(n) = answer.parse::<usize>() {
                return Ok(Some(n));
            }
        }
        writeln!(out, "Veuillez entrer un nombre valide.")?;
    }
}

/// Asks a yes/no question; only `o` (oui), in either case, counts as yes.
pub(crate) fn confirm<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    question: &str,
) -> io::Result<bool> {
    write!(out, "{question} (o/n) : ")?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().eq_ignore_ascii_case("o"))
}

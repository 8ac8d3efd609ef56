use std::io::{self, BufRead, Write};

use crate::config::Difficulty;

/// Asks for a difficulty on a line-oriented console until a valid choice
/// is entered.
///
/// Runs before the terminal switches to raw mode. Fails with
/// `UnexpectedEof` if input ends without a valid answer.
pub fn prompt_difficulty<R, W>(input: &mut R, output: &mut W) -> io::Result<Difficulty>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "Welcome to the Snake Game!")?;
    writeln!(output, "Please choose your difficulty:")?;
    for difficulty in Difficulty::ALL {
        writeln!(
            output,
            "  {}: {} (Speed: {:.1} squares/sec)",
            difficulty.menu_key(),
            difficulty.name(),
            difficulty.squares_per_second(),
        )?;
    }

    let mut line = String::new();
    loop {
        write!(output, "Enter your choice (1, 2, or 3): ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before a difficulty was chosen",
            ));
        }

        match line.parse::<Difficulty>() {
            Ok(difficulty) => {
                writeln!(output, "Starting game on {difficulty} difficulty...")?;
                return Ok(difficulty);
            }
            Err(_) => writeln!(output, "Invalid choice. Please enter 1, 2, or 3.")?,
        }
    }
}

//! Operator-facing seams: line input and display output.
//!
//! The interactive prompt itself lives outside this library; these traits
//! are what the node consumes. Console implementations over stdin and
//! stdout are provided for binaries that want them.

use async_trait::async_trait;
use tokio::io::{self, AsyncBufReadExt, BufReader, Stdin};

/// Async source of operator input lines.
#[async_trait]
pub trait OperatorInput: Send {
    /// Read one line, without its line terminator.
    ///
    /// `Ok(None)` is end of input; the loop consuming this ends cleanly.
    async fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// Sink for operator-facing text.
pub trait OperatorDisplay: Send + Sync {
    /// Show a block of text to the operator.
    fn show(&self, text: &str);
}

/// Operator input from stdin.
pub struct StdinInput {
    reader: BufReader<Stdin>,
}

impl StdinInput {
    pub fn new() -> Self {
        Self {
            reader: BufReader::new(io::stdin()),
        }
    }
}

impl Default for StdinInput {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OperatorInput for StdinInput {
    async fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }
}

/// Operator display to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutDisplay;

impl OperatorDisplay for StdoutDisplay {
    fn show(&self, text: &str) {
        println!("{text}");
    }
}

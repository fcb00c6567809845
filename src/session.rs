use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::core::command::Command;
use crate::handler;
use crate::inmemory_db::Db;

pub const BANNER: &str = "Activity Tracker\n----------------\nCommands: add, list, update, delete, quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Continue(Option<String>),
    Quit,
}

#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    pub banner: bool,
    pub prompt: Option<String>,
}

/// Owns the collection for the lifetime of one run of the read-eval-print loop.
pub struct Session {
    db: Db,
    options: SessionOptions,
}

impl Session {
    pub fn new(options: SessionOptions) -> Self {
        Self {
            db: Db::new(),
            options,
        }
    }

    pub fn db(&self) -> &Db {
        &self.db
    }

    /// Evaluates a single input line. Errors are turned into output here and never escape.
    pub fn eval(&self, line: &str) -> Outcome {
        match Command::parse(line).and_then(|command| handler::dispatch(&self.db, command)) {
            Ok(outcome) => outcome,
            Err(err) => {
                log::warn!("rejected {line:?}: {err:?}");
                Outcome::Continue(Some(err.to_string()))
            }
        }
    }

    /// Runs until `quit` or end of input. Only output errors are returned.
    pub async fn run<R, W>(&mut self, input: R, output: &mut W) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        log::info!("session started");
        if self.options.banner {
            write_line(output, BANNER).await?;
        }

        let mut lines = input.lines();
        loop {
            if let Some(prompt) = &self.options.prompt {
                output.write_all(prompt.as_bytes()).await?;
                output.flush().await?;
            }

            let line = match lines.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) => break,
                Err(err) => {
                    log::warn!("stopping on read error: {err}");
                    break;
                }
            };

            match self.eval(&line) {
                Outcome::Quit => break,
                Outcome::Continue(Some(text)) => write_line(output, &text).await?,
                Outcome::Continue(None) => {}
            }
        }

        log::info!("session ended with {} activities", self.db.len());
        Ok(())
    }
}

async fn write_line<W>(output: &mut W, text: &str) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    output.write_all(text.as_bytes()).await?;
    output.write_all(b"\n").await?;
    output.flush().await
}

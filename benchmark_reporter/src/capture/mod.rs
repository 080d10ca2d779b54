//!
//! Launches the benchmark runner and captures its combined output.
//!

pub mod command;
pub mod error;
pub mod raw_log;

use std::io::BufRead;
use std::io::Read;
use std::io::Write;
use std::process::Stdio;
use std::sync::mpsc;
use std::thread::JoinHandle;

use self::command::Command;
use self::error::Error;
use self::raw_log::RawLog;

///
/// Launches the benchmark runner and captures its combined output.
///
/// Both output streams of the runner share one pipe, so the lines keep the order
/// in which the runner wrote them. A dedicated reader thread drains the pipe into
/// a bounded channel. The capture loop is the only consumer: it echoes every
/// line as soon as it arrives and appends it to the raw log.
///
pub struct Capture;

impl Capture {
    /// Number of lines that may be buffered between the reader and the capture loop.
    const CHANNEL_CAPACITY: usize = 64;

    ///
    /// Runs `command` to completion, echoing its output to `echo`.
    ///
    /// The raw log is only returned if the runner exits successfully.
    ///
    pub fn run<W>(command: &Command, mut echo: W) -> Result<RawLog, Error>
    where
        W: Write,
    {
        let launch_error = |error: std::io::Error| Error::Launch {
            command: command.to_string(),
            error,
        };

        let (output, input) = std::io::pipe().map_err(launch_error)?;
        let stdout = input.try_clone().map_err(launch_error)?;

        let mut runner = std::process::Command::new(command.program.as_str());
        runner
            .args(command.arguments.iter())
            .stdin(Stdio::null())
            .stdout(Stdio::from(stdout))
            .stderr(Stdio::from(input));
        let spawned = runner.spawn();
        // The builder holds the write ends, which must be closed for the pipe to reach EOF.
        drop(runner);
        let mut process = spawned.map_err(launch_error)?;

        let (sender, receiver) = mpsc::sync_channel(Self::CHANNEL_CAPACITY);
        let reader = Self::spawn_reader(output, sender);

        let mut log = RawLog::default();
        let mut failure = None;
        for line in receiver.iter() {
            let line: String = match line {
                Ok(line) => line,
                Err(error) => {
                    failure = Some(Error::Reading {
                        command: command.to_string(),
                        error,
                    });
                    break;
                }
            };
            if let Err(error) = echo
                .write_all(line.as_bytes())
                .and_then(|()| echo.flush())
            {
                failure = Some(Error::Echo(error));
                break;
            }
            log.push(line);
        }

        if let Some(error) = failure {
            drop(receiver);
            let _ = process.kill();
            let _ = process.wait();
            let _ = reader.join();
            return Err(error);
        }

        if let Err(error) = Self::join_reader(command, reader) {
            let _ = process.kill();
            let _ = process.wait();
            return Err(error);
        }
        let status = process.wait().map_err(|error| Error::Reading {
            command: command.to_string(),
            error,
        })?;
        if !status.success() {
            return Err(Error::Exit {
                command: command.to_string(),
                status,
            });
        }

        Ok(log)
    }

    ///
    /// Waits for the reader thread. A panicked reader means the log may be truncated.
    ///
    fn join_reader(command: &Command, reader: JoinHandle<()>) -> Result<(), Error> {
        reader.join().map_err(|_| Error::Reading {
            command: command.to_string(),
            error: std::io::Error::other("the output reader thread panicked"),
        })
    }

    ///
    /// Forwards every line of `stream` to the channel until the stream is closed.
    ///
    fn spawn_reader<R>(stream: R, sender: mpsc::SyncSender<std::io::Result<String>>) -> JoinHandle<()>
    where
        R: Read + Send + 'static,
    {
        std::thread::spawn(move || {
            let mut reader = std::io::BufReader::new(stream);
            loop {
                let mut buffer = Vec::with_capacity(128);
                match reader.read_until(b'\n', &mut buffer) {
                    Ok(0) => break,
                    Ok(_) => {
                        let line = String::from_utf8_lossy(buffer.as_slice()).into_owned();
                        if sender.send(Ok(line)).is_err() {
                            break;
                        }
                    }
                    Err(error) => {
                        let _ = sender.send(Err(error));
                        break;
                    }
                }
            }
        })
    }
}

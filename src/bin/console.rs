//! Interactive console for the Calldeck dashboard
//!
//! Drives the same view state machines the browser UI uses (call list,
//! batch drill-down, playback) against a live upstream, rendering them as
//! text tables. Useful for poking at a deployment without a browser.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use calldeck_client::{fallback, UpstreamClient};
use calldeck_core::config::AppConfig;
use calldeck_core::models::call::PLACEHOLDER;
use calldeck_core::models::{CallRecord, Speaker};
use calldeck_core::traits::CallDirectory;
use calldeck_views::{AudioSink, BatchView, FetchPhase, ListView, PlaybackRate, PlaybackView};

/// Sink that narrates audio commands instead of decoding anything
#[derive(Debug, Default)]
struct ConsoleSink;

impl AudioSink for ConsoleSink {
    fn play(&mut self) {
        println!("[audio] play");
    }
    fn pause(&mut self) {
        println!("[audio] pause");
    }
    fn seek_to(&mut self, seconds: f64) {
        println!("[audio] seek to {seconds:.1}s");
    }
    fn set_rate(&mut self, rate: f64) {
        println!("[audio] rate {rate:.1}x");
    }
}

enum Mode {
    Calls,
    Batches,
}

struct Console {
    client: UpstreamClient,
    mode: Mode,
    calls: ListView,
    batches: BatchView,
    playback: Option<PlaybackView<ConsoleSink>>,
}

impl Console {
    fn new(client: UpstreamClient, call_page_size: u64, batch_page_size: u64) -> Self {
        Self {
            client,
            mode: Mode::Calls,
            calls: ListView::new(call_page_size),
            batches: BatchView::new(batch_page_size),
            playback: None,
        }
    }

    async fn load_calls(&mut self) {
        let generation = self.calls.begin_load();
        let result = self
            .client
            .call_page(self.calls.page(), self.calls.page_size())
            .await;
        self.calls.resolve(generation, result);

        if self.calls.phase() == FetchPhase::Error {
            println!(
                "upstream unavailable ({}), showing sample data",
                self.calls.last_error().unwrap_or("unknown error")
            );
            self.calls
                .substitute_fallback(fallback::sample_call_page(self.calls.page()));
        }
        self.render_calls();
    }

    async fn load_batches(&mut self) {
        let generation = self.batches.begin_load();
        let result = self
            .client
            .batch_page(self.batches.page(), self.batches.page_size())
            .await;
        self.batches.resolve(generation, result);

        if self.batches.phase() == FetchPhase::Error {
            println!(
                "batch fetch failed: {}",
                self.batches.last_error().unwrap_or("unknown error")
            );
            return;
        }
        self.render_batches();
    }

    fn render_calls(&self) {
        let stats = self.calls.stats();
        println!(
            "calls  page {}/{}  |  all {}  transferred {}  successful {}  failed {}",
            self.calls.page(),
            self.calls.total_pages(),
            stats.all,
            stats.transferred,
            stats.successful,
            stats.failed
        );
        for (i, record) in self.calls.records().iter().enumerate() {
            println!(
                "{:3}  {:8}  {:20}  {:16}  {:22}  {:8}  {}",
                i,
                record.direction.label(),
                record.assistant_name,
                record.counterparty_phone,
                record.end_reason_label(),
                record.outcome.label(),
                record.duration_display()
            );
        }
    }

    fn render_batches(&self) {
        println!(
            "batches  page {}/{}",
            self.batches.page(),
            self.batches.total_pages()
        );
        for (i, batch) in self.batches.batches().iter().enumerate() {
            println!(
                "{:3}  {:24}  total {:4}  ok {:4}  failed {:4}  pending {:4}",
                i,
                batch.batch_id,
                batch.total_calls,
                batch.success_calls,
                batch.failed_calls,
                batch.pending_calls
            );
        }
    }

    fn render_detail(&mut self, record: &CallRecord) {
        println!("call {}", record.call_id);
        println!("  assistant {}", record.assistant_name);
        println!("  phone     {}", record.counterparty_phone);
        println!("  direction {}", record.direction.label());
        println!("  outcome   {}", record.outcome.label());
        println!("  reason    {}", record.end_reason_label());
        println!("  duration  {}", record.duration_display());
        if let Some(claim) = &record.claim_number {
            println!("  claim     {}", claim);
        }
        println!(
            "  summary   {}",
            record.summary.as_deref().unwrap_or(PLACEHOLDER)
        );
        for turn in record.transcript_turns() {
            let who = match turn.speaker {
                Speaker::Assistant => "assistant",
                Speaker::Counterparty => "caller",
            };
            println!("    [{who}] {}", turn.text);
        }

        self.playback = match &record.recording_url {
            Some(url) => {
                println!("  recording {url}");
                let mut playback = PlaybackView::new(ConsoleSink);
                if let Some(secs) = record.duration_seconds {
                    // Seed the duration the media element would report.
                    playback.on_time_update(0.0, secs as f64);
                }
                Some(playback)
            }
            None => None,
        };
    }

    fn open(&mut self, index: usize) {
        match self.mode {
            Mode::Calls => match self.calls.select(index).cloned() {
                Some(record) => self.render_detail(&record),
                None => println!("no row {index}"),
            },
            Mode::Batches => match self.batches.expand(index) {
                Some(batch) => {
                    println!("batch {} members:", batch.batch_id);
                    for (i, call) in batch.calls.iter().enumerate() {
                        println!(
                            "{:3}  {:16}  {:14}  {:22}  {}",
                            i,
                            call.counterparty_phone,
                            call.claim_number.as_deref().unwrap_or(PLACEHOLDER),
                            call.end_reason_code_label(),
                            call.outcome.label()
                        );
                    }
                }
                None => println!("no batch {index}"),
            },
        }
    }

    fn open_member(&mut self, index: usize) {
        match self.batches.select_member(index).cloned() {
            Some(record) => self.render_detail(&record),
            None => println!("no member {index} (expand a batch first)"),
        }
    }

    fn back(&mut self) {
        self.playback = None;
        match self.mode {
            Mode::Calls => self.calls.clear_selection(),
            Mode::Batches => self.batches.collapse(),
        }
    }

    fn with_playback(&mut self, f: impl FnOnce(&mut PlaybackView<ConsoleSink>)) {
        match self.playback.as_mut() {
            Some(playback) => f(playback),
            None => println!("no recording open"),
        }
    }
}

fn print_help() {
    println!("commands:");
    println!("  calls | batches     switch view (reloads)");
    println!("  next | prev         page within the current view");
    println!("  open <n>            open row n (detail / batch drill-down)");
    println!("  member <n>          open member n of the expanded batch");
    println!("  back                close detail / collapse batch");
    println!("  play | pause        control the open recording");
    println!("  seek <pct>          jump to a 0-100 point");
    println!("  rate <0.5|1|1.5>    playback rate");
    println!("  quit");
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let config = AppConfig::load().context("loading configuration")?;
    let client = UpstreamClient::new(config.upstream.clone()).context("building upstream client")?;

    let mut console = Console::new(
        client,
        config.upstream.page_size,
        config.upstream.batch_page_size,
    );

    println!("calldeck console (type 'help' for commands)");
    console.load_calls().await;

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            continue;
        };
        let arg = parts.next();

        match command {
            "help" => print_help(),
            "calls" => {
                console.mode = Mode::Calls;
                console.load_calls().await;
            }
            "batches" => {
                console.mode = Mode::Batches;
                console.load_batches().await;
            }
            "next" => match console.mode {
                Mode::Calls => {
                    if console.calls.next_page() {
                        console.load_calls().await;
                    }
                }
                Mode::Batches => {
                    if console.batches.next_page() {
                        console.load_batches().await;
                    }
                }
            },
            "prev" => match console.mode {
                Mode::Calls => {
                    if console.calls.prev_page() {
                        console.load_calls().await;
                    }
                }
                Mode::Batches => {
                    if console.batches.prev_page() {
                        console.load_batches().await;
                    }
                }
            },
            "open" => match arg.and_then(|a| a.parse().ok()) {
                Some(index) => console.open(index),
                None => println!("usage: open <n>"),
            },
            "member" => match arg.and_then(|a| a.parse().ok()) {
                Some(index) => console.open_member(index),
                None => println!("usage: member <n>"),
            },
            "back" => console.back(),
            "play" => console.with_playback(|p| p.play()),
            "pause" => console.with_playback(|p| p.pause()),
            "seek" => match arg.and_then(|a| a.parse().ok()) {
                Some(pct) => console.with_playback(|p| p.seek(pct)),
                None => println!("usage: seek <0-100>"),
            },
            "rate" => {
                let rate = match arg {
                    Some("0.5") => Some(PlaybackRate::Half),
                    Some("1") | Some("1.0") => Some(PlaybackRate::Normal),
                    Some("1.5") => Some(PlaybackRate::OneAndHalf),
                    _ => None,
                };
                match rate {
                    Some(rate) => console.with_playback(|p| p.set_rate(rate)),
                    None => println!("usage: rate <0.5|1|1.5>"),
                }
            }
            "quit" | "exit" => break,
            other => println!("unknown command '{other}' (try 'help')"),
        }
    }

    Ok(())
}

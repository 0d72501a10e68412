//! CLI tool for the card input formatting engine.
//!
//! # Usage
//!
//! ```bash
//! # Format a card number or an expiry date
//! ccinput format 4242424242424242
//! ccinput format --field date 0123
//!
//! # Detect the brand of a (partial) number
//! ccinput detect 3782
//!
//! # Replay keystrokes against a field and print every state
//! ccinput replay type:4242 key:1 left left bs
//! ccinput replay --field date --output json type:01 key:2 cursor:3 bs
//! ```
//!
//! Set `RUST_LOG=cc_input=trace` to see every edit being applied.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use cc_input::{
    detect, format, mask, CardNumber, CreditCardDate, DateFormat, Field, FieldFormat, Keystroke,
    NumberFormat,
};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::json;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "ccinput")]
#[command(
    author,
    version,
    about = "As-you-type formatting for card number and expiry fields"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Format raw input the way a field would display it
    Format {
        /// Raw input (anything but digits is dropped)
        input: String,

        /// Which field to format for
        #[arg(short, long, default_value = "number")]
        field: FieldKind,

        /// Separator glyph (defaults to ' ' for numbers, '/' for dates)
        #[arg(short, long)]
        separator: Option<char>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Detect card brand from a (partial) number
    Detect {
        /// Card number or prefix
        card_number: String,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Replay keystrokes against an empty field
    Replay {
        /// Keystrokes: type:TEXT key:C bs del left right home end paste:TEXT set:TEXT cursor:N
        #[arg(required = true)]
        keystrokes: Vec<String>,

        /// Which field to type into
        #[arg(short, long, default_value = "number")]
        field: FieldKind,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,

        /// Mask all but the last four digits in the output
        #[arg(short, long)]
        mask: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FieldKind {
    Number,
    Date,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Format {
            input,
            field,
            separator,
            output,
        } => {
            cmd_format(&input, field, separator, output);
        }
        Commands::Detect {
            card_number,
            output,
        } => {
            cmd_detect(&card_number, output);
        }
        Commands::Replay {
            keystrokes,
            field,
            output,
            mask,
        } => {
            let keys = parse_keystrokes(&keystrokes);
            match field {
                FieldKind::Number => cmd_replay(Field::number(), &keystrokes, &keys, output, mask),
                FieldKind::Date => cmd_replay(Field::date(), &keystrokes, &keys, output, mask),
            }
        }
    }
}

fn exit_with_error(message: impl std::fmt::Display) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}

fn cmd_format(input: &str, field: FieldKind, separator: Option<char>, output: OutputFormat) {
    let formatted = match field {
        FieldKind::Number => {
            let format = match separator {
                Some(c) => NumberFormat::with_separator(c),
                None => Ok(NumberFormat::new()),
            };
            let format = format.unwrap_or_else(|e| exit_with_error(e));
            let mut field = Field::new(format);
            field.set_text(input);
            field.text().to_string()
        }
        FieldKind::Date => {
            let format = match separator {
                Some(c) => DateFormat::with_separator(c),
                None => Ok(DateFormat::new()),
            };
            let format = format.unwrap_or_else(|e| exit_with_error(e));
            let mut field = Field::new(format);
            field.set_text(input);
            field.text().to_string()
        }
    };

    match output {
        OutputFormat::Text => println!("{}", formatted),
        OutputFormat::Json => println!("{}", json!({ "formatted": formatted })),
    }
}

fn cmd_detect(card_number: &str, output: OutputFormat) {
    let digits = cc_input::extract_logical(card_number);
    if digits.is_empty() {
        exit_with_error("No digits provided");
    }

    let brand = detect::classify_brand(&digits);
    let formatted = format::format_card_number(digits.as_str());

    match output {
        OutputFormat::Text => {
            println!("Detected Brand: {}", brand.name());
            println!("Grouping: {:?}", brand.grouping());
            println!("Length: {}-{} digits", brand.min_length(), brand.max_length());
            println!("Display: {}", mask::mask_display(&formatted));
        }
        OutputFormat::Json => {
            let report = json!({
                "brand": brand,
                "name": brand.name(),
                "grouping": brand.grouping(),
                "min_length": brand.min_length(),
                "max_length": brand.max_length(),
                "display": mask::mask_display(&formatted),
            });
            println!("{}", report);
        }
    }
}

fn parse_keystrokes(tokens: &[String]) -> Vec<Keystroke> {
    tokens
        .iter()
        .map(|token| {
            token
                .parse::<Keystroke>()
                .unwrap_or_else(|e| exit_with_error(format!("{} in '{}'", e, token)))
        })
        .collect()
}

/// Field values the replay command knows how to print.
trait Report {
    fn summary(&self, masked: bool) -> String;
    fn to_json(&self, masked: bool) -> serde_json::Value;
}

impl Report for CardNumber {
    fn summary(&self, masked: bool) -> String {
        let number = if masked {
            mask::mask_string(self.number.as_str())
        } else {
            self.number.as_str().to_string()
        };
        format!("{} [{}]", number, self.brand.name())
    }

    fn to_json(&self, masked: bool) -> serde_json::Value {
        let number = if masked {
            mask::mask_string(self.number.as_str())
        } else {
            self.number.as_str().to_string()
        };
        json!({ "number": number, "brand": self.brand, "complete": self.is_complete() })
    }
}

impl Report for CreditCardDate {
    fn summary(&self, _masked: bool) -> String {
        self.to_string()
    }

    fn to_json(&self, _masked: bool) -> serde_json::Value {
        json!({ "month": self.month(), "year": self.year(), "complete": self.is_complete() })
    }
}

fn cmd_replay<F>(
    mut field: Field<F>,
    tokens: &[String],
    keys: &[Keystroke],
    output: OutputFormat,
    masked: bool,
) where
    F: FieldFormat,
    F::Value: Report,
{
    let changes = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&changes);
    field.add_listener(move |_| {
        counter.fetch_add(1, Ordering::Relaxed);
    });

    let mut steps = Vec::with_capacity(keys.len());
    for (token, key) in tokens.iter().zip(keys) {
        let before = changes.load(Ordering::Relaxed);
        field.press(key);
        let changed = changes.load(Ordering::Relaxed) != before;

        let text = if masked {
            field.masked_text()
        } else {
            field.text().to_string()
        };

        match output {
            OutputFormat::Text => {
                let marker = if changed { " *" } else { "" };
                println!(
                    "{:<16} {:?} cursor={} value={}{}",
                    token,
                    text,
                    field.cursor(),
                    field.value().summary(masked),
                    marker
                );
            }
            OutputFormat::Json => steps.push(json!({
                "keystroke": token,
                "text": text,
                "cursor": field.cursor(),
                "changed": changed,
                "value": field.value().to_json(masked),
            })),
        }
    }

    if let OutputFormat::Json = output {
        match serde_json::to_string_pretty(&steps) {
            Ok(out) => println!("{}", out),
            Err(e) => exit_with_error(e),
        }
    }
}

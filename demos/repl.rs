use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::{
    env, fs,
    io::{self, BufRead, Write},
    path::Path,
};
use typeahead::{AssistConfig, InputRouter, InputSuggestions, SAMPLE_VOCABULARY};

struct Args {
    dict_path: Option<String>,
    config_path: Option<String>,
    json: bool,
    verbose: bool,
}

fn parse_args() -> Args {
    let mut args = Args {
        dict_path: None,
        config_path: None,
        json: false,
        verbose: false,
    };
    let mut raw = env::args().skip(1);
    while let Some(arg) = raw.next() {
        match arg.as_str() {
            "--json" => args.json = true,
            "-v" | "--verbose" => args.verbose = true,
            "-c" | "--config" => args.config_path = raw.next(),
            _ => args.dict_path = Some(arg),
        }
    }
    args
}

fn init_logging(verbose: bool) {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("[{l}] {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level));
    match config {
        Ok(config) => {
            if let Err(e) = log4rs::init_config(config) {
                eprintln!("Failed to initialise logging: {}", e);
            }
        }
        Err(e) => eprintln!("Invalid logging config: {}", e),
    }
}

fn print_suggestions(text: &str, suggestions: &InputSuggestions) {
    println!("\n→ You typed: {:?}", text);

    if !suggestions.completions.is_empty() {
        println!("Autocomplete:");
        for (i, word) in suggestions.completions.iter().enumerate() {
            println!("  {}. {}", i + 1, word);
        }
    }
    if !suggestions.corrections.is_empty() {
        println!("Did you mean?");
        for (i, word) in suggestions.corrections.iter().enumerate() {
            println!("  {}. {}", i + 1, word);
        }
    }
    if suggestions.is_empty() {
        println!("  (no suggestions)");
    }
}

fn main() -> io::Result<()> {
    let args = parse_args();
    init_logging(args.verbose);

    let config = match &args.config_path {
        Some(path) => AssistConfig::from_file(path).unwrap_or_else(|e| {
            eprintln!("{}", e);
            std::process::exit(1);
        }),
        None => AssistConfig::default(),
    };

    let vocabulary: Vec<String> = match &args.dict_path {
        Some(path) if !Path::new(path).exists() => {
            eprintln!("Dictionary file not found: {}", path);
            std::process::exit(1);
        }
        Some(path) => fs::read_to_string(path)?
            .lines()
            .map(str::to_string)
            .collect(),
        None => SAMPLE_VOCABULARY.iter().map(|w| w.to_string()).collect(),
    };

    let router = InputRouter::from_vocabulary(&vocabulary, config).unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    });

    println!(
        "Typeahead REPL - {} words\ntype text, quit/exit/q to leave",
        router.prefix_index().len()
    );
    let stdin = io::stdin();
    let mut input = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;
        input.clear();
        if stdin.lock().read_line(&mut input)? == 0 {
            break; // EOF
        }
        let line = input.trim_end_matches(['\n', '\r']);
        if matches!(line.trim().to_lowercase().as_str(), "quit" | "exit" | "q") {
            println!("Bye!");
            break;
        }

        let Some(suggestions) = router.handle_input(line) else {
            continue;
        };
        if args.json {
            match serde_json::to_string(&suggestions) {
                Ok(json) => println!("{}", json),
                Err(e) => eprintln!("Failed to serialize suggestions: {}", e),
            }
        } else {
            print_suggestions(line.trim(), &suggestions);
        }
    }
    Ok(())
}

mod debug_report;

use gulu::{Answer, Engine, Entity, Lang, LessonId, Outcome, lessons};
use std::io::{self, IsTerminal, Read};

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let mut engine = Engine::load(config.lesson);
    if !config.values.is_empty() {
        let inputs: Vec<(&str, i64)> = config.values.iter().map(|(n, v)| (n.as_str(), *v)).collect();
        if let Err(err) = engine.apply_inputs(&inputs) {
            eprintln!("error: {err}");
            std::process::exit(2);
        }
    }

    let mut events = Vec::new();
    for token in script_tokens(&config.script) {
        let (label, outcome) = match run_token(&mut engine, &token) {
            Ok(step) => step,
            Err(err) => {
                eprintln!("{err}");
                std::process::exit(2);
            }
        };
        events.push(debug_report::TraceEvent { label, outcome, values: engine.current_values() });
    }

    debug_report::print_session(&engine, &events, config.lang, config.color);
}

/// Apply one script token to the engine.
fn run_token(engine: &mut Engine, token: &str) -> Result<(String, Outcome), String> {
    let outcome = match token {
        "start" | "next" => engine.advance(),
        "yes" => engine.attempt_judgment(Answer::Yes),
        "no" => engine.attempt_judgment(Answer::No),
        _ => {
            let Some((source, target)) = token.split_once('>') else {
                return Err(format!("error: unknown script token '{token}' (expected start, next, yes, no, or SRC>DST)"));
            };
            let source = parse_source(engine, source.trim())?;
            let target = resolve_var(engine, target.trim())?;
            engine.attempt_drop(source, target)
        }
    };
    Ok((token.to_string(), outcome))
}

fn parse_source(engine: &Engine, token: &str) -> Result<Entity, String> {
    // A numeric source is a value pill, anything else a variable box.
    if let Ok(literal) = token.parse::<i64>() {
        return Ok(Entity::Pill(literal));
    }
    resolve_var(engine, token).map(Entity::Var)
}

/// Map a user-typed name onto the lesson's own variable name.
fn resolve_var(engine: &Engine, name: &str) -> Result<&'static str, String> {
    engine
        .lesson()
        .variables
        .iter()
        .map(|v| v.name)
        .find(|n| *n == name)
        .ok_or_else(|| format!("error: lesson '{}' has no variable '{name}'", engine.lesson().id.name()))
}

fn script_tokens(script: &str) -> Vec<String> {
    script
        .split([';', '\n'])
        .flat_map(str::split_whitespace)
        .map(str::to_string)
        .collect()
}

struct CliConfig {
    lesson: LessonId,
    lang: Lang,
    values: Vec<(String, i64)>,
    script: String,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut lesson = LessonId::Assignment;
    let mut lang = Lang::En;
    let mut values = Vec::new();
    let mut script: Option<String> = None;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                println!("{}", help_text());
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("gulu {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--list" => {
                for def in lessons() {
                    println!("{:<12} {}", def.id.name(), def.title.en);
                }
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--lesson" | "-l" => {
                let value = args.next().ok_or_else(|| "error: --lesson expects a value".to_string())?;
                lesson = parse_lesson(&value)?;
            }
            "--lang" => {
                let value = args.next().ok_or_else(|| "error: --lang expects a value".to_string())?;
                lang = parse_lang(&value)?;
            }
            "--values" => {
                let value = args.next().ok_or_else(|| "error: --values expects a value".to_string())?;
                values = parse_values(&value)?;
            }
            "--script" | "-s" => {
                let value = args.next().ok_or_else(|| "error: --script expects a value".to_string())?;
                if script.is_some() {
                    return Err("error: script provided multiple times".to_string());
                }
                script = Some(value);
            }
            _ if arg.starts_with("--lesson=") => {
                lesson = parse_lesson(arg.trim_start_matches("--lesson="))?;
            }
            _ if arg.starts_with("--lang=") => {
                lang = parse_lang(arg.trim_start_matches("--lang="))?;
            }
            _ if arg.starts_with("--values=") => {
                values = parse_values(arg.trim_start_matches("--values="))?;
            }
            _ if arg.starts_with("--script=") => {
                if script.is_some() {
                    return Err("error: script provided multiple times".to_string());
                }
                script = Some(arg.trim_start_matches("--script=").to_string());
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                if script.is_some() {
                    return Err("error: script provided multiple times".to_string());
                }
                script = Some(std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" "));
                break;
            }
        }
    }

    let script = match script {
        Some(value) => value,
        None => read_stdin_script()?,
    };

    if script.trim().is_empty() {
        return Err(format!("error: no script provided\n\n{}", help_text()));
    }

    Ok(CliConfig { lesson, lang, values, script, color })
}

fn read_stdin_script() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}

fn parse_lesson(value: &str) -> Result<LessonId, String> {
    LessonId::from_name(value)
        .ok_or_else(|| format!("error: unknown lesson '{value}' (use --list to see the available lessons)"))
}

fn parse_lang(value: &str) -> Result<Lang, String> {
    match value {
        "en" => Ok(Lang::En),
        "cn" | "zh" => Ok(Lang::Cn),
        _ => Err(format!("error: unknown language '{value}' (expected en or cn)")),
    }
}

fn parse_values(value: &str) -> Result<Vec<(String, i64)>, String> {
    value
        .split(',')
        .filter(|pair| !pair.trim().is_empty())
        .map(|pair| {
            let (name, literal) = pair
                .split_once('=')
                .ok_or_else(|| format!("error: invalid --values entry '{pair}' (expected name=int)"))?;
            let parsed: i64 = literal
                .trim()
                .parse()
                .map_err(|_| format!("error: invalid --values entry '{pair}' (expected name=int)"))?;
            Ok((name.trim().to_string(), parsed))
        })
        .collect()
}

fn help_text() -> String {
    format!(
        "gulu {version}

Interactive bilingual lesson engine CLI: replays an interaction script
against a lesson and reports every transition.

Usage:
  gulu [OPTIONS] [--] <script...>
  gulu [OPTIONS] --script <tokens>

Script tokens (separated by spaces or ';'):
  start | next    Press the advance button.
  yes | no        Answer the posed judgment.
  SRC>DST         Drop SRC onto variable DST. SRC is a variable name, or an
                  integer literal for a value pill (e.g. 10>a, a>temp).

Options:
  -l, --lesson <name>   Lesson to run (default: assignment).
  --lang <en|cn>        Feedback language (default: en).
  --values <a=1,b=2>    Override the lesson's scenario inputs.
  -s, --script <text>   Interaction script. If omitted, reads remaining args
                        or stdin when no args are provided.
  --list                List the available lessons.
  --color               Force ANSI color output.
  --no-color            Disable ANSI color output.
  -h, --help            Show this help message.
  -V, --version         Print version information.

Exit codes:
  0  Success.
  1  Internal error.
  2  Invalid arguments or missing script.
",
        version = env!("CARGO_PKG_VERSION")
    )
}
